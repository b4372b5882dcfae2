//! 菜单定义与输入解析

use crate::error::{PayrollError, Result};
use crate::types::Department;

/// 启动标题
pub const BANNER: [&str; 3] = [
    "********************************",
    "SISTEMA DE NOMINAS V2.3 FINAL_REAL_AHORA_SI",
    "********************************",
];

/// 菜单文本（前后各一个空行）
pub const MENU: [&str; 7] = [
    "",
    "1. Agregar empleado Ventas",
    "2. Agregar empleado IT",
    "3. Agregar empleado RRHH",
    "4. Ver reporte",
    "5. Salir",
    "",
];

pub const PROMPT_OPTION: &str = "Seleccione opcion: ";
pub const PROMPT_NAME: &str = "Nombre: ";
pub const PROMPT_SALARY: &str = "Sueldo Bruto: ";

pub const INVALID_SALARY_MESSAGE: &str = "Entrada inválida, ingrese un número para el sueldo.";
pub const INVALID_OPTION_MESSAGE: &str = "Error";

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddEmployee(Department),
    Report,
    Exit,
    Invalid,
}

impl MenuOption {
    /// 解析用户输入（仅去掉行尾换行，其余精确匹配）
    pub fn parse(input: &str) -> Self {
        let option = strip_line_ending(input);
        if let Some(dept) = Department::from_menu_option(option) {
            return MenuOption::AddEmployee(dept);
        }
        match option {
            "4" => MenuOption::Report,
            "5" => MenuOption::Exit,
            _ => MenuOption::Invalid,
        }
    }
}

/// 去掉行尾的 "\n" / "\r\n"
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// 解析毛工资：允许首尾空白，拒绝非数字、非有限值和负数
pub fn parse_salary(input: &str) -> Result<f64> {
    let text = input.trim();
    let value: f64 = text
        .parse()
        .map_err(|_| PayrollError::InvalidSalary(text.to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PayrollError::InvalidSalary(text.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_options() {
        assert_eq!(MenuOption::parse("1\n"), MenuOption::AddEmployee(Department::Sales));
        assert_eq!(MenuOption::parse("2\r\n"), MenuOption::AddEmployee(Department::IT));
        assert_eq!(MenuOption::parse("3"), MenuOption::AddEmployee(Department::HR));
        assert_eq!(MenuOption::parse("4\n"), MenuOption::Report);
        assert_eq!(MenuOption::parse("5\n"), MenuOption::Exit);
    }

    #[test]
    fn test_parse_invalid_options() {
        for input in ["9\n", "\n", "abc\n", " 1\n", "1 \n", "05\n"] {
            assert_eq!(MenuOption::parse(input), MenuOption::Invalid, "输入: {input:?}");
        }
    }

    #[test]
    fn test_parse_salary_valid() {
        assert_eq!(parse_salary("1000").unwrap(), 1000.0);
        assert_eq!(parse_salary(" 1500.5 \n").unwrap(), 1500.5);
        assert_eq!(parse_salary("0").unwrap(), 0.0);
        assert_eq!(parse_salary("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_salary_invalid() {
        for input in ["abc", "", "12,5", "NaN", "inf", "-10"] {
            let err = parse_salary(input).unwrap_err();
            assert!(matches!(err, PayrollError::InvalidSalary(_)), "输入: {input:?}");
        }
    }
}
