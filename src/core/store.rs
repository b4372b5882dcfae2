//! 内存记录存储 (模块原则：清晰分离的存储逻辑)
//!
//! 只追加，不去重，不删除；报告按插入顺序输出

use crate::core::calculator::PayrollCalculator;
use crate::types::{Department, Employee};
use tracing::debug;

/// 空报告时的提示
pub const EMPTY_REPORT: &str = "No hay nadie";

/// 报告中每条记录之后的分隔线
pub const REPORT_SEPARATOR: &str = "----------------";

/// 工资记录存储
#[derive(Debug, Default)]
pub struct PayrollStore {
    calculator: PayrollCalculator,
    employees: Vec<Employee>,
}

impl PayrollStore {
    pub fn new(calculator: PayrollCalculator) -> Self {
        Self {
            calculator,
            employees: Vec::new(),
        }
    }

    /// 添加员工，计算净工资后追加到末尾
    pub fn add(&mut self, name: String, department: Department, gross_salary: f64) -> &Employee {
        let net_salary = self.calculator.net_salary(gross_salary, department);
        debug!(
            name = %name,
            department = %department,
            gross_salary,
            net_salary,
            "employee added"
        );

        self.employees.push(Employee {
            name,
            department,
            gross_salary,
            net_salary,
        });

        let index = self.employees.len() - 1;
        &self.employees[index]
    }

    /// 生成报告行：每条记录 4 行，空时只有一行提示
    pub fn report(&self) -> Vec<String> {
        if self.employees.is_empty() {
            return vec![EMPTY_REPORT.to_string()];
        }

        let mut lines = Vec::with_capacity(self.employees.len() * 4);
        for emp in &self.employees {
            lines.push(format!("Emp: {}", emp.name));
            lines.push(format!("Depto: {}", emp.department.label()));
            lines.push(format!("Pago Final: {}", format_amount(emp.net_salary)));
            lines.push(REPORT_SEPARATOR.to_string());
        }
        lines
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// 金额显示：最短精确小数，整数值保留 ".0"（800.0、35.0）
///
/// 绝对值 >= 1e16 或 < 1e-4 时用科学计数法，指数带符号且至少两位（1.7e+16、1e-05）
pub fn format_amount(amount: f64) -> String {
    let shortest = format!("{:?}", amount);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };

    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => shortest,
    }
}
