//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::Deserialize;
use std::fmt;

/// 部门（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// 销售部 (Ventas)
    Sales,
    /// 技术部
    IT,
    /// 人事部 (RRHH)
    HR,
}

impl Department {
    /// 所有部门，按菜单顺序
    pub const ALL: [Department; 3] = [Department::Sales, Department::IT, Department::HR];

    /// 面向用户的标签
    pub fn label(&self) -> &'static str {
        match self {
            Department::Sales => "Ventas",
            Department::IT => "IT",
            Department::HR => "RRHH",
        }
    }

    /// 从菜单选项解析 ("1" / "2" / "3")
    pub fn from_menu_option(option: &str) -> Option<Self> {
        match option {
            "1" => Some(Department::Sales),
            "2" => Some(Department::IT),
            "3" => Some(Department::HR),
            _ => None,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 员工记录，添加时计算净工资，之后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub department: Department,
    pub gross_salary: f64,
    pub net_salary: f64,
}

/// 配置选项 (支持详细/安静模式切换)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,              // 是否详细输出
    pub banner: bool,               // 启动时是否打印标题
    pub log_filter: Option<String>, // tracing 过滤表达式
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            banner: true,
            log_filter: None,
        }
    }
}
