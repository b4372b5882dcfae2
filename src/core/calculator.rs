//! 工资计算规则
//!
//! 净工资 = 毛工资 - 毛工资 × 部门税率 - 食堂扣款，结果不低于 0

use crate::types::Department;

/// 税率表（固定，不可配置）
const TAX_RATES: &[(Department, f64)] = &[
    (Department::Sales, 0.15),
    (Department::IT, 0.15),
    (Department::HR, 0.16),
];

/// 工资计算器
#[derive(Debug, Clone, Copy, Default)]
pub struct PayrollCalculator;

impl PayrollCalculator {
    /// 食堂扣款（每条记录固定扣除）
    pub const CAFETERIA_DISCOUNT: f64 = 50.0;

    /// 税率表中缺失部门时的兜底税率
    pub const DEFAULT_TAX_RATE: f64 = 0.15;

    pub fn new() -> Self {
        Self
    }

    /// 查询部门税率
    pub fn tax_rate_for(&self, department: Department) -> f64 {
        TAX_RATES
            .iter()
            .find(|(dept, _)| *dept == department)
            .map(|(_, rate)| *rate)
            .unwrap_or(Self::DEFAULT_TAX_RATE)
    }

    /// 计算净工资（下限为 0）
    pub fn net_salary(&self, gross_salary: f64, department: Department) -> f64 {
        let tax = gross_salary * self.tax_rate_for(department);
        let net = gross_salary - tax - Self::CAFETERIA_DISCOUNT;
        net.max(0.0)
    }
}
