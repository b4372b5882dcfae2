//! 核心业务：工资计算与记录存储

pub mod calculator;
pub mod store;

pub use calculator::PayrollCalculator;
pub use store::PayrollStore;
