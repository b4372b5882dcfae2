//! 交互式会话：菜单循环
//!
//! 输入输出抽象为 `BufRead` / `Write`，便于测试时注入

use crate::core::PayrollStore;
use crate::error::{PayrollError, Result};
use crate::menu::{self, MenuOption};
use crate::types::{Config, Department};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// 会话结束原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// 用户选择了退出
    Exit,
    /// 输入流结束
    EndOfInput,
}

/// 交互式会话
pub struct Session<R, W> {
    input: R,
    output: W,
    store: PayrollStore,
    banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: PayrollStore, config: &Config) -> Self {
        Self {
            input,
            output,
            store,
            banner: config.banner,
        }
    }

    /// 当前存储（只读）
    pub fn store(&self) -> &PayrollStore {
        &self.store
    }

    /// 运行菜单循环，直到选择退出或输入结束
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("payroll session started");

        if self.banner {
            for line in menu::BANNER {
                writeln!(self.output, "{}", line)?;
            }
        }

        let end = loop {
            for line in menu::MENU {
                writeln!(self.output, "{}", line)?;
            }

            let Some(choice) = self.prompt(menu::PROMPT_OPTION)? else {
                break SessionEnd::EndOfInput;
            };

            match MenuOption::parse(&choice) {
                MenuOption::AddEmployee(dept) => {
                    if !self.add_employee(dept)? {
                        break SessionEnd::EndOfInput;
                    }
                }
                MenuOption::Report => {
                    for line in self.store.report() {
                        writeln!(self.output, "{}", line)?;
                    }
                }
                MenuOption::Exit => break SessionEnd::Exit,
                MenuOption::Invalid => {
                    debug!(option = %menu::strip_line_ending(&choice), "unknown menu option");
                    writeln!(self.output, "{}", menu::INVALID_OPTION_MESSAGE)?;
                }
            }
        };

        self.output.flush()?;
        info!(records = self.store.len(), reason = ?end, "payroll session finished");
        Ok(end)
    }

    /// 收集姓名和毛工资并保存；返回 false 表示输入已结束
    fn add_employee(&mut self, department: Department) -> Result<bool> {
        let Some(name) = self.prompt(menu::PROMPT_NAME)? else {
            return Ok(false);
        };
        let Some(salary) = self.prompt(menu::PROMPT_SALARY)? else {
            return Ok(false);
        };

        let gross_salary = match menu::parse_salary(&salary) {
            Ok(value) => value,
            Err(PayrollError::InvalidSalary(text)) => {
                info!(input = %text, "invalid gross salary, record not created");
                writeln!(self.output, "{}", menu::INVALID_SALARY_MESSAGE)?;
                return Ok(true);
            }
            Err(e) => return Err(e),
        };

        let name = menu::strip_line_ending(&name).to_string();
        self.store.add(name, department, gross_salary);
        writeln!(self.output, "Guardado {}.", department.label())?;
        Ok(true)
    }

    /// 打印提示（不换行）并读取一行；输入结束返回 None
    ///
    /// 非 UTF-8 字节按替换字符解码：工资会被判为无效输入，姓名原样保留
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
