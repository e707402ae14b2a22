// crates/dg_workflow/src/lib.rs

//! DikeGuard 工作流模块
//!
//! 提供输入验证与计算调度功能。
//!
//! # 模块结构
//!
//! - [`validator`]: 输入验证
//! - [`runner`]: 单个位置的时间序列运行器
//! - [`calculator`]: 后台并行计算器
//! - [`events`]: 计算事件
//! - [`config`]: 计算器配置
//!
//! # 示例
//!
//! ```rust,ignore
//! use dg_workflow::{Calculator, Validator};
//!
//! let validation = Validator::validate(&input);
//! if validation.is_successful() {
//!     let calculator = Calculator::new(input)?;
//!     calculator.wait_for_completion();
//!     let result = calculator.result();
//! }
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod events;
pub mod runner;
pub mod validator;

// 重导出核心类型
pub use calculator::{CalculationState, Calculator, CalculatorResult};
pub use config::CalculatorConfig;
pub use error::CalculatorError;
pub use events::{Event, EventType};
pub use runner::LocationRunner;
pub use validator::{ValidationResult, Validator};
