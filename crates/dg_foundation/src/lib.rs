// crates/dg_foundation/src/lib.rs

//! DikeGuard Foundation Layer
//!
//! 基础层，提供整个项目共享的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 基础错误类型与 `ensure!` 宏
//! - [`validation`]: 验证问题、验证报告与范围消息生成
//! - [`float`]: 浮点容差比较
//!
//! # 示例
//!
//! ```
//! use dg_foundation::validation::{Bound, ValidationReport};
//!
//! let mut report = ValidationReport::new();
//! report.check_range_error("RelativeDensity", 12.0, Bound::Exclusive(0.0), Bound::Exclusive(10.0));
//!
//! assert!(report.has_errors());
//! assert_eq!(report.issues()[0].message, "RelativeDensity must be in range {0, 10}.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod float;
pub mod validation;

// 重导出常用类型
pub use error::{DgError, DgResult};
pub use validation::{Bound, Severity, ValidationIssue, ValidationOutcome, ValidationReport};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{DgError, DgResult};
    pub use crate::float::{approx_eq, DEFAULT_EPSILON};
    pub use crate::validation::{
        Bound, Severity, ValidationIssue, ValidationOutcome, ValidationReport,
    };
    pub use crate::ensure;
}
