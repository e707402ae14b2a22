// crates/dg_foundation/src/error.rs

//! 错误处理模块，定义基础层错误类型
//!
//! 基础层只描述输入本身不成立的情形（如剖面线段不连续）；
//! 计算过程中的错误在 dg_physics 中定义。
//!
//! # 示例
//!
//! ```
//! use dg_foundation::error::{DgError, DgResult};
//!
//! fn read_profile() -> DgResult<()> {
//!     Err(DgError::invalid_input("profile has no segments"))
//! }
//! assert!(read_profile().is_err());
//! ```

use thiserror::Error;

/// 统一结果类型
pub type DgResult<T> = Result<T, DgError>;

/// DikeGuard 错误类型
#[derive(Error, Debug)]
pub enum DgError {
    /// 无效输入
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },
}

impl DgError {
    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// 条件不满足时提前返回错误
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DgError::invalid_input("segments are not contiguous");
        assert_eq!(err.to_string(), "Invalid input: segments are not contiguous");
    }

    #[test]
    fn test_ensure_macro() {
        fn check(value: i32) -> DgResult<()> {
            ensure!(value > 0, DgError::invalid_input("value must be positive"));
            Ok(())
        }

        assert!(check(1).is_ok());
        assert!(check(-1).is_err());
    }
}
