// crates/dg_physics/src/error.rs

//! 计算错误
//!
//! 几何退化以 `f64::INFINITY` 传播，不在此列；这里只收纳使计算无法继续的错误。

use crate::profile::CharacteristicPointType;
use thiserror::Error;

/// 计算错误
#[derive(Debug, Error)]
pub enum CalculationError {
    /// 剖面缺少模型所需的特征点
    #[error("The profile is missing the characteristic point {0}")]
    MissingCharacteristicPoint(CharacteristicPointType),

    /// 剖面不满足模型的几何前提
    #[error("Invalid profile: {message}")]
    InvalidProfile {
        /// 错误描述
        message: String,
    },
}

impl CalculationError {
    /// 创建剖面错误
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }
}

/// 计算结果类型
pub type CalculationResult<T> = Result<T, CalculationError>;
