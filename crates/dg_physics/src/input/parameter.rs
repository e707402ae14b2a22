// crates/dg_physics/src/input/parameter.rs

//! 带来源标记的系数
//!
//! 位置输入中的可覆盖系数要么由用户提供，要么取自默认表。
//! 解析只在构建位置输入时发生一次，之后计算只读取 [`Parameter::value`]。

use serde::{Deserialize, Serialize};

/// 系数来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// 用户显式提供
    Supplied,
    /// 由默认表填充
    Default,
}

/// 已解析的系数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// 数值
    pub value: f64,
    /// 来源
    pub provenance: Provenance,
}

impl Parameter {
    /// 用户提供的值
    pub const fn supplied(value: f64) -> Self {
        Self {
            value,
            provenance: Provenance::Supplied,
        }
    }

    /// 默认表中的值
    pub const fn defaulted(value: f64) -> Self {
        Self {
            value,
            provenance: Provenance::Default,
        }
    }

    /// 优先取用户值，否则取默认值
    pub fn resolve(supplied: Option<f64>, default: f64) -> Self {
        match supplied {
            Some(value) => Self::supplied(value),
            None => Self::defaulted(default),
        }
    }

    /// 数值
    #[inline]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// 是否来自默认表
    pub fn is_default(&self) -> bool {
        self.provenance == Provenance::Default
    }
}
