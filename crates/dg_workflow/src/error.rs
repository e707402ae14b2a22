// crates/dg_workflow/src/error.rs

//! 工作流错误

use dg_physics::CalculationError;
use thiserror::Error;

/// 计算器错误
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// 后台线程无法启动
    #[error("Failed to spawn calculation thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),

    /// 线程池无法构建
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    /// 位置计算失败
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// 计算线程崩溃
    #[error("Calculation panicked: {0}")]
    Panicked(String),
}

impl CalculatorError {
    /// 从 panic 负载提取消息
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panicked(message)
    }
}
