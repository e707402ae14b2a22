// crates/dg_workflow/src/events.rs

//! 事件模块
//!
//! 计算过程中产生的事件按顺序随计算结果一并返回。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// 警告
    Warning,
    /// 错误
    Error,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// 计算事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// 事件类型
    pub event_type: EventType,
    /// 消息
    pub message: String,
}

impl Event {
    /// 创建错误事件
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            event_type: EventType::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.event_type, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        assert_eq!(Event::error("boom").to_string(), "[Error] boom");

        let warning = Event {
            event_type: EventType::Warning,
            message: "careful".to_string(),
        };
        assert_eq!(warning.to_string(), "[Warning] careful");
    }
}
