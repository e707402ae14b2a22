// crates/dg_foundation/src/validation.rs

//! 运行时验证工具
//!
//! 提供验证问题、验证报告以及带固定格式消息的范围检查。
//!
//! 范围记法：`{`/`}` 表示开区间端点，`[`/`]` 表示闭区间端点。
//! 错误消息使用 "must"，警告消息使用 "should"：
//!
//! - `WaveHeightHm0 must be larger than 0.`
//! - `WaveHeightHm0 should be in range {0.1, 10}.`
//! - `WaveAngle must be in range {-180, 180].`
//!
//! # 示例
//!
//! ```
//! use dg_foundation::validation::{Bound, ValidationReport};
//!
//! let mut report = ValidationReport::new();
//! report.check_larger_than("WavePeriodTm10", -1.0, 0.0);
//! report.check_range_warning("WavePeriodTm10", -1.0, Bound::Exclusive(0.5), Bound::Exclusive(25.0));
//!
//! assert_eq!(report.error_count(), 1);
//! assert_eq!(report.warning_count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// 问题严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// 警告（仅提示，不阻止计算）
    Warning,
    /// 错误（输入不可用于计算）
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// 单条验证问题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 严重程度
    pub severity: Severity,
    /// 固定格式的可读消息
    pub message: String,
}

impl ValidationIssue {
    /// 创建错误
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// 创建警告
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// 是否为错误
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// 验证结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// 无错误
    Successful,
    /// 至少一个错误
    Failed,
}

/// 区间端点
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// 闭端点
    Inclusive(f64),
    /// 开端点
    Exclusive(f64),
}

impl Bound {
    /// 端点数值
    pub fn value(&self) -> f64 {
        match *self {
            Self::Inclusive(v) | Self::Exclusive(v) => v,
        }
    }

    fn admits_from_below(&self, value: f64) -> bool {
        match *self {
            Self::Inclusive(b) => value >= b,
            Self::Exclusive(b) => value > b,
        }
    }

    fn admits_from_above(&self, value: f64) -> bool {
        match *self {
            Self::Inclusive(b) => value <= b,
            Self::Exclusive(b) => value < b,
        }
    }
}

/// 按记法格式化区间，如 `{0, 10]`
pub fn format_range(lower: Bound, upper: Bound) -> String {
    let open = match lower {
        Bound::Inclusive(_) => '[',
        Bound::Exclusive(_) => '{',
    };
    let close = match upper {
        Bound::Inclusive(_) => ']',
        Bound::Exclusive(_) => '}',
    };
    format!("{}{}, {}{}", open, lower.value(), upper.value(), close)
}

/// 值是否落在区间内（NaN 永远不在区间内）
pub fn in_range(value: f64, lower: Bound, upper: Bound) -> bool {
    lower.admits_from_below(value) && upper.admits_from_above(value)
}

/// 验证报告
///
/// 按产生顺序保存全部问题，错误与警告交错保存，不截断。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// 创建空的验证报告
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加错误
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.issues.push(ValidationIssue::error(message));
    }

    /// 添加警告
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.issues.push(ValidationIssue::warning(message));
    }

    /// 添加任意问题
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// 全部问题（按产生顺序）
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// 取出全部问题
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    /// 错误数量
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    /// 警告数量
    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    /// 验证结论
    pub fn outcome(&self) -> ValidationOutcome {
        if self.has_errors() {
            ValidationOutcome::Failed
        } else {
            ValidationOutcome::Successful
        }
    }

    /// 追加问题列表
    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    // ========================================================================
    // 范围检查
    // ========================================================================

    /// 区间检查，失败时添加错误 `Name must be in range ….`
    pub fn check_range_error(&mut self, name: &str, value: f64, lower: Bound, upper: Bound) -> bool {
        if in_range(value, lower, upper) {
            return true;
        }
        self.add_error(format!("{} must be in range {}.", name, format_range(lower, upper)));
        false
    }

    /// 区间检查，失败时添加警告 `Name should be in range ….`
    pub fn check_range_warning(&mut self, name: &str, value: f64, lower: Bound, upper: Bound) -> bool {
        if in_range(value, lower, upper) {
            return true;
        }
        self.add_warning(format!("{} should be in range {}.", name, format_range(lower, upper)));
        false
    }

    /// 要求 `value > bound`
    pub fn check_larger_than(&mut self, name: &str, value: f64, bound: f64) -> bool {
        if value > bound {
            return true;
        }
        self.add_error(format!("{} must be larger than {}.", name, bound));
        false
    }

    /// 要求 `value >= bound`
    pub fn check_larger_than_or_equal(&mut self, name: &str, value: f64, bound: f64) -> bool {
        if value >= bound {
            return true;
        }
        self.add_error(format!("{} must be equal to {} or larger.", name, bound));
        false
    }

    /// 要求 `value` 为整数
    pub fn check_whole_number(&mut self, name: &str, value: f64) -> bool {
        if value.is_finite() && value.fract() == 0.0 {
            return true;
        }
        self.add_error(format!("{} must be a whole number.", name));
        false
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation report:")?;
        writeln!(f, "  errors: {}", self.error_count())?;
        writeln!(f, "  warnings: {}", self.warning_count())?;
        for (i, issue) in self.issues.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(!report.has_errors());
        assert_eq!(report.outcome(), ValidationOutcome::Successful);
    }

    #[test]
    fn test_warning_does_not_invalidate() {
        let mut report = ValidationReport::new();
        report.add_warning("test warning");

        assert_eq!(report.warning_count(), 1);
        assert!(!report.has_errors());
        assert_eq!(report.outcome(), ValidationOutcome::Successful);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut report = ValidationReport::new();
        report.add_error("first");
        report.add_warning("second");
        report.add_error("third");

        let messages: Vec<_> = report.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(report.outcome(), ValidationOutcome::Failed);
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(Bound::Exclusive(0.0), Bound::Exclusive(10.0)), "{0, 10}");
        assert_eq!(format_range(Bound::Inclusive(0.5), Bound::Inclusive(1.0)), "[0.5, 1]");
        assert_eq!(format_range(Bound::Exclusive(-180.0), Bound::Inclusive(180.0)), "{-180, 180]");
    }

    #[test]
    fn test_in_range_bounds() {
        assert!(!in_range(-180.0, Bound::Exclusive(-180.0), Bound::Inclusive(180.0)));
        assert!(in_range(180.0, Bound::Exclusive(-180.0), Bound::Inclusive(180.0)));
        assert!(!in_range(f64::NAN, Bound::Inclusive(0.0), Bound::Inclusive(1.0)));
    }

    #[test]
    fn test_check_messages() {
        let mut report = ValidationReport::new();
        report.check_range_error("RelativeDensity", 0.0, Bound::Exclusive(0.0), Bound::Exclusive(10.0));
        report.check_range_warning("WaveHeightHm0", 0.05, Bound::Exclusive(0.1), Bound::Exclusive(10.0));
        report.check_larger_than("WavePeriodTm10", 0.0, 0.0);
        report.check_larger_than_or_equal("InitialDamage", -0.1, 0.0);
        report.check_whole_number("FixedNumberOfWaves", 10.5);

        let messages: Vec<_> = report.issues().iter().map(|i| i.message.clone()).collect();
        assert_eq!(
            messages,
            vec![
                "RelativeDensity must be in range {0, 10}.",
                "WaveHeightHm0 should be in range {0.1, 10}.",
                "WavePeriodTm10 must be larger than 0.",
                "InitialDamage must be equal to 0 or larger.",
                "FixedNumberOfWaves must be a whole number.",
            ]
        );
        assert_eq!(report.error_count(), 4);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_report_display() {
        let mut report = ValidationReport::new();
        report.add_error("test error");
        report.add_warning("test warning");

        let s = format!("{}", report);
        assert!(s.contains("errors: 1"));
        assert!(s.contains("warnings: 1"));
        assert!(s.contains("[Error] test error"));
    }
}
