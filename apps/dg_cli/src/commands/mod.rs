// apps/dg_cli/src/commands/mod.rs

//! 命令实现

pub mod run;
pub mod validate;

use anyhow::{Context, Result};
use dg_foundation::{Severity, ValidationIssue};
use dg_physics::CalculationInput;
use std::path::Path;
use tracing::{error, info, warn};

/// 读取并解析 JSON 计算输入
pub fn load_input(path: &Path) -> Result<CalculationInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let input: CalculationInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input file {}", path.display()))?;

    info!(
        "Loaded {}: {} locations, {} time steps",
        path.display(),
        input.location_count(),
        input.time_step_count()
    );
    Ok(input)
}

/// 打印验证问题
pub fn print_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
        println!("{}", issue);
    }
}
