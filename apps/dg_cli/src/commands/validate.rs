// apps/dg_cli/src/commands/validate.rs

//! 输入验证命令

use super::{load_input, print_issues};
use anyhow::{bail, Result};
use clap::Args;
use dg_workflow::Validator;
use std::path::PathBuf;
use tracing::info;

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 计算输入文件 (JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    let result = Validator::validate(&input);

    print_issues(&result.issues);

    let errors = result.issues.iter().filter(|i| i.is_error()).count();
    let warnings = result.issues.len() - errors;

    if errors > 0 || (args.strict && warnings > 0) {
        bail!(
            "Validation failed: {} errors, {} warnings",
            errors,
            warnings
        );
    }

    info!("Validation passed with {} warnings", warnings);
    println!("Validation passed");
    Ok(())
}
