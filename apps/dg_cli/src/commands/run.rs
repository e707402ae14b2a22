// apps/dg_cli/src/commands/run.rs

//! 运行计算命令
//!
//! 先验证输入，有错误时不进入计算。

use super::{load_input, print_issues};
use anyhow::{bail, Context, Result};
use clap::Args;
use dg_physics::{CalculationInput, CalculationOutput, RevetmentKind};
use dg_workflow::{Calculator, CalculatorConfig, Validator};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// 运行计算参数
#[derive(Args)]
pub struct RunArgs {
    /// 计算输入文件 (JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// 结果输出文件 (JSON)，缺省时写到标准输出
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 计算线程数 (0 = 自动)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,
}

/// 单个位置的结果
#[derive(Debug, Serialize)]
struct LocationReport {
    x: f64,
    revetment: RevetmentKind,
    z: f64,
    damages: Vec<f64>,
    time_of_failure: Option<f64>,
}

/// 结果文件
#[derive(Debug, Serialize)]
struct ResultReport {
    locations: Vec<LocationReport>,
}

impl ResultReport {
    fn new(input: &CalculationInput, output: &CalculationOutput) -> Self {
        let locations = input
            .locations
            .iter()
            .zip(&output.location_outputs)
            .map(|(location, result)| LocationReport {
                x: location.x(),
                revetment: location.kind(),
                z: result.z(),
                damages: result.damages(),
                time_of_failure: result.time_of_failure(),
            })
            .collect();
        Self { locations }
    }
}

/// 执行运行命令
pub fn execute(args: RunArgs) -> Result<()> {
    let input = load_input(&args.input)?;

    let validation = Validator::validate(&input);
    print_issues(&validation.issues);
    if !validation.is_successful() {
        bail!("Input is invalid, calculation not started");
    }

    let start = Instant::now();
    let config = CalculatorConfig::default().with_num_threads(args.threads);
    let calculator = Calculator::with_config(input.clone(), config)
        .context("Failed to start calculation")?;
    calculator.wait_for_completion();

    let Some(result) = calculator.result() else {
        bail!("Calculation did not finish");
    };
    for event in &result.events {
        println!("{}", event);
    }
    let Some(output) = result.output.filter(|_| result.successful) else {
        bail!("Calculation failed");
    };

    info!(
        "Calculated {} locations in {:.3}s",
        output.location_outputs.len(),
        start.elapsed().as_secs_f64()
    );

    let report = ResultReport::new(&input, &output);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write result to {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
