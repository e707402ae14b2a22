// crates/dg_workflow/src/calculator.rs

//! 后台计算器
//!
//! 构建即开始计算：在命名后台线程中建立 rayon 线程池，各位置并行运行，
//! 位置内的时间步按顺序计算。任一位置出错（包括 panic）即整体失败，
//! 此时只产生一条错误事件，不返回部分输出。
//!
//! # 示例
//!
//! ```rust,ignore
//! use dg_workflow::{Calculator, CalculationState};
//!
//! let calculator = Calculator::new(input)?;
//! calculator.wait_for_completion();
//!
//! assert_eq!(calculator.calculation_state(), CalculationState::FinishedSuccessfully);
//! let result = calculator.result().expect("finished");
//! ```

use crate::config::CalculatorConfig;
use crate::error::CalculatorError;
use crate::events::Event;
use crate::runner::LocationRunner;
use dg_physics::{CalculationInput, CalculationOutput, LocationOutput, ProfileGeometry, TimeStep};
use parking_lot::{Condvar, Mutex, RwLock};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

/// 计算状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationState {
    /// 运行中
    Running,
    /// 成功完成
    FinishedSuccessfully,
    /// 出错结束
    FinishedWithError,
}

impl CalculationState {
    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl std::fmt::Display for CalculationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::FinishedSuccessfully => write!(f, "FinishedSuccessfully"),
            Self::FinishedWithError => write!(f, "FinishedWithError"),
        }
    }
}

/// 计算结果
#[derive(Debug, Clone)]
pub struct CalculatorResult {
    /// 是否成功
    pub successful: bool,
    /// 计算事件
    pub events: Vec<Event>,
    /// 计算输出，仅在成功时存在
    pub output: Option<CalculationOutput>,
}

impl CalculatorResult {
    fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            successful: false,
            events: vec![Event::error(format!(
                "An unhandled error occurred while performing the calculation: {}",
                error
            ))],
            output: None,
        }
    }
}

/// 后台线程执行的全部工作
struct CalculationJob {
    profile: ProfileGeometry,
    time_steps: Vec<TimeStep>,
    runners: Vec<LocationRunner>,
    num_threads: usize,
}

/// 前台与后台线程共享的状态
struct Shared {
    state: Mutex<CalculationState>,
    finished: Condvar,
    result: RwLock<Option<CalculatorResult>>,
    completed_steps: AtomicUsize,
    total_steps: usize,
}

impl Shared {
    /// 写入结果后切换到终态并唤醒所有等待者
    fn finish(&self, state: CalculationState, result: CalculatorResult) {
        *self.result.write() = Some(result);
        let mut current = self.state.lock();
        *current = state;
        self.finished.notify_all();
    }
}

/// 后台线程未写入终态就退出时补写失败结果
struct CompletionGuard<'a>(&'a Shared);

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        let running = !self.0.state.lock().is_finished();
        if running {
            tracing::error!("Calculation thread terminated unexpectedly");
            self.0.finish(
                CalculationState::FinishedWithError,
                CalculatorResult::failed("calculation thread terminated unexpectedly"),
            );
        }
    }
}

/// 后台计算器
pub struct Calculator {
    shared: Arc<Shared>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Calculator {
    /// 以默认配置创建计算器并开始计算
    pub fn new(input: CalculationInput) -> Result<Self, CalculatorError> {
        Self::with_config(input, CalculatorConfig::default())
    }

    /// 以指定配置创建计算器并开始计算
    pub fn with_config(
        input: CalculationInput,
        config: CalculatorConfig,
    ) -> Result<Self, CalculatorError> {
        let runners = input
            .locations
            .iter()
            .map(|location| LocationRunner::new(location, &input.profile))
            .collect();
        Self::with_runners(input.profile, input.time_steps, runners, config)
    }

    /// 以现成的位置运行器开始计算
    ///
    /// 输出顺序与 `runners` 一致。
    pub fn with_runners(
        profile: ProfileGeometry,
        time_steps: Vec<TimeStep>,
        runners: Vec<LocationRunner>,
        config: CalculatorConfig,
    ) -> Result<Self, CalculatorError> {
        let shared = Arc::new(Shared {
            state: Mutex::new(CalculationState::Running),
            finished: Condvar::new(),
            result: RwLock::new(None),
            completed_steps: AtomicUsize::new(0),
            total_steps: runners.len() * time_steps.len(),
        });

        let job = CalculationJob {
            profile,
            time_steps,
            runners,
            num_threads: config.num_threads,
        };
        let worker_shared = Arc::clone(&shared);

        let handle = std::thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || {
                let _guard = CompletionGuard(&worker_shared);
                Self::execute(&job, &worker_shared);
            })
            .map_err(CalculatorError::ThreadSpawn)?;

        Ok(Self {
            shared,
            handle: Mutex::new(Some(handle)),
        })
    }

    /// 后台线程主体
    fn execute(job: &CalculationJob, shared: &Shared) {
        let start = Instant::now();
        tracing::info!(
            "Starting calculation: {} locations, {} time steps",
            job.runners.len(),
            job.time_steps.len()
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            Self::calculate_locations(job, &shared.completed_steps)
        }))
        .unwrap_or_else(|payload| Err(CalculatorError::from_panic(payload)));

        match outcome {
            Ok(location_outputs) => {
                tracing::info!(
                    "Calculation completed in {:.3}s",
                    start.elapsed().as_secs_f64()
                );
                shared.finish(
                    CalculationState::FinishedSuccessfully,
                    CalculatorResult {
                        successful: true,
                        events: Vec::new(),
                        output: Some(CalculationOutput::new(location_outputs)),
                    },
                );
            }
            Err(e) => {
                tracing::error!("Calculation failed: {}", e);
                shared.finish(CalculationState::FinishedWithError, CalculatorResult::failed(e));
            }
        }
    }

    fn calculate_locations(
        job: &CalculationJob,
        completed_steps: &AtomicUsize,
    ) -> Result<Vec<LocationOutput>, CalculatorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(job.num_threads)
            .thread_name(|i| format!("dg-location-{}", i))
            .build()
            .map_err(|e| CalculatorError::ThreadPool(e.to_string()))?;

        let outputs = pool.install(|| {
            job.runners
                .par_iter()
                .map(|runner| runner.run(&job.time_steps, &job.profile, Some(completed_steps)))
                .collect::<Result<Vec<_>, _>>()
        })?;

        Ok(outputs)
    }

    /// 阻塞直到计算结束，可被多个线程同时调用
    pub fn wait_for_completion(&self) {
        let mut state = self.shared.state.lock();
        while !state.is_finished() {
            self.shared.finished.wait(&mut state);
        }
        drop(state);

        // 回收后台线程
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::error!("Calculation thread panicked after finishing");
            }
        }
    }

    /// 当前状态（不阻塞）
    pub fn calculation_state(&self) -> CalculationState {
        *self.shared.state.lock()
    }

    /// 计算结果（不阻塞），运行中返回 `None`
    pub fn result(&self) -> Option<CalculatorResult> {
        if !self.calculation_state().is_finished() {
            return None;
        }
        self.shared.result.read().clone()
    }

    /// 进度 [0, 1]：已完成的位置时间步 / 总步数
    pub fn progress(&self) -> f64 {
        if self.shared.total_steps == 0 {
            return if self.calculation_state().is_finished() { 1.0 } else { 0.0 };
        }
        let completed = self.shared.completed_steps.load(Ordering::Relaxed);
        (completed as f64 / self.shared.total_steps as f64).clamp(0.0, 1.0)
    }
}

impl Drop for Calculator {
    fn drop(&mut self) {
        self.wait_for_completion();
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.calculation_state())
            .field("progress", &self.progress())
            .finish()
    }
}
