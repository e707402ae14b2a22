// crates/dg_workflow/src/runner.rs

//! 位置运行器
//!
//! 按顺序将一个位置推过全部时间步：上一步结束时的损伤作为下一步的初始损伤。
//! 发生破坏后继续计算剩余时间步。

use dg_physics::{
    create_model, CalculationResult, LocationInput, LocationOutput, ProfileGeometry,
    RevetmentModel, TimeStep,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 位置运行器
pub struct LocationRunner {
    model: Box<dyn RevetmentModel>,
}

impl LocationRunner {
    /// 为位置创建运行器
    pub fn new(location: &LocationInput, profile: &ProfileGeometry) -> Self {
        Self {
            model: create_model(location, profile),
        }
    }

    /// 由现成模型创建运行器，供 [`crate::Calculator::with_runners`] 使用
    pub fn from_model(model: Box<dyn RevetmentModel>) -> Self {
        Self { model }
    }

    /// 运行全部时间步
    ///
    /// `progress` 在每个时间步完成后加一。任一时间步出错即返回该错误。
    pub fn run(
        &self,
        time_steps: &[TimeStep],
        profile: &ProfileGeometry,
        progress: Option<&AtomicUsize>,
    ) -> CalculationResult<LocationOutput> {
        let common = self.model.common();
        tracing::debug!(
            "Running {} location at x={} over {} time steps",
            self.model.kind(),
            common.x,
            time_steps.len()
        );

        let mut running_damage = common.initial_damage.get();
        let mut outputs = Vec::with_capacity(time_steps.len());

        for time_step in time_steps {
            let output = self.model.calculate(running_damage, time_step, profile)?;
            running_damage = output.damage;
            outputs.push(output);

            if let Some(counter) = progress {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }

        let location_output = LocationOutput::new(self.model.z(), outputs);
        if let Some(time_of_failure) = location_output.time_of_failure() {
            tracing::debug!(
                "Location at x={} failed at t={:.2}s",
                common.x,
                time_of_failure
            );
        }
        Ok(location_output)
    }
}

impl std::fmt::Debug for LocationRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationRunner")
            .field("kind", &self.model.kind())
            .field("x", &self.model.x())
            .finish()
    }
}
