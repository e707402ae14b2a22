// crates/dg_physics/src/time_step.rs

//! 水力荷载时间步

use serde::{Deserialize, Serialize};

/// 单个时间步的水力荷载
///
/// 时间以秒计，波向以度计（0 表示正向入射）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeStep {
    /// 开始时间 [s]
    pub begin_time: f64,
    /// 结束时间 [s]
    pub end_time: f64,
    /// 水位 [m]
    pub water_level: f64,
    /// 有效波高 Hm0 [m]
    pub wave_height_hm0: f64,
    /// 谱周期 Tm-1,0 [s]
    pub wave_period_tm10: f64,
    /// 波向 β [°]
    pub wave_angle: f64,
}

impl TimeStep {
    /// 创建时间步
    pub const fn new(
        begin_time: f64,
        end_time: f64,
        water_level: f64,
        wave_height_hm0: f64,
        wave_period_tm10: f64,
        wave_angle: f64,
    ) -> Self {
        Self {
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_angle,
        }
    }

    /// 时间步长 [s]
    #[inline]
    pub fn increment_time(&self) -> f64 {
        self.end_time - self.begin_time
    }
}

/// 相邻时间步是否首尾相接
pub fn are_contiguous(steps: &[TimeStep]) -> bool {
    steps.windows(2).all(|pair| pair[1].begin_time == pair[0].end_time)
}
