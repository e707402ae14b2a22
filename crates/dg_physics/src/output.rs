// crates/dg_physics/src/output.rs

//! 计算输出
//!
//! 每个位置每个时间步产生一个 [`TimeDependentOutput`]。非荷载时间步中，
//! 荷载阶段的中间量为 `None`（未计算），而不是 0。

use serde::{Deserialize, Serialize};

/// 块石时间步中间量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NaturalStoneDetails {
    pub outer_slope: f64,
    pub slope_upper_level: f64,
    pub slope_upper_position: f64,
    pub slope_lower_level: f64,
    pub slope_lower_position: f64,
    pub surf_similarity_parameter: f64,
    pub wave_steepness_deep_water: f64,
    pub distance_maximum_wave_elevation: f64,
    pub normative_width_of_wave_impact: f64,
    pub depth_maximum_wave_load: f64,
    pub upper_limit_loading: f64,
    pub lower_limit_loading: f64,
    pub loading_revetment: bool,
    pub hydraulic_load: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub resistance: Option<f64>,
    pub reference_degradation: Option<f64>,
    pub reference_time_degradation: Option<f64>,
}

/// 草皮波浪冲击时间步中间量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrassWaveImpactDetails {
    pub upper_limit_loading: f64,
    pub lower_limit_loading: f64,
    pub loading_revetment: bool,
    pub minimum_wave_height: Option<f64>,
    pub maximum_wave_height: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub wave_height_impact: Option<f64>,
}

/// 草皮波浪爬高时间步中间量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrassWaveRunupRayleighDetails {
    pub vertical_distance_water_level_elevation: f64,
    pub loading_revetment: bool,
    pub wave_angle_impact: Option<f64>,
    pub surf_similarity_parameter: Option<f64>,
    pub representative_wave_runup_2p: Option<f64>,
    pub average_number_of_waves: Option<f64>,
    pub cumulative_overload: Option<f64>,
}

/// 草皮越浪时间步中间量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrassOvertoppingDetails {
    pub dike_height: f64,
    pub loading_revetment: bool,
    pub outer_slope: Option<f64>,
    pub roughness_coefficient: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub surf_similarity_parameter: Option<f64>,
    pub representative_wave_runup_2p: Option<f64>,
    pub freeboard: Option<f64>,
    pub acceleration_alpha_a: Option<f64>,
    pub average_number_of_waves: Option<f64>,
    pub cumulative_overload: Option<f64>,
}

/// 沥青波浪冲击时间步中间量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AsphaltWaveImpactDetails {
    pub log_failure_tension: f64,
    pub computed_thickness: f64,
    pub equivalent_elastic_modulus: f64,
    pub stiffness_relation: f64,
    pub maximum_peak_stress: f64,
    pub average_number_of_waves: f64,
}

/// 按计算类型区分的中间量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "revetment", rename_all = "snake_case")]
pub enum OutputDetails {
    /// 沥青波浪冲击
    AsphaltWaveImpact(AsphaltWaveImpactDetails),
    /// 草皮波浪冲击
    GrassWaveImpact(GrassWaveImpactDetails),
    /// 草皮越浪
    GrassOvertopping(GrassOvertoppingDetails),
    /// 草皮波浪爬高
    GrassWaveRunupRayleigh(GrassWaveRunupRayleighDetails),
    /// 块石
    NaturalStone(NaturalStoneDetails),
}

/// 单个时间步的输出
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDependentOutput {
    /// 损伤增量（非负）
    pub increment_damage: f64,
    /// 时间步结束时的损伤
    pub damage: f64,
    /// 本时间步内的破坏时刻 [s]
    pub time_of_failure: Option<f64>,
    /// 中间量
    pub details: OutputDetails,
}

/// 单个位置的输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationOutput {
    z: f64,
    time_dependent_outputs: Vec<TimeDependentOutput>,
    time_of_failure: Option<f64>,
}

impl LocationOutput {
    /// 由时间步输出汇总；整体破坏时刻取第一个带破坏时刻的时间步
    pub fn new(z: f64, time_dependent_outputs: Vec<TimeDependentOutput>) -> Self {
        let time_of_failure = time_dependent_outputs
            .iter()
            .find_map(|output| output.time_of_failure);
        Self {
            z,
            time_dependent_outputs,
            time_of_failure,
        }
    }

    /// 位置高程 [m]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// 各时间步输出
    pub fn time_dependent_outputs(&self) -> &[TimeDependentOutput] {
        &self.time_dependent_outputs
    }

    /// 各时间步结束时的损伤
    pub fn damages(&self) -> Vec<f64> {
        self.time_dependent_outputs.iter().map(|o| o.damage).collect()
    }

    /// 最终损伤
    pub fn final_damage(&self) -> Option<f64> {
        self.time_dependent_outputs.last().map(|o| o.damage)
    }

    /// 破坏时刻 [s]
    pub fn time_of_failure(&self) -> Option<f64> {
        self.time_of_failure
    }
}

/// 整个计算的输出，顺序与位置输入一致
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// 各位置输出
    pub location_outputs: Vec<LocationOutput>,
}

impl CalculationOutput {
    /// 创建计算输出
    pub fn new(location_outputs: Vec<LocationOutput>) -> Self {
        Self { location_outputs }
    }
}
