// crates/dg_physics/src/models/mod.rs

//! 护面计算模型
//!
//! 每种护面类型实现 [`RevetmentModel`]，按时间步计算损伤并给出自身的系数检查。
//! 所有模型遵循同一计算骨架：
//!
//! 1. 荷载判定，不受荷载时损伤增量为 0，荷载阶段中间量为 `None`
//! 2. 水力荷载与几何参数
//! 3. 抗力或退化
//! 4. 损伤增量
//! 5. 破坏判定与时间步内破坏时刻
//!
//! # 使用示例
//!
//! ```ignore
//! use dg_physics::models::create_model;
//!
//! let model = create_model(&location, &profile);
//! let output = model.calculate(0.0, &time_step, &profile)?;
//! ```

mod asphalt_wave_impact;
mod grass_overtopping;
mod grass_wave_impact;
mod grass_wave_runup_rayleigh;
mod natural_stone;

pub use asphalt_wave_impact::AsphaltWaveImpactModel;
pub use grass_overtopping::GrassOvertoppingModel;
pub use grass_wave_impact::GrassWaveImpactModel;
pub use grass_wave_runup_rayleigh::GrassWaveRunupRayleighModel;
pub use natural_stone::NaturalStoneModel;

use crate::error::{CalculationError, CalculationResult};
use crate::functions::revetment;
use crate::input::{GrassCumulativeOverloadCoefficients, LocationCommon, LocationInput, RevetmentKind};
use crate::output::{OutputDetails, TimeDependentOutput};
use crate::profile::{CharacteristicPointType, ProfileGeometry, ProfilePoint};
use crate::time_step::TimeStep;
use dg_foundation::validation::{Bound, ValidationIssue, ValidationReport};

/// 护面计算模型 trait
pub trait RevetmentModel: Send + Sync {
    /// 计算类型
    fn kind(&self) -> RevetmentKind;

    /// 位置通用字段
    fn common(&self) -> &LocationCommon;

    /// 位置高程 [m]
    fn z(&self) -> f64;

    /// 计算一个时间步
    ///
    /// # 参数
    ///
    /// - `initial_damage`: 时间步开始时的损伤
    /// - `time_step`: 水力荷载
    /// - `profile`: 剖面几何
    fn calculate(
        &self,
        initial_damage: f64,
        time_step: &TimeStep,
        profile: &ProfileGeometry,
    ) -> CalculationResult<TimeDependentOutput>;

    /// 检查本类型的系数与剖面前提
    fn validate(&self, profile: &ProfileGeometry) -> Vec<ValidationIssue>;

    /// 水平位置 [m]
    fn x(&self) -> f64 {
        self.common().x
    }

    /// 破坏数
    fn failure_number(&self) -> f64 {
        self.common().failure_number.get()
    }
}

/// 按位置输入创建对应的模型
pub fn create_model(location: &LocationInput, profile: &ProfileGeometry) -> Box<dyn RevetmentModel> {
    tracing::trace!(kind = %location.kind(), x = location.x(), "Creating revetment model");
    match location {
        LocationInput::AsphaltWaveImpact(l) => Box::new(AsphaltWaveImpactModel::new(l.clone(), profile)),
        LocationInput::GrassWaveImpact(l) => Box::new(GrassWaveImpactModel::new(l.clone(), profile)),
        LocationInput::GrassOvertopping(l) => Box::new(GrassOvertoppingModel::new(l.clone(), profile)),
        LocationInput::GrassWaveRunupRayleigh(l) => {
            Box::new(GrassWaveRunupRayleighModel::new(l.clone(), profile))
        }
        LocationInput::NaturalStone(l) => Box::new(NaturalStoneModel::new(l.clone(), profile)),
    }
}

// ============================================================
// 模型共用的辅助函数
// ============================================================

/// 查找模型必需的特征点
pub(crate) fn require_characteristic_point(
    profile: &ProfileGeometry,
    point_type: CharacteristicPointType,
) -> CalculationResult<ProfilePoint> {
    profile
        .characteristic_point(point_type)
        .ok_or(CalculationError::MissingCharacteristicPoint(point_type))
}

/// 由损伤增量组装时间步输出（线性破坏时长）
pub(crate) fn linear_failure_output(
    initial_damage: f64,
    increment_damage: f64,
    failure_number: f64,
    time_step: &TimeStep,
    details: OutputDetails,
) -> TimeDependentOutput {
    let damage = revetment::damage(increment_damage, initial_damage);

    let time_of_failure = revetment::failure_revetment(damage, initial_damage, failure_number)
        .then(|| {
            let duration = revetment::duration_in_time_step_failure_linear(
                time_step.increment_time(),
                increment_damage,
                failure_number,
                initial_damage,
            );
            revetment::time_of_failure(duration, time_step.begin_time, time_step.end_time)
        });

    TimeDependentOutput {
        increment_damage,
        damage,
        time_of_failure,
        details,
    }
}

/// 草皮累积超载系数检查（爬高与越浪共用）
pub(crate) fn validate_cumulative_overload(
    report: &mut ValidationReport,
    coefficients: &GrassCumulativeOverloadCoefficients,
) {
    report.check_larger_than(
        "CriticalCumulativeOverload",
        coefficients.critical_cumulative_overload.get(),
        0.0,
    );
    report.check_larger_than(
        "CriticalFrontVelocity",
        coefficients.critical_front_velocity.get(),
        0.0,
    );
    report.check_larger_than_or_equal(
        "IncreasedLoadTransitionAlphaM",
        coefficients.increased_load_transition_alpha_m.get(),
        0.0,
    );
    report.check_larger_than_or_equal(
        "ReducedStrengthTransitionAlphaS",
        coefficients.reduced_strength_transition_alpha_s.get(),
        0.0,
    );
    report.check_larger_than(
        "AverageNumberOfWavesCtm",
        coefficients.average_number_of_waves_ctm.get(),
        0.0,
    );
    // 逐波循环次数，取整前必须是不小于 1 的整数
    let fixed_number_of_waves = coefficients.fixed_number_of_waves.get();
    if report.check_larger_than_or_equal("FixedNumberOfWaves", fixed_number_of_waves, 1.0) {
        report.check_whole_number("FixedNumberOfWaves", fixed_number_of_waves);
    }
    report.check_range_warning(
        "RepresentativeWaveRunup2PAru",
        coefficients.representative_wave_runup_2p_aru.get(),
        Bound::Inclusive(1.0),
        Bound::Inclusive(2.0),
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::profile::{CharacteristicPoint, CharacteristicPointType, ProfileGeometry, ProfilePoint, ProfileSegment};

    /// 1:3 直坡，坡脚 (0, 0)，坡顶 (30, 10)，堤顶宽 5 m，内坡 1:3
    pub fn straight_profile() -> ProfileGeometry {
        ProfileGeometry::new(
            vec![
                ProfileSegment::new(ProfilePoint::new(0.0, 0.0), ProfilePoint::new(30.0, 10.0), 1.0),
                ProfileSegment::new(ProfilePoint::new(30.0, 10.0), ProfilePoint::new(35.0, 10.0), 1.0),
                ProfileSegment::new(ProfilePoint::new(35.0, 10.0), ProfilePoint::new(50.0, 5.0), 1.0),
            ],
            vec![
                CharacteristicPoint::new(CharacteristicPointType::OuterToe, 0.0, 0.0),
                CharacteristicPoint::new(CharacteristicPointType::OuterCrest, 30.0, 10.0),
                CharacteristicPoint::new(CharacteristicPointType::InnerCrest, 35.0, 10.0),
                CharacteristicPoint::new(CharacteristicPointType::InnerToe, 50.0, 5.0),
            ],
        )
        .expect("valid profile")
    }

    /// 没有任何特征点的剖面
    pub fn bare_profile() -> ProfileGeometry {
        ProfileGeometry::new(
            vec![ProfileSegment::new(ProfilePoint::new(0.0, 0.0), ProfilePoint::new(30.0, 10.0), 1.0)],
            vec![],
        )
        .expect("valid profile")
    }
}
