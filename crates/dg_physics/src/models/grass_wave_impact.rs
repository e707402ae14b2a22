// crates/dg_physics/src/models/grass_wave_impact.rs

//! 草皮波浪冲击模型

use super::{linear_failure_output, RevetmentModel};
use crate::error::CalculationResult;
use crate::functions::grass_wave_impact as gwi;
use crate::input::{GrassWaveImpactLocation, LocationCommon, RevetmentKind};
use crate::output::{GrassWaveImpactDetails, OutputDetails, TimeDependentOutput};
use crate::profile::ProfileGeometry;
use crate::time_step::TimeStep;
use dg_foundation::validation::{Bound, ValidationIssue, ValidationReport};

/// 草皮波浪冲击模型
#[derive(Debug, Clone)]
pub struct GrassWaveImpactModel {
    location: GrassWaveImpactLocation,
    z: f64,
    minimum_wave_height: f64,
    maximum_wave_height: f64,
}

impl GrassWaveImpactModel {
    /// 创建模型，冲击波高上下限只与位置系数有关，构建时一次算出
    pub fn new(location: GrassWaveImpactLocation, profile: &ProfileGeometry) -> Self {
        let z = profile.interpolation_vertical_height(location.common.x);
        let (a, b, c) = (
            location.time_line_agwi.get(),
            location.time_line_bgwi.get(),
            location.time_line_cgwi.get(),
        );
        let minimum_wave_height =
            gwi::minimum_wave_height(a, b, c, location.minimum_wave_height_temax.get());
        let maximum_wave_height =
            gwi::maximum_wave_height(a, b, c, location.maximum_wave_height_temin.get());

        Self {
            location,
            z,
            minimum_wave_height,
            maximum_wave_height,
        }
    }
}

impl RevetmentModel for GrassWaveImpactModel {
    fn kind(&self) -> RevetmentKind {
        RevetmentKind::GrassWaveImpact
    }

    fn common(&self) -> &LocationCommon {
        &self.location.common
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn calculate(
        &self,
        initial_damage: f64,
        time_step: &TimeStep,
        _profile: &ProfileGeometry,
    ) -> CalculationResult<TimeDependentOutput> {
        let l = &self.location;
        let h = time_step.water_level;
        let hm0 = time_step.wave_height_hm0;

        let upper_limit_loading = gwi::upper_limit_loading(h, hm0, l.upper_limit_loading_aul.get());
        let lower_limit_loading = gwi::lower_limit_loading(h, hm0, l.lower_limit_loading_all.get());
        let loading_revetment = lower_limit_loading <= self.z && self.z <= upper_limit_loading;

        let mut details = GrassWaveImpactDetails {
            upper_limit_loading,
            lower_limit_loading,
            loading_revetment,
            ..Default::default()
        };

        if !loading_revetment {
            return Ok(TimeDependentOutput {
                increment_damage: 0.0,
                damage: initial_damage,
                time_of_failure: None,
                details: OutputDetails::GrassWaveImpact(details),
            });
        }

        let wave_angle_impact = gwi::wave_angle_impact(
            time_step.wave_angle,
            l.wave_angle_impact_nwa.get(),
            l.wave_angle_impact_qwa.get(),
            l.wave_angle_impact_rwa.get(),
        );
        let wave_height_impact = gwi::wave_height_impact(
            self.minimum_wave_height,
            self.maximum_wave_height,
            wave_angle_impact,
            hm0,
        );
        let time_line = gwi::time_line(
            wave_height_impact,
            l.time_line_agwi.get(),
            l.time_line_bgwi.get(),
            l.time_line_cgwi.get(),
        );
        let increment_damage = gwi::increment_damage(time_step.increment_time(), time_line);

        details.minimum_wave_height = Some(self.minimum_wave_height);
        details.maximum_wave_height = Some(self.maximum_wave_height);
        details.wave_angle_impact = Some(wave_angle_impact);
        details.wave_height_impact = Some(wave_height_impact);

        Ok(linear_failure_output(
            initial_damage,
            increment_damage,
            self.failure_number(),
            time_step,
            OutputDetails::GrassWaveImpact(details),
        ))
    }

    fn validate(&self, _profile: &ProfileGeometry) -> Vec<ValidationIssue> {
        let l = &self.location;
        let mut report = ValidationReport::new();

        report.check_larger_than("TimeLineAgwi", l.time_line_agwi.get(), 0.0);
        if l.time_line_bgwi.get() >= 0.0 {
            report.add_error("TimeLineBgwi must be smaller than 0.");
        }
        report.check_larger_than_or_equal("TimeLineCgwi", l.time_line_cgwi.get(), 0.0);
        report.check_range_error(
            "MinimumWaveHeightTemax",
            l.minimum_wave_height_temax.get(),
            Bound::Exclusive(1_000_000.0),
            Bound::Inclusive(3_600_000.0),
        );
        report.check_range_error(
            "MaximumWaveHeightTemin",
            l.maximum_wave_height_temin.get(),
            Bound::Inclusive(3.6),
            Bound::Exclusive(10.0),
        );
        report.check_range_error(
            "WaveAngleImpactNwa",
            l.wave_angle_impact_nwa.get(),
            Bound::Exclusive(0.0),
            Bound::Inclusive(1.0),
        );
        report.check_range_error(
            "WaveAngleImpactQwa",
            l.wave_angle_impact_qwa.get(),
            Bound::Inclusive(0.0),
            Bound::Inclusive(1.0),
        );
        report.check_larger_than("WaveAngleImpactRwa", l.wave_angle_impact_rwa.get(), 0.0);
        if l.upper_limit_loading_aul.get() >= l.lower_limit_loading_all.get() {
            report.add_error("UpperLimitLoadingAul must be smaller than LowerLimitLoadingAll.");
        }

        report.into_issues()
    }
}
