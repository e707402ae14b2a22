// crates/dg_physics/src/models/grass_wave_runup_rayleigh.rs

//! 草皮波浪爬高模型（Rayleigh 离散）

use super::{linear_failure_output, validate_cumulative_overload, RevetmentModel};
use crate::constants::GRAVITATIONAL_ACCELERATION;
use crate::error::CalculationResult;
use crate::functions::grass::{self, CumulativeOverloadInput};
use crate::functions::{grass_wave_runup as runup, hydraulic_load, revetment};
use crate::input::{GrassWaveRunupRayleighLocation, LocationCommon, RevetmentKind};
use crate::output::{GrassWaveRunupRayleighDetails, OutputDetails, TimeDependentOutput};
use crate::profile::ProfileGeometry;
use crate::time_step::TimeStep;
use dg_foundation::validation::{Bound, ValidationIssue, ValidationReport};

/// 草皮波浪爬高模型
#[derive(Debug, Clone)]
pub struct GrassWaveRunupRayleighModel {
    location: GrassWaveRunupRayleighLocation,
    z: f64,
}

impl GrassWaveRunupRayleighModel {
    /// 创建模型
    pub fn new(location: GrassWaveRunupRayleighLocation, profile: &ProfileGeometry) -> Self {
        let z = profile.interpolation_vertical_height(location.common.x);
        Self { location, z }
    }
}

impl RevetmentModel for GrassWaveRunupRayleighModel {
    fn kind(&self) -> RevetmentKind {
        RevetmentKind::GrassWaveRunupRayleigh
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
        let o = &l.overload;
        let g = GRAVITATIONAL_ACCELERATION;

        let vertical_distance =
            runup::vertical_distance_water_level_elevation(self.z, time_step.water_level);
        let loading_revetment = runup::loading_revetment(vertical_distance);

        let mut details = GrassWaveRunupRayleighDetails {
            vertical_distance_water_level_elevation: vertical_distance,
            loading_revetment,
            ..Default::default()
        };

        if !loading_revetment {
            return Ok(TimeDependentOutput {
                increment_damage: 0.0,
                damage: initial_damage,
                time_of_failure: None,
                details: OutputDetails::GrassWaveRunupRayleigh(details),
            });
        }

        let wave_angle_impact = grass::wave_angle_impact(
            time_step.wave_angle,
            l.wave_angle_impact_abeta.get(),
            l.wave_angle_impact_betamax.get(),
        );
        let surf_similarity_parameter = hydraulic_load::surf_similarity_parameter(
            l.outer_slope,
            time_step.wave_height_hm0,
            time_step.wave_period_tm10,
            g,
        );
        let representative_wave_runup_2p = grass::representative_wave_runup_2p(
            surf_similarity_parameter,
            wave_angle_impact,
            time_step.wave_height_hm0,
            l.representative_wave_runup_2p_gammab.get(),
            l.representative_wave_runup_2p_gammaf.get(),
            o.representative_wave_runup_2p_aru.get(),
            o.representative_wave_runup_2p_bru.get(),
            o.representative_wave_runup_2p_cru.get(),
        );
        let average_number_of_waves = revetment::average_number_of_waves(
            time_step.increment_time(),
            time_step.wave_period_tm10,
            o.average_number_of_waves_ctm.get(),
        );

        let cu = l.front_velocity_cu.get();
        let cumulative_overload = grass::cumulative_overload(
            &CumulativeOverloadInput {
                average_number_of_waves,
                representative_wave_runup_2p,
                fixed_number_of_waves: o.fixed_number_of_waves.get() as usize,
                critical_front_velocity: o.critical_front_velocity.get(),
                increased_load_transition_alpha_m: o.increased_load_transition_alpha_m.get(),
                reduced_strength_transition_alpha_s: o.reduced_strength_transition_alpha_s.get(),
            },
            |wave_runup| runup::front_velocity(wave_runup, vertical_distance, cu, g),
        );
        let increment_damage =
            grass::increment_damage(cumulative_overload, o.critical_cumulative_overload.get());

        details.wave_angle_impact = Some(wave_angle_impact);
        details.surf_similarity_parameter = Some(surf_similarity_parameter);
        details.representative_wave_runup_2p = Some(representative_wave_runup_2p);
        details.average_number_of_waves = Some(average_number_of_waves);
        details.cumulative_overload = Some(cumulative_overload);

        Ok(linear_failure_output(
            initial_damage,
            increment_damage,
            self.failure_number(),
            time_step,
            OutputDetails::GrassWaveRunupRayleigh(details),
        ))
    }

    fn validate(&self, _profile: &ProfileGeometry) -> Vec<ValidationIssue> {
        let l = &self.location;
        let mut report = ValidationReport::new();

        report.check_range_error(
            "OuterSlope",
            l.outer_slope,
            Bound::Exclusive(0.0),
            Bound::Exclusive(1.0),
        );
        validate_cumulative_overload(&mut report, &l.overload);
        report.check_range_error(
            "RepresentativeWaveRunup2PGammab",
            l.representative_wave_runup_2p_gammab.get(),
            Bound::Inclusive(0.6),
            Bound::Inclusive(1.0),
        );
        report.check_range_error(
            "RepresentativeWaveRunup2PGammaf",
            l.representative_wave_runup_2p_gammaf.get(),
            Bound::Inclusive(0.5),
            Bound::Inclusive(1.0),
        );
        report.check_larger_than("FrontVelocityCu", l.front_velocity_cu.get(), 0.0);

        report.into_issues()
    }
}
