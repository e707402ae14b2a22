// crates/dg_physics/src/models/grass_overtopping.rs

//! 草皮越浪模型
//!
//! 位置位于堤顶或内坡。外坡几何只用于计算爬高：坡度取坡脚到坡顶的平均值，
//! 糙率取爬高带内外坡线段的水平加权值。

use super::{
    linear_failure_output, require_characteristic_point, validate_cumulative_overload,
    RevetmentModel,
};
use crate::constants::GRAVITATIONAL_ACCELERATION;
use crate::error::CalculationResult;
use crate::functions::grass::{self, CumulativeOverloadInput};
use crate::functions::{grass_overtopping as ot, hydraulic_load, revetment};
use crate::input::{GrassOvertoppingLocation, LocationCommon, RevetmentKind};
use crate::output::{GrassOvertoppingDetails, OutputDetails, TimeDependentOutput};
use crate::profile::{CharacteristicPointType, ProfileGeometry, ProfileSegment};
use crate::time_step::TimeStep;
use dg_foundation::float::GEOMETRY_EPSILON;
use dg_foundation::validation::{Bound, ValidationIssue, ValidationReport};

/// 草皮越浪模型
#[derive(Debug, Clone)]
pub struct GrassOvertoppingModel {
    location: GrassOvertoppingLocation,
    z: f64,
}

impl GrassOvertoppingModel {
    /// 创建模型
    pub fn new(location: GrassOvertoppingLocation, profile: &ProfileGeometry) -> Self {
        let z = profile.interpolation_vertical_height(location.common.x);
        Self { location, z }
    }

    /// 外坡线段（坡脚与坡顶之间）
    fn outer_slope_segments(profile: &ProfileGeometry, toe_x: f64, crest_x: f64) -> Vec<ProfileSegment> {
        profile
            .segments()
            .iter()
            .filter(|s| {
                s.lower_point.x >= toe_x - GEOMETRY_EPSILON && s.upper_point.x <= crest_x + GEOMETRY_EPSILON
            })
            .copied()
            .collect()
    }
}

impl RevetmentModel for GrassOvertoppingModel {
    fn kind(&self) -> RevetmentKind {
        RevetmentKind::GrassOvertopping
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
        profile: &ProfileGeometry,
    ) -> CalculationResult<TimeDependentOutput> {
        let l = &self.location;
        let o = &l.overload;
        let g = GRAVITATIONAL_ACCELERATION;
        let h = time_step.water_level;
        let hm0 = time_step.wave_height_hm0;

        let outer_toe = require_characteristic_point(profile, CharacteristicPointType::OuterToe)?;
        let outer_crest = require_characteristic_point(profile, CharacteristicPointType::OuterCrest)?;

        let dike_height = l.dike_height.unwrap_or(outer_crest.z);
        let loading_revetment = ot::loading_revetment(h, dike_height);

        let mut details = GrassOvertoppingDetails {
            dike_height,
            loading_revetment,
            ..Default::default()
        };

        if !loading_revetment {
            return Ok(TimeDependentOutput {
                increment_damage: 0.0,
                damage: initial_damage,
                time_of_failure: None,
                details: OutputDetails::GrassOvertopping(details),
            });
        }

        let outer_slope = ot::outer_slope(outer_toe.x, outer_toe.z, outer_crest.x, outer_crest.z);
        let segments = Self::outer_slope_segments(profile, outer_toe.x, outer_crest.x);
        let roughness_coefficient = ot::representative_roughness(&segments, h, hm0);

        let wave_angle_impact = grass::wave_angle_impact(
            time_step.wave_angle,
            l.wave_angle_impact_abeta.get(),
            l.wave_angle_impact_betamax.get(),
        );
        let surf_similarity_parameter =
            hydraulic_load::surf_similarity_parameter(outer_slope, hm0, time_step.wave_period_tm10, g);
        let representative_wave_runup_2p = grass::representative_wave_runup_2p(
            surf_similarity_parameter,
            wave_angle_impact,
            hm0,
            1.0,
            roughness_coefficient,
            o.representative_wave_runup_2p_aru.get(),
            o.representative_wave_runup_2p_bru.get(),
            o.representative_wave_runup_2p_cru.get(),
        );

        let freeboard = ot::freeboard(dike_height, h);
        let inner_crest_x = profile
            .characteristic_point(CharacteristicPointType::InnerCrest)
            .map(|p| p.x);
        let acceleration_alpha_a = ot::acceleration_alpha_a(
            l.common.x,
            inner_crest_x,
            l.acceleration_alpha_a_crest.get(),
            l.acceleration_alpha_a_inner_slope.get(),
        );
        let average_number_of_waves = revetment::average_number_of_waves(
            time_step.increment_time(),
            time_step.wave_period_tm10,
            o.average_number_of_waves_ctm.get(),
        );

        let cwo = l.front_velocity_cwo.get();
        let cumulative_overload = grass::cumulative_overload(
            &CumulativeOverloadInput {
                average_number_of_waves,
                representative_wave_runup_2p,
                fixed_number_of_waves: o.fixed_number_of_waves.get() as usize,
                critical_front_velocity: o.critical_front_velocity.get(),
                increased_load_transition_alpha_m: o.increased_load_transition_alpha_m.get(),
                reduced_strength_transition_alpha_s: o.reduced_strength_transition_alpha_s.get(),
            },
            |wave_runup| ot::front_velocity(wave_runup, freeboard, cwo, acceleration_alpha_a, g),
        );
        let increment_damage =
            grass::increment_damage(cumulative_overload, o.critical_cumulative_overload.get());

        details.outer_slope = Some(outer_slope);
        details.roughness_coefficient = Some(roughness_coefficient);
        details.wave_angle_impact = Some(wave_angle_impact);
        details.surf_similarity_parameter = Some(surf_similarity_parameter);
        details.representative_wave_runup_2p = Some(representative_wave_runup_2p);
        details.freeboard = Some(freeboard);
        details.acceleration_alpha_a = Some(acceleration_alpha_a);
        details.average_number_of_waves = Some(average_number_of_waves);
        details.cumulative_overload = Some(cumulative_overload);

        Ok(linear_failure_output(
            initial_damage,
            increment_damage,
            self.failure_number(),
            time_step,
            OutputDetails::GrassOvertopping(details),
        ))
    }

    fn validate(&self, profile: &ProfileGeometry) -> Vec<ValidationIssue> {
        let l = &self.location;
        let mut report = ValidationReport::new();

        validate_cumulative_overload(&mut report, &l.overload);
        report.check_larger_than("FrontVelocityCwo", l.front_velocity_cwo.get(), 0.0);
        report.check_larger_than_or_equal(
            "AccelerationAlphaAForCrest",
            l.acceleration_alpha_a_crest.get(),
            0.0,
        );
        report.check_larger_than_or_equal(
            "AccelerationAlphaAForInnerSlope",
            l.acceleration_alpha_a_inner_slope.get(),
            0.0,
        );

        if let Some(outer_crest) = profile.characteristic_point(CharacteristicPointType::OuterCrest) {
            if let Some(dike_height) = l.dike_height {
                report.check_larger_than_or_equal("DikeHeight", dike_height, outer_crest.z);
            }
        }

        if let (Some(toe), Some(crest)) = (
            profile.characteristic_point(CharacteristicPointType::OuterToe),
            profile.characteristic_point(CharacteristicPointType::OuterCrest),
        ) {
            for segment in Self::outer_slope_segments(profile, toe.x, crest.x) {
                if !dg_foundation::validation::in_range(
                    segment.roughness_coefficient,
                    Bound::Inclusive(0.5),
                    Bound::Inclusive(1.0),
                ) {
                    report.add_warning("Roughness coefficient should be in range [0.5, 1].");
                }
            }
        }

        report.into_issues()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        CommonProperties, GrassOvertoppingProperties, LocationInput, LocationProperties,
        RevetmentProperties,
    };
    use crate::models::test_support::{bare_profile, straight_profile};
    use dg_foundation::Severity;

    fn model(x: f64, props: GrassOvertoppingProperties, profile: &ProfileGeometry) -> GrassOvertoppingModel {
        let location = LocationProperties::new(
            CommonProperties::at(x),
            RevetmentProperties::GrassOvertopping(props),
        )
        .resolve();
        match location {
            LocationInput::GrassOvertopping(l) => GrassOvertoppingModel::new(l, profile),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_overtopping_damages_crest() {
        let profile = straight_profile();
        let model = model(32.0, GrassOvertoppingProperties::default(), &profile);
        let step = TimeStep::new(0.0, 3600.0, 8.5, 2.0, 6.0, 0.0);

        let output = model.calculate(0.0, &step, &profile).expect("calculate");
        assert!(output.increment_damage > 0.0);
        match output.details {
            OutputDetails::GrassOvertopping(d) => {
                assert!(d.loading_revetment);
                assert_eq!(d.dike_height, 10.0);
                assert_eq!(d.freeboard, Some(1.5));
                assert_eq!(d.acceleration_alpha_a, Some(1.0));
                assert!((d.outer_slope.expect("slope") - 1.0 / 3.0).abs() < 1e-12);
                assert_eq!(d.roughness_coefficient, Some(1.0));
            }
            _ => panic!("unexpected details"),
        }
    }

    #[test]
    fn test_inner_slope_uses_inner_slope_acceleration() {
        let profile = straight_profile();
        let step = TimeStep::new(0.0, 3600.0, 8.5, 2.0, 6.0, 0.0);
        let crest = model(32.0, GrassOvertoppingProperties::default(), &profile)
            .calculate(0.0, &step, &profile)
            .expect("crest");
        let inner = model(40.0, GrassOvertoppingProperties::default(), &profile)
            .calculate(0.0, &step, &profile)
            .expect("inner");

        match inner.details {
            OutputDetails::GrassOvertopping(d) => assert_eq!(d.acceleration_alpha_a, Some(1.4)),
            _ => panic!("unexpected details"),
        }
        assert!(inner.increment_damage > crest.increment_damage);
    }

    #[test]
    fn test_water_above_dike_is_not_loading() {
        let profile = straight_profile();
        let model = model(32.0, GrassOvertoppingProperties::default(), &profile);
        let step = TimeStep::new(0.0, 3600.0, 10.0, 2.0, 6.0, 0.0);

        let output = model.calculate(0.4, &step, &profile).expect("calculate");
        assert_eq!(output.increment_damage, 0.0);
        assert_eq!(output.damage, 0.4);
        match output.details {
            OutputDetails::GrassOvertopping(d) => assert!(d.freeboard.is_none()),
            _ => panic!("unexpected details"),
        }
    }

    #[test]
    fn test_missing_outer_crest_is_an_error() {
        let profile = bare_profile();
        let model = model(20.0, GrassOvertoppingProperties::default(), &profile);
        let step = TimeStep::new(0.0, 3600.0, 8.5, 2.0, 6.0, 0.0);
        assert!(model.calculate(0.0, &step, &profile).is_err());
    }

    #[test]
    fn test_validation_messages() {
        let profile = straight_profile();
        let model = model(
            32.0,
            GrassOvertoppingProperties {
                dike_height: Some(9.0),
                front_velocity_cwo: Some(0.0),
                ..Default::default()
            },
            &profile,
        );

        let issues = model.validate(&profile);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert_eq!(issues[0].message, "FrontVelocityCwo must be larger than 0.");
        assert_eq!(issues[1].message, "DikeHeight must be equal to 10 or larger.");
    }
}
