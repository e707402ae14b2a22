// crates/dg_physics/src/models/natural_stone.rs

//! 块石护面模型

use super::{require_characteristic_point, RevetmentModel};
use crate::constants::GRAVITATIONAL_ACCELERATION;
use crate::error::{CalculationError, CalculationResult};
use crate::functions::natural_stone::{self as ns, OuterBerm, OuterSlopeInput};
use crate::functions::{hydraulic_load, revetment};
use crate::input::{LocationCommon, NaturalStoneLocation, RevetmentKind};
use crate::output::{NaturalStoneDetails, OutputDetails, TimeDependentOutput};
use crate::profile::{CharacteristicPointType, ProfileGeometry, ProfilePoint};
use crate::time_step::TimeStep;
use dg_foundation::validation::{Bound, ValidationIssue, ValidationReport};

/// 块石护面模型
#[derive(Debug, Clone)]
pub struct NaturalStoneModel {
    location: NaturalStoneLocation,
    z: f64,
}

impl NaturalStoneModel {
    /// 创建模型，位置高程由剖面插值得到
    pub fn new(location: NaturalStoneLocation, profile: &ProfileGeometry) -> Self {
        let z = profile.interpolation_vertical_height(location.common.x);
        Self { location, z }
    }

    /// 外平台，坡肩与坡脚须成对出现
    fn outer_berm(profile: &ProfileGeometry) -> CalculationResult<Option<OuterBerm>> {
        let crest = profile.characteristic_point(CharacteristicPointType::CrestOuterBerm);
        let notch = profile.characteristic_point(CharacteristicPointType::NotchOuterBerm);
        match (crest, notch) {
            (Some(crest), Some(notch)) if notch.x > crest.x => Ok(Some(OuterBerm { crest, notch })),
            (None, None) => Ok(None),
            _ => Err(CalculationError::invalid_profile(
                "CrestOuterBerm and NotchOuterBerm must both be defined with NotchOuterBerm landward",
            )),
        }
    }

    fn hydraulic_load(&self, surf_similarity_parameter: f64, wave_height_hm0: f64) -> f64 {
        let c = &self.location.hydraulic_loads;
        if surf_similarity_parameter <= c.xib.get() {
            ns::hydraulic_load(
                surf_similarity_parameter,
                wave_height_hm0,
                c.ap.get(),
                c.bp.get(),
                c.cp.get(),
                c.np.get(),
            )
        } else {
            ns::hydraulic_load(
                surf_similarity_parameter,
                wave_height_hm0,
                c.a_s.get(),
                c.bs.get(),
                c.cs.get(),
                c.ns.get(),
            )
        }
    }
}

impl RevetmentModel for NaturalStoneModel {
    fn kind(&self) -> RevetmentKind {
        RevetmentKind::NaturalStone
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
        let g = GRAVITATIONAL_ACCELERATION;
        let h = time_step.water_level;
        let hm0 = time_step.wave_height_hm0;
        let tm10 = time_step.wave_period_tm10;

        let outer_toe = require_characteristic_point(profile, CharacteristicPointType::OuterToe)?;
        let outer_crest = require_characteristic_point(profile, CharacteristicPointType::OuterCrest)?;

        // 外坡坡度
        let slope_upper_level =
            ns::slope_upper_level(outer_toe.z, outer_crest.z, h, hm0, l.slope_upper_level_aus.get());
        let slope_lower_level =
            ns::slope_lower_level(outer_toe.z, slope_upper_level, hm0, l.slope_lower_level_als.get());
        let slope_upper_position = profile.interpolation_horizontal_position(slope_upper_level);
        let slope_lower_position = profile.interpolation_horizontal_position(slope_lower_level);

        let outer_slope = ns::outer_slope(&OuterSlopeInput {
            slope_lower: ProfilePoint::new(slope_lower_position, slope_lower_level),
            slope_upper: ProfilePoint::new(slope_upper_position, slope_upper_level),
            outer_toe,
            outer_crest,
            berm: Self::outer_berm(profile)?,
        });

        // 荷载带
        let surf_similarity_parameter =
            hydraulic_load::surf_similarity_parameter(outer_slope, hm0, tm10, g);
        let wave_steepness_deep_water = hydraulic_load::wave_steepness_deep_water(hm0, tm10, g);
        let distance_maximum_wave_elevation = ns::distance_maximum_wave_elevation(
            hm0,
            wave_steepness_deep_water,
            l.distance_maximum_wave_elevation_asmax.get(),
            l.distance_maximum_wave_elevation_bsmax.get(),
        );
        let normative_width_of_wave_impact = ns::normative_width_of_wave_impact(
            surf_similarity_parameter,
            hm0,
            l.normative_width_of_wave_impact_awi.get(),
            l.normative_width_of_wave_impact_bwi.get(),
        );
        let depth_maximum_wave_load = ns::depth_maximum_wave_load(
            distance_maximum_wave_elevation,
            normative_width_of_wave_impact,
            hydraulic_load::slope_angle(outer_slope),
        );
        let upper_limit_loading = ns::upper_limit_loading(
            depth_maximum_wave_load,
            surf_similarity_parameter,
            h,
            hm0,
            l.upper_limit_loading.a.get(),
            l.upper_limit_loading.b.get(),
            l.upper_limit_loading.c.get(),
        );
        let lower_limit_loading = ns::lower_limit_loading(
            depth_maximum_wave_load,
            surf_similarity_parameter,
            h,
            hm0,
            l.lower_limit_loading.a.get(),
            l.lower_limit_loading.b.get(),
            l.lower_limit_loading.c.get(),
        );
        let loading_revetment = ns::loading_revetment(lower_limit_loading, upper_limit_loading, self.z);

        let mut details = NaturalStoneDetails {
            outer_slope,
            slope_upper_level,
            slope_upper_position,
            slope_lower_level,
            slope_lower_position,
            surf_similarity_parameter,
            wave_steepness_deep_water,
            distance_maximum_wave_elevation,
            normative_width_of_wave_impact,
            depth_maximum_wave_load,
            upper_limit_loading,
            lower_limit_loading,
            loading_revetment,
            ..Default::default()
        };

        let failure_number = self.failure_number();

        if !loading_revetment {
            return Ok(TimeDependentOutput {
                increment_damage: 0.0,
                damage: initial_damage,
                time_of_failure: None,
                details: OutputDetails::NaturalStone(details),
            });
        }

        // 退化
        let hydraulic_load = self.hydraulic_load(surf_similarity_parameter, hm0);
        let resistance = ns::resistance(l.relative_density, l.thickness_top_layer);
        let wave_angle_impact =
            ns::wave_angle_impact(time_step.wave_angle, l.wave_angle_impact_betamax.get());
        let reference_degradation =
            ns::reference_degradation(resistance, hydraulic_load, wave_angle_impact, initial_damage);
        let reference_time_degradation = ns::reference_time_degradation(reference_degradation, tm10);
        let increment_degradation = revetment::increment_degradation(
            reference_time_degradation,
            time_step.increment_time(),
            tm10,
        );

        let increment_damage =
            ns::increment_damage(hydraulic_load, resistance, increment_degradation, wave_angle_impact);
        let damage = revetment::damage(increment_damage, initial_damage);

        let time_of_failure = revetment::failure_revetment(damage, initial_damage, failure_number)
            .then(|| {
                let reference_degradation_failure = ns::reference_degradation(
                    resistance,
                    hydraulic_load,
                    wave_angle_impact,
                    failure_number,
                );
                let reference_time_failure =
                    ns::reference_time_degradation(reference_degradation_failure, tm10);
                revetment::time_of_failure(
                    reference_time_failure - reference_time_degradation,
                    time_step.begin_time,
                    time_step.end_time,
                )
            });

        details.hydraulic_load = Some(hydraulic_load);
        details.wave_angle_impact = Some(wave_angle_impact);
        details.resistance = Some(resistance);
        details.reference_degradation = Some(reference_degradation);
        details.reference_time_degradation = Some(reference_time_degradation);

        Ok(TimeDependentOutput {
            increment_damage,
            damage,
            time_of_failure,
            details: OutputDetails::NaturalStone(details),
        })
    }

    fn validate(&self, _profile: &ProfileGeometry) -> Vec<ValidationIssue> {
        let l = &self.location;
        let mut report = ValidationReport::new();

        if report.check_range_error(
            "RelativeDensity",
            l.relative_density,
            Bound::Exclusive(0.0),
            Bound::Exclusive(10.0),
        ) {
            report.check_range_warning(
                "RelativeDensity",
                l.relative_density,
                Bound::Inclusive(1.0),
                Bound::Inclusive(5.0),
            );
        }

        if report.check_range_error(
            "ThicknessTopLayer",
            l.thickness_top_layer,
            Bound::Exclusive(0.0),
            Bound::Exclusive(1.0),
        ) {
            report.check_range_warning(
                "ThicknessTopLayer",
                l.thickness_top_layer,
                Bound::Inclusive(0.04),
                Bound::Inclusive(0.3),
            );
        }

        report.check_larger_than("SlopeUpperLevelAus", l.slope_upper_level_aus.get(), 0.0);
        report.check_larger_than("SlopeLowerLevelAls", l.slope_lower_level_als.get(), 0.0);
        report.check_larger_than("HydraulicLoadXib", l.hydraulic_loads.xib.get(), 0.0);
        report.check_range_error(
            "WaveAngleImpactBetamax",
            l.wave_angle_impact_betamax.get(),
            Bound::Inclusive(0.0),
            Bound::Exclusive(90.0),
        );

        report.into_issues()
    }
}
