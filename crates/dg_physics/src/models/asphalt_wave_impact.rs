// crates/dg_physics/src/models/asphalt_wave_impact.rs

//! 沥青波浪冲击模型
//!
//! 面层刚度相关的量在构建时一次算出；每个时间步都视为受荷载。

use super::{linear_failure_output, RevetmentModel};
use crate::constants::GRAVITATIONAL_ACCELERATION;
use crate::error::CalculationResult;
use crate::functions::asphalt::{self, IncrementDamageInput};
use crate::functions::revetment;
use crate::input::{AsphaltWaveImpactLocation, FactorTable, LocationCommon, RevetmentKind};
use crate::output::{AsphaltWaveImpactDetails, OutputDetails, TimeDependentOutput};
use crate::profile::ProfileGeometry;
use crate::time_step::TimeStep;
use dg_foundation::validation::{Bound, ValidationIssue, ValidationReport};

/// 沥青波浪冲击模型
#[derive(Debug, Clone)]
pub struct AsphaltWaveImpactModel {
    location: AsphaltWaveImpactLocation,
    z: f64,
    log_failure_tension: f64,
    computed_thickness: f64,
    equivalent_elastic_modulus: f64,
    stiffness_relation: f64,
}

impl AsphaltWaveImpactModel {
    /// 创建模型
    pub fn new(location: AsphaltWaveImpactLocation, profile: &ProfileGeometry) -> Self {
        let z = profile.interpolation_vertical_height(location.common.x);

        let upper = location.upper_layer;
        let sub = location.sub_layer;
        let log_failure_tension = asphalt::log_failure_tension(location.failure_tension);
        let computed_thickness = asphalt::computed_thickness_layers(
            upper.thickness,
            upper.elastic_modulus,
            sub.map(|s| (s.thickness, s.elastic_modulus)),
        );
        let equivalent_elastic_modulus =
            asphalt::equivalent_elastic_modulus(upper.elastic_modulus, sub.map(|s| s.elastic_modulus));
        let stiffness_relation = asphalt::stiffness_relation(
            computed_thickness,
            equivalent_elastic_modulus,
            location.soil_elasticity,
            location.stiffness_relation_nu.get(),
        );

        Self {
            location,
            z,
            log_failure_tension,
            computed_thickness,
            equivalent_elastic_modulus,
            stiffness_relation,
        }
    }

    fn validate_factor_table(report: &mut ValidationReport, name: &str, table: &FactorTable) {
        if table.entries.is_empty() {
            report.add_error(format!("{} must contain at least 1 value.", name));
            return;
        }
        if (table.probability_sum() - 1.0).abs() > 1e-6 {
            report.add_error(format!("The sum of the probabilities in {} must be equal to 1.", name));
        }
    }
}

impl RevetmentModel for AsphaltWaveImpactModel {
    fn kind(&self) -> RevetmentKind {
        RevetmentKind::AsphaltWaveImpact
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

        let maximum_peak_stress = asphalt::maximum_peak_stress(
            time_step.wave_height_hm0,
            GRAVITATIONAL_ACCELERATION,
            l.density_of_water.get(),
        );
        let average_number_of_waves = revetment::average_number_of_waves(
            time_step.increment_time(),
            time_step.wave_period_tm10,
            l.average_number_of_waves_ctm.get(),
        );

        let increment_damage = asphalt::increment_damage(&IncrementDamageInput {
            z: self.z,
            water_level: time_step.water_level,
            wave_height_hm0: time_step.wave_height_hm0,
            average_number_of_waves,
            outer_slope: l.outer_slope,
            log_failure_tension: self.log_failure_tension,
            maximum_peak_stress,
            stiffness_relation: self.stiffness_relation,
            computed_thickness: self.computed_thickness,
            impact_number_c: l.impact_number_c.get(),
            fatigue_alpha: l.fatigue_alpha,
            fatigue_beta: l.fatigue_beta,
            width_factors: &l.width_factors.entries,
            depth_factors: &l.depth_factors.entries,
            impact_factors: &l.impact_factors.entries,
        });

        let details = AsphaltWaveImpactDetails {
            log_failure_tension: self.log_failure_tension,
            computed_thickness: self.computed_thickness,
            equivalent_elastic_modulus: self.equivalent_elastic_modulus,
            stiffness_relation: self.stiffness_relation,
            maximum_peak_stress,
            average_number_of_waves,
        };

        Ok(linear_failure_output(
            initial_damage,
            increment_damage,
            self.failure_number(),
            time_step,
            OutputDetails::AsphaltWaveImpact(details),
        ))
    }

    fn validate(&self, _profile: &ProfileGeometry) -> Vec<ValidationIssue> {
        let l = &self.location;
        let mut report = ValidationReport::new();

        report.check_larger_than("FailureTension", l.failure_tension, 0.0);
        report.check_larger_than("SoilElasticity", l.soil_elasticity, 0.0);
        report.check_larger_than("ThicknessUpperLayer", l.upper_layer.thickness, 0.0);
        report.check_larger_than("ElasticModulusUpperLayer", l.upper_layer.elastic_modulus, 0.0);
        if let Some(sub) = l.sub_layer {
            report.check_larger_than("ThicknessSubLayer", sub.thickness, 0.0);
            report.check_larger_than("ElasticModulusSubLayer", sub.elastic_modulus, 0.0);
        }
        report.check_range_error(
            "OuterSlope",
            l.outer_slope,
            Bound::Exclusive(0.0),
            Bound::Exclusive(1.0),
        );
        report.check_larger_than("FatigueAlpha", l.fatigue_alpha, 0.0);
        report.check_larger_than("FatigueBeta", l.fatigue_beta, 0.0);
        report.check_larger_than("DensityOfWater", l.density_of_water.get(), 0.0);
        report.check_larger_than(
            "AverageNumberOfWavesCtm",
            l.average_number_of_waves_ctm.get(),
            0.0,
        );
        report.check_larger_than("ImpactNumberC", l.impact_number_c.get(), 0.0);
        report.check_range_error(
            "StiffnessRelationNu",
            l.stiffness_relation_nu.get(),
            Bound::Exclusive(0.0),
            Bound::Exclusive(0.5),
        );

        Self::validate_factor_table(&mut report, "WidthFactors", &l.width_factors);
        Self::validate_factor_table(&mut report, "DepthFactors", &l.depth_factors);
        Self::validate_factor_table(&mut report, "ImpactFactors", &l.impact_factors);

        report.into_issues()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        AsphaltWaveImpactProperties, CommonProperties, LocationInput, LocationProperties,
        RevetmentProperties,
    };
    use crate::models::test_support::straight_profile;
    use dg_foundation::Severity;

    fn props() -> AsphaltWaveImpactProperties {
        AsphaltWaveImpactProperties {
            failure_tension: 1.6,
            soil_elasticity: 56.0,
            thickness_upper_layer: 0.16,
            elastic_modulus_upper_layer: 18000.0,
            outer_slope: 0.25,
            fatigue_alpha: 0.42,
            fatigue_beta: 4.4,
            ..Default::default()
        }
    }

    fn model(x: f64, props: AsphaltWaveImpactProperties, profile: &ProfileGeometry) -> AsphaltWaveImpactModel {
        let location = LocationProperties::new(
            CommonProperties::at(x),
            RevetmentProperties::AsphaltWaveImpact(props),
        )
        .resolve();
        match location {
            LocationInput::AsphaltWaveImpact(l) => AsphaltWaveImpactModel::new(l, profile),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_every_step_is_loading() {
        let profile = straight_profile();
        let model = model(12.0, props(), &profile);
        let step = TimeStep::new(0.0, 3600.0, 4.0, 1.5, 5.0, 0.0);

        let output = model.calculate(0.0, &step, &profile).expect("calculate");
        assert!(output.increment_damage > 0.0);
        match output.details {
            OutputDetails::AsphaltWaveImpact(d) => {
                assert_eq!(d.computed_thickness, 0.16);
                assert_eq!(d.equivalent_elastic_modulus, 18000.0);
                assert!((d.average_number_of_waves - 720.0).abs() < 1e-9);
            }
            _ => panic!("unexpected details"),
        }
    }

    #[test]
    fn test_impacts_far_from_location_do_little_damage() {
        let profile = straight_profile();
        let step = TimeStep::new(0.0, 3600.0, 4.0, 1.5, 5.0, 0.0);
        let near = model(12.0, props(), &profile).calculate(0.0, &step, &profile).expect("near");
        let far = model(29.0, props(), &profile).calculate(0.0, &step, &profile).expect("far");
        assert!(far.increment_damage < near.increment_damage);
    }

    #[test]
    fn test_sub_layer_changes_stiffness() {
        let profile = straight_profile();
        let single = model(12.0, props(), &profile);
        let layered = model(
            12.0,
            AsphaltWaveImpactProperties {
                thickness_sub_layer: Some(0.1),
                elastic_modulus_sub_layer: Some(1000.0),
                ..props()
            },
            &profile,
        );
        assert!(layered.computed_thickness > single.computed_thickness);
        assert_eq!(layered.equivalent_elastic_modulus, 1000.0);
    }

    #[test]
    fn test_validation_messages() {
        let profile = straight_profile();
        let model = model(
            12.0,
            AsphaltWaveImpactProperties {
                stiffness_relation_nu: Some(0.6),
                width_factors: Some(vec![(0.5, 0.7)]),
                ..props()
            },
            &profile,
        );

        let issues = model.validate(&profile);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert_eq!(issues[0].message, "StiffnessRelationNu must be in range {0, 0.5}.");
        assert_eq!(
            issues[1].message,
            "The sum of the probabilities in WidthFactors must be equal to 1."
        );
    }
}
