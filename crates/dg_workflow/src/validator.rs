// crates/dg_workflow/src/validator.rs

//! 输入验证器
//!
//! 依次执行通用检查、逐时间步水力荷载检查、逐位置检查（含护面类型自身的
//! 系数检查），收集全部问题后给出结论，不会提前中止。

use dg_foundation::validation::{Bound, ValidationIssue, ValidationOutcome, ValidationReport};
use dg_physics::time_step::are_contiguous;
use dg_physics::{
    create_model, CalculationInput, CharacteristicPointType, LocationInput, ProfileGeometry,
    RevetmentKind, TimeStep,
};
use serde::{Deserialize, Serialize};

/// 验证结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// 结论
    pub outcome: ValidationOutcome,
    /// 全部问题（按产生顺序）
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// 是否通过（无错误）
    pub fn is_successful(&self) -> bool {
        self.outcome == ValidationOutcome::Successful
    }
}

/// 输入验证器
pub struct Validator;

impl Validator {
    /// 验证计算输入
    pub fn validate(input: &CalculationInput) -> ValidationResult {
        let mut report = ValidationReport::new();

        Self::validate_generic(&mut report, input);
        for time_step in &input.time_steps {
            Self::validate_time_step(&mut report, time_step);
        }
        for location in &input.locations {
            Self::validate_location(&mut report, location, &input.profile);
        }

        let result = ValidationResult {
            outcome: report.outcome(),
            issues: report.into_issues(),
        };
        tracing::debug!(
            "Validation finished with {} issues ({:?})",
            result.issues.len(),
            result.outcome
        );
        result
    }

    fn validate_generic(report: &mut ValidationReport, input: &CalculationInput) {
        if input.time_steps.is_empty() {
            report.add_error("At least 1 time step must be defined.");
        }
        if input.locations.is_empty() {
            report.add_error("At least 1 location must be defined.");
        }
        if !are_contiguous(&input.time_steps) {
            report.add_error(
                "The begin time of a successive element must equal the end time of the previous element.",
            );
        }
    }

    fn validate_time_step(report: &mut ValidationReport, time_step: &TimeStep) {
        if time_step.begin_time >= time_step.end_time {
            report.add_error("BeginTime must be smaller than EndTime.");
        }

        if report.check_larger_than("WaveHeightHm0", time_step.wave_height_hm0, 0.0) {
            report.check_range_warning(
                "WaveHeightHm0",
                time_step.wave_height_hm0,
                Bound::Exclusive(0.1),
                Bound::Exclusive(10.0),
            );
        }

        if report.check_larger_than("WavePeriodTm10", time_step.wave_period_tm10, 0.0) {
            report.check_range_warning(
                "WavePeriodTm10",
                time_step.wave_period_tm10,
                Bound::Exclusive(0.5),
                Bound::Exclusive(25.0),
            );
        }

        report.check_range_error(
            "WaveAngle",
            time_step.wave_angle,
            Bound::Exclusive(-180.0),
            Bound::Inclusive(180.0),
        );
    }

    fn validate_location(
        report: &mut ValidationReport,
        location: &LocationInput,
        profile: &ProfileGeometry,
    ) {
        let outer_toe = profile.characteristic_point(CharacteristicPointType::OuterToe);
        let outer_crest = profile.characteristic_point(CharacteristicPointType::OuterCrest);

        if outer_toe.is_none() {
            report.add_error("The profile is missing the characteristic point OuterToe.");
        }
        if outer_crest.is_none() {
            report.add_error("The profile is missing the characteristic point OuterCrest.");
        }

        let x_range = match location.kind() {
            // 越浪位置位于堤顶或内坡
            RevetmentKind::GrassOvertopping => outer_crest.and_then(|crest| {
                profile
                    .points()
                    .last()
                    .map(|last| (crest.x, last.x))
            }),
            _ => outer_toe.zip(outer_crest).map(|(toe, crest)| (toe.x, crest.x)),
        };
        if let Some((lower, upper)) = x_range {
            report.check_range_error(
                "X",
                location.x(),
                Bound::Inclusive(lower),
                Bound::Inclusive(upper),
            );
        }

        report.check_larger_than_or_equal("InitialDamage", location.initial_damage(), 0.0);
        if location.failure_number() < location.initial_damage() {
            report.add_error("FailureNumber must be equal to InitialDamage or larger.");
        }

        let model = create_model(location, profile);
        report.extend(model.validate(profile));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_foundation::Severity;
    use dg_physics::{CharacteristicPoint, ProfilePoint, ProfileSegment};

    fn profile() -> ProfileGeometry {
        ProfileGeometry::new(
            vec![ProfileSegment::new(ProfilePoint::new(0.0, 0.0), ProfilePoint::new(30.0, 10.0), 1.0)],
            vec![
                CharacteristicPoint::new(CharacteristicPointType::OuterToe, 0.0, 0.0),
                CharacteristicPoint::new(CharacteristicPointType::OuterCrest, 30.0, 10.0),
            ],
        )
        .expect("profile")
    }

    #[test]
    fn test_time_step_checks() {
        let mut report = ValidationReport::new();
        Validator::validate_time_step(&mut report, &TimeStep::new(10.0, 10.0, 1.0, 0.0, 30.0, 180.0));

        let messages: Vec<_> = report.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "BeginTime must be smaller than EndTime.",
                "WaveHeightHm0 must be larger than 0.",
                "WavePeriodTm10 should be in range {0.5, 25}.",
            ]
        );
        assert_eq!(report.issues()[2].severity, Severity::Warning);
    }

    #[test]
    fn test_wave_angle_lower_bound_is_exclusive() {
        let mut report = ValidationReport::new();
        Validator::validate_time_step(&mut report, &TimeStep::new(0.0, 10.0, 1.0, 1.0, 5.0, -180.0));
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].message, "WaveAngle must be in range {-180, 180].");
    }

    #[test]
    fn test_generic_checks_on_empty_input() {
        let input = CalculationInput::new(profile(), vec![], vec![]);
        let result = Validator::validate(&input);

        assert!(!result.is_successful());
        let messages: Vec<_> = result.issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "At least 1 time step must be defined.",
                "At least 1 location must be defined.",
            ]
        );
    }
}
