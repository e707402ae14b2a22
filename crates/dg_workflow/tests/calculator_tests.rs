// crates/dg_workflow/tests/calculator_tests.rs

//! 计算器集成测试

use dg_physics::input::{
    CommonProperties, GrassOvertoppingProperties, GrassWaveImpactProperties, LocationProperties,
    NaturalStoneProperties, RevetmentProperties,
};
use dg_foundation::ValidationIssue;
use dg_physics::input::LocationCommon;
use dg_physics::{
    create_model, CalculationInput, CalculationResult, CharacteristicPoint,
    CharacteristicPointType, LocationInput, ProfileGeometry, ProfilePoint, ProfileSegment,
    RevetmentKind, RevetmentModel, TimeDependentOutput, TimeStep,
};
use dg_workflow::{CalculationState, Calculator, CalculatorConfig, EventType, LocationRunner};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn dike_profile() -> ProfileGeometry {
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
    .expect("profile")
}

fn natural_stone(x: f64) -> LocationInput {
    LocationProperties::new(
        CommonProperties::at(x),
        RevetmentProperties::NaturalStone(NaturalStoneProperties {
            relative_density: 1.65,
            thickness_top_layer: 0.3,
            ..Default::default()
        }),
    )
    .resolve()
}

fn grass_wave_impact(x: f64) -> LocationInput {
    LocationProperties::new(
        CommonProperties::at(x),
        RevetmentProperties::GrassWaveImpact(GrassWaveImpactProperties::default()),
    )
    .resolve()
}

fn grass_overtopping(x: f64) -> LocationInput {
    LocationProperties::new(
        CommonProperties::at(x),
        RevetmentProperties::GrassOvertopping(GrassOvertoppingProperties::default()),
    )
    .resolve()
}

fn storm() -> Vec<TimeStep> {
    [0.5, 0.75, 1.0, 1.25, 1.5, 1.75]
        .iter()
        .enumerate()
        .map(|(i, &hm0)| {
            let begin = i as f64 * 3600.0;
            TimeStep::new(begin, begin + 3600.0, 4.0, hm0, 5.0, 0.0)
        })
        .collect()
}

/// 包装真实模型，计算时按设定 panic 或放慢
struct WrappedModel {
    inner: Box<dyn RevetmentModel>,
    panic_message: Option<&'static str>,
    delay: Duration,
}

impl WrappedModel {
    fn panicking(location: &LocationInput, profile: &ProfileGeometry, message: &'static str) -> Self {
        Self {
            inner: create_model(location, profile),
            panic_message: Some(message),
            delay: Duration::ZERO,
        }
    }

    fn slow(location: &LocationInput, profile: &ProfileGeometry, delay: Duration) -> Self {
        Self {
            inner: create_model(location, profile),
            panic_message: None,
            delay,
        }
    }
}

impl RevetmentModel for WrappedModel {
    fn kind(&self) -> RevetmentKind {
        self.inner.kind()
    }

    fn common(&self) -> &LocationCommon {
        self.inner.common()
    }

    fn z(&self) -> f64 {
        self.inner.z()
    }

    fn calculate(
        &self,
        initial_damage: f64,
        time_step: &TimeStep,
        profile: &ProfileGeometry,
    ) -> CalculationResult<TimeDependentOutput> {
        if let Some(message) = self.panic_message {
            panic!("{}", message);
        }
        thread::sleep(self.delay);
        self.inner.calculate(initial_damage, time_step, profile)
    }

    fn validate(&self, profile: &ProfileGeometry) -> Vec<ValidationIssue> {
        self.inner.validate(profile)
    }
}

#[test]
fn test_successful_calculation_keeps_location_order() {
    let input = CalculationInput::new(
        dike_profile(),
        vec![natural_stone(6.0), grass_wave_impact(10.5), natural_stone(15.0)],
        storm(),
    );
    let calculator = Calculator::with_config(input, CalculatorConfig::default().with_num_threads(2))
        .expect("calculator");
    calculator.wait_for_completion();

    assert_eq!(calculator.calculation_state(), CalculationState::FinishedSuccessfully);
    assert!((calculator.progress() - 1.0).abs() < 1e-12);

    let result = calculator.result().expect("result");
    assert!(result.successful);
    assert!(result.events.is_empty());

    let output = result.output.expect("output");
    assert_eq!(output.location_outputs.len(), 3);
    let zs: Vec<f64> = output.location_outputs.iter().map(|o| o.z()).collect();
    assert!((zs[0] - 2.0).abs() < 1e-12);
    assert!((zs[1] - 3.5).abs() < 1e-12);
    assert!((zs[2] - 5.0).abs() < 1e-12);

    for location in &output.location_outputs {
        let damages = location.damages();
        assert_eq!(damages.len(), 6);
        assert!(damages.windows(2).all(|pair| pair[1] >= pair[0]));
    }
}

#[test]
fn test_natural_stone_failure_inside_failing_step() {
    let input = CalculationInput::new(dike_profile(), vec![natural_stone(6.0)], storm());
    let calculator = Calculator::new(input).expect("calculator");
    calculator.wait_for_completion();

    let output = calculator.result().and_then(|r| r.output).expect("output");
    let location = &output.location_outputs[0];

    let time_of_failure = location.time_of_failure().expect("failure");
    assert!(time_of_failure > 10_800.0 && time_of_failure <= 14_400.0);
    assert!(location.final_damage().expect("damage") > 1.0);
}

#[test]
fn test_grass_overtopping_failure_inside_failing_step() {
    let steps: Vec<TimeStep> = (0..6)
        .map(|i| {
            let begin = i as f64 * 3600.0;
            TimeStep::new(begin, begin + 3600.0, 8.5, 2.0, 6.0, 0.0)
        })
        .collect();
    let input = CalculationInput::new(dike_profile(), vec![grass_overtopping(40.0)], steps);
    let calculator = Calculator::new(input).expect("calculator");
    calculator.wait_for_completion();

    let output = calculator.result().and_then(|r| r.output).expect("output");
    let location = &output.location_outputs[0];
    let outputs = location.time_dependent_outputs();

    let failing = outputs
        .iter()
        .position(|o| o.time_of_failure.is_some())
        .expect("failing step");
    let time_of_failure = location.time_of_failure().expect("failure");
    let begin = failing as f64 * 3600.0;
    assert!(time_of_failure > begin && time_of_failure <= begin + 3600.0);
    assert!(location.final_damage().expect("damage") > 1.0);
}

#[test]
fn test_faulty_location_aborts_calculation() {
    // 缺少外坡顶的剖面，块石模型在计算时报错
    let profile = ProfileGeometry::new(
        vec![ProfileSegment::new(ProfilePoint::new(0.0, 0.0), ProfilePoint::new(30.0, 10.0), 1.0)],
        vec![CharacteristicPoint::new(CharacteristicPointType::OuterToe, 0.0, 0.0)],
    )
    .expect("profile");
    let input = CalculationInput::new(
        profile,
        vec![grass_wave_impact(10.5), natural_stone(6.0)],
        storm(),
    );

    let calculator = Calculator::new(input).expect("calculator");
    calculator.wait_for_completion();

    assert_eq!(calculator.calculation_state(), CalculationState::FinishedWithError);
    let result = calculator.result().expect("result");
    assert!(!result.successful);
    assert!(result.output.is_none());
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].event_type, EventType::Error);
    assert_eq!(
        result.events[0].message,
        "An unhandled error occurred while performing the calculation: \
         The profile is missing the characteristic point OuterCrest"
    );
}

#[test]
fn test_result_only_available_when_finished() {
    let input = CalculationInput::new(dike_profile(), vec![natural_stone(6.0)], storm());
    let calculator = Calculator::new(input).expect("calculator");

    // 状态只会前进，结果出现时状态必然已结束
    loop {
        if calculator.result().is_some() {
            assert!(calculator.calculation_state().is_finished());
            break;
        }
        std::thread::yield_now();
    }

    calculator.wait_for_completion();
    assert!(calculator.result().is_some());
}

#[test]
fn test_empty_input_finishes_successfully() {
    let input = CalculationInput::new(dike_profile(), vec![], vec![]);
    let calculator = Calculator::new(input).expect("calculator");
    calculator.wait_for_completion();

    let result = calculator.result().expect("result");
    assert!(result.successful);
    assert!(result.output.expect("output").location_outputs.is_empty());
    assert_eq!(calculator.progress(), 1.0);
}

#[test]
fn test_panicking_location_aborts_calculation() {
    let profile = dike_profile();
    let runners = vec![
        LocationRunner::new(&natural_stone(6.0), &profile),
        LocationRunner::from_model(Box::new(WrappedModel::panicking(
            &grass_wave_impact(10.5),
            &profile,
            "revetment model exploded",
        ))),
        LocationRunner::new(&natural_stone(15.0), &profile),
    ];

    let calculator = Calculator::with_runners(
        profile,
        storm(),
        runners,
        CalculatorConfig::default().with_num_threads(2),
    )
    .expect("calculator");
    calculator.wait_for_completion();

    assert_eq!(calculator.calculation_state(), CalculationState::FinishedWithError);
    let result = calculator.result().expect("result");
    assert!(!result.successful);
    assert!(result.output.is_none());
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].event_type, EventType::Error);
    assert_eq!(
        result.events[0].message,
        "An unhandled error occurred while performing the calculation: \
         Calculation panicked: revetment model exploded"
    );
}

#[test]
fn test_every_waiter_blocks_until_finished() {
    let profile = dike_profile();
    let runners = (0..4)
        .map(|_| {
            LocationRunner::from_model(Box::new(WrappedModel::slow(
                &grass_wave_impact(10.5),
                &profile,
                Duration::from_millis(20),
            )))
        })
        .collect();
    let calculator = Arc::new(
        Calculator::with_runners(
            profile,
            storm(),
            runners,
            CalculatorConfig::default().with_num_threads(1),
        )
        .expect("calculator"),
    );

    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let calculator = Arc::clone(&calculator);
            thread::spawn(move || {
                calculator.wait_for_completion();
                (calculator.calculation_state(), calculator.result().is_some())
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(50));
    calculator.wait_for_completion();
    assert_eq!(calculator.calculation_state(), CalculationState::FinishedSuccessfully);

    for waiter in waiters {
        let (state, has_result) = waiter.join().expect("waiter");
        assert_eq!(state, CalculationState::FinishedSuccessfully);
        assert!(has_result);
    }
}
