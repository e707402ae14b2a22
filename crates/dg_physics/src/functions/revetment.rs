// crates/dg_physics/src/functions/revetment.rs

//! 所有护面类型共用的时间步函数
//!
//! 损伤累积与破坏判定：
//! - 损伤 D = D₀ + ΔD
//! - 破坏条件 D₀ < N_f ≤ D
//! - 破坏时刻 t_f = t_begin + clamp(Δt_f, 0, Δt)

use crate::constants::{DEGRADATION_EXPONENT, DEGRADATION_TIME_FACTOR};
use dg_foundation::float::clamp_non_strict;

/// 时间步长 Δt = t_end - t_begin
#[inline]
pub fn increment_time(begin_time: f64, end_time: f64) -> f64 {
    end_time - begin_time
}

/// 时间步内的平均波数 n = Δt / (ctm · Tm10)
#[inline]
pub fn average_number_of_waves(increment_time: f64, wave_period_tm10: f64, ctm: f64) -> f64 {
    increment_time / (ctm * wave_period_tm10)
}

/// 时间步结束时的损伤
#[inline]
pub fn damage(increment_damage: f64, initial_damage: f64) -> f64 {
    initial_damage + increment_damage
}

/// 损伤是否在本时间步内首次达到破坏数
#[inline]
pub fn failure_revetment(damage: f64, initial_damage: f64, failure_number: f64) -> bool {
    initial_damage < failure_number && damage >= failure_number
}

/// 线性损伤增长下，从时间步开始到破坏的持续时间
pub fn duration_in_time_step_failure_linear(
    increment_time: f64,
    increment_damage: f64,
    failure_number: f64,
    initial_damage: f64,
) -> f64 {
    (failure_number - initial_damage) / increment_damage * increment_time
}

/// 破坏时刻，持续时间被限制在时间步内
pub fn time_of_failure(duration_in_time_step_failure: f64, begin_time: f64, end_time: f64) -> f64 {
    let increment = increment_time(begin_time, end_time);
    begin_time + clamp_non_strict(duration_in_time_step_failure, 0.0, increment)
}

/// 退化函数 (t / (1000 · Tm10))^0.1
#[inline]
pub fn degradation(reference_time: f64, wave_period_tm10: f64) -> f64 {
    (reference_time / (DEGRADATION_TIME_FACTOR * wave_period_tm10)).powf(DEGRADATION_EXPONENT)
}

/// 时间步内的退化增量
pub fn increment_degradation(
    reference_time_degradation: f64,
    increment_time: f64,
    wave_period_tm10: f64,
) -> f64 {
    degradation(reference_time_degradation + increment_time, wave_period_tm10)
        - degradation(reference_time_degradation, wave_period_tm10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_number_of_waves() {
        assert!((average_number_of_waves(3600.0, 4.0, 0.92) - 978.260_869_565_217_4).abs() < 1e-9);
    }

    #[test]
    fn test_failure_requires_crossing() {
        assert!(failure_revetment(1.2, 0.8, 1.0));
        assert!(failure_revetment(1.0, 0.8, 1.0));
        assert!(!failure_revetment(0.9, 0.8, 1.0));
        // 已破坏的位置不再重复判定
        assert!(!failure_revetment(1.5, 1.0, 1.0));
    }

    #[test]
    fn test_linear_failure_duration() {
        let duration = duration_in_time_step_failure_linear(3600.0, 0.5, 1.0, 0.8);
        assert!((duration - 1440.0).abs() < 1e-9);
        assert!((time_of_failure(duration, 7200.0, 10800.0) - 8640.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_of_failure_is_clamped() {
        assert_eq!(time_of_failure(-10.0, 100.0, 200.0), 100.0);
        assert_eq!(time_of_failure(500.0, 100.0, 200.0), 200.0);
    }

    #[test]
    fn test_degradation_increment() {
        let tm10 = 5.0;
        let d = degradation(5000.0, tm10);
        assert!((d - 1.0).abs() < 1e-12);

        let inc = increment_degradation(0.0, 5000.0, tm10);
        assert!((inc - 1.0).abs() < 1e-12);
        assert!(increment_degradation(5000.0, 3600.0, tm10) > 0.0);
    }
}
