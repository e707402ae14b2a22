// crates/dg_physics/src/functions/hydraulic_load.rs

//! 波浪水力参数

use std::f64::consts::PI;

/// 深水波陡 s0 = Hm0 / (g / 2π · Tm10²)
#[inline]
pub fn wave_steepness_deep_water(wave_height_hm0: f64, wave_period_tm10: f64, gravitational_acceleration: f64) -> f64 {
    wave_height_hm0 / (gravitational_acceleration / (2.0 * PI) * wave_period_tm10.powi(2))
}

/// 破波相似参数 ξ = tanα / √(2π · Hm0 / (g · Tm10²))
#[inline]
pub fn surf_similarity_parameter(
    outer_slope: f64,
    wave_height_hm0: f64,
    wave_period_tm10: f64,
    gravitational_acceleration: f64,
) -> f64 {
    outer_slope
        / (2.0 * PI * wave_height_hm0 / (gravitational_acceleration * wave_period_tm10.powi(2))).sqrt()
}

/// 坡度角 α = atan(tanα) [rad]
#[inline]
pub fn slope_angle(outer_slope: f64) -> f64 {
    outer_slope.atan()
}
