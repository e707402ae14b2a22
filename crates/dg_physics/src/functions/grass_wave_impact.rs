// crates/dg_physics/src/functions/grass_wave_impact.rs

//! 草皮波浪冲击函数
//!
//! 时间线 H(t) = A·e^(B·t) + C 描述草皮在冲击波高 H 下可承受的持续时间。

/// 最小冲击波高 A·e^(B·Temax) + C [m]
#[inline]
pub fn minimum_wave_height(agwi: f64, bgwi: f64, cgwi: f64, temax: f64) -> f64 {
    agwi * (bgwi * temax).exp() + cgwi
}

/// 最大冲击波高 A·e^(B·Temin) + C [m]
#[inline]
pub fn maximum_wave_height(agwi: f64, bgwi: f64, cgwi: f64, temin: f64) -> f64 {
    agwi * (bgwi * temin).exp() + cgwi
}

/// 波向影响系数
///
/// |β| ≤ 90° 时为 (1 - Qwa)·cos(β)^Nwa + Qwa，超过 90° 后在 Rwa 宽度内线性衰减到 0。
pub fn wave_angle_impact(wave_angle: f64, nwa: f64, qwa: f64, rwa: f64) -> f64 {
    let angle = wave_angle.abs();
    if angle <= 90.0 {
        (1.0 - qwa) * angle.to_radians().cos().powf(nwa) + qwa
    } else {
        qwa * ((90.0 + rwa - angle) / rwa).max(0.0)
    }
}

/// 冲击波高，限制在 [最小冲击波高, 最大冲击波高] 内
#[inline]
pub fn wave_height_impact(
    minimum_wave_height: f64,
    maximum_wave_height: f64,
    wave_angle_impact: f64,
    wave_height_hm0: f64,
) -> f64 {
    maximum_wave_height.min(minimum_wave_height.max(wave_angle_impact * wave_height_hm0))
}

/// 冲击波高对应的可承受时间 [s]
#[inline]
pub fn time_line(wave_height_impact: f64, agwi: f64, bgwi: f64, cgwi: f64) -> f64 {
    ((wave_height_impact - cgwi) / agwi).ln() / bgwi
}

/// 损伤增量 Δt / t_line
#[inline]
pub fn increment_damage(increment_time: f64, time_line: f64) -> f64 {
    increment_time / time_line
}

/// 荷载带上限 h - Aul·Hm0
#[inline]
pub fn upper_limit_loading(water_level: f64, wave_height_hm0: f64, aul: f64) -> f64 {
    water_level - aul * wave_height_hm0
}

/// 荷载带下限 h - All·Hm0
#[inline]
pub fn lower_limit_loading(water_level: f64, wave_height_hm0: f64, all: f64) -> f64 {
    water_level - all * wave_height_hm0
}
