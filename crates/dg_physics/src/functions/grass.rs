// crates/dg_physics/src/functions/grass.rs

//! 草皮累积超载
//!
//! 波浪爬高与越浪共用同一套累积超载方法：
//!
//! ```text
//! R_k  = R2% · √(ln(1 - k/(N+1)) / ln(0.02)),   k = 1..N
//! D_co = n/N · Σ max(0, αM · u_k² - αS · Uc²)
//! ΔD   = D_co / D_c
//! ```
//!
//! 前沿流速 u_k 的计算方式因变体而异，以闭包形式传入。

use crate::constants::LN_TWO_PERCENT;

/// 累积超载的通用输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeOverloadInput {
    /// 时间步内的平均波数 n
    pub average_number_of_waves: f64,
    /// 2% 超越爬高 R2% [m]
    pub representative_wave_runup_2p: f64,
    /// Rayleigh 离散波数 N
    pub fixed_number_of_waves: usize,
    /// 临界前沿流速 Uc [m/s]
    pub critical_front_velocity: f64,
    /// 荷载过渡增大系数 αM
    pub increased_load_transition_alpha_m: f64,
    /// 强度过渡折减系数 αS
    pub reduced_strength_transition_alpha_s: f64,
}

/// 第 k 个离散波的爬高
#[inline]
pub fn wave_runup(representative_wave_runup_2p: f64, wave_number: usize, fixed_number_of_waves: usize) -> f64 {
    let k = wave_number as f64;
    let n = fixed_number_of_waves as f64;
    representative_wave_runup_2p * ((1.0 - k / (n + 1.0)).ln() / LN_TWO_PERCENT).sqrt()
}

/// 累积超载 [m²/s²]
///
/// `front_velocity` 由离散波爬高计算前沿流速。
pub fn cumulative_overload<F>(input: &CumulativeOverloadInput, front_velocity: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = input.fixed_number_of_waves;
    if n == 0 {
        return 0.0;
    }

    let critical = input.reduced_strength_transition_alpha_s * input.critical_front_velocity.powi(2);
    let sum: f64 = (1..=n)
        .map(|k| {
            let runup = wave_runup(input.representative_wave_runup_2p, k, n);
            let velocity = front_velocity(runup);
            (input.increased_load_transition_alpha_m * velocity.powi(2) - critical).max(0.0)
        })
        .sum();

    input.average_number_of_waves / n as f64 * sum
}

/// 损伤增量 ΔD = D_co / D_c
#[inline]
pub fn increment_damage(cumulative_overload: f64, critical_cumulative_overload: f64) -> f64 {
    cumulative_overload / critical_cumulative_overload
}

/// 波向折减系数 γβ = 1 - Abeta · min(|β|, βmax)
#[inline]
pub fn wave_angle_impact(wave_angle: f64, abeta: f64, betamax: f64) -> f64 {
    1.0 - abeta * wave_angle.abs().min(betamax)
}

/// 2% 超越爬高
///
/// R2% = Hm0 · min(Aru · γb · γf · γβ · ξ, γf · γβ · (Bru - Cru / √ξ))
#[allow(clippy::too_many_arguments)]
pub fn representative_wave_runup_2p(
    surf_similarity_parameter: f64,
    wave_angle_impact: f64,
    wave_height_hm0: f64,
    gamma_b: f64,
    gamma_f: f64,
    aru: f64,
    bru: f64,
    cru: f64,
) -> f64 {
    let breaking = aru * gamma_b * gamma_f * wave_angle_impact * surf_similarity_parameter;
    let limit = gamma_f * wave_angle_impact * (bru - cru / surf_similarity_parameter.sqrt());
    wave_height_hm0 * breaking.min(limit)
}
