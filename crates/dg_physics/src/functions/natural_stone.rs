// crates/dg_physics/src/functions/natural_stone.rs

//! 块石护面函数
//!
//! 水力荷载按破波类型分段：
//!
//! ```text
//! ξ ≤ ξb : H_load = Hm0 / (Ap·ξ^Np + Bp·ξ + Cp)
//! ξ > ξb : H_load = Hm0 / (As·ξ^Ns + Bs·ξ + Cs)
//! ```
//!
//! 退化曲线以参考退化 F 与参考时间 t_ref = 1000·Tm10·F^10 相互换算。

use crate::constants::DEGRADATION_TIME_FACTOR;
use crate::profile::ProfilePoint;

/// 水力荷载 [m]
#[inline]
pub fn hydraulic_load(surf_similarity_parameter: f64, wave_height_hm0: f64, a: f64, b: f64, c: f64, n: f64) -> f64 {
    wave_height_hm0
        / (a * surf_similarity_parameter.powf(n) + b * surf_similarity_parameter + c)
}

/// 抗力 Δ·D [m]
#[inline]
pub fn resistance(relative_density: f64, thickness_top_layer: f64) -> f64 {
    relative_density * thickness_top_layer
}

/// 波向影响系数 cos(min(|β|, βmax))^(2/3)
#[inline]
pub fn wave_angle_impact(wave_angle: f64, betamax: f64) -> f64 {
    wave_angle.abs().min(betamax).to_radians().cos().powf(2.0 / 3.0)
}

/// 由损伤反推的参考退化
#[inline]
pub fn reference_degradation(
    resistance: f64,
    hydraulic_load: f64,
    wave_angle_impact: f64,
    damage: f64,
) -> f64 {
    resistance / hydraulic_load * damage / wave_angle_impact
}

/// 参考退化对应的时间 [s]
#[inline]
pub fn reference_time_degradation(reference_degradation: f64, wave_period_tm10: f64) -> f64 {
    DEGRADATION_TIME_FACTOR * wave_period_tm10 * reference_degradation.powi(10)
}

/// 损伤增量
#[inline]
pub fn increment_damage(
    hydraulic_load: f64,
    resistance: f64,
    increment_degradation: f64,
    wave_angle_impact: f64,
) -> f64 {
    hydraulic_load / resistance * increment_degradation * wave_angle_impact
}

/// 坡段上缘高程 min(z_crest, max(h, z_toe + Aus·Hm0))
#[inline]
pub fn slope_upper_level(
    outer_toe_height: f64,
    outer_crest_height: f64,
    water_level: f64,
    wave_height_hm0: f64,
    aus: f64,
) -> f64 {
    outer_crest_height.min(water_level.max(outer_toe_height + aus * wave_height_hm0))
}

/// 坡段下缘高程 max(z_toe, z_upper - Als·Hm0)
#[inline]
pub fn slope_lower_level(outer_toe_height: f64, slope_upper_level: f64, wave_height_hm0: f64, als: f64) -> f64 {
    outer_toe_height.max(slope_upper_level - als * wave_height_hm0)
}

/// 最大波面距静水位的距离 [m]
#[inline]
pub fn distance_maximum_wave_elevation(
    wave_height_hm0: f64,
    wave_steepness_deep_water: f64,
    asmax: f64,
    bsmax: f64,
) -> f64 {
    wave_height_hm0 * (asmax / wave_steepness_deep_water.sqrt() - bsmax)
}

/// 冲击宽度 (Awi - Bwi·ξ)·Hm0 [m]
#[inline]
pub fn normative_width_of_wave_impact(
    surf_similarity_parameter: f64,
    wave_height_hm0: f64,
    awi: f64,
    bwi: f64,
) -> f64 {
    (awi - bwi * surf_similarity_parameter) * wave_height_hm0
}

/// 最大波浪荷载深度 [m]
#[inline]
pub fn depth_maximum_wave_load(
    distance_maximum_wave_elevation: f64,
    normative_width_of_wave_impact: f64,
    slope_angle: f64,
) -> f64 {
    distance_maximum_wave_elevation - 0.5 * normative_width_of_wave_impact * slope_angle.sin()
}

/// 荷载带上限
pub fn upper_limit_loading(
    depth_maximum_wave_load: f64,
    surf_similarity_parameter: f64,
    water_level: f64,
    wave_height_hm0: f64,
    a: f64,
    b: f64,
    c: f64,
) -> f64 {
    water_level - 2.0 * depth_maximum_wave_load
        + (depth_maximum_wave_load + a * wave_height_hm0)
            .max(b * wave_height_hm0 * surf_similarity_parameter.min(c))
}

/// 荷载带下限
pub fn lower_limit_loading(
    depth_maximum_wave_load: f64,
    surf_similarity_parameter: f64,
    water_level: f64,
    wave_height_hm0: f64,
    a: f64,
    b: f64,
    c: f64,
) -> f64 {
    water_level - 2.0 * depth_maximum_wave_load
        + (depth_maximum_wave_load - a * wave_height_hm0)
            .min(b * wave_height_hm0 * surf_similarity_parameter.min(c))
}

/// 位置高程是否落在荷载带内
#[inline]
pub fn loading_revetment(lower_limit_loading: f64, upper_limit_loading: f64, z: f64) -> bool {
    lower_limit_loading <= z && z <= upper_limit_loading
}

/// 外平台的两个特征点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterBerm {
    /// 平台海侧边缘
    pub crest: ProfilePoint,
    /// 平台陆侧边缘
    pub notch: ProfilePoint,
}

/// 外坡坡度计算输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterSlopeInput {
    /// 坡段下缘
    pub slope_lower: ProfilePoint,
    /// 坡段上缘
    pub slope_upper: ProfilePoint,
    /// 外坡脚
    pub outer_toe: ProfilePoint,
    /// 外坡顶
    pub outer_crest: ProfilePoint,
    /// 外平台
    pub berm: Option<OuterBerm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlopeBand {
    Lower,
    Berm,
    Upper,
}

fn slope_band(level: f64, berm: &OuterBerm) -> SlopeBand {
    if level < berm.crest.z {
        SlopeBand::Lower
    } else if level <= berm.notch.z {
        SlopeBand::Berm
    } else {
        SlopeBand::Upper
    }
}

fn single_slope(lower: ProfilePoint, upper: ProfilePoint) -> f64 {
    (upper.z - lower.z) / (upper.x - lower.x)
}

/// 外坡坡度 tanα
///
/// 无外平台时取坡段上下缘连线坡度。有外平台时坡段跨越平台的部分不计入水平距离：
/// - 下坡 → 平台：只取平台以下的下坡部分
/// - 平台 → 上坡：只取平台以上的上坡部分
/// - 下坡 → 上坡：扣除平台水平宽度
///
/// 坡段高程超出 [外坡脚, 外坡顶] 时返回 `f64::INFINITY`。
pub fn outer_slope(input: &OuterSlopeInput) -> f64 {
    let lower = input.slope_lower;
    let upper = input.slope_upper;

    if lower.z < input.outer_toe.z || upper.z > input.outer_crest.z {
        return f64::INFINITY;
    }

    let Some(berm) = input.berm else {
        return single_slope(lower, upper);
    };

    match (slope_band(lower.z, &berm), slope_band(upper.z, &berm)) {
        (SlopeBand::Lower, SlopeBand::Berm) => single_slope(lower, berm.crest),
        (SlopeBand::Berm, SlopeBand::Upper) => single_slope(berm.notch, upper),
        (SlopeBand::Lower, SlopeBand::Upper) => {
            let berm_width = berm.notch.x - berm.crest.x;
            let berm_rise = berm.notch.z - berm.crest.z;
            (upper.z - lower.z - berm_rise) / (upper.x - lower.x - berm_width)
        }
        _ => single_slope(lower, upper),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistance() {
        assert!((resistance(1.65, 0.3) - 0.495).abs() < 1e-14);
    }

    #[test]
    fn test_hydraulic_load_plunging() {
        // Ap = 4, Np = -0.9, ξ = 1 → Hm0 / 4
        let load = hydraulic_load(1.0, 2.0, 4.0, 0.0, 0.0, -0.9);
        assert!((load - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wave_angle_impact() {
        assert!((wave_angle_impact(0.0, 78.0) - 1.0).abs() < 1e-12);
        let capped = wave_angle_impact(85.0, 78.0);
        assert!((capped - wave_angle_impact(-78.0, 78.0)).abs() < 1e-12);
        assert!(capped < 1.0);
    }

    #[test]
    fn test_reference_degradation_roundtrip_with_increment() {
        let (load, res, angle) = (0.4, 0.495, 1.0);
        let f = reference_degradation(res, load, angle, 0.3);
        assert!((increment_damage(load, res, f, angle) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_slope_levels() {
        let upper = slope_upper_level(0.0, 10.0, 4.0, 1.5, 0.05);
        assert_eq!(upper, 4.0);
        assert_eq!(slope_lower_level(0.0, upper, 1.5, 1.5), 1.75);

        // 水位低于坡脚时以坡脚为基准
        let upper = slope_upper_level(2.0, 10.0, 1.0, 2.0, 0.05);
        assert!((upper - 2.1).abs() < 1e-12);
        assert_eq!(slope_lower_level(2.0, upper, 2.0, 1.5), 2.0);
    }

    #[test]
    fn test_loading_band() {
        assert!(loading_revetment(1.0, 3.0, 2.0));
        assert!(loading_revetment(1.0, 3.0, 3.0));
        assert!(!loading_revetment(1.0, 3.0, 3.5));
    }

    fn berm_input(lower: ProfilePoint, upper: ProfilePoint) -> OuterSlopeInput {
        OuterSlopeInput {
            slope_lower: lower,
            slope_upper: upper,
            outer_toe: ProfilePoint::new(0.0, 0.0),
            outer_crest: ProfilePoint::new(40.0, 10.5),
            berm: Some(OuterBerm {
                crest: ProfilePoint::new(15.0, 5.0),
                notch: ProfilePoint::new(25.0, 5.5),
            }),
        }
    }

    #[test]
    fn test_outer_slope_without_berm() {
        let input = OuterSlopeInput {
            slope_lower: ProfilePoint::new(3.0, 1.0),
            slope_upper: ProfilePoint::new(12.0, 4.0),
            outer_toe: ProfilePoint::new(0.0, 0.0),
            outer_crest: ProfilePoint::new(30.0, 10.0),
            berm: None,
        };
        assert!((outer_slope(&input) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_outer_slope_lower_to_berm() {
        let input = berm_input(ProfilePoint::new(6.0, 2.0), ProfilePoint::new(20.0, 5.25));
        assert!((outer_slope(&input) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_outer_slope_berm_to_upper() {
        let input = berm_input(ProfilePoint::new(20.0, 5.25), ProfilePoint::new(34.0, 8.5));
        assert!((outer_slope(&input) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_outer_slope_lower_to_upper_excludes_berm() {
        let input = berm_input(ProfilePoint::new(6.0, 2.0), ProfilePoint::new(34.0, 8.5));
        // (8.5 - 2.0 - 0.5) / (28 - 10)
        assert!((outer_slope(&input) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_outer_slope_on_berm() {
        let input = berm_input(ProfilePoint::new(16.0, 5.05), ProfilePoint::new(24.0, 5.45));
        assert!((outer_slope(&input) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_outer_slope_outside_profile_is_infinite() {
        let input = berm_input(ProfilePoint::new(-1.0, -0.5), ProfilePoint::new(20.0, 5.25));
        assert!(outer_slope(&input).is_infinite());
    }
}
