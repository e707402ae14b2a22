// crates/dg_physics/src/functions/asphalt.rs

//! 沥青波浪冲击函数
//!
//! 面层按弹性地基梁处理。单次冲击 (宽度 w、深度 d、冲击系数 i) 在位置处产生的弯曲应力
//! 通过 Miner 准则换算为疲劳损伤，再按三张离散分布加权求和：
//!
//! ```text
//! ΔD = n · Σ_w p_w Σ_d p_d Σ_i p_i · 10^(-βf · max(0, log σb - log(C·|σ|))^αf)
//! ```

/// log10(σb)
#[inline]
pub fn log_failure_tension(failure_tension: f64) -> f64 {
    failure_tension.log10()
}

/// 等效厚度 [m]
///
/// 有下层时按刚度换算：h1·∛(E1/E2) + h2
pub fn computed_thickness_layers(
    thickness_upper_layer: f64,
    elastic_modulus_upper_layer: f64,
    sub_layer: Option<(f64, f64)>,
) -> f64 {
    match sub_layer {
        Some((thickness_sub_layer, elastic_modulus_sub_layer)) => {
            thickness_upper_layer * (elastic_modulus_upper_layer / elastic_modulus_sub_layer).cbrt()
                + thickness_sub_layer
        }
        None => thickness_upper_layer,
    }
}

/// 等效弹性模量 [MPa]
#[inline]
pub fn equivalent_elastic_modulus(elastic_modulus_upper_layer: f64, elastic_modulus_sub_layer: Option<f64>) -> f64 {
    elastic_modulus_sub_layer.unwrap_or(elastic_modulus_upper_layer)
}

/// 刚度关系 β = (3c(1 - ν²) / (E·h³))^(1/4) [1/m]
#[inline]
pub fn stiffness_relation(
    computed_thickness: f64,
    equivalent_elastic_modulus: f64,
    soil_elasticity: f64,
    stiffness_relation_nu: f64,
) -> f64 {
    (3.0 * soil_elasticity * (1.0 - stiffness_relation_nu.powi(2))
        / (equivalent_elastic_modulus * computed_thickness.powi(3)))
    .powf(0.25)
}

/// 最大峰值压力 g·ρ·Hm0 / 1e6 [MPa]
#[inline]
pub fn maximum_peak_stress(wave_height_hm0: f64, gravitational_acceleration: f64, density_of_water: f64) -> f64 {
    gravitational_acceleration * density_of_water * wave_height_hm0 / 1e6
}

/// 弯曲应力的空间分布系数
///
/// `relative_distance` 为位置到冲击中心的无量纲距离 β·|Δz|/sinα，
/// `relative_width` 为冲击半宽 β·w·Hm0/2。
pub fn spatial_distribution_bending_stress(relative_distance: f64, relative_width: f64) -> f64 {
    let damped = |a: f64| (-a).exp() * a.sin();

    if relative_distance < relative_width {
        damped(relative_width - relative_distance) + damped(relative_width + relative_distance)
    } else {
        damped(relative_distance - relative_width) - damped(relative_distance + relative_width)
    }
}

/// 弯曲应力 1.5·i·σmax·S / (β²·h²) [MPa]
#[inline]
pub fn bending_stress(
    impact_factor: f64,
    maximum_peak_stress: f64,
    spatial_distribution: f64,
    stiffness_relation: f64,
    computed_thickness: f64,
) -> f64 {
    1.5 * impact_factor * maximum_peak_stress * spatial_distribution
        / (stiffness_relation.powi(2) * computed_thickness.powi(2))
}

/// 单次冲击的疲劳损伤
///
/// 应力为零时不产生损伤。
pub fn fatigue(
    log_failure_tension: f64,
    bending_stress: f64,
    impact_number_c: f64,
    fatigue_alpha: f64,
    fatigue_beta: f64,
) -> f64 {
    let stress = (impact_number_c * bending_stress).abs();
    if stress == 0.0 {
        return 0.0;
    }
    let margin = (log_failure_tension - stress.log10()).max(0.0);
    10f64.powf(-fatigue_beta * margin.powf(fatigue_alpha))
}

/// 损伤增量计算输入
#[derive(Debug, Clone, Copy)]
pub struct IncrementDamageInput<'a> {
    /// 位置高程 [m]
    pub z: f64,
    /// 水位 [m]
    pub water_level: f64,
    /// 有效波高 Hm0 [m]
    pub wave_height_hm0: f64,
    /// 平均波数 n
    pub average_number_of_waves: f64,
    /// 外坡坡度 tanα
    pub outer_slope: f64,
    /// log10(σb)
    pub log_failure_tension: f64,
    /// 最大峰值压力 [MPa]
    pub maximum_peak_stress: f64,
    /// 刚度关系 β [1/m]
    pub stiffness_relation: f64,
    /// 等效厚度 [m]
    pub computed_thickness: f64,
    /// 冲击次数系数 C
    pub impact_number_c: f64,
    /// 疲劳参数 α
    pub fatigue_alpha: f64,
    /// 疲劳参数 β
    pub fatigue_beta: f64,
    /// 相对冲击宽度分布
    pub width_factors: &'a [(f64, f64)],
    /// 相对冲击深度分布
    pub depth_factors: &'a [(f64, f64)],
    /// 冲击系数分布
    pub impact_factors: &'a [(f64, f64)],
}

/// 损伤增量
pub fn increment_damage(input: &IncrementDamageInput<'_>) -> f64 {
    let sin_slope = input.outer_slope.atan().sin();
    let beta = input.stiffness_relation;

    let mut sum = 0.0;
    for &(width_factor, width_probability) in input.width_factors {
        let relative_width = beta * 0.5 * width_factor * input.wave_height_hm0;

        for &(depth_factor, depth_probability) in input.depth_factors {
            let z_impact = input.water_level + depth_factor * input.wave_height_hm0;
            let relative_distance = beta * (input.z - z_impact).abs() / sin_slope;
            let spatial = spatial_distribution_bending_stress(relative_distance, relative_width);

            let impact_sum: f64 = input
                .impact_factors
                .iter()
                .map(|&(impact_factor, impact_probability)| {
                    let stress = bending_stress(
                        impact_factor,
                        input.maximum_peak_stress,
                        spatial,
                        beta,
                        input.computed_thickness,
                    );
                    impact_probability
                        * fatigue(
                            input.log_failure_tension,
                            stress,
                            input.impact_number_c,
                            input.fatigue_alpha,
                            input.fatigue_beta,
                        )
                })
                .sum();

            sum += width_probability * depth_probability * impact_sum;
        }
    }

    input.average_number_of_waves * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITATIONAL_ACCELERATION as G;
    use crate::input::defaults::asphalt_wave_impact as d;

    #[test]
    fn test_computed_thickness() {
        assert_eq!(computed_thickness_layers(0.16, 18000.0, None), 0.16);
        let h = computed_thickness_layers(0.16, 8000.0, Some((0.1, 1000.0)));
        assert!((h - 0.42).abs() < 1e-12);
        assert_eq!(equivalent_elastic_modulus(8000.0, Some(1000.0)), 1000.0);
        assert_eq!(equivalent_elastic_modulus(8000.0, None), 8000.0);
    }

    #[test]
    fn test_maximum_peak_stress() {
        let sigma = maximum_peak_stress(1.0, G, 1025.0);
        assert!((sigma - 0.010_055_25).abs() < 1e-12);
    }

    #[test]
    fn test_spatial_distribution_symmetry() {
        // 冲击中心处两项相等
        let center = spatial_distribution_bending_stress(0.0, 0.5);
        assert!((center - 2.0 * (-0.5f64).exp() * 0.5f64.sin()).abs() < 1e-12);
        // 远离冲击时趋于零
        assert!(spatial_distribution_bending_stress(50.0, 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_fatigue_limits() {
        // 应力为零
        assert_eq!(fatigue(0.2, 0.0, 1.0, 0.4, 2.0), 0.0);
        // 应力达到破坏拉应力时单次冲击即破坏
        assert!((fatigue(0.2, 10f64.powf(0.2), 1.0, 0.4, 2.0) - 1.0).abs() < 1e-12);
        // 应力越小损伤越小
        assert!(fatigue(0.2, 0.1, 1.0, 0.4, 2.0) < fatigue(0.2, 0.5, 1.0, 0.4, 2.0));
    }

    #[test]
    fn test_increment_damage_scales_with_waves() {
        let thickness = 0.16;
        let beta = stiffness_relation(thickness, 18000.0, 56.0, d::STIFFNESS_RELATION_NU);
        let mut input = IncrementDamageInput {
            z: 1.0,
            water_level: 1.0,
            wave_height_hm0: 1.5,
            average_number_of_waves: 1000.0,
            outer_slope: 0.25,
            log_failure_tension: log_failure_tension(1.6),
            maximum_peak_stress: maximum_peak_stress(1.5, G, d::DENSITY_OF_WATER),
            stiffness_relation: beta,
            computed_thickness: thickness,
            impact_number_c: d::IMPACT_NUMBER_C,
            fatigue_alpha: 0.42,
            fatigue_beta: 4.4,
            width_factors: &d::WIDTH_FACTORS,
            depth_factors: &d::DEPTH_FACTORS,
            impact_factors: &d::IMPACT_FACTORS,
        };

        let single = increment_damage(&input);
        assert!(single > 0.0);

        input.average_number_of_waves = 2000.0;
        assert!((increment_damage(&input) - 2.0 * single).abs() < 1e-12 * single.max(1.0));
    }
}
