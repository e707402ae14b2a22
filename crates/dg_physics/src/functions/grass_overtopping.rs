// crates/dg_physics/src/functions/grass_overtopping.rs

//! 草皮越浪函数
//!
//! 越过堤顶的水舌沿堤顶与内坡下泄，前沿流速以超高 (堤高 - 水位) 折减爬高：
//!
//! ```text
//! u_k = Cwo · αA · √(g · max(0, R_k - (z_dike - h)))
//! ```

use crate::profile::ProfileSegment;

/// 水位低于堤高时受越浪荷载
#[inline]
pub fn loading_revetment(water_level: f64, dike_height: f64) -> bool {
    water_level < dike_height
}

/// 超高 z_dike - h [m]
#[inline]
pub fn freeboard(dike_height: f64, water_level: f64) -> f64 {
    dike_height - water_level
}

/// 加速系数：位于内坡顶以内（或无内坡顶）取堤顶值，否则取内坡值
#[inline]
pub fn acceleration_alpha_a(
    x: f64,
    inner_crest_x: Option<f64>,
    alpha_a_crest: f64,
    alpha_a_inner_slope: f64,
) -> f64 {
    match inner_crest_x {
        Some(inner_crest_x) if x > inner_crest_x => alpha_a_inner_slope,
        _ => alpha_a_crest,
    }
}

/// 前沿流速 [m/s]
#[inline]
pub fn front_velocity(
    wave_runup: f64,
    freeboard: f64,
    front_velocity_cwo: f64,
    acceleration_alpha_a: f64,
    gravitational_acceleration: f64,
) -> f64 {
    front_velocity_cwo
        * acceleration_alpha_a
        * (gravitational_acceleration * (wave_runup - freeboard).max(0.0)).sqrt()
}

/// 外坡平均坡度 (z_crest - z_toe) / (x_crest - x_toe)
#[inline]
pub fn outer_slope(outer_toe_x: f64, outer_toe_z: f64, outer_crest_x: f64, outer_crest_z: f64) -> f64 {
    (outer_crest_z - outer_toe_z) / (outer_crest_x - outer_toe_x)
}

/// 外坡在爬高带内的水平加权糙率
///
/// 取与高程带 `[h - 1.5·Hm0, h + 1.5·Hm0]` 相交的外坡线段，按水平投影长度加权；
/// 带内没有线段时退化为整个外坡的加权糙率。
pub fn representative_roughness(
    outer_slope_segments: &[ProfileSegment],
    water_level: f64,
    wave_height_hm0: f64,
) -> f64 {
    let band_low = water_level - 1.5 * wave_height_hm0;
    let band_high = water_level + 1.5 * wave_height_hm0;

    let in_band = outer_slope_segments.iter().filter(|segment| {
        let low = segment.lower_point.z.min(segment.upper_point.z);
        let high = segment.lower_point.z.max(segment.upper_point.z);
        high >= band_low && low <= band_high
    });

    weighted_roughness(in_band).unwrap_or_else(|| {
        weighted_roughness(outer_slope_segments.iter()).unwrap_or(1.0)
    })
}

fn weighted_roughness<'a>(segments: impl Iterator<Item = &'a ProfileSegment>) -> Option<f64> {
    let (weighted, length) = segments.fold((0.0, 0.0), |(weighted, length), segment| {
        let dx = segment.horizontal_length();
        (weighted + segment.roughness_coefficient * dx, length + dx)
    });
    (length > 0.0).then(|| weighted / length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITATIONAL_ACCELERATION as G;
    use crate::profile::ProfilePoint;

    fn segments() -> Vec<ProfileSegment> {
        vec![
            ProfileSegment::new(ProfilePoint::new(0.0, 0.0), ProfilePoint::new(10.0, 2.0), 0.6),
            ProfileSegment::new(ProfilePoint::new(10.0, 2.0), ProfilePoint::new(20.0, 6.0), 1.0),
            ProfileSegment::new(ProfilePoint::new(20.0, 6.0), ProfilePoint::new(30.0, 10.0), 0.8),
        ]
    }

    #[test]
    fn test_loading_and_freeboard() {
        assert!(loading_revetment(5.0, 6.0));
        assert!(!loading_revetment(6.0, 6.0));
        assert_eq!(freeboard(6.0, 5.0), 1.0);
    }

    #[test]
    fn test_acceleration_alpha_a() {
        assert_eq!(acceleration_alpha_a(5.0, Some(10.0), 1.0, 1.4), 1.0);
        assert_eq!(acceleration_alpha_a(10.0, Some(10.0), 1.0, 1.4), 1.0);
        assert_eq!(acceleration_alpha_a(12.0, Some(10.0), 1.0, 1.4), 1.4);
        assert_eq!(acceleration_alpha_a(12.0, None, 1.0, 1.4), 1.0);
    }

    #[test]
    fn test_front_velocity() {
        assert_eq!(front_velocity(0.5, 1.0, 1.45, 1.0, G), 0.0);
        let u = front_velocity(2.0, 1.0, 1.45, 1.4, G);
        assert!((u - 1.45 * 1.4 * G.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_representative_roughness_in_band() {
        // 带 [3.5, 6.5] 与第 2、3 段相交
        let gamma = representative_roughness(&segments(), 5.0, 1.0);
        assert!((gamma - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_representative_roughness_falls_back_to_whole_slope() {
        let gamma = representative_roughness(&segments(), 20.0, 1.0);
        assert!((gamma - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_outer_slope() {
        assert!((outer_slope(0.0, 0.0, 30.0, 10.0) - 1.0 / 3.0).abs() < 1e-12);
    }
}
