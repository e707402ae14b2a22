// crates/dg_physics/src/functions/grass_wave_runup.rs

//! 草皮波浪爬高（Rayleigh 离散）函数

/// 位置高程与水位之差 z - h [m]
#[inline]
pub fn vertical_distance_water_level_elevation(z: f64, water_level: f64) -> f64 {
    z - water_level
}

/// 位置高于水位时受爬高荷载
#[inline]
pub fn loading_revetment(vertical_distance_water_level_elevation: f64) -> bool {
    vertical_distance_water_level_elevation >= 0.0
}

/// 前沿流速 Cu·√(g·max(0, R - Δz)) [m/s]
#[inline]
pub fn front_velocity(
    wave_runup: f64,
    vertical_distance_water_level_elevation: f64,
    front_velocity_cu: f64,
    gravitational_acceleration: f64,
) -> f64 {
    front_velocity_cu
        * (gravitational_acceleration * (wave_runup - vertical_distance_water_level_elevation).max(0.0))
            .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITATIONAL_ACCELERATION as G;

    #[test]
    fn test_loading() {
        assert!(loading_revetment(vertical_distance_water_level_elevation(5.0, 4.0)));
        assert!(loading_revetment(vertical_distance_water_level_elevation(4.0, 4.0)));
        assert!(!loading_revetment(vertical_distance_water_level_elevation(3.0, 4.0)));
    }

    #[test]
    fn test_front_velocity() {
        assert_eq!(front_velocity(1.0, 2.0, 1.1, G), 0.0);
        let u = front_velocity(3.0, 1.0, 1.1, G);
        assert!((u - 1.1 * (2.0 * G).sqrt()).abs() < 1e-12);
    }
}
