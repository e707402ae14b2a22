// crates/dg_foundation/src/float.rs

//! 浮点数容差比较

/// 浮点数相等性比较的默认容差
pub const DEFAULT_EPSILON: f64 = 1e-14;

/// 剖面坐标比较容差 [m]
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// 绝对容差比较
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// 将值限制在 `[min, max]`，`min > max` 时返回 `min`
#[inline]
pub fn clamp_non_strict(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-15, DEFAULT_EPSILON));
        assert!(!approx_eq(1.0, 1.0001, GEOMETRY_EPSILON));
    }

    #[test]
    fn test_clamp_non_strict() {
        assert_eq!(clamp_non_strict(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp_non_strict(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp_non_strict(1.0, 2.0, 1.0), 2.0);
    }
}
