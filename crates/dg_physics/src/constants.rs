// crates/dg_physics/src/constants.rs

//! 物理常数

/// 重力加速度 [m/s²]
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.81;

/// Rayleigh 分布中 2% 超越概率对应的 ln(0.02)
pub const LN_TWO_PERCENT: f64 = -3.912_023_005_428_146;

/// 退化曲线的参考时间系数（Tm10 的倍数）
pub const DEGRADATION_TIME_FACTOR: f64 = 1000.0;

/// 退化曲线指数
pub const DEGRADATION_EXPONENT: f64 = 0.1;
