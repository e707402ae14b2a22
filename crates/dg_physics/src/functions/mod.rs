// crates/dg_physics/src/functions/mod.rs

//! 护面计算公式
//!
//! 纯函数，按护面类型分模块。模型层负责按时间步组合这些函数。
//!
//! - [`revetment`]: 损伤累积、破坏判定、退化曲线
//! - [`hydraulic_load`]: 破波相似参数与波陡
//! - [`natural_stone`]: 块石荷载带与外坡坡度
//! - [`grass`]: 草皮累积超载（爬高与越浪共用）
//! - [`grass_wave_impact`]: 草皮波浪冲击时间线
//! - [`grass_wave_runup`]: 爬高前沿流速
//! - [`grass_overtopping`]: 越浪前沿流速与代表糙率
//! - [`asphalt`]: 弹性地基梁弯曲应力与疲劳

pub mod asphalt;
pub mod grass;
pub mod grass_overtopping;
pub mod grass_wave_impact;
pub mod grass_wave_runup;
pub mod hydraulic_load;
pub mod natural_stone;
pub mod revetment;
