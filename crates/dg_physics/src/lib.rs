// crates/dg_physics/src/lib.rs

//! 护面损伤物理模块
//!
//! 提供堤防护面在水力荷载时间序列下的损伤计算，包括：
//! - 剖面几何 (profile) - 线段、特征点与插值
//! - 时间步 (time_step) - 水位、波高、周期与波向
//! - 输入 (input) - 位置属性、默认系数与解析后的位置
//! - 公式 (functions) - 各护面类型的纯函数公式
//! - 模型 (models) - 按护面类型计算单个时间步
//! - 输出 (output) - 时间步输出与位置输出
//!
//! # Trait 抽象
//!
//! - [`RevetmentModel`]: 单个位置的逐时间步损伤计算接口
//!
//! # 计算约定
//!
//! 损伤是无量纲的累积量，当损伤达到位置的破坏数时发生破坏。时间步内的
//! 破坏时刻按损伤线性增长插值。

pub mod constants;
pub mod error;
pub mod functions;
pub mod input;
pub mod models;
pub mod output;
pub mod profile;
pub mod time_step;

// 重导出常用类型
pub use error::{CalculationError, CalculationResult};
pub use input::{CalculationInput, LocationInput, LocationProperties, RevetmentKind};
pub use models::{create_model, RevetmentModel};
pub use output::{
    CalculationOutput, LocationOutput, OutputDetails, TimeDependentOutput,
};
pub use profile::{
    CharacteristicPoint, CharacteristicPointType, ProfileGeometry, ProfilePoint, ProfileSegment,
};
pub use time_step::TimeStep;

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{CalculationError, CalculationResult};
    pub use crate::input::{CalculationInput, LocationInput, LocationProperties, RevetmentKind};
    pub use crate::models::{create_model, RevetmentModel};
    pub use crate::output::{CalculationOutput, LocationOutput, TimeDependentOutput};
    pub use crate::profile::{CharacteristicPointType, ProfileGeometry};
    pub use crate::time_step::TimeStep;
}
