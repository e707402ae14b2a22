// crates/dg_physics/src/input/mod.rs

//! 计算输入模型
//!
//! - [`parameter`]: 带来源标记的系数
//! - [`defaults`]: 按面层类型组织的默认系数表
//! - [`location`]: 已解析的位置输入（标签联合）
//! - [`properties`]: 序列化用的位置属性，可选系数在解析时填充
//! - [`calculation`]: 完整计算输入

pub mod calculation;
pub mod defaults;
pub mod location;
pub mod parameter;
pub mod properties;

pub use calculation::{CalculationInput, CalculationInputData};
pub use location::{
    AsphaltLayer, AsphaltTopLayerType, AsphaltWaveImpactLocation, FactorTable,
    GrassCumulativeOverloadCoefficients, GrassOvertoppingLocation, GrassTopLayerType,
    GrassWaveImpactLocation, GrassWaveRunupRayleighLocation, LoadingLimitCoefficients,
    LocationCommon, LocationInput, NaturalStoneHydraulicLoadCoefficients, NaturalStoneLocation,
    NaturalStoneTopLayerType, RevetmentKind,
};
pub use parameter::{Parameter, Provenance};
pub use properties::{
    AsphaltWaveImpactProperties, CommonProperties, GrassCumulativeOverloadProperties,
    GrassOvertoppingProperties, GrassWaveImpactProperties, GrassWaveRunupRayleighProperties,
    LocationProperties, NaturalStoneProperties, RevetmentProperties,
};
