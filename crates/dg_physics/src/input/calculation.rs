// crates/dg_physics/src/input/calculation.rs

//! 计算输入
//!
//! 一次计算的完整输入：剖面、位置列表、时间步列表。构建后只读。

use super::location::LocationInput;
use super::properties::LocationProperties;
use crate::profile::ProfileGeometry;
use crate::time_step::TimeStep;
use serde::{Deserialize, Serialize};

/// 计算输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CalculationInputData")]
pub struct CalculationInput {
    /// 剖面几何
    pub profile: ProfileGeometry,
    /// 位置（保持输入顺序）
    pub locations: Vec<LocationInput>,
    /// 时间步（保持输入顺序）
    pub time_steps: Vec<TimeStep>,
}

/// 计算输入的序列化形态
///
/// 位置以属性形式给出，可覆盖系数可省略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInputData {
    /// 剖面几何
    pub profile: ProfileGeometry,
    /// 位置属性
    #[serde(default)]
    pub locations: Vec<LocationProperties>,
    /// 时间步
    #[serde(default)]
    pub time_steps: Vec<TimeStep>,
}

impl From<CalculationInputData> for CalculationInput {
    fn from(data: CalculationInputData) -> Self {
        Self {
            profile: data.profile,
            locations: data
                .locations
                .into_iter()
                .map(LocationProperties::resolve)
                .collect(),
            time_steps: data.time_steps,
        }
    }
}

impl CalculationInput {
    /// 创建计算输入
    pub fn new(
        profile: ProfileGeometry,
        locations: Vec<LocationInput>,
        time_steps: Vec<TimeStep>,
    ) -> Self {
        Self {
            profile,
            locations,
            time_steps,
        }
    }

    /// 位置数
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// 时间步数
    pub fn time_step_count(&self) -> usize {
        self.time_steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::location::RevetmentKind;

    #[test]
    fn test_deserialize_calculation_input() {
        let json = r#"{
            "profile": {
                "segments": [
                    { "lower_point": { "x": 0.0, "z": 0.0 }, "upper_point": { "x": 30.0, "z": 10.0 }, "roughness_coefficient": 1.0 }
                ],
                "characteristic_points": [
                    { "point_type": "OuterToe", "point": { "x": 0.0, "z": 0.0 } },
                    { "point_type": "OuterCrest", "point": { "x": 30.0, "z": 10.0 } }
                ]
            },
            "locations": [
                { "x": 15.0, "revetment": "natural_stone", "relative_density": 1.65, "thickness_top_layer": 0.3 }
            ],
            "time_steps": [
                { "begin_time": 0.0, "end_time": 3600.0, "water_level": 4.0, "wave_height_hm0": 1.5, "wave_period_tm10": 5.0, "wave_angle": 0.0 }
            ]
        }"#;

        let input: CalculationInput = serde_json::from_str(json).expect("parse");
        assert_eq!(input.location_count(), 1);
        assert_eq!(input.time_step_count(), 1);
        assert_eq!(input.locations[0].kind(), RevetmentKind::NaturalStone);
        assert_eq!(input.locations[0].failure_number(), 1.0);
    }
}
