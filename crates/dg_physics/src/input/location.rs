// crates/dg_physics/src/input/location.rs

//! 已解析的位置输入
//!
//! `LocationInput` 是五种护面计算变体的标签联合。每个变体只携带自身的系数，
//! 通用字段（位置、初始损伤、破坏数）放在 [`LocationCommon`] 中。
//! 所有可覆盖系数都已解析为 [`Parameter`]，计算期间不再查默认表。

use super::parameter::Parameter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 位置通用字段
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationCommon {
    /// 水平位置 [m]
    pub x: f64,
    /// 初始损伤
    pub initial_damage: Parameter,
    /// 破坏数
    pub failure_number: Parameter,
}

/// 护面计算类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevetmentKind {
    /// 沥青波浪冲击
    AsphaltWaveImpact,
    /// 草皮波浪冲击
    GrassWaveImpact,
    /// 草皮越浪
    GrassOvertopping,
    /// 草皮波浪爬高（Rayleigh 离散）
    GrassWaveRunupRayleigh,
    /// 块石
    NaturalStone,
}

impl RevetmentKind {
    /// 类型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::AsphaltWaveImpact => "AsphaltWaveImpact",
            Self::GrassWaveImpact => "GrassWaveImpact",
            Self::GrassOvertopping => "GrassOvertopping",
            Self::GrassWaveRunupRayleigh => "GrassWaveRunupRayleigh",
            Self::NaturalStone => "NaturalStone",
        }
    }
}

impl fmt::Display for RevetmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================
// 面层类型
// ============================================================

/// 沥青面层类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AsphaltTopLayerType {
    /// 水工沥青混凝土
    #[default]
    HydraulicAsphaltConcrete,
}

/// 草皮面层类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrassTopLayerType {
    /// 闭合草皮
    #[default]
    ClosedSod,
    /// 开放草皮
    OpenSod,
}

/// 块石面层类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NaturalStoneTopLayerType {
    /// 北欧石
    #[default]
    NordicStone,
}

// ============================================================
// 沥青波浪冲击
// ============================================================

/// 沥青层
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsphaltLayer {
    /// 厚度 [m]
    pub thickness: f64,
    /// 弹性模量 [MPa]
    pub elastic_modulus: f64,
}

/// 离散分布表 (值, 概率)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    /// 表项
    pub entries: Vec<(f64, f64)>,
    /// 是否来自默认表
    pub is_default: bool,
}

impl FactorTable {
    /// 优先取用户表，否则取默认表
    pub fn resolve(supplied: Option<Vec<(f64, f64)>>, default: &[(f64, f64)]) -> Self {
        match supplied {
            Some(entries) => Self {
                entries,
                is_default: false,
            },
            None => Self {
                entries: default.to_vec(),
                is_default: true,
            },
        }
    }

    /// 概率之和
    pub fn probability_sum(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }
}

/// 沥青波浪冲击位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltWaveImpactLocation {
    /// 通用字段
    pub common: LocationCommon,
    /// 面层类型
    pub top_layer_type: AsphaltTopLayerType,
    /// 破坏拉应力 σb [MPa]
    pub failure_tension: f64,
    /// 地基弹性 c [MPa/m]
    pub soil_elasticity: f64,
    /// 上层
    pub upper_layer: AsphaltLayer,
    /// 可选下层
    pub sub_layer: Option<AsphaltLayer>,
    /// 外坡坡度 tanα
    pub outer_slope: f64,
    /// 疲劳参数 α
    pub fatigue_alpha: f64,
    /// 疲劳参数 β
    pub fatigue_beta: f64,
    /// 水密度 [kg/m³]
    pub density_of_water: Parameter,
    /// 平均波数系数 ctm
    pub average_number_of_waves_ctm: Parameter,
    /// 冲击次数系数 C
    pub impact_number_c: Parameter,
    /// 泊松比 ν
    pub stiffness_relation_nu: Parameter,
    /// 相对冲击宽度分布
    pub width_factors: FactorTable,
    /// 相对冲击深度分布
    pub depth_factors: FactorTable,
    /// 冲击系数分布
    pub impact_factors: FactorTable,
}

// ============================================================
// 草皮
// ============================================================

/// 草皮累积超载系数（爬高与越浪共用）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrassCumulativeOverloadCoefficients {
    /// 临界累积超载 [m²/s²]
    pub critical_cumulative_overload: Parameter,
    /// 临界前沿流速 [m/s]
    pub critical_front_velocity: Parameter,
    /// 荷载过渡增大系数 αM
    pub increased_load_transition_alpha_m: Parameter,
    /// 强度过渡折减系数 αS
    pub reduced_strength_transition_alpha_s: Parameter,
    /// 平均波数系数 ctm
    pub average_number_of_waves_ctm: Parameter,
    /// Rayleigh 离散波数
    pub fixed_number_of_waves: Parameter,
    /// 爬高系数 Aru
    pub representative_wave_runup_2p_aru: Parameter,
    /// 爬高系数 Bru
    pub representative_wave_runup_2p_bru: Parameter,
    /// 爬高系数 Cru
    pub representative_wave_runup_2p_cru: Parameter,
}

/// 草皮波浪冲击位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveImpactLocation {
    /// 通用字段
    pub common: LocationCommon,
    /// 面层类型
    pub top_layer_type: GrassTopLayerType,
    /// 时间线系数 A
    pub time_line_agwi: Parameter,
    /// 时间线系数 B
    pub time_line_bgwi: Parameter,
    /// 时间线系数 C
    pub time_line_cgwi: Parameter,
    /// 最小波高对应的最大持续时间 [s]
    pub minimum_wave_height_temax: Parameter,
    /// 最大波高对应的最小持续时间 [s]
    pub maximum_wave_height_temin: Parameter,
    /// 波向影响指数 Nwa
    pub wave_angle_impact_nwa: Parameter,
    /// 波向影响下限 Qwa
    pub wave_angle_impact_qwa: Parameter,
    /// 波向影响过渡宽度 Rwa [°]
    pub wave_angle_impact_rwa: Parameter,
    /// 荷载上限系数 Aul
    pub upper_limit_loading_aul: Parameter,
    /// 荷载下限系数 All
    pub lower_limit_loading_all: Parameter,
}

/// 草皮波浪爬高（Rayleigh 离散）位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassWaveRunupRayleighLocation {
    /// 通用字段
    pub common: LocationCommon,
    /// 面层类型
    pub top_layer_type: GrassTopLayerType,
    /// 外坡坡度 tanα
    pub outer_slope: f64,
    /// 累积超载系数
    pub overload: GrassCumulativeOverloadCoefficients,
    /// 护面折减系数 γb
    pub representative_wave_runup_2p_gammab: Parameter,
    /// 糙率折减系数 γf
    pub representative_wave_runup_2p_gammaf: Parameter,
    /// 波向影响系数 Abeta
    pub wave_angle_impact_abeta: Parameter,
    /// 波向影响最大角 [°]
    pub wave_angle_impact_betamax: Parameter,
    /// 前沿流速系数 Cu
    pub front_velocity_cu: Parameter,
}

/// 草皮越浪位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassOvertoppingLocation {
    /// 通用字段
    pub common: LocationCommon,
    /// 面层类型
    pub top_layer_type: GrassTopLayerType,
    /// 累积超载系数
    pub overload: GrassCumulativeOverloadCoefficients,
    /// 堤高 [m]，缺省取外坡顶高程
    pub dike_height: Option<f64>,
    /// 前沿流速系数 Cwo
    pub front_velocity_cwo: Parameter,
    /// 堤顶加速系数 αA
    pub acceleration_alpha_a_crest: Parameter,
    /// 内坡加速系数 αA
    pub acceleration_alpha_a_inner_slope: Parameter,
    /// 波向影响系数 Abeta
    pub wave_angle_impact_abeta: Parameter,
    /// 波向影响最大角 [°]
    pub wave_angle_impact_betamax: Parameter,
}

// ============================================================
// 块石
// ============================================================

/// 块石水力荷载系数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaturalStoneHydraulicLoadCoefficients {
    /// 卷破波 A
    pub ap: Parameter,
    /// 卷破波 B
    pub bp: Parameter,
    /// 卷破波 C
    pub cp: Parameter,
    /// 卷破波 N
    pub np: Parameter,
    /// 激破波 A
    pub a_s: Parameter,
    /// 激破波 B
    pub bs: Parameter,
    /// 激破波 C
    pub cs: Parameter,
    /// 激破波 N
    pub ns: Parameter,
    /// 破波类型分界 ξb
    pub xib: Parameter,
}

/// 荷载界限系数 (A, B, C)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingLimitCoefficients {
    /// A
    pub a: Parameter,
    /// B
    pub b: Parameter,
    /// C
    pub c: Parameter,
}

/// 块石位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalStoneLocation {
    /// 通用字段
    pub common: LocationCommon,
    /// 面层类型
    pub top_layer_type: NaturalStoneTopLayerType,
    /// 相对密度 Δ
    pub relative_density: f64,
    /// 面层厚度 D [m]
    pub thickness_top_layer: f64,
    /// 水力荷载系数
    pub hydraulic_loads: NaturalStoneHydraulicLoadCoefficients,
    /// 坡段上缘系数 Aus
    pub slope_upper_level_aus: Parameter,
    /// 坡段下缘系数 Als
    pub slope_lower_level_als: Parameter,
    /// 荷载上限系数
    pub upper_limit_loading: LoadingLimitCoefficients,
    /// 荷载下限系数
    pub lower_limit_loading: LoadingLimitCoefficients,
    /// 最大波面距离系数 Asmax
    pub distance_maximum_wave_elevation_asmax: Parameter,
    /// 最大波面距离系数 Bsmax
    pub distance_maximum_wave_elevation_bsmax: Parameter,
    /// 冲击宽度系数 Awi
    pub normative_width_of_wave_impact_awi: Parameter,
    /// 冲击宽度系数 Bwi
    pub normative_width_of_wave_impact_bwi: Parameter,
    /// 波向影响最大角 [°]
    pub wave_angle_impact_betamax: Parameter,
}

// ============================================================
// 标签联合
// ============================================================

/// 位置输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationInput {
    /// 沥青波浪冲击
    AsphaltWaveImpact(AsphaltWaveImpactLocation),
    /// 草皮波浪冲击
    GrassWaveImpact(GrassWaveImpactLocation),
    /// 草皮越浪
    GrassOvertopping(GrassOvertoppingLocation),
    /// 草皮波浪爬高
    GrassWaveRunupRayleigh(GrassWaveRunupRayleighLocation),
    /// 块石
    NaturalStone(NaturalStoneLocation),
}

impl LocationInput {
    /// 通用字段
    pub fn common(&self) -> &LocationCommon {
        match self {
            Self::AsphaltWaveImpact(l) => &l.common,
            Self::GrassWaveImpact(l) => &l.common,
            Self::GrassOvertopping(l) => &l.common,
            Self::GrassWaveRunupRayleigh(l) => &l.common,
            Self::NaturalStone(l) => &l.common,
        }
    }

    /// 计算类型
    pub fn kind(&self) -> RevetmentKind {
        match self {
            Self::AsphaltWaveImpact(_) => RevetmentKind::AsphaltWaveImpact,
            Self::GrassWaveImpact(_) => RevetmentKind::GrassWaveImpact,
            Self::GrassOvertopping(_) => RevetmentKind::GrassOvertopping,
            Self::GrassWaveRunupRayleigh(_) => RevetmentKind::GrassWaveRunupRayleigh,
            Self::NaturalStone(_) => RevetmentKind::NaturalStone,
        }
    }

    /// 水平位置 [m]
    pub fn x(&self) -> f64 {
        self.common().x
    }

    /// 初始损伤
    pub fn initial_damage(&self) -> f64 {
        self.common().initial_damage.get()
    }

    /// 破坏数
    pub fn failure_number(&self) -> f64 {
        self.common().failure_number.get()
    }
}
