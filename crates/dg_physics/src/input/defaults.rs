// crates/dg_physics/src/input/defaults.rs

//! 默认系数表
//!
//! 按面层类型组织的默认系数，仅在解析位置输入时使用。

/// 沥青波浪冲击默认值（水工沥青混凝土）
pub mod asphalt_wave_impact {
    /// 水密度 [kg/m³]
    pub const DENSITY_OF_WATER: f64 = 1025.0;
    /// 平均波数系数 ctm
    pub const AVERAGE_NUMBER_OF_WAVES_CTM: f64 = 1.0;
    /// 冲击次数系数 C
    pub const IMPACT_NUMBER_C: f64 = 1.0;
    /// 泊松比 ν
    pub const STIFFNESS_RELATION_NU: f64 = 0.35;

    /// 相对冲击宽度 (值, 概率)
    pub const WIDTH_FACTORS: [(f64, f64); 15] = [
        (0.1, 0.0392),
        (0.2, 0.0738),
        (0.3, 0.1002),
        (0.4, 0.1162),
        (0.5, 0.1213),
        (0.6, 0.1168),
        (0.7, 0.1051),
        (0.8, 0.0890),
        (0.9, 0.0712),
        (1.0, 0.0541),
        (1.1, 0.0391),
        (1.2, 0.0269),
        (1.3, 0.0216),
        (1.4, 0.0150),
        (1.5, 0.0105),
    ];

    /// 相对冲击深度 (值, 概率)，负值位于静水位以下
    pub const DEPTH_FACTORS: [(f64, f64); 13] = [
        (-1.0, 0.0244),
        (-0.875, 0.0544),
        (-0.75, 0.0938),
        (-0.625, 0.1407),
        (-0.5, 0.1801),
        (-0.375, 0.1632),
        (-0.25, 0.1426),
        (-0.125, 0.0994),
        (0.0, 0.0600),
        (0.125, 0.0244),
        (0.25, 0.0098),
        (0.375, 0.0043),
        (0.5, 0.0029),
    ];

    /// 冲击系数 (值, 概率)
    pub const IMPACT_FACTORS: [(f64, f64); 10] = [
        (2.0, 0.039),
        (2.4, 0.1),
        (2.8, 0.18),
        (3.2, 0.235),
        (3.6, 0.2),
        (4.0, 0.13),
        (4.4, 0.08),
        (4.8, 0.02),
        (5.2, 0.01),
        (5.6, 0.006),
    ];
}

/// 草皮通用默认值
pub mod grass {
    /// 临界累积超载 [m²/s²]
    pub const CRITICAL_CUMULATIVE_OVERLOAD: f64 = 7000.0;
    /// 闭合草皮临界前沿流速 [m/s]
    pub const CRITICAL_FRONT_VELOCITY_CLOSED_SOD: f64 = 6.6;
    /// 开放草皮临界前沿流速 [m/s]
    pub const CRITICAL_FRONT_VELOCITY_OPEN_SOD: f64 = 4.3;
    /// 荷载过渡增大系数 αM
    pub const INCREASED_LOAD_TRANSITION_ALPHA_M: f64 = 1.0;
    /// 强度过渡折减系数 αS
    pub const REDUCED_STRENGTH_TRANSITION_ALPHA_S: f64 = 1.0;
    /// 平均波数系数 ctm
    pub const AVERAGE_NUMBER_OF_WAVES_CTM: f64 = 0.92;
    /// Rayleigh 离散波数
    pub const FIXED_NUMBER_OF_WAVES: f64 = 10000.0;
    /// 爬高系数 Aru
    pub const REPRESENTATIVE_WAVE_RUNUP_2P_ARU: f64 = 1.65;
    /// 爬高系数 Bru
    pub const REPRESENTATIVE_WAVE_RUNUP_2P_BRU: f64 = 4.0;
    /// 爬高系数 Cru
    pub const REPRESENTATIVE_WAVE_RUNUP_2P_CRU: f64 = 1.5;
    /// 护面折减系数 γb
    pub const REPRESENTATIVE_WAVE_RUNUP_2P_GAMMAB: f64 = 1.0;
    /// 糙率折减系数 γf
    pub const REPRESENTATIVE_WAVE_RUNUP_2P_GAMMAF: f64 = 1.0;
}

/// 草皮波浪冲击默认值
pub mod grass_wave_impact {
    /// 闭合草皮时间线系数 A
    pub const TIME_LINE_AGWI_CLOSED_SOD: f64 = 0.8;
    /// 闭合草皮时间线系数 B
    pub const TIME_LINE_BGWI_CLOSED_SOD: f64 = -0.000_019_44;
    /// 闭合草皮时间线系数 C
    pub const TIME_LINE_CGWI_CLOSED_SOD: f64 = 0.25;
    /// 开放草皮时间线系数 A
    pub const TIME_LINE_AGWI_OPEN_SOD: f64 = 0.3;
    /// 开放草皮时间线系数 B
    pub const TIME_LINE_BGWI_OPEN_SOD: f64 = -0.000_009_722;
    /// 开放草皮时间线系数 C
    pub const TIME_LINE_CGWI_OPEN_SOD: f64 = 0.25;
    /// 最小波高对应的最大持续时间 [s]
    pub const MINIMUM_WAVE_HEIGHT_TEMAX: f64 = 3_600_000.0;
    /// 最大波高对应的最小持续时间 [s]
    pub const MAXIMUM_WAVE_HEIGHT_TEMIN: f64 = 3.6;
    /// 波向影响指数 Nwa
    pub const WAVE_ANGLE_IMPACT_NWA: f64 = 2.0 / 3.0;
    /// 波向影响下限 Qwa
    pub const WAVE_ANGLE_IMPACT_QWA: f64 = 0.35;
    /// 波向影响过渡宽度 Rwa [°]
    pub const WAVE_ANGLE_IMPACT_RWA: f64 = 10.0;
    /// 荷载上限系数 Aul
    pub const UPPER_LIMIT_LOADING_AUL: f64 = 0.0;
    /// 荷载下限系数 All
    pub const LOWER_LIMIT_LOADING_ALL: f64 = 0.5;
}

/// 草皮波浪爬高默认值
pub mod grass_wave_runup {
    /// 波向影响系数 Abeta
    pub const WAVE_ANGLE_IMPACT_ABETA: f64 = 0.0022;
    /// 波向影响最大角 [°]
    pub const WAVE_ANGLE_IMPACT_BETAMAX: f64 = 80.0;
    /// 前沿流速系数 Cu
    pub const FRONT_VELOCITY_CU: f64 = 1.1;
}

/// 草皮越浪默认值
pub mod grass_overtopping {
    /// 前沿流速系数 Cwo
    pub const FRONT_VELOCITY_CWO: f64 = 1.45;
    /// 堤顶加速系数 αA
    pub const ACCELERATION_ALPHA_A_CREST: f64 = 1.0;
    /// 内坡加速系数 αA
    pub const ACCELERATION_ALPHA_A_INNER_SLOPE: f64 = 1.4;
    /// 波向影响系数 Abeta
    pub const WAVE_ANGLE_IMPACT_ABETA: f64 = 0.0033;
    /// 波向影响最大角 [°]
    pub const WAVE_ANGLE_IMPACT_BETAMAX: f64 = 80.0;
}

/// 块石默认值（北欧石）
pub mod natural_stone {
    /// 卷破波系数 Ap
    pub const HYDRAULIC_LOAD_AP: f64 = 4.0;
    /// 卷破波系数 Bp
    pub const HYDRAULIC_LOAD_BP: f64 = 0.0;
    /// 卷破波系数 Cp
    pub const HYDRAULIC_LOAD_CP: f64 = 0.0;
    /// 卷破波指数 Np
    pub const HYDRAULIC_LOAD_NP: f64 = -0.9;
    /// 激破波系数 As
    pub const HYDRAULIC_LOAD_AS: f64 = 0.8;
    /// 激破波系数 Bs
    pub const HYDRAULIC_LOAD_BS: f64 = 0.0;
    /// 激破波系数 Cs
    pub const HYDRAULIC_LOAD_CS: f64 = 0.0;
    /// 激破波指数 Ns
    pub const HYDRAULIC_LOAD_NS: f64 = 0.6;
    /// 破波类型分界 Xib
    pub const HYDRAULIC_LOAD_XIB: f64 = 2.9;
    /// 坡段上缘系数 Aus
    pub const SLOPE_UPPER_LEVEL_AUS: f64 = 0.05;
    /// 坡段下缘系数 Als
    pub const SLOPE_LOWER_LEVEL_ALS: f64 = 1.5;
    /// 荷载上限系数 Aul
    pub const UPPER_LIMIT_LOADING_AUL: f64 = 0.1;
    /// 荷载上限系数 Bul
    pub const UPPER_LIMIT_LOADING_BUL: f64 = 0.6;
    /// 荷载上限系数 Cul
    pub const UPPER_LIMIT_LOADING_CUL: f64 = 4.0;
    /// 荷载下限系数 All
    pub const LOWER_LIMIT_LOADING_ALL: f64 = 0.1;
    /// 荷载下限系数 Bll
    pub const LOWER_LIMIT_LOADING_BLL: f64 = 0.2;
    /// 荷载下限系数 Cll
    pub const LOWER_LIMIT_LOADING_CLL: f64 = 4.0;
    /// 最大波面距离系数 Asmax
    pub const DISTANCE_MAXIMUM_WAVE_ELEVATION_ASMAX: f64 = 0.42;
    /// 最大波面距离系数 Bsmax
    pub const DISTANCE_MAXIMUM_WAVE_ELEVATION_BSMAX: f64 = 0.9;
    /// 冲击宽度系数 Awi
    pub const NORMATIVE_WIDTH_OF_WAVE_IMPACT_AWI: f64 = 0.96;
    /// 冲击宽度系数 Bwi
    pub const NORMATIVE_WIDTH_OF_WAVE_IMPACT_BWI: f64 = 0.11;
    /// 波向影响最大角 [°]
    pub const WAVE_ANGLE_IMPACT_BETAMAX: f64 = 78.0;
}

/// 位置通用默认值
pub mod location {
    /// 初始损伤
    pub const INITIAL_DAMAGE: f64 = 0.0;
    /// 破坏数
    pub const FAILURE_NUMBER: f64 = 1.0;
}
