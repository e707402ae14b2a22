// crates/dg_physics/src/profile.rs

//! 堤防剖面几何
//!
//! 剖面由按 x 升序、首尾相接的线段组成，另附一组特征点（外坡脚、外坡顶、
//! 外平台坡肩/坡脚、内坡顶、内坡脚）。构建后不可变。
//!
//! 插值在剖面水平范围之外返回 `f64::INFINITY`，这是约定的哨兵值而非错误：
//! 几何上退化的情形以数值形式向下游传播。
//!
//! # 示例
//!
//! ```
//! use dg_physics::profile::{ProfileGeometry, ProfilePoint, ProfileSegment};
//!
//! let profile = ProfileGeometry::new(
//!     vec![ProfileSegment::new(ProfilePoint::new(0.0, 0.0), ProfilePoint::new(30.0, 10.0), 1.0)],
//!     vec![],
//! ).unwrap();
//!
//! assert!((profile.interpolation_vertical_height(15.0) - 5.0).abs() < 1e-12);
//! assert!(profile.interpolation_vertical_height(31.0).is_infinite());
//! ```

use dg_foundation::float::{approx_eq, GEOMETRY_EPSILON};
use dg_foundation::{ensure, DgError, DgResult};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 剖面点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// 水平位置 [m]
    pub x: f64,
    /// 高程 [m]
    pub z: f64,
}

impl ProfilePoint {
    /// 创建剖面点
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    #[inline]
    fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }

    /// 两点坐标是否在容差内重合
    pub fn coincides_with(&self, other: &ProfilePoint) -> bool {
        approx_eq(self.x, other.x, GEOMETRY_EPSILON) && approx_eq(self.z, other.z, GEOMETRY_EPSILON)
    }
}

/// 剖面线段
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSegment {
    /// 下端点（x 较小）
    pub lower_point: ProfilePoint,
    /// 上端点（x 较大）
    pub upper_point: ProfilePoint,
    /// 糙率系数 γf
    pub roughness_coefficient: f64,
}

impl ProfileSegment {
    /// 创建线段
    pub const fn new(lower_point: ProfilePoint, upper_point: ProfilePoint, roughness_coefficient: f64) -> Self {
        Self {
            lower_point,
            upper_point,
            roughness_coefficient,
        }
    }

    /// 水平长度
    pub fn horizontal_length(&self) -> f64 {
        self.upper_point.x - self.lower_point.x
    }

    /// 坡度 tanα
    pub fn slope(&self) -> f64 {
        (self.upper_point.z - self.lower_point.z) / self.horizontal_length()
    }

    /// x 是否落在闭区间 `[lower.x, upper.x]` 内
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.lower_point.x - GEOMETRY_EPSILON && x <= self.upper_point.x + GEOMETRY_EPSILON
    }
}

/// 特征点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacteristicPointType {
    /// 外坡脚
    OuterToe,
    /// 外坡顶
    OuterCrest,
    /// 外平台坡肩（平台海侧边缘）
    CrestOuterBerm,
    /// 外平台坡脚（平台陆侧边缘）
    NotchOuterBerm,
    /// 内坡顶
    InnerCrest,
    /// 内坡脚
    InnerToe,
}

impl CharacteristicPointType {
    /// 类型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::OuterToe => "OuterToe",
            Self::OuterCrest => "OuterCrest",
            Self::CrestOuterBerm => "CrestOuterBerm",
            Self::NotchOuterBerm => "NotchOuterBerm",
            Self::InnerCrest => "InnerCrest",
            Self::InnerToe => "InnerToe",
        }
    }
}

impl fmt::Display for CharacteristicPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 特征点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicPoint {
    /// 类型
    pub point_type: CharacteristicPointType,
    /// 坐标
    pub point: ProfilePoint,
}

impl CharacteristicPoint {
    /// 创建特征点
    pub const fn new(point_type: CharacteristicPointType, x: f64, z: f64) -> Self {
        Self {
            point_type,
            point: ProfilePoint::new(x, z),
        }
    }
}

/// 剖面几何
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileGeometryData", into = "ProfileGeometryData")]
pub struct ProfileGeometry {
    points: Vec<ProfilePoint>,
    segments: Vec<ProfileSegment>,
    characteristic_points: Vec<CharacteristicPoint>,
}

/// 剖面的序列化形态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileGeometryData {
    /// 剖面线段
    pub segments: Vec<ProfileSegment>,
    /// 特征点
    #[serde(default)]
    pub characteristic_points: Vec<CharacteristicPoint>,
}

impl TryFrom<ProfileGeometryData> for ProfileGeometry {
    type Error = DgError;

    fn try_from(data: ProfileGeometryData) -> DgResult<Self> {
        Self::new(data.segments, data.characteristic_points)
    }
}

impl From<ProfileGeometry> for ProfileGeometryData {
    fn from(profile: ProfileGeometry) -> Self {
        Self {
            segments: profile.segments,
            characteristic_points: profile.characteristic_points,
        }
    }
}

impl ProfileGeometry {
    /// 从线段和特征点创建剖面
    ///
    /// # 错误
    ///
    /// - 线段列表为空
    /// - 线段未按 x 升序或相邻线段不首尾相接
    pub fn new(
        segments: Vec<ProfileSegment>,
        characteristic_points: Vec<CharacteristicPoint>,
    ) -> DgResult<Self> {
        ensure!(
            !segments.is_empty(),
            DgError::invalid_input("a profile requires at least one segment")
        );

        for (i, segment) in segments.iter().enumerate() {
            ensure!(
                segment.upper_point.x > segment.lower_point.x,
                DgError::invalid_input(format!(
                    "profile segment {} must have an upper point with larger x than its lower point",
                    i
                ))
            );
        }

        for (i, pair) in segments.windows(2).enumerate() {
            ensure!(
                pair[0].upper_point.coincides_with(&pair[1].lower_point),
                DgError::invalid_input(format!(
                    "profile segments {} and {} are not contiguous",
                    i,
                    i + 1
                ))
            );
        }

        let mut points = Vec::with_capacity(segments.len() + 1);
        points.push(segments[0].lower_point);
        points.extend(segments.iter().map(|s| s.upper_point));

        Ok(Self {
            points,
            segments,
            characteristic_points,
        })
    }

    /// 剖面点（按 x 升序）
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// 剖面线段（按 x 升序）
    pub fn segments(&self) -> &[ProfileSegment] {
        &self.segments
    }

    /// 全部特征点
    pub fn characteristic_points(&self) -> &[CharacteristicPoint] {
        &self.characteristic_points
    }

    /// 查找特征点
    pub fn characteristic_point(&self, point_type: CharacteristicPointType) -> Option<ProfilePoint> {
        self.characteristic_points
            .iter()
            .find(|cp| cp.point_type == point_type)
            .map(|cp| cp.point)
    }

    /// 剖面是否带外平台（坡肩与坡脚都存在）
    pub fn has_berm(&self) -> bool {
        self.characteristic_point(CharacteristicPointType::CrestOuterBerm).is_some()
            && self.characteristic_point(CharacteristicPointType::NotchOuterBerm).is_some()
    }

    /// 给定水平位置的高程
    ///
    /// 与剖面点重合时返回该点高程，否则在相邻两点间线性插值；
    /// 位于剖面范围之外时返回 `f64::INFINITY`。
    pub fn interpolation_vertical_height(&self, x: f64) -> f64 {
        for (i, point) in self.points.iter().enumerate() {
            if approx_eq(point.x, x, GEOMETRY_EPSILON) {
                return point.z;
            }
            if point.x > x {
                if i == 0 {
                    return f64::INFINITY;
                }
                let previous = self.points[i - 1];
                let t = (x - previous.x) / (point.x - previous.x);
                return previous.as_vec().lerp(point.as_vec(), t).y;
            }
        }
        f64::INFINITY
    }

    /// 给定高程的水平位置
    ///
    /// 按 x 升序取第一个包含该高程的相邻点对；高程不在剖面内时返回 `f64::INFINITY`。
    pub fn interpolation_horizontal_position(&self, z: f64) -> f64 {
        for (i, point) in self.points.iter().enumerate() {
            if approx_eq(point.z, z, GEOMETRY_EPSILON) {
                return point.x;
            }
            if i == 0 {
                continue;
            }
            let previous = self.points[i - 1];
            let (low, high) = if previous.z <= point.z {
                (previous.z, point.z)
            } else {
                (point.z, previous.z)
            };
            if z > low && z < high {
                let t = (z - previous.z) / (point.z - previous.z);
                return previous.as_vec().lerp(point.as_vec(), t).x;
            }
        }
        f64::INFINITY
    }

    /// 包含给定水平位置的线段
    ///
    /// x 与第一个剖面点重合或位于所有线段之外时返回 `None`。
    pub fn segment_at(&self, x: f64) -> Option<&ProfileSegment> {
        if approx_eq(self.points[0].x, x, GEOMETRY_EPSILON) {
            return None;
        }
        self.segments.iter().find(|segment| segment.contains_x(x))
    }
}
