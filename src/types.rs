//! 道路地图领域类型
//!
//! 顶点负载是地点名称，边负载是路段（里程、限速）。

use crate::error::{Error, Result};
use crate::graph::{Digraph, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 道路地图：地点名称为顶点负载，路段为边负载
pub type RoadMap = Digraph<String, RoadSegment>;

/// 路段
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    /// 里程
    pub miles: f64,
    /// 限速（英里/小时）
    pub miles_per_hour: f64,
}

impl RoadSegment {
    pub fn new(miles: f64, miles_per_hour: f64) -> Self {
        Self {
            miles,
            miles_per_hour,
        }
    }

    /// 通过该路段所需秒数
    pub fn travel_seconds(&self) -> f64 {
        3600.0 * self.miles / self.miles_per_hour
    }
}

/// 行程度量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripMetric {
    /// 最短距离
    Distance,
    /// 最短驾驶时间
    Time,
}

impl TripMetric {
    /// 该度量下路段的权重
    pub fn weight(&self, segment: &RoadSegment) -> f64 {
        match self {
            TripMetric::Distance => segment.miles,
            TripMetric::Time => segment.travel_seconds(),
        }
    }
}

impl FromStr for TripMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D" | "DISTANCE" => Ok(TripMetric::Distance),
            "T" | "TIME" => Ok(TripMetric::Time),
            _ => Err(Error::UnknownTripMetric(s.to_string())),
        }
    }
}

impl fmt::Display for TripMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripMetric::Distance => write!(f, "distance"),
            TripMetric::Time => write!(f, "time"),
        }
    }
}

/// 行程请求
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub start: VertexId,
    pub end: VertexId,
    pub metric: TripMetric,
}

impl Trip {
    pub fn new(start: impl Into<VertexId>, end: impl Into<VertexId>, metric: TripMetric) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_seconds() {
        let segment = RoadSegment::new(30.0, 60.0);
        assert_eq!(segment.travel_seconds(), 1800.0);
        assert_eq!(TripMetric::Time.weight(&segment), 1800.0);
        assert_eq!(TripMetric::Distance.weight(&segment), 30.0);
    }

    #[test]
    fn test_metric_parse() {
        assert_eq!("D".parse::<TripMetric>().unwrap(), TripMetric::Distance);
        assert_eq!("t".parse::<TripMetric>().unwrap(), TripMetric::Time);
        assert_eq!(
            "X".parse::<TripMetric>().unwrap_err(),
            Error::UnknownTripMetric("X".to_string())
        );
    }
}
