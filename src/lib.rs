//! RoadGraph - 泛型有向图与道路行程规划
//!
//! 核心是一个泛型有向图，支持：
//! - 顶点和边的增删，删除顶点时级联删除相关边
//! - 结构查询和强连通判定
//! - 按调用方提供的边权函数计算 Dijkstra 最短路径
//!
//! 在此之上提供道路地图读取、行程报告和命令行工具。

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;
pub mod types;

// 重导出常用类型
pub use algorithm::{Connectivity, Dijkstra, ShortestPaths};
pub use config::{OutputFormat, ReportConfig};
pub use error::{Error, Result};
pub use graph::{Digraph, Edge, EdgeKey, Vertex, VertexId};
pub use report::Itinerary;
pub use types::{RoadMap, RoadSegment, Trip, TripMetric};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
