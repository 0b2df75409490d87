//! 图算法模块
//!
//! 包含强连通判定和 Dijkstra 最短路径算法

mod connectivity;
mod shortest_path;

pub use connectivity::Connectivity;
pub use shortest_path::{Dijkstra, ShortestPaths};
