//! 图核心模块
//!
//! 定义顶点、边和有向图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, EdgeKey};
pub use graph::Digraph;
pub use vertex::{Vertex, VertexId};
