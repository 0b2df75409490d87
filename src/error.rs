//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    UnknownVertex(VertexId),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(VertexId),

    #[error("边不存在: {from} -> {to}")]
    UnknownEdge { from: VertexId, to: VertexId },

    #[error("边已存在: {from} -> {to}")]
    DuplicateEdge { from: VertexId, to: VertexId },

    #[error("无效的边权重: {from} -> {to} 的权重为 {weight}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("解析错误 (第 {line} 行): {message}")]
    Parse { line: usize, message: String },

    #[error("未知的行程度量: {0}")]
    UnknownTripMetric(String),

    #[error("地图不是强连通的")]
    Disconnected,

    #[error("无法从 {from} 到达 {to}")]
    Unreachable { from: VertexId, to: VertexId },

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("IO 错误: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
