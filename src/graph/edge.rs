//! 边定义
//!
//! 有向边由 (起点, 终点) 有序对唯一标识

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边的键：(起点, 终点)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub from: VertexId,
    pub to: VertexId,
}

impl EdgeKey {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// 反向后的键
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl From<(VertexId, VertexId)> for EdgeKey {
    fn from((from, to): (VertexId, VertexId)) -> Self {
        Self { from, to }
    }
}

impl From<(i64, i64)> for EdgeKey {
    fn from((from, to): (i64, i64)) -> Self {
        Self::new(VertexId::new(from), VertexId::new(to))
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 边
#[derive(Debug, Clone)]
pub struct Edge<E> {
    /// 源顶点 ID
    src: VertexId,
    /// 目标顶点 ID
    dst: VertexId,
    /// 边负载
    info: E,
}

impl<E> Edge<E> {
    /// 创建新边
    pub fn new(src: VertexId, dst: VertexId, info: E) -> Self {
        Self { src, dst, info }
    }

    /// 获取源顶点 ID
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.src, self.dst)
    }

    pub fn info(&self) -> &E {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut E {
        &mut self.info
    }

    pub fn into_info(self) -> E {
        self.info
    }
}
