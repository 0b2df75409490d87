//! 顶点定义
//!
//! 顶点由整数编号唯一标识，携带不透明的负载和有序的出边集合

use crate::graph::edge::Edge;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一，不要求连续）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub i64);

impl VertexId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VertexId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for VertexId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点记录
///
/// 出边以目标顶点为键，保持插入顺序，保证枚举结果稳定。
#[derive(Debug, Clone)]
pub struct Vertex<V, E> {
    /// 顶点负载
    info: V,
    /// 出边（目标顶点 -> 边）
    outgoing: IndexMap<VertexId, Edge<E>>,
}

impl<V, E> Vertex<V, E> {
    /// 创建没有出边的顶点
    pub fn new(info: V) -> Self {
        Self {
            info,
            outgoing: IndexMap::new(),
        }
    }

    pub fn info(&self) -> &V {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut V {
        &mut self.info
    }

    pub fn into_info(self) -> V {
        self.info
    }

    /// 出边迭代器（插入顺序）
    pub fn outgoing(&self) -> impl Iterator<Item = &Edge<E>> {
        self.outgoing.values()
    }

    /// 出边数量
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_to(&self, to: VertexId) -> Option<&Edge<E>> {
        self.outgoing.get(&to)
    }

    pub fn edge_to_mut(&mut self, to: VertexId) -> Option<&mut Edge<E>> {
        self.outgoing.get_mut(&to)
    }

    pub fn has_edge_to(&self, to: VertexId) -> bool {
        self.outgoing.contains_key(&to)
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge<E>) {
        self.outgoing.insert(edge.dst(), edge);
    }

    /// 移除指向 `to` 的出边，其余出边保持原有顺序
    pub(crate) fn remove_edge_to(&mut self, to: VertexId) -> Option<Edge<E>> {
        self.outgoing.shift_remove(&to)
    }
}
