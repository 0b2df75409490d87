//! 有向图数据结构
//!
//! 邻接表实现：每个顶点保存自己的出边。顶点按编号有序存放，
//! 出边按插入顺序存放，所有枚举结果都是确定的。

use super::edge::{Edge, EdgeKey};
use super::vertex::{Vertex, VertexId};
use crate::algorithm::{Connectivity, Dijkstra, ShortestPaths};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// 泛型有向图
///
/// `V` 是顶点负载，`E` 是边负载，二者对图都是不透明的。
/// `clone()` 产生完全独立的深拷贝；[`Digraph::take`] 转移全部存储并把原图留空。
#[derive(Debug, Clone)]
pub struct Digraph<V, E> {
    /// 顶点表（编号 -> 顶点记录）
    vertices: BTreeMap<VertexId, Vertex<V, E>>,
    /// 全图边数
    edge_count: usize,
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Digraph<V, E> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// 取走全部内容，原图变为合法的空图
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// 清空所有顶点和边
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, id: impl Into<VertexId>, info: V) -> Result<()> {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }

        self.vertices.insert(id, Vertex::new(info));
        tracing::trace!(vertex = %id, "vertex added");
        Ok(())
    }

    /// 删除顶点及其所有出边和入边，返回顶点负载
    pub fn remove_vertex(&mut self, id: impl Into<VertexId>) -> Result<V> {
        let id = id.into();
        let vertex = self.vertices.remove(&id).ok_or(Error::UnknownVertex(id))?;

        let mut removed = vertex.out_degree();
        for other in self.vertices.values_mut() {
            if other.remove_edge_to(id).is_some() {
                removed += 1;
            }
        }
        self.edge_count -= removed;

        tracing::trace!(vertex = %id, edges_removed = removed, "vertex removed");
        Ok(vertex.into_info())
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, id: impl Into<VertexId>) -> bool {
        self.vertices.contains_key(&id.into())
    }

    /// 获取顶点负载
    pub fn vertex_info(&self, id: impl Into<VertexId>) -> Result<&V> {
        self.vertex(id.into()).map(Vertex::info)
    }

    /// 获取顶点负载（可变）
    pub fn vertex_info_mut(&mut self, id: impl Into<VertexId>) -> Result<&mut V> {
        let id = id.into();
        self.vertices
            .get_mut(&id)
            .map(Vertex::info_mut)
            .ok_or(Error::UnknownVertex(id))
    }

    /// 所有顶点编号（升序）
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边
    pub fn add_edge(
        &mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
        info: E,
    ) -> Result<()> {
        let (from, to) = (from.into(), to.into());
        let target_known = self.vertices.contains_key(&to);
        let source = self
            .vertices
            .get_mut(&from)
            .ok_or(Error::UnknownVertex(from))?;
        if !target_known {
            return Err(Error::UnknownVertex(to));
        }
        if source.has_edge_to(to) {
            return Err(Error::DuplicateEdge { from, to });
        }

        source.insert_edge(Edge::new(from, to, info));
        self.edge_count += 1;
        tracing::trace!(%from, %to, "edge added");
        Ok(())
    }

    /// 删除边，返回边负载
    pub fn remove_edge(&mut self, from: impl Into<VertexId>, to: impl Into<VertexId>) -> Result<E> {
        let (from, to) = (from.into(), to.into());
        self.ensure_endpoints(from, to)?;

        let edge = self
            .vertices
            .get_mut(&from)
            .and_then(|v| v.remove_edge_to(to))
            .ok_or(Error::UnknownEdge { from, to })?;

        self.edge_count -= 1;
        tracing::trace!(%from, %to, "edge removed");
        Ok(edge.into_info())
    }

    /// 边是否存在
    pub fn contains_edge(&self, from: impl Into<VertexId>, to: impl Into<VertexId>) -> bool {
        let to = to.into();
        self.vertices
            .get(&from.into())
            .map_or(false, |v| v.has_edge_to(to))
    }

    /// 获取边负载
    pub fn edge_info(&self, from: impl Into<VertexId>, to: impl Into<VertexId>) -> Result<&E> {
        let (from, to) = (from.into(), to.into());
        self.ensure_endpoints(from, to)?;

        self.vertices
            .get(&from)
            .and_then(|v| v.edge_to(to))
            .map(Edge::info)
            .ok_or(Error::UnknownEdge { from, to })
    }

    /// 获取边负载（可变）
    pub fn edge_info_mut(
        &mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
    ) -> Result<&mut E> {
        let (from, to) = (from.into(), to.into());
        self.ensure_endpoints(from, to)?;

        self.vertices
            .get_mut(&from)
            .and_then(|v| v.edge_to_mut(to))
            .map(Edge::info_mut)
            .ok_or(Error::UnknownEdge { from, to })
    }

    /// 所有边：按起点升序分组，组内按插入顺序
    pub fn edges(&self) -> Vec<EdgeKey> {
        self.vertices
            .values()
            .flat_map(|v| v.outgoing().map(Edge::key))
            .collect()
    }

    /// 某个顶点的所有出边
    pub fn edges_from(&self, id: impl Into<VertexId>) -> Result<Vec<EdgeKey>> {
        let vertex = self.vertex(id.into())?;
        Ok(vertex.outgoing().map(Edge::key).collect())
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 获取某个顶点的出边数量
    pub fn edge_count_from(&self, id: impl Into<VertexId>) -> Result<usize> {
        self.vertex(id.into()).map(Vertex::out_degree)
    }

    // ==================== 算法 ====================

    /// 是否强连通（任意两点互相可达）
    pub fn is_strongly_connected(&self) -> bool {
        Connectivity::new(self).is_strongly_connected()
    }

    /// 以 `start` 为起点、`weight` 为边权的 Dijkstra 最短路径
    ///
    /// `weight` 必须是纯函数且返回非负值；出现负值或 NaN 时返回
    /// [`Error::InvalidWeight`]。
    pub fn find_shortest_paths<F>(
        &self,
        start: impl Into<VertexId>,
        weight: F,
    ) -> Result<ShortestPaths>
    where
        F: Fn(&E) -> f64,
    {
        Dijkstra::new(self, weight).run(start.into())
    }

    // ==================== 内部 ====================

    pub(crate) fn vertex(&self, id: VertexId) -> Result<&Vertex<V, E>> {
        self.vertices.get(&id).ok_or(Error::UnknownVertex(id))
    }

    pub(crate) fn vertex_entries(&self) -> impl Iterator<Item = (VertexId, &Vertex<V, E>)> {
        self.vertices.iter().map(|(&id, v)| (id, v))
    }

    fn ensure_endpoints(&self, from: VertexId, to: VertexId) -> Result<()> {
        for id in [from, to] {
            if !self.vertices.contains_key(&id) {
                return Err(Error::UnknownVertex(id));
            }
        }
        Ok(())
    }
}
