//! 强连通判定
//!
//! 从任意根顶点分别做一次正向 BFS 和一次反向 BFS，
//! 两个可达集都覆盖全部顶点时图才是强连通的。

use crate::error::Result;
use crate::graph::{Digraph, VertexId};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// 连通性检查器
pub struct Connectivity<'a, V, E> {
    graph: &'a Digraph<V, E>,
}

impl<'a, V, E> Connectivity<'a, V, E> {
    pub fn new(graph: &'a Digraph<V, E>) -> Self {
        Self { graph }
    }

    /// 是否强连通
    pub fn is_strongly_connected(&self) -> bool {
        let total = self.graph.vertex_count();
        if total <= 1 {
            return true;
        }

        let Some(root) = self.graph.vertices().first().copied() else {
            return true;
        };

        let forward = self.forward_adjacency();
        let forward_reached = bfs(root, &forward);
        if forward_reached.len() != total {
            tracing::debug!(
                %root,
                reached = forward_reached.len(),
                total,
                "not strongly connected (forward)"
            );
            return false;
        }

        let backward = self.reverse_adjacency();
        let backward_reached = bfs(root, &backward);
        let connected = backward_reached.len() == total;
        tracing::debug!(%root, connected, "strong connectivity checked");
        connected
    }

    /// 从 `start` 出发沿边方向可达的顶点（包含 `start` 自身）
    pub fn reachable_from(&self, start: VertexId) -> Result<BTreeSet<VertexId>> {
        self.graph.vertex(start)?;
        let forward = self.forward_adjacency();
        Ok(bfs(start, &forward).into_iter().collect())
    }

    /// 沿入边方向能到达 `target` 的顶点（包含 `target` 自身）
    pub fn reaching(&self, target: VertexId) -> Result<BTreeSet<VertexId>> {
        self.graph.vertex(target)?;
        let backward = self.reverse_adjacency();
        Ok(bfs(target, &backward).into_iter().collect())
    }

    fn forward_adjacency(&self) -> HashMap<VertexId, Vec<VertexId>> {
        self.graph
            .vertex_entries()
            .map(|(id, v)| (id, v.outgoing().map(|e| e.dst()).collect()))
            .collect()
    }

    /// 转置图的邻接表
    fn reverse_adjacency(&self) -> HashMap<VertexId, Vec<VertexId>> {
        let mut adj: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
        for (id, vertex) in self.graph.vertex_entries() {
            adj.entry(id).or_default();
            for key in vertex.outgoing().map(|e| e.key().reversed()) {
                adj.entry(key.from).or_default().push(key.to);
            }
        }
        adj
    }
}

fn bfs(start: VertexId, adj: &HashMap<VertexId, Vec<VertexId>>) -> HashSet<VertexId> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adj.get(&current) {
            for &next in neighbors {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    visited
}
