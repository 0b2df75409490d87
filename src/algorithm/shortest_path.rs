//! 单源最短路径
//!
//! Dijkstra 算法，边权由调用方传入的函数从边负载中提取，
//! 同一张图可以按距离、按时间等不同度量求最短路径。

use crate::error::{Error, Result};
use crate::graph::{Digraph, VertexId};
use priority_queue::PriorityQueue;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, HashSet};

/// 可排序的路径代价（按 `f64::total_cmp`）
#[derive(Debug, Clone, Copy)]
struct Cost(f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 队列优先级：代价越小越先出队，代价相同时编号小的先出队
type Priority = Reverse<(Cost, VertexId)>;

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    /// 起点
    start: VertexId,
    /// 前驱表：起点和不可达顶点映射到自身
    predecessors: BTreeMap<VertexId, VertexId>,
    /// 最终距离，不可达为无穷大
    distances: BTreeMap<VertexId, f64>,
}

impl ShortestPaths {
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// 前驱表
    pub fn predecessors(&self) -> &BTreeMap<VertexId, VertexId> {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> BTreeMap<VertexId, VertexId> {
        self.predecessors
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    /// 从起点到 `vertex` 的最短距离；不可达或顶点不存在时为 `None`
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances
            .get(&vertex)
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// 从起点到 `target` 的顶点序列（含两端）
    ///
    /// 沿前驱表从终点回溯到起点后反转。`target` 不可达时返回 `None`。
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.start {
            let prev = self.predecessor(current)?;
            if prev == current || path.len() > self.predecessors.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra 最短路径
pub struct Dijkstra<'a, V, E, F> {
    graph: &'a Digraph<V, E>,
    weight: F,
}

impl<'a, V, E, F> Dijkstra<'a, V, E, F>
where
    F: Fn(&E) -> f64,
{
    pub fn new(graph: &'a Digraph<V, E>, weight: F) -> Self {
        Self { graph, weight }
    }

    /// 计算从 `start` 到所有顶点的最短路径
    pub fn run(&self, start: VertexId) -> Result<ShortestPaths> {
        self.graph.vertex(start)?;

        let mut distances: BTreeMap<VertexId, f64> = BTreeMap::new();
        let mut predecessors: BTreeMap<VertexId, VertexId> = BTreeMap::new();
        for id in self.graph.vertices() {
            distances.insert(id, f64::INFINITY);
            predecessors.insert(id, id);
        }
        distances.insert(start, 0.0);

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut queue: PriorityQueue<VertexId, Priority> = PriorityQueue::new();
        queue.push(start, Reverse((Cost(0.0), start)));

        tracing::debug!(%start, vertices = distances.len(), "dijkstra started");

        while let Some((u, Reverse((Cost(dist_u), _)))) = queue.pop() {
            visited.insert(u);

            for edge in self.graph.vertex(u)?.outgoing() {
                let v = edge.dst();
                let w = (self.weight)(edge.info());
                if w.is_nan() || w < 0.0 {
                    return Err(Error::InvalidWeight {
                        from: u,
                        to: v,
                        weight: w,
                    });
                }
                if visited.contains(&v) {
                    continue;
                }

                let candidate = dist_u + w;
                let current = distances.get(&v).copied().unwrap_or(f64::INFINITY);
                if candidate < current {
                    distances.insert(v, candidate);
                    predecessors.insert(v, u);
                    queue.push_increase(v, Reverse((Cost(candidate), v)));
                }
            }
        }

        tracing::debug!(%start, reached = visited.len(), "dijkstra finished");

        Ok(ShortestPaths {
            start,
            predecessors,
            distances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn id(v: i64) -> VertexId {
        VertexId::new(v)
    }

    fn pred_map(pairs: &[(i64, i64)]) -> BTreeMap<VertexId, VertexId> {
        pairs.iter().map(|&(k, v)| (id(k), id(v))).collect()
    }

    fn weighted(vertices: &[i64], edges: &[(i64, i64, f64)]) -> Digraph<(), f64> {
        let mut graph = Digraph::new();
        for &v in vertices {
            graph.add_vertex(v, ()).unwrap();
        }
        for &(from, to, w) in edges {
            graph.add_edge(from, to, w).unwrap();
        }
        graph
    }

    #[test]
    fn test_indirect_path_beats_direct_edge() {
        let graph = weighted(&[1, 2, 3], &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);

        let result = graph.find_shortest_paths(1, |w| *w).unwrap();
        assert_eq!(result.predecessors(), &pred_map(&[(1, 1), (2, 1), (3, 2)]));
        assert_eq!(result.distance(id(3)), Some(2.0));
        assert_eq!(result.path_to(id(3)), Some(vec![id(1), id(2), id(3)]));
    }

    #[test]
    fn test_single_vertex() {
        let graph = weighted(&[7], &[]);
        let result = graph.find_shortest_paths(7, |w| *w).unwrap();

        assert_eq!(result.into_predecessors(), pred_map(&[(7, 7)]));
    }

    #[test]
    fn test_unreachable_vertex_maps_to_itself() {
        let graph = weighted(&[1, 2, 3], &[(1, 2, 4.0), (3, 1, 1.0)]);
        let result = graph.find_shortest_paths(1, |w| *w).unwrap();

        assert_eq!(result.predecessor(id(3)), Some(id(3)));
        assert!(!result.is_reachable(id(3)));
        assert_eq!(result.distance(id(3)), None);
        assert_eq!(result.path_to(id(3)), None);
        assert_eq!(result.path_to(id(1)), Some(vec![id(1)]));
    }

    #[test]
    fn test_unknown_start() {
        let graph = weighted(&[1], &[]);
        assert_eq!(
            graph.find_shortest_paths(2, |w| *w).unwrap_err(),
            Error::UnknownVertex(id(2))
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let graph = weighted(&[1, 2], &[(1, 2, 3.0)]);
        let err = graph.find_shortest_paths(1, |_| -1.0).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidWeight {
                from: id(1),
                to: id(2),
                weight: -1.0
            }
        );
    }

    #[test]
    fn test_negative_weight_into_settled_vertex_rejected() {
        // 2 -> 1 指向已确定的起点，仍然会被检查
        let graph = weighted(&[1, 2], &[(1, 2, 1.0), (2, 1, -1.0)]);
        let err = graph.find_shortest_paths(1, |w| *w).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidWeight {
                from: id(2),
                to: id(1),
                weight: -1.0
            }
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        let graph = weighted(&[1, 2], &[(1, 2, 3.0)]);
        let err = graph.find_shortest_paths(1, |_| f64::NAN).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { .. }));
    }

    #[test]
    fn test_metric_changes_route() {
        // (miles, mph)
        let mut graph: Digraph<(), (f64, f64)> = Digraph::new();
        for v in 0..3 {
            graph.add_vertex(v, ()).unwrap();
        }
        graph.add_edge(0, 2, (10.0, 10.0)).unwrap();
        graph.add_edge(0, 1, (8.0, 60.0)).unwrap();
        graph.add_edge(1, 2, (8.0, 60.0)).unwrap();

        let by_distance = graph.find_shortest_paths(0, |&(miles, _)| miles).unwrap();
        assert_eq!(by_distance.predecessor(id(2)), Some(id(0)));

        let by_time = graph
            .find_shortest_paths(0, |&(miles, mph)| miles / mph)
            .unwrap();
        assert_eq!(by_time.predecessor(id(2)), Some(id(1)));
    }

    #[test]
    fn test_ties_break_by_vertex_id() {
        // 到 4 的两条路径代价相同，编号较小的 2 先出队并先松弛
        let graph = weighted(
            &[1, 2, 3, 4],
            &[(1, 3, 1.0), (1, 2, 1.0), (3, 4, 1.0), (2, 4, 1.0)],
        );

        for _ in 0..5 {
            let result = graph.find_shortest_paths(1, |w| *w).unwrap();
            assert_eq!(result.predecessor(id(4)), Some(id(2)));
        }
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = weighted(&[1, 2, 3], &[(1, 2, 0.0), (2, 3, 0.0), (3, 1, 0.0)]);
        let result = graph.find_shortest_paths(1, |w| *w).unwrap();

        assert_eq!(result.predecessors(), &pred_map(&[(1, 1), (2, 1), (3, 2)]));
        assert_eq!(result.distance(id(3)), Some(0.0));
    }

    #[test]
    fn test_matches_bellman_ford() {
        let mut rng = StdRng::seed_from_u64(2019);

        for _ in 0..100 {
            let n = rng.gen_range(1..9usize);
            let vertices: Vec<i64> = (0..n as i64).collect();
            let mut edges = Vec::new();
            for from in 0..n as i64 {
                for to in 0..n as i64 {
                    if rng.gen_bool(0.35) {
                        edges.push((from, to, rng.gen_range(0..20) as f64));
                    }
                }
            }
            let graph = weighted(&vertices, &edges);
            let start = rng.gen_range(0..n as i64);

            let mut expected = vec![f64::INFINITY; n];
            expected[start as usize] = 0.0;
            for _ in 0..n {
                for &(from, to, w) in &edges {
                    let candidate = expected[from as usize] + w;
                    if candidate < expected[to as usize] {
                        expected[to as usize] = candidate;
                    }
                }
            }

            let result = graph.find_shortest_paths(start, |w| *w).unwrap();
            for v in 0..n as i64 {
                let want = expected[v as usize];
                assert_eq!(result.distance(id(v)), want.is_finite().then_some(want));

                let pred = result.predecessor(id(v)).unwrap();
                if v == start || !want.is_finite() {
                    assert_eq!(pred, id(v));
                } else {
                    // 前驱边必须落在某条最短路径上
                    let w = *graph.edge_info(pred, id(v)).unwrap();
                    assert_eq!(expected[pred.as_i64() as usize] + w, want);
                    let path = result.path_to(id(v)).unwrap();
                    assert_eq!(path.first(), Some(&id(start)));
                    assert_eq!(path.last(), Some(&id(v)));
                }
            }
        }
    }
}
