/*
 * Undirected DFS Forest (shared scaffolding for bridges and articulation
 * points)
 *
 * Pass 1 runs an iterative DFS over the deduplicated undirected adjacency
 * and records, per node:
 * - disc:   discovery time (-1 while unvisited)
 * - parent: discovery time of the tree parent (-1 for roots; the sentinel
 *           is inherent to the algorithm and deliberately not an Option)
 * - order:  node indices in discovery order
 *
 * Pass 2 walks the discovery order in reverse, so every child is finalized
 * before its parent, and folds low-links upward:
 * - tree child w  (parent[w] == disc[v]):  low[v] = min(low[v], low[w]);
 *   a bridge is exactly low[w] > disc[v]
 * - other neighbor w, excluding the edge back to the tree parent
 *   (disc[w] != parent[v]):  low[v] = min(low[v], disc[w])
 *
 * Self-loops are dropped and parallel edges deduplicated to one undirected
 * edge before pass 1; both would otherwise fake a cycle around the edge.
 */

use rustc_hash::{FxHashMap, FxHashSet};

use crate::shared::models::{GraphEdge, GraphNode};
use crate::shared::progress::ProgressTracker;

pub(super) struct UndirectedForest {
    /// Canonical node ids, node-list order
    pub ids: Vec<String>,

    /// Deduplicated undirected adjacency, edge-insertion order
    pub adjacency: Vec<Vec<usize>>,

    pub disc: Vec<i64>,
    pub low: Vec<i64>,

    /// Discovery time of the tree parent, -1 for roots
    pub parent: Vec<i64>,

    /// Node indices in discovery order
    pub order: Vec<usize>,
}

impl UndirectedForest {
    /// Pass 1: build the deduplicated undirected graph and its DFS forest
    pub fn build(nodes: &[GraphNode], edges: &[GraphEdge], progress: &mut ProgressTracker) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut ids: Vec<String> = Vec::new();
        for node in nodes {
            if !index.contains_key(node.id.as_str()) {
                index.insert(node.id.as_str(), ids.len());
                ids.push(node.id.clone());
            }
        }

        let node_count = ids.len();
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut seen_pairs: FxHashSet<(usize, usize)> = FxHashSet::default();
        for edge in edges {
            let (Some(&a), Some(&b)) = (
                index.get(edge.from.as_str()),
                index.get(edge.to.as_str()),
            ) else {
                continue;
            };
            if a == b {
                continue; // self-loops never separate anything
            }
            let key = (a.min(b), a.max(b));
            if seen_pairs.insert(key) {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }

        let mut disc: Vec<i64> = vec![-1; node_count];
        let mut parent: Vec<i64> = vec![-1; node_count];
        let mut order: Vec<usize> = Vec::new();
        let mut timer: i64 = 0;

        for root in 0..node_count {
            if disc[root] >= 0 {
                continue;
            }

            // Stack entries carry the would-be parent's discovery time;
            // the entry that pops a node first claims it for the tree.
            let mut stack: Vec<(usize, i64)> = vec![(root, -1)];
            while let Some((v, parent_disc)) = stack.pop() {
                progress.tick();
                if disc[v] >= 0 {
                    continue;
                }
                disc[v] = timer;
                parent[v] = parent_disc;
                timer += 1;
                order.push(v);

                for &w in &adjacency[v] {
                    if disc[w] < 0 {
                        stack.push((w, disc[v]));
                    }
                }
            }
        }

        let low = disc.clone();

        Self {
            ids,
            adjacency,
            disc,
            low,
            parent,
            order,
        }
    }

    /// Pass 2: fold low-links bottom-up; returns bridges in emission order
    pub fn fold_low_links(&mut self, progress: &mut ProgressTracker) -> Vec<(String, String)> {
        let mut bridges: Vec<(String, String)> = Vec::new();

        for &v in self.order.iter().rev() {
            progress.tick();
            for i in 0..self.adjacency[v].len() {
                let w = self.adjacency[v][i];
                if self.parent[w] == self.disc[v] {
                    self.low[v] = self.low[v].min(self.low[w]);
                    if self.low[w] > self.disc[v] {
                        bridges.push((self.ids[v].clone(), self.ids[w].clone()));
                    }
                } else if self.disc[w] != self.parent[v] {
                    self.low[v] = self.low[v].min(self.disc[w]);
                }
            }
        }

        bridges
    }

    /// Tree children of `v`: neighbors whose recorded parent is `v`'s
    /// discovery time
    pub fn tree_children(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[v]
            .iter()
            .copied()
            .filter(move |&w| self.parent[w] == self.disc[v])
    }

    pub fn is_root(&self, v: usize) -> bool {
        self.parent[v] == -1
    }
}
