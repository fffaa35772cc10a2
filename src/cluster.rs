//! Connected components of the mention graph, as ordered clusters.

use std::collections::{BTreeMap, HashMap, HashSet};

use coref_core::Mention;

use crate::graph::MentionGraph;

/// Cluster id → members sorted by mention order (text, start, document).
///
/// Ids run `0..len` in cluster order and carry no other meaning.
pub type Clusters = BTreeMap<usize, Vec<Mention>>;

/// Union-find with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of `i`'s set.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns false if already merged.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Extract clusters from `graph`.
///
/// With `include_singletons`, every mention of `original_mentions` that is
/// not a graph node becomes a cluster of its own, so each input mention
/// lands in exactly one cluster. Equal input mentions count once.
///
/// Members are sorted by [`Mention`]'s order and clusters are ordered by
/// comparing their sorted member lists, so the output depends only on the
/// content of the input.
pub fn extract(
    graph: &MentionGraph,
    original_mentions: &[Mention],
    include_singletons: bool,
) -> Clusters {
    let mut uf = UnionFind::new(graph.node_count());
    for (a, b) in graph.edges() {
        uf.union(a, b);
    }

    let mut components: HashMap<usize, Vec<Mention>> = HashMap::new();
    for (id, mention) in graph.nodes().iter().enumerate() {
        components
            .entry(uf.find(id))
            .or_default()
            .push(mention.clone());
    }
    let mut clusters: Vec<Vec<Mention>> = components.into_values().collect();

    if include_singletons {
        let mut seen: HashSet<&Mention> = HashSet::new();
        let isolated = original_mentions
            .iter()
            .filter(|m| !graph.contains(m) && seen.insert(*m))
            .map(|m| vec![m.clone()]);
        clusters.extend(isolated);
    }

    for members in &mut clusters {
        members.sort();
    }
    clusters.sort();

    clusters.into_iter().enumerate().collect()
}
