//! Undirected mention graph.
//!
//! Nodes are mentions keyed by value, so equal mentions coming from
//! different places collapse into one node. Edges are unordered,
//! unweighted and deduplicated; the graph only answers connectivity.
//!
//! Only mentions that take part in at least one pair become nodes. Whether
//! an isolated mention still shows up as a cluster is decided by
//! [`crate::cluster::extract`].

use std::collections::{BTreeSet, HashMap, HashSet};

use coref_core::Mention;

/// Mention graph with dense node ids.
#[derive(Debug, Clone, Default)]
pub struct MentionGraph {
    nodes: Vec<Mention>,
    index: HashMap<Mention, usize>,
    edges: BTreeSet<(usize, usize)>,
}

impl MentionGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Node id of `mention`, inserting it if absent.
    pub fn add_node(&mut self, mention: &Mention) -> usize {
        if let Some(&id) = self.index.get(mention) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(mention.clone());
        self.index.insert(mention.clone(), id);
        id
    }

    /// Connect `a` and `b`, adding either endpoint if needed. A mention
    /// paired with itself becomes a node without an edge.
    pub fn add_edge(&mut self, a: &Mention, b: &Mention) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        if a != b {
            self.edges.insert((a.min(b), a.max(b)));
        }
    }

    /// True if `mention` is a node.
    pub fn contains(&self, mention: &Mention) -> bool {
        self.index.contains_key(mention)
    }

    /// All nodes, indexed by node id.
    pub fn nodes(&self) -> &[Mention] {
        &self.nodes
    }

    /// Edges as `(low id, high id)` pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build a graph from mention pairs.
///
/// `all_mentions` fixes node ids: mentions are numbered in their order
/// there, which keeps ids stable across runs. Mentions of `all_mentions`
/// that appear in no pair are not added.
pub fn build<'a, I>(all_mentions: &[Mention], pairs: I) -> MentionGraph
where
    I: IntoIterator<Item = (&'a Mention, &'a Mention)>,
{
    let pairs: Vec<(&Mention, &Mention)> = pairs.into_iter().collect();
    let paired: HashSet<&Mention> =
        pairs.iter().flat_map(|&(a, b)| [a, b]).collect();

    let mut graph = MentionGraph::new();
    for mention in all_mentions.iter().filter(|m| paired.contains(m)) {
        graph.add_node(mention);
    }
    for (a, b) in pairs {
        graph.add_edge(a, b);
    }
    log::debug!(
        "mention graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use coref_core::MentionClass;

    fn m(start: usize, text: &str) -> Mention {
        Mention::new(1, start, text, MentionClass::None)
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let (a, b) = (m(0, "a"), m(5, "b"));
        let mut g = MentionGraph::new();
        g.add_edge(&a, &b);
        g.add_edge(&b, &a);
        g.add_edge(&a.clone(), &b.clone());
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_self_pair_adds_node_only() {
        let a = m(0, "a");
        let mut g = MentionGraph::new();
        g.add_edge(&a, &a.clone());
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_build_skips_unpaired_mentions() {
        let all = vec![m(0, "x"), m(1, "a"), m(2, "b")];
        let g = build(&all, [(&all[2], &all[1])]);
        assert!(!g.contains(&all[0]));
        assert_eq!(g.nodes(), &all[1..]);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn test_build_accepts_endpoints_outside_universe() {
        let all = vec![m(0, "a")];
        let outsider = m(9, "z");
        let g = build(&all, [(&all[0], &outsider)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.nodes()[1], outsider);
    }
}
