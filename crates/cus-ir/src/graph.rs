//! Wire dependencies between recorded instructions.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::wire::Wire;

/// Dependency graph over a circuit's program.
///
/// Node `i` is the `i`-th recorded instruction and carries its layer. An
/// edge `a -> b` labelled with a wire means `b` is the next instruction on
/// that wire after `a`. Instructions are only ever appended, so node
/// indices follow program order.
#[derive(Debug, Clone, Default)]
pub struct WireGraph {
    graph: DiGraph<usize, Wire, u32>,
    frontier: FxHashMap<Wire, NodeIndex<u32>>,
    depth: usize,
}

impl WireGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next instruction, touching `wires`, and return its layer.
    ///
    /// An instruction sits one layer above the deepest instruction it
    /// follows on any wire. With `occupies_layer` unset (barriers) it stays
    /// on that layer, so it orders wires without adding depth.
    pub fn push(&mut self, wires: &[Wire], occupies_layer: bool) -> usize {
        let below = wires
            .iter()
            .filter_map(|wire| self.frontier.get(wire))
            .map(|&node| self.graph[node])
            .max()
            .unwrap_or(0);
        let layer = below + usize::from(occupies_layer);

        let node = self.graph.add_node(layer);
        for &wire in wires {
            if let Some(prev) = self.frontier.insert(wire, node) {
                self.graph.add_edge(prev, node, wire);
            }
        }

        self.depth = self.depth.max(layer);
        layer
    }

    /// Number of layers in the longest wire path.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of recorded instructions.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layer of the instruction at `index`, if recorded.
    pub fn layer(&self, index: usize) -> Option<usize> {
        self.graph.node_weight(NodeIndex::new(index)).copied()
    }

    /// Program indices of the instructions that `index` directly follows,
    /// ascending.
    pub fn predecessors(&self, index: usize) -> Vec<usize> {
        let node = NodeIndex::new(index);
        if self.graph.node_weight(node).is_none() {
            return vec![];
        }

        let mut preds: Vec<usize> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .map(NodeIndex::index)
            .collect();
        preds.sort_unstable();
        preds.dedup();
        preds
    }
}
