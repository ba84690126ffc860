//! Generalized suffix tree of two strings, built online with Ukkonen's
//! algorithm over their concatenation.
//!
//! Nodes live in an arena and are addressed by index. Leaf edges do not
//! store their end: they are [`EdgeEnd::Open`] and read the tree's single
//! leaf end counter, so every leaf grows by one symbol per phase for free.
//!
//! Callers that want one leaf per suffix should terminate each string with
//! a unique symbol (e.g. `$` and `#`); otherwise suffixes that are prefixes
//! of other suffixes stay implicit.

use std::collections::BTreeMap;

/// Index of a node in the arena; the root is always `ROOT`
pub type NodeId = usize;

pub const ROOT: NodeId = 0;

/// Exclusive end of the edge entering a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeEnd {
    /// Leaf edge, ends at the shared leaf end
    Open,
    Fixed(usize),
}

#[derive(Debug, Clone)]
struct Node {
    /// Start of the incoming edge label in the text
    start: usize,
    end: EdgeEnd,
    suffix_link: NodeId,
    /// Ordered by first edge symbol
    children: BTreeMap<u8, NodeId>,
}

impl Node {
    fn new(start: usize, end: EdgeEnd) -> Self {
        Self {
            start,
            end,
            suffix_link: ROOT,
            children: BTreeMap::new(),
        }
    }
}

/// Which input string an edge label comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    First,
    Second,
}

impl Origin {
    /// `0` for the first string, `1` for the second
    pub fn index(self) -> usize {
        match self {
            Origin::First => 0,
            Origin::Second => 1,
        }
    }
}

/// One tree edge, reported in depth-first preorder.
///
/// `parent` is the preorder number of the parent node (root = 0). `start` and
/// `end` are local to the origin string: an edge starting inside the first
/// string is clamped to its end, otherwise indices are shifted past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Edge {
    pub parent: usize,
    pub origin: Origin,
    pub start: usize,
    pub end: usize,
}

/// Active point of the construction: the implicit position
/// `active_length` symbols down the `text[edge]` edge of `node`.
#[derive(Debug, Clone, Copy)]
struct ActivePoint {
    node: NodeId,
    edge: usize,
    length: usize,
}

/// Suffix tree of `first ++ second`
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixTree {
    text: Vec<u8>,
    first_len: usize,
    nodes: Vec<Node>,
    /// Exclusive end shared by all open leaf edges
    leaf_end: usize,
}

impl GeneralizedSuffixTree {
    /// Build the tree of `first ++ second`
    pub fn new(first: &[u8], second: &[u8]) -> Self {
        let mut text = Vec::with_capacity(first.len() + second.len());
        text.extend_from_slice(first);
        text.extend_from_slice(second);

        let mut builder = Ukkonen {
            text: &text,
            nodes: vec![Node::new(0, EdgeEnd::Fixed(0))],
            leaf_end: 0,
            active: ActivePoint {
                node: ROOT,
                edge: 0,
                length: 0,
            },
            remaining: 0,
            pending_link: None,
        };
        for pos in 0..text.len() {
            builder.extend(pos);
        }

        let nodes = builder.nodes;
        let leaf_end = builder.leaf_end;
        log::debug!(
            "suffix tree: {} nodes for {} + {} symbols",
            nodes.len(),
            first.len(),
            second.len()
        );

        Self {
            first_len: first.len(),
            text,
            nodes,
            leaf_end,
        }
    }

    /// The concatenated text
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes without children (the root never counts)
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .skip(1)
            .filter(|node| node.children.is_empty())
            .count()
    }

    fn end(&self, id: NodeId) -> usize {
        match self.nodes[id].end {
            EdgeEnd::Open => self.leaf_end,
            EdgeEnd::Fixed(end) => end,
        }
    }

    fn label(&self, id: NodeId) -> &[u8] {
        &self.text[self.nodes[id].start..self.end(id)]
    }

    /// Edges in depth-first preorder, children in symbol order
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut stack: Vec<(NodeId, Option<usize>)> = vec![(ROOT, None)];
        let mut preorder = 0;

        while let Some((id, parent)) = stack.pop() {
            if let Some(parent) = parent {
                edges.push(self.edge(id, parent));
            }

            let number = preorder;
            preorder += 1;
            stack.extend(
                self.nodes[id]
                    .children
                    .values()
                    .rev()
                    .map(|&child| (child, Some(number))),
            );
        }

        edges
    }

    fn edge(&self, id: NodeId, parent: usize) -> Edge {
        let start = self.nodes[id].start;
        let end = self.end(id);
        if start < self.first_len {
            Edge {
                parent,
                origin: Origin::First,
                start,
                end: end.min(self.first_len),
            }
        } else {
            Edge {
                parent,
                origin: Origin::Second,
                start: start - self.first_len,
                end: end - self.first_len,
            }
        }
    }

    /// Whether `pattern` is a substring of `first ++ second`
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut node = ROOT;
        let mut rest = pattern;

        while let Some(&symbol) = rest.first() {
            let Some(&child) = self.nodes[node].children.get(&symbol) else {
                return false;
            };
            let label = self.label(child);
            let shared = label.len().min(rest.len());
            if label[..shared] != rest[..shared] {
                return false;
            }
            rest = &rest[shared..];
            node = child;
        }

        true
    }
}

/// Construction state, dropped once the tree is complete
struct Ukkonen<'t> {
    text: &'t [u8],
    nodes: Vec<Node>,
    leaf_end: usize,
    active: ActivePoint,
    /// Suffixes of the current prefix not yet explicit in the tree
    remaining: usize,
    /// Internal node created in this phase still waiting for its suffix link
    pending_link: Option<NodeId>,
}

impl Ukkonen<'_> {
    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn edge_length(&self, id: NodeId) -> usize {
        if id == ROOT {
            return 0;
        }
        let end = match self.nodes[id].end {
            EdgeEnd::Open => self.leaf_end,
            EdgeEnd::Fixed(end) => end,
        };
        end - self.nodes[id].start
    }

    fn link_pending(&mut self, target: NodeId) {
        if let Some(pending) = self.pending_link.take() {
            self.nodes[pending].suffix_link = target;
        }
    }

    /// One phase: make every suffix of `text[..=pos]` present in the tree
    fn extend(&mut self, pos: usize) {
        self.leaf_end = pos + 1;
        self.remaining += 1;
        self.pending_link = None;

        while self.remaining > 0 {
            if self.active.length == 0 {
                self.active.edge = pos;
            }

            let edge_symbol = self.text[self.active.edge];
            let active_node = self.active.node;

            match self.nodes[active_node].children.get(&edge_symbol).copied() {
                None => {
                    let leaf = self.push(Node::new(pos, EdgeEnd::Open));
                    self.nodes[active_node].children.insert(edge_symbol, leaf);
                    self.link_pending(active_node);
                }
                Some(next) => {
                    // Skip/count: hop over whole edges shorter than the active length
                    let length = self.edge_length(next);
                    if self.active.length >= length {
                        self.active.edge += length;
                        self.active.length -= length;
                        self.active.node = next;
                        continue;
                    }

                    let start = self.nodes[next].start;
                    if self.text[start + self.active.length] == self.text[pos] {
                        // Already implicit; so is every shorter suffix
                        if active_node != ROOT {
                            self.link_pending(active_node);
                        }
                        self.active.length += 1;
                        break;
                    }

                    let split_at = start + self.active.length;
                    let split = self.push(Node::new(start, EdgeEnd::Fixed(split_at)));
                    self.nodes[active_node].children.insert(edge_symbol, split);

                    let leaf = self.push(Node::new(pos, EdgeEnd::Open));
                    self.nodes[split].children.insert(self.text[pos], leaf);

                    self.nodes[next].start = split_at;
                    self.nodes[split].children.insert(self.text[split_at], next);

                    self.link_pending(split);
                    self.pending_link = Some(split);
                }
            }

            self.remaining -= 1;
            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = pos + 1 - self.remaining;
            } else if self.active.node != ROOT {
                self.active.node = self.nodes[self.active.node].suffix_link;
            }
        }

        log::trace!(
            "phase {pos}: {} nodes, {} implicit suffixes",
            self.nodes.len(),
            self.remaining
        );
    }
}
