//! Connectivity graph for a chunk: edge ports, placed components, and the
//! hub, joined by edges that path routing later realizes on the grid.
//!
//! Nodes live in a vector with an id index on the side, so every
//! iteration that feeds generation runs in insertion order. Hash-ordered
//! iteration anywhere in here would destroy output determinism.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

use waystone_core::bounds::Bounds;
use waystone_core::error::GenError;
use waystone_core::point::{manhattan, Point};
use waystone_core::zone::{Anchor, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Potential crossing into a neighbour chunk, on the chunk border.
    EdgePort,
    /// A placed component (building, shrine, ...).
    Component,
    /// The central plaza joining everything in a star.
    Hub,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    /// Primary position (center or port tile).
    pub position: Point,
    /// Connection points paths may meet this node at.
    pub anchors: Vec<Anchor>,
    /// Space occupied by the node.
    pub bounds: Bounds,
    /// Zone data when this node carries a project.
    pub zone: Option<Zone>,
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Manhattan distance between the node positions.
    pub weight: i32,
    /// Whether generation fails if this edge cannot be routed.
    pub required: bool,
    /// Realized path on the grid, filled during routing.
    pub path: Vec<Point>,
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown node {0:?}")]
    UnknownNode(String),
}

impl From<GraphError> for GenError {
    fn from(err: GraphError) -> Self {
        GenError::InvalidConfig(err.to_string())
    }
}

#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacent: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. A node with an existing id replaces the old one in
    /// place, keeping its insertion position.
    pub fn add_node(&mut self, node: Node) {
        match self.index.get(&node.id) {
            Some(&i) => {
                self.nodes[i] = node;
            }
            None => {
                self.index.insert(node.id.clone(), self.nodes.len());
                self.adjacent.entry(node.id.clone()).or_default();
                self.nodes.push(node);
            }
        }
    }

    /// Connect two existing nodes. The edge list and the adjacency map are
    /// updated together; there is no way to add one without the other.
    pub fn add_edge(&mut self, from: &str, to: &str, required: bool) -> Result<(), GraphError> {
        let from_node = self
            .node(from)
            .ok_or_else(|| GraphError::UnknownNode(from.to_string()))?;
        let to_node = self
            .node(to)
            .ok_or_else(|| GraphError::UnknownNode(to.to_string()))?;

        let weight = manhattan(from_node.position, to_node.position);
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            required,
            path: Vec::new(),
        });
        self.adjacent
            .get_mut(from)
            .expect("adjacency entry exists for every node")
            .push(to.to_string());
        self.adjacent
            .get_mut(to)
            .expect("adjacency entry exists for every node")
            .push(from.to_string());
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_mut(&mut self, i: usize) -> Option<&mut Edge> {
        self.edges.get_mut(i)
    }

    /// Whether every node is reachable from `start` over graph edges.
    pub fn is_connected(&self, start: &str) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        self.bfs(start).len() == self.nodes.len()
    }

    /// Node ids not reachable from `start`, in insertion order.
    pub fn find_unreachable(&self, start: &str) -> Vec<String> {
        let visited = self.bfs(start);
        self.nodes
            .iter()
            .filter(|n| !visited.contains(&n.id))
            .map(|n| n.id.clone())
            .collect()
    }

    fn bfs(&self, start: &str) -> HashSet<String> {
        let mut visited = HashSet::new();
        if self.node(start).is_none() {
            return visited;
        }
        let mut queue = VecDeque::from([start.to_string()]);
        visited.insert(start.to_string());
        while let Some(current) = queue.pop_front() {
            if let Some(adjacent) = self.adjacent.get(&current) {
                for neighbour in adjacent {
                    if visited.insert(neighbour.clone()) {
                        queue.push_back(neighbour.clone());
                    }
                }
            }
        }
        visited
    }

    /// Edge-port nodes, in insertion order.
    pub fn edge_ports(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::EdgePort)
            .collect()
    }

    /// Nodes carrying a project zone, in insertion order.
    pub fn project_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| {
                n.zone
                    .as_ref()
                    .is_some_and(|z| z.project_id.is_some())
            })
            .collect()
    }

    /// Minimum spanning tree via Kruskal with union-by-rank and path
    /// compression. Stable sort by weight, so equal-weight edges keep
    /// their insertion order. Not used by the default pipeline; available
    /// for generators wanting sparser path networks than the hub star.
    pub fn mst(&self) -> Vec<&Edge> {
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut rank: HashMap<&str, u32> = HashMap::new();
        for node in &self.nodes {
            parent.insert(&node.id, &node.id);
            rank.insert(&node.id, 0);
        }

        fn find<'a>(parent: &mut HashMap<&'a str, &'a str>, x: &'a str) -> &'a str {
            let p = parent[x];
            if p == x {
                return x;
            }
            let root = find(parent, p);
            parent.insert(x, root);
            root
        }

        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        order.sort_by_key(|&i| self.edges[i].weight);

        let mut mst = Vec::new();
        for i in order {
            let edge = &self.edges[i];
            let root_from = find(&mut parent, edge.from.as_str());
            let root_to = find(&mut parent, edge.to.as_str());
            if root_from == root_to {
                continue;
            }
            let (high, low) = if rank[root_from] < rank[root_to] {
                (root_to, root_from)
            } else {
                (root_from, root_to)
            };
            parent.insert(low, high);
            if rank[high] == rank[low] {
                *rank.get_mut(high).expect("rank entry exists") += 1;
            }
            mst.push(edge);
        }
        mst
    }
}
