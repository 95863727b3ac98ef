/// Read-only classification hierarchy (taxonomy or a functional classification)
///
/// Nodes live in a petgraph arena and are addressed either by `NodeIndex` or by
/// their `ClassId`. Class ids are unique within a tree.
use corebiome_core::{BiomeError, BiomeResult, ClassId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TreeRecord", into = "TreeRecord")]
pub struct ClassificationTree {
    graph: DiGraph<ClassId, ()>,
    root: NodeIndex,
    index: HashMap<ClassId, NodeIndex>,
}

/// Flat serialized form: the root id plus `[parent, child]` edges
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TreeRecord {
    root: ClassId,
    #[serde(default)]
    edges: Vec<(ClassId, ClassId)>,
}

impl ClassificationTree {
    /// Tree consisting of a single root node
    pub fn new(root: ClassId) -> Self {
        let mut graph = DiGraph::new();
        let root_index = graph.add_node(root);
        let mut index = HashMap::new();
        index.insert(root, root_index);

        Self {
            graph,
            root: root_index,
            index,
        }
    }

    /// Build a tree from `(parent, child)` edges given in any order.
    ///
    /// Children keep the order in which their edges appear. Every node must be
    /// reachable from `root`.
    pub fn from_edges<I>(root: ClassId, edges: I) -> BiomeResult<Self>
    where
        I: IntoIterator<Item = (ClassId, ClassId)>,
    {
        let edges: Vec<(ClassId, ClassId)> = edges.into_iter().collect();

        let mut seen = HashSet::from([root]);
        let mut children_of: HashMap<ClassId, Vec<ClassId>> = HashMap::new();
        for &(parent, child) in &edges {
            if !seen.insert(child) {
                return Err(BiomeError::DuplicateClassId(child));
            }
            children_of.entry(parent).or_default().push(child);
        }

        let mut tree = Self::new(root);
        let mut queue = VecDeque::from([root]);
        while let Some(parent) = queue.pop_front() {
            if let Some(children) = children_of.get(&parent) {
                for &child in children {
                    tree.add_child(parent, child)?;
                    queue.push_back(child);
                }
            }
        }

        if let Some(&(parent, child)) = edges.iter().find(|(_, child)| !tree.contains(*child)) {
            return Err(BiomeError::DetachedNode { parent, child });
        }

        Ok(tree)
    }

    /// Append `child` as the last child of `parent`
    pub fn add_child(&mut self, parent: ClassId, child: ClassId) -> BiomeResult<NodeIndex> {
        let parent_index = self
            .node(parent)
            .ok_or(BiomeError::DetachedNode { parent, child })?;
        if self.index.contains_key(&child) {
            return Err(BiomeError::DuplicateClassId(child));
        }

        let child_index = self.graph.add_node(child);
        self.graph.add_edge(parent_index, child_index, ());
        self.index.insert(child, child_index);
        Ok(child_index)
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn root_id(&self) -> ClassId {
        self.graph[self.root]
    }

    pub fn class_id(&self, node: NodeIndex) -> ClassId {
        self.graph[node]
    }

    pub fn node(&self, id: ClassId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: ClassId) -> bool {
        self.index.contains_key(&id)
    }

    /// Children of `node` in insertion order
    pub fn children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks adjacency lists newest-first
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        children.reverse();
        children
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All `(parent, child)` edges, parents before their children
    pub fn edges(&self) -> Vec<(ClassId, ClassId)> {
        let mut edges = Vec::with_capacity(self.graph.edge_count());
        let mut queue = VecDeque::from([self.root]);
        while let Some(node) = queue.pop_front() {
            for child in self.children(node) {
                edges.push((self.class_id(node), self.class_id(child)));
                queue.push_back(child);
            }
        }
        edges
    }
}

impl TryFrom<TreeRecord> for ClassificationTree {
    type Error = BiomeError;

    fn try_from(record: TreeRecord) -> Result<Self, Self::Error> {
        Self::from_edges(record.root, record.edges)
    }
}

impl From<ClassificationTree> for TreeRecord {
    fn from(tree: ClassificationTree) -> Self {
        TreeRecord {
            root: tree.root_id(),
            edges: tree.edges(),
        }
    }
}
