//! All BDD building and manipulation functionality

use std::{collections::BTreeSet, fmt};

use crate::{
    core::bdd_node::{DDNode, NodeID, VarID, ONE, ZERO},
    misc::hash_select::HashMap,
};

/// Container combining the node store, the unique table, the variable
/// registry and the computed table.
///
/// Node ids are dense indices into the store, assigned in creation
/// order and never reused. The variable order is the id order: a
/// smaller id sits higher in the diagram. Tables grow monotonically
/// for the lifetime of the manager.
#[derive(Clone)]
pub struct DDManager {
    /// Node store, indexed by [NodeID]
    pub(crate) nodes: Vec<DDNode>,
    /// Unique Table: (var, high, low) to the node representing that triple
    unique_table: HashMap<(VarID, NodeID, NodeID), NodeID>,
    /// Computed Table: ite(f,g,h) cache
    pub(super) c_table: HashMap<(NodeID, NodeID, NodeID), NodeID>,
    /// Variables in creation order (ascending ids)
    vars: Vec<VarID>,
    /// Labels parallel to `vars`
    var_labels: Vec<String>,
    /// Unique-table hits
    u_hits: usize,
    /// Computed-table hits
    pub(super) c_hits: usize,
}

impl fmt::Debug for DDManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DDManager [{} nodes, {} variables, cache size {}]",
            self.nodes.len(),
            self.vars.len(),
            self.c_table.len()
        )
    }
}

impl Default for DDManager {
    fn default() -> Self {
        let mut man = DDManager {
            nodes: Vec::new(),
            unique_table: HashMap::default(),
            c_table: HashMap::default(),
            vars: Vec::new(),
            var_labels: Vec::new(),
            u_hits: 0,
            c_hits: 0,
        };

        man.bootstrap();
        man
    }
}

impl DDManager {
    /// Initialize the BDD with zero and one constant nodes
    fn bootstrap(&mut self) {
        for terminal in [ZERO, ONE] {
            assert_eq!(terminal.id.0, self.nodes.len());
            self.nodes.push(terminal);
            self.unique_table
                .insert((terminal.var, terminal.high, terminal.low), terminal.id);
        }
    }

    /// Search for a node with the given triple, create it if it doesnt exist
    pub(crate) fn node_get_or_create(&mut self, var: VarID, high: NodeID, low: NodeID) -> NodeID {
        assert_ne!(high, low, "Creating a node with the same low and high edge creates a non-reduced BDD, which we don't want to do.");

        if let Some(&id) = self.unique_table.get(&(var, high, low)) {
            self.u_hits += 1;
            return id;
        }

        let id = NodeID(self.nodes.len());
        self.nodes.push(DDNode { id, var, low, high });
        self.unique_table.insert((var, high, low), id);

        id
    }

    //------------------------------------------------------------------------//
    // Constants

    pub fn zero(&self) -> NodeID {
        ZERO.id
    }

    pub fn one(&self) -> NodeID {
        ONE.id
    }

    //------------------------------------------------------------------------//
    // Variables

    /// Create a fresh variable with the next available id. The variable
    /// order is the creation order. Labels are cosmetic and never
    /// deduplicated: two calls with the same label yield two distinct
    /// variables.
    pub fn create_var(&mut self, label: &str) -> NodeID {
        let id = NodeID(self.nodes.len());
        let var = VarID(id.0);
        self.nodes.push(DDNode {
            id,
            var,
            low: ZERO.id,
            high: ONE.id,
        });
        self.unique_table.insert((var, ONE.id, ZERO.id), id);
        self.vars.push(var);
        self.var_labels.push(label.to_string());

        id
    }

    //------------------------------------------------------------------------//
    // Node access

    /// Node lookup for clients. Returns `None` for ids this manager
    /// never assigned.
    pub fn get_node(&self, id: NodeID) -> Option<&DDNode> {
        self.nodes.get(id.0)
    }

    /// Kernel-internal node lookup. An id outside the store is an
    /// invariant violation and aborts the operation.
    pub(crate) fn node(&self, id: NodeID) -> &DDNode {
        match self.nodes.get(id.0) {
            Some(node) => node,
            None => panic!("NodeID {} is not part of the unique table", id.0),
        }
    }

    pub fn is_constant(&self, f: NodeID) -> bool {
        self.node(f).is_constant()
    }

    pub fn is_variable(&self, f: NodeID) -> bool {
        self.node(f).is_variable()
    }

    /// Top variable of `f`, as the id of the variable node. Constants
    /// return themselves.
    pub fn top_var(&self, f: NodeID) -> NodeID {
        NodeID(self.node(f).var.0)
    }

    /// Find top variable: Highest in the diagram according to the order,
    /// i.e. the minimum variable id among the non-constant operands.
    pub(crate) fn min_by_order(&self, f: NodeID, g: NodeID, h: NodeID) -> VarID {
        [f, g, h]
            .iter()
            .map(|&id| self.node(id))
            .filter(|node| !node.is_constant())
            .map(|node| node.var)
            .min()
            .expect("Shannon expansion requires a non-constant operand")
    }

    //------------------------------------------------------------------------//
    // Labels

    /// Label a variable was created with, `None` for anything that is
    /// not a variable.
    pub fn var_label(&self, var: VarID) -> Option<&str> {
        self.vars
            .binary_search(&var)
            .ok()
            .map(|i| self.var_labels[i].as_str())
    }

    /// Human-readable label of a node: the constant's value, or the
    /// label of the node's top variable.
    pub fn node_label(&self, id: NodeID) -> &str {
        let node = self.node(id);
        if node.id == ZERO.id {
            "0"
        } else if node.id == ONE.id {
            "1"
        } else {
            self.var_label(node.var).unwrap_or("?")
        }
    }

    /// Position of a variable in the order (0 = topmost). Terminals are
    /// ordered below every variable.
    pub(crate) fn level_of(&self, var: VarID) -> usize {
        self.vars.binary_search(&var).unwrap_or(self.vars.len())
    }

    //------------------------------------------------------------------------//
    // Structural queries

    /// All node ids reachable from `root` via high/low edges, including
    /// `root` itself and any constants encountered.
    pub fn find_nodes(&self, root: NodeID) -> BTreeSet<NodeID> {
        let mut found = BTreeSet::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !found.insert(id) {
                continue;
            }

            let node = self.node(id);
            if !node.is_constant() {
                stack.push(node.low);
                stack.push(node.high);
            }
        }

        found
    }

    /// Support of the function rooted at `root`: the ids of the top
    /// variables of all reachable internal nodes.
    pub fn find_vars(&self, root: NodeID) -> BTreeSet<NodeID> {
        self.find_nodes(root)
            .iter()
            .map(|&id| self.node(id))
            .filter(|node| !node.is_constant())
            .map(|node| NodeID(node.var.0))
            .collect()
    }

    //------------------------------------------------------------------------//
    // Statistics

    /// Number of distinct node ids created so far.
    pub fn unique_table_size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of variables created so far.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Unique-table hits observed while registering ITE results.
    pub fn ucache_hits(&self) -> usize {
        self.u_hits
    }

    /// Computed-table hits observed during ITE.
    pub fn ccache_hits(&self) -> usize {
        self.c_hits
    }
}
