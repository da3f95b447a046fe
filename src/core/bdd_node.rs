//! Module containing type definitions for the elements of the BDD:
//! Nodes ([DDNode], [NodeID]) and Variables ([VarID])

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeID(pub usize);

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarID(pub usize);

/// Element of a BDD. A variable node carries its own id as `var`; the
/// two constants additionally point at themselves through both edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DDNode {
    /// Node ID. Special values: 0 and 1 for terminal nodes
    pub id: NodeID,
    /// Top variable of this node. Equals the node's own id for
    /// variables and constants.
    pub var: VarID,
    pub low: NodeID,
    pub high: NodeID,
}

/// Terminal node "zero", the contradiction
pub const ZERO: DDNode = DDNode {
    id: NodeID(0),
    var: VarID(0),
    low: NodeID(0),
    high: NodeID(0),
};

/// Terminal node "one", the tautology
pub const ONE: DDNode = DDNode {
    id: NodeID(1),
    var: VarID(1),
    low: NodeID(1),
    high: NodeID(1),
};

impl DDNode {
    /// A constant satisfies `id == top == high == low`.
    pub fn is_constant(&self) -> bool {
        self.var.0 == self.id.0 && self.low == self.id && self.high == self.id
    }

    /// A variable is its own top variable but not a constant.
    pub fn is_variable(&self) -> bool {
        !self.is_constant() && self.var.0 == self.id.0
    }

    /// Returns the function resulting when setting the specified variable
    /// to the specified value. Note that this only implements the cases of
    /// the node being at or below the level of the specified variable.
    pub fn restrict(&self, top: VarID, val: bool) -> NodeID {
        if self.is_constant() {
            return self.id;
        }

        if self.var > top {
            // Variable does not occur in current function
            return self.id;
        }

        if self.var == top {
            if val {
                return self.high;
            } else {
                return self.low;
            }
        }

        // Variable occurs further down in the function. This is not supported in this restrict().
        panic!("Restrict called with variable below current node");
    }
}
