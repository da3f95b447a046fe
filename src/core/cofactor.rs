//! Positive and negative Shannon cofactors.

use crate::core::{bdd_manager::DDManager, bdd_node::NodeID};

impl DDManager {
    /// Positive cofactor of `f` with respect to the variable `x`.
    ///
    /// `f` is returned unchanged when it is constant, when `x` is
    /// constant, or when the top variable of `f` lies below `x` in the
    /// order (so `x` does not occur in `f`).
    pub fn co_factor_true(&mut self, f: NodeID, x: NodeID) -> NodeID {
        let fnode = *self.node(f);
        let xnode = *self.node(x);

        if fnode.is_constant() || xnode.is_constant() || fnode.var > xnode.var {
            return f;
        }

        if fnode.var == xnode.var {
            return fnode.high;
        }

        let t = self.co_factor_true(fnode.high, x);
        let e = self.co_factor_true(fnode.low, x);
        self.ite(NodeID(fnode.var.0), t, e)
    }

    /// Negative cofactor of `f` with respect to the variable `x`.
    pub fn co_factor_false(&mut self, f: NodeID, x: NodeID) -> NodeID {
        let fnode = *self.node(f);
        let xnode = *self.node(x);

        if fnode.is_constant() || xnode.is_constant() || fnode.var > xnode.var {
            return f;
        }

        if fnode.var == xnode.var {
            return fnode.low;
        }

        let t = self.co_factor_false(fnode.high, x);
        let e = self.co_factor_false(fnode.low, x);
        self.ite(NodeID(fnode.var.0), t, e)
    }

    /// Positive cofactor with respect to the top variable of `f` itself.
    pub fn co_factor_true_top(&self, f: NodeID) -> NodeID {
        self.node(f).high
    }

    /// Negative cofactor with respect to the top variable of `f` itself.
    pub fn co_factor_false_top(&self, f: NodeID) -> NodeID {
        self.node(f).low
    }
}
