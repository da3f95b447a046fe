//! Boolean operators and quantification, expressed through ITE.

use bitvec::slice::BitSlice;

use crate::core::{
    bdd_manager::DDManager,
    bdd_node::{NodeID, ONE, ZERO},
};

impl DDManager {
    //------------------------------------------------------------------------//
    // Unitary Operations

    /// neg(a) = ite(a, 0, 1)
    pub fn neg(&mut self, f: NodeID) -> NodeID {
        self.ite(f, ZERO.id, ONE.id)
    }

    //------------------------------------------------------------------------//
    // Binary Operations

    /// and2(a,b) = ite(a, b, 0)
    pub fn and(&mut self, f: NodeID, g: NodeID) -> NodeID {
        self.ite(f, g, ZERO.id)
    }

    /// or2(a,b) = ite(a, 1, b)
    pub fn or(&mut self, f: NodeID, g: NodeID) -> NodeID {
        self.ite(f, ONE.id, g)
    }

    /// xor2(a,b) = ite(a, neg(b), b)
    pub fn xor(&mut self, f: NodeID, g: NodeID) -> NodeID {
        let ng = self.neg(g);

        self.ite(f, ng, g)
    }

    pub fn nand(&mut self, f: NodeID, g: NodeID) -> NodeID {
        let and = self.and(f, g);
        self.neg(and)
    }

    pub fn nor(&mut self, f: NodeID, g: NodeID) -> NodeID {
        let or = self.or(f, g);
        self.neg(or)
    }

    pub fn xnor(&mut self, f: NodeID, g: NodeID) -> NodeID {
        let xor = self.xor(f, g);
        self.neg(xor)
    }

    //------------------------------------------------------------------------//
    // Quantification

    /// Existential quantification of `f` over the variable vector
    /// `vars`: the disjunction of both cofactors, applied per variable
    /// in reverse index order.
    pub fn exists(&mut self, f: NodeID, vars: &[NodeID]) -> NodeID {
        let mut temp = f;
        for &v in vars.iter().rev() {
            let t = self.co_factor_true(temp, v);
            let e = self.co_factor_false(temp, v);
            temp = self.or(t, e);
        }
        temp
    }

    /// Universal quantification of `f` over the variable vector `vars`:
    /// the conjunction of both cofactors, applied per variable in
    /// reverse index order.
    pub fn forall(&mut self, f: NodeID, vars: &[NodeID]) -> NodeID {
        let mut temp = f;
        for &v in vars.iter().rev() {
            let t = self.co_factor_true(temp, v);
            let e = self.co_factor_false(temp, v);
            temp = self.and(t, e);
        }
        temp
    }

    /// Substitute the constants `values` for the variables `vars` in
    /// `f`, in reverse index order.
    pub fn restrict(&mut self, f: NodeID, vars: &[NodeID], values: &BitSlice) -> NodeID {
        assert_eq!(
            vars.len(),
            values.len(),
            "restrict needs one constant per variable"
        );

        let mut temp = f;
        for i in (0..vars.len()).rev() {
            temp = if values[i] {
                self.co_factor_true(temp, vars[i])
            } else {
                self.co_factor_false(temp, vars[i])
            };
        }
        temp
    }
}
