//! Satisfying-assignment counting.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    core::{bdd_manager::DDManager, bdd_node::NodeID},
    misc::hash_select::HashMap,
};

impl DDManager {
    /// Number of satisfying assignments of `f` over all variables
    /// created in this manager.
    pub fn sat_count(&self, f: NodeID) -> BigUint {
        let node = self.node(f);

        // Levels skipped above the root each double the count.
        let above = if node.is_constant() {
            self.var_count()
        } else {
            self.level_of(node.var)
        };

        self.sat_count_rec(f, &mut HashMap::default()) * BigUint::from(2u32).pow(above as u32)
    }

    fn sat_count_rec(&self, f: NodeID, cache: &mut HashMap<NodeID, BigUint>) -> BigUint {
        let mut total: BigUint = Zero::zero();

        if f == NodeID(0) {
            return Zero::zero();
        } else if f == NodeID(1) {
            return One::one();
        }

        let node = self.node(f);
        let low = self.node(node.low);
        let high = self.node(node.high);

        let level = self.level_of(node.var);

        let low_jump = if low.is_constant() {
            self.var_count() - level - 1
        } else {
            self.level_of(low.var) - level - 1
        };

        let high_jump = if high.is_constant() {
            self.var_count() - level - 1
        } else {
            self.level_of(high.var) - level - 1
        };

        let low_fac = BigUint::from(2u32).pow(low_jump as u32);
        let high_fac = BigUint::from(2u32).pow(high_jump as u32);

        total += match cache.get(&node.low) {
            Some(x) => x * low_fac,
            None => self.sat_count_rec(node.low, cache) * low_fac,
        };

        total += match cache.get(&node.high) {
            Some(x) => x * high_fac,
            None => self.sat_count_rec(node.high, cache) * high_fac,
        };

        cache.insert(f, total.clone());

        total
    }
}
