//! View to access a BDD.

use std::{
    fmt, ops,
    sync::{Arc, RwLock},
};

use num_bigint::BigUint;

use crate::core::{bdd_manager::DDManager, bdd_node::NodeID};

/// A root id tied to its manager: a thin convenience layer over the
/// id-based kernel API. The kernel's own algorithms never go through
/// views.
#[derive(Clone)]
pub struct BddView {
    man: Arc<RwLock<DDManager>>,
    root: NodeID,
}

impl fmt::Debug for BddView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BddView [root {}]", self.root.0)
    }
}

/// Views compare by root id within the same manager, which is exact
/// because the representation is canonical.
impl PartialEq for BddView {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.man, &other.man) && self.root == other.root
    }
}

impl Eq for BddView {}

impl BddView {
    pub fn new(root: NodeID, manager: Arc<RwLock<DDManager>>) -> Self {
        Self { man: manager, root }
    }

    pub fn get_manager(&self) -> Arc<RwLock<DDManager>> {
        self.man.clone()
    }

    pub fn get_root(&self) -> NodeID {
        self.root
    }

    fn wrap(&self, root: NodeID) -> Self {
        Self {
            man: self.man.clone(),
            root,
        }
    }

    //------------------------------------------------------------------------//
    // Unitary Operations

    pub fn not(&self) -> Self {
        let root = self.man.write().unwrap().neg(self.root);
        self.wrap(root)
    }

    //------------------------------------------------------------------------//
    // Binary Operations

    pub fn and(&self, other: &Self) -> Self {
        assert!(Arc::ptr_eq(&self.man, &other.man));

        let root = self.man.write().unwrap().and(self.root, other.root);
        self.wrap(root)
    }

    pub fn or(&self, other: &Self) -> Self {
        assert!(Arc::ptr_eq(&self.man, &other.man));

        let root = self.man.write().unwrap().or(self.root, other.root);
        self.wrap(root)
    }

    pub fn xor(&self, other: &Self) -> Self {
        assert!(Arc::ptr_eq(&self.man, &other.man));

        let root = self.man.write().unwrap().xor(self.root, other.root);
        self.wrap(root)
    }

    //------------------------------------------------------------------------//
    // Queries

    pub fn sat_count(&self) -> BigUint {
        self.man.read().unwrap().sat_count(self.root)
    }

    pub fn is_constant(&self) -> bool {
        self.man.read().unwrap().is_constant(self.root)
    }
}

impl ops::Not for &BddView {
    type Output = BddView;

    fn not(self) -> BddView {
        BddView::not(self)
    }
}

impl ops::BitAnd for &BddView {
    type Output = BddView;

    fn bitand(self, rhs: Self) -> BddView {
        self.and(rhs)
    }
}

impl ops::BitOr for &BddView {
    type Output = BddView;

    fn bitor(self, rhs: Self) -> BddView {
        self.or(rhs)
    }
}

impl ops::BitXor for &BddView {
    type Output = BddView;

    fn bitxor(self, rhs: Self) -> BddView {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use num_bigint::BigUint;

    use super::BddView;
    use crate::core::bdd_manager::DDManager;

    #[test]
    fn view_operations_match_the_kernel() {
        let man = Arc::new(RwLock::new(DDManager::default()));
        let (a, b) = {
            let mut man = man.write().unwrap();
            (man.create_var("a"), man.create_var("b"))
        };

        let va = BddView::new(a, man.clone());
        let vb = BddView::new(b, man.clone());

        let v_and = va.and(&vb);
        let expected = man.write().unwrap().and(a, b);
        assert_eq!(v_and.get_root(), expected);

        assert_eq!(&va & &vb, v_and);
        assert_eq!((&va | &vb).get_root(), man.write().unwrap().or(a, b));
        assert_eq!((&va ^ &vb).get_root(), man.write().unwrap().xor(a, b));
        assert_eq!((!&va).get_root(), man.write().unwrap().neg(a));

        assert_eq!(v_and.sat_count(), BigUint::from(1u32));
        assert!(!v_and.is_constant());
    }
}
