//! The ITE operator
use crate::core::{
    bdd_manager::DDManager,
    bdd_node::{NodeID, ONE, ZERO},
};

/// Bring ITE calls of the form
/// ite(f,f,h) = ite(f,1,h) = ite(h,1,f)
/// ite(f,g,f) = ite(f,g,0) = ite(g,f,0)
/// into canonical form
fn normalize_ite_args(mut f: NodeID, mut g: NodeID, mut h: NodeID) -> (NodeID, NodeID, NodeID) {
    if f == g {
        g = ONE.id;
    } else if f == h {
        h = ZERO.id
    }

    let order = |a, b| if a < b { (a, b) } else { (b, a) };

    if g == ONE.id {
        (f, h) = order(f, h);
    }
    if h == ZERO.id {
        (f, g) = order(f, g);
    }

    (f, g, h)
}

impl DDManager {
    /// The central operator: the node representing `if f then g else h`.
    /// Every Boolean connective of the kernel reduces to this.
    pub fn ite(&mut self, f: NodeID, g: NodeID, h: NodeID) -> NodeID {
        let (f, g, h) = normalize_ite_args(f, g, h);
        match (f, g, h) {
            (_, NodeID(1), NodeID(0)) => f, // ite(f,1,0)
            (NodeID(1), _, _) => g,         // ite(1,g,h)
            (NodeID(0), _, _) => h,         // ite(0,g,h)
            (_, t, e) if t == e => t,       // ite(f,g,g)
            (_, _, _) => {
                if let Some(&cached) = self.c_table.get(&(f, g, h)) {
                    self.c_hits += 1;
                    return cached;
                }

                let top = self.min_by_order(f, g, h);

                let fxt = self.node(f).restrict(top, true);
                let gxt = self.node(g).restrict(top, true);
                let hxt = self.node(h).restrict(top, true);

                let fxf = self.node(f).restrict(top, false);
                let gxf = self.node(g).restrict(top, false);
                let hxf = self.node(h).restrict(top, false);

                let high = self.ite(fxt, gxt, hxt);
                let low = self.ite(fxf, gxf, hxf);

                if low == high {
                    self.c_table.insert((f, g, h), low);
                    return low;
                }

                let out = self.node_get_or_create(top, high, low);

                self.c_table.insert((f, g, h), out);

                out
            }
        }
    }
}
