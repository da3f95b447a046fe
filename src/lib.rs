pub mod circuit;
pub mod core;
pub mod misc;
pub mod reach;
pub mod views;

pub use crate::core::bdd_manager::DDManager;
pub use crate::core::bdd_node::{DDNode, NodeID, VarID};
pub use crate::reach::{ReachError, Reachability};
pub use crate::views::bdd_view::BddView;
