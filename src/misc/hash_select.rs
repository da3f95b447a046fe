//! Central selection of the hash table implementations used throughout
//! the crate.

pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
