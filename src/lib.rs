mod block;
mod config;
mod error;
mod grid;
mod node_traits;
mod palette;
mod quad_tree;
mod quadrant;
mod snapshot;
mod tree_traits;

use slotmap::new_key_type;
new_key_type! {pub struct NodeKey;}

pub use crate::block::Block;
pub use crate::config::{GridConfig, DEFAULT_MAX_DEPTH, DEFAULT_SIZE};
pub use crate::error::GridError;
pub use crate::grid::{Command, NestedGrid};
pub use crate::node_traits::*;
pub use crate::palette::{ColorProvider, Palette};
pub use crate::quad_tree::QuadTree;
pub use crate::quadrant::*;
pub use crate::snapshot::BlockRect;
