pub mod app;
pub mod binary_search_tree;
pub mod cli;
pub mod error;
pub mod layout;
pub mod number_pool;
pub mod render;
pub mod style;
pub mod surface;
pub mod svg;

pub use binary_search_tree::{BinarySearchTree, TreeNode};
pub use error::{Error, Result};
pub use number_pool::NumberPool;
pub use render::TreeRenderer;

pub type Value = i32;
