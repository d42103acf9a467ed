//! Configuration structures for depviz commands

pub mod reactor;
pub mod tree;

pub use reactor::ReactorOptions;
pub use tree::TreeOptions;
