pub mod edge;
pub mod key;
pub mod nodes;

pub use edge::*;
pub use key::*;
pub use nodes::*;
