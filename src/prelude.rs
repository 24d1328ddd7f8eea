//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the junction
//! crate, so a typical caller only needs `use junction::prelude::*;`.
//!
//! # Example
//!
//! ```rust,no_run
//! use junction::prelude::*;
//! use std::path::Path;
//!
//! # fn run_example() -> std::result::Result<(), JunctionError> {
//! let path = Path::new("roads.jsonl");
//! let edges = load_path(path, InputFormat::detect(path, false))?;
//!
//! let result = Simplifier::builder().build().simplify(&edges)?;
//! write_duplicates(path, &result.duplicates)?;
//! write_network(Some(Path::new("roads-simple.jsonl")), &result.edges)?;
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::simplifier::{Simplification, Simplifier, SimplifierBuilder};

// Data model
pub use crate::aggregator::OutputEdge;
pub use crate::contractor::LoopWalk;
pub use crate::network::{Edge, EdgeSet, Key};
pub use crate::resolver::{Colour, DuplicateSegment};

// Input and output
pub use crate::loader::{InputFormat, load_path, load_reader};
pub use crate::output::{write_duplicates, write_dump, write_network};

// Error types
pub use crate::error::{JunctionError, LoadError, OutputError, TraversalError};
