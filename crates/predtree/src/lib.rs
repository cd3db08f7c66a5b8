//! ## Crate layout
//! - `core`: attributes, literal values, predicate nodes, the range
//!   decomposer and the any/all fold combinator.
//!
//! Trees built here are plain values; rendering them to SQL and running
//! sub-queries belong to the caller.
//!
//! ```ignore
//! use predtree::prelude::*;
//!
//! let id = Attribute::integer("users", "id");
//! let filter = id.in_(1..10)? & id.not_eq_any([3, 4])?;
//! let order = id.desc();
//! ```

pub use predtree_core as core;

/// re-exports
///
/// literal types callers need to build `Value`s without adding the crates
/// to their own manifest
pub mod __reexports {
    pub use rust_decimal;
    pub use serde;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{ID_FIELD, error::ExprError};

///
/// Prelude
/// domain vocabulary for building predicate trees
///

pub mod prelude {
    pub use crate::core::{
        obs::{BuildCounters, BuildReport, BuildSink, with_build_sink},
        prelude::*,
    };
    pub use rust_decimal::Decimal;
}
