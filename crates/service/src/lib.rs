//! Service layer owning the configuration records.
//! - Holds the single source of truth for configuration state.
//! - Provides clear error types and documented interfaces.

pub mod domain;
pub mod errors;
pub mod store;
