//! Shared test utilities for Corkboard test suites
//!
//! This crate provides common testing utilities to eliminate code
//! duplication across test suites and ensure consistent test environments.
//!
//! # Modules
//!
//! - [`workspace`]: Temp workspace setup with `.corkboard` structure
//! - [`engines`]: Engine and bus builders wired with in-memory fakes
//! - [`fakes`]: Inert, failing and scripted collaborator doubles
//! - [`logging`]: Test logging configuration
//! - [`assertions`]: Domain-specific assertion helpers
//!
//! # Example
//!
//! ```rust
//! use cork_test_helpers::prelude::*;
//! use cork_sync::SyncBus;
//!
//! let bus = SyncBus::new(8);
//! let (mut tab_a, mut tab_b) = engine_pair(&bus);
//!
//! tab_a.add_board("Sprint");
//! tab_b.poll_remote();
//! assert_converged(&tab_a, &tab_b);
//! ```

pub mod assertions;
pub mod engines;
pub mod fakes;
pub mod logging;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::engines::{engine_on, engine_pair, solo_engine};
    pub use crate::fakes::{FailingStore, FailingTransport, NullTransport, RemoteFeed, ScriptedTransport};
    pub use crate::logging::{init_test_logging, suppress_logs};
    pub use crate::workspace::{init_workspace, temp_dir, workspace_with_record};
}
