//! Client for the Obsidian Local REST API.
//!
//! The tool layer only sees the [`VaultClient`] trait; [`RestVaultClient`] is
//! the HTTP implementation used at runtime.

pub mod config;
pub mod rest;
pub mod traits;
pub mod types;

pub use config::{Protocol, VaultConfig};
pub use rest::RestVaultClient;
pub use traits::{ClientError, VaultClient};
pub use types::{
    NoteFormat, PatchOperation, PatchSpec, Period, SearchHit, SearchMatch, SearchSpan, TargetType,
};
