//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — simplified policy/report/context structs printed by the CLI.
//! - `resources.rs` — typed records for the raw `kubectl -o json` documents.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no process or network side effects.
//!
//! ## Compatibility note
//! Fields of `models.rs` structs are the `--json` output schema.

pub mod models;
pub mod resources;
