//! Service layer: cluster queries and their normalization.
//!
//! ## Service map
//! - `executor.rs` — the `Executor` seam and the `kubectl` backend.
//! - `policies.rs` — ClusterPolicy retrieval and simplification.
//! - `reports.rs` — PolicyReport/ClusterPolicyReport flattening and filtering.
//! - `context.rs` — current kubeconfig context lookup.
//! - `errors.rs` — retrieval/parse error type shared by the retrievers.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Retrievers hold no state beyond the executor they were built with.
//! - Filtering is a pure pass over already retrieved entries.

pub mod context;
pub mod errors;
pub mod executor;
pub mod output;
pub mod policies;
pub mod reports;
