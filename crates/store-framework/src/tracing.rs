//! # Observability & Tracing
//!
//! Every [`ResourceStore`](crate::ResourceStore) operation is logged with an
//! `entity_type` field (e.g. `Actor`), so module paths are hidden from the output.
//!
//! ```bash
//! RUST_LOG=info cargo run     # mutations only
//! RUST_LOG=debug cargo run    # full payloads and reads
//! ```

/// Initializes the tracing subscriber for the application.
///
/// Log levels come from the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
