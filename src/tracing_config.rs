//! Tracing configuration for debugging resolution.
//!
//! Supports three output formats controlled by `LOX_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, which follows
//!   scope entry and exit nicely
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Scope pushes and pops as a tree
//! LOX_LOG=debug LOX_LOG_FORMAT=tree lox-resolve program.json
//!
//! # Every recorded distance
//! LOX_LOG="lox_resolver=trace" lox-resolve program.json
//! ```
//!
//! The subscriber is only initialised when `LOX_LOG` (or `RUST_LOG`) is set,
//! so there is zero overhead in normal runs.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `LOX_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("LOX_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `LOX_LOG`, falling back to `RUST_LOG`.
///
/// `LOX_LOG` takes precedence when both are set. Values use the same
/// syntax as `RUST_LOG` (e.g. `debug`, `lox_resolver=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("LOX_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `LOX_LOG` nor `RUST_LOG` is set. All output goes
/// to stderr so it never mixes with the JSON written to stdout.
pub fn init_tracing() {
    let has_lox_log = std::env::var("LOX_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_lox_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
