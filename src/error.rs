//! Startup error taxonomy.

use thiserror::Error;

/// A widget that failed to initialize.
///
/// Failures are collected and reported together; sibling widgets start
/// regardless. Nothing here is fatal to the page.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("{widget}: embedded configuration failed to parse: {source}")]
    Config {
        widget: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
