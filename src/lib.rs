//! Detective Quest Library
//!
//! This library contains the core of the Detective Quest exploration game:
//! the immutable manor map, the sorted clue index, the suspect hash ledger,
//! and the session controller that drives them. The library is designed to
//! be used by the binary crate (the text explorer interface), but can also
//! be used as a dependency by other front ends.
//!
//! # Architecture
//!
//! Detective Quest is designed with the following principles in mind:
//! - Strict component boundaries between the three data structures
//! - No process-wide singletons; a session owns everything it touches
//! - Single-threaded, synchronous control flow
//! - Comprehensive error handling and propagation
//! - Deterministic reporting and tie-breaking order

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Detective Quest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::QuestResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
