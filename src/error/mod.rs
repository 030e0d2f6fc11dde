//! Error module for Detective Quest.
//!
//! This module provides the error handling framework for the whole crate,
//! following Rust's idiomatic error handling patterns with explicit error
//! types, proper error propagation, and helpful context information.

use std::fmt::{Display, Formatter};
use std::sync::Arc;
use once_cell::sync::OnceCell;
use thiserror::Error;

pub mod config;
pub mod exploration;

/// Result type alias used throughout Detective Quest.
pub type QuestResult<T> = Result<T, QuestError>;

/// Core error enum for Detective Quest.
#[derive(Error, Debug)]
pub enum QuestError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the exploration session state machine.
    #[error("Exploration error: {0}")]
    Exploration(#[from] exploration::ExplorationError),

    /// Errors from the clue index.
    #[error("Clue index error: {0}")]
    ClueIndex(#[from] crate::data_structures::clue_index::ClueIndexError),

    /// Errors from the suspect ledger.
    #[error("Suspect ledger error: {0}")]
    SuspectLedger(#[from] crate::data_structures::suspect_ledger::SuspectLedgerError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: QuestError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: QuestError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter slot, set once at startup.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the global error reporter.
///
/// Later calls are ignored once a reporter has been installed.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    let _ = ERROR_REPORTER.set(reporter);
}

/// Report an error with context through the global reporter.
///
/// Falls back to standard error output if no reporter is configured.
///
/// # Arguments
///
/// * `context` - The error context to report
pub fn report_error(context: ErrorContext) {
    if let Some(reporter) = ERROR_REPORTER.get() {
        reporter.report(context);
    } else {
        eprintln!("Error: {context}");
    }
}
