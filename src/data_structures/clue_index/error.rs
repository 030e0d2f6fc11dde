// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Clue Index.

/// Error types for Clue Index operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClueIndexError {
    /// Clue texts are non-empty by contract; an empty insert is rejected
    #[error("Clue text must not be empty")]
    EmptyText,
}

/// Result type for Clue Index operations
pub type Result<T> = std::result::Result<T, ClueIndexError>;
