// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Suspect Ledger.

/// Error types for Suspect Ledger operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SuspectLedgerError {
    /// Association events always carry a clue text; an empty one is rejected
    #[error("Clue text must not be empty")]
    EmptyClue,
}

/// Result type for Suspect Ledger operations
pub type Result<T> = std::result::Result<T, SuspectLedgerError>;
