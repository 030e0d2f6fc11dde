//! Test utilities and fixtures for Detective Quest.
//!
//! This module provides reusable test components, fixtures, and helpers to
//! facilitate property-based testing and scenario testing.

use proptest::prelude::*;
use tempfile::TempDir;

use crate::data_structures::manor_map::Room;

/// Create a temporary directory for test files.
///
/// # Returns
///
/// A result containing the temporary directory or an error if creation fails.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Strategy producing non-empty clue-like texts.
pub fn clue_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 ]{1,40}").unwrap()
}

/// Strategy producing non-empty suspect names.
pub fn suspect_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{1,12}").unwrap()
}

/// A two-room map whose root only has a left child; used to exercise the
/// "no such path" branch, which the complete fixed manor cannot reach.
pub fn single_corridor_map() -> Room {
    let mut corredor = Room::new("Corredor");
    corredor.connect(
        Some(
            Room::new("Despensa")
                .with_clue("farinha derramada")
                .with_suspect("Sr. Green"),
        ),
        None,
    );
    corredor
}
