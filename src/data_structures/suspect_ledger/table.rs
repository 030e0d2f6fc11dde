// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Suspect Ledger hash table.
//!
//! A separate-chaining hash table over a fixed bucket vector. Chains are
//! plain `Vec`s scanned by exact name match, so every listing and tie-break
//! order is deterministic: bucket order first, insertion order within a
//! bucket second.

use tracing::debug;

use crate::data_structures::suspect_ledger::config::SuspectLedgerConfig;
use crate::data_structures::suspect_ledger::error::{Result, SuspectLedgerError};
use crate::data_structures::suspect_ledger::hash::bucket_index;
use crate::data_structures::suspect_ledger::record::SuspectRecord;

/// A fixed-bucket hash table mapping suspect names to their records.
///
/// The bucket count is chosen at construction and never changes; see
/// [`SuspectLedgerConfig`] for why resizing is out of scope.
#[derive(Debug)]
pub struct SuspectLedger {
    /// Bucket vector; each bucket is an insertion-ordered chain.
    buckets: Vec<Vec<SuspectRecord>>,

    /// The configuration for the ledger
    config: SuspectLedgerConfig,

    /// Current number of suspect records across all buckets
    record_count: usize,
}

impl SuspectLedger {
    /// Creates a new empty ledger with default configuration.
    ///
    /// # Returns
    ///
    /// A new `SuspectLedger` instance.
    pub fn new() -> Self {
        Self::with_config(SuspectLedgerConfig::default())
    }

    /// Creates a new empty ledger with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the ledger.
    ///
    /// # Returns
    ///
    /// A new `SuspectLedger` instance.
    pub fn with_config(config: SuspectLedgerConfig) -> Self {
        let bucket_count = config.get_bucket_count();
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            config,
            record_count: 0,
        }
    }

    /// Records one association event linking a clue to a suspect.
    ///
    /// When the suspect is `None` or empty the clue implicates nobody and the
    /// ledger is left untouched. Otherwise the suspect's record is located by
    /// chain scan (or created), its count is incremented, and the clue text is
    /// appended unless already listed. Repeating an association therefore
    /// keeps raising the count while the clue list stays deduplicated.
    ///
    /// # Arguments
    ///
    /// * `clue` - The clue text being linked.
    /// * `suspect` - The implicated suspect, if any.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The clue text was newly added to the suspect's list.
    /// * `Ok(false)` - Nothing was listed: no suspect was named, or the clue
    ///   was already listed (its count still incremented).
    /// * `Err(SuspectLedgerError::EmptyClue)` - The clue text was empty.
    pub fn associate(&mut self, clue: &str, suspect: Option<&str>) -> Result<bool> {
        if clue.is_empty() {
            return Err(SuspectLedgerError::EmptyClue);
        }
        let name = match suspect {
            Some(name) if !name.is_empty() => name,
            _ => {
                debug!(clue, "clue implicates nobody, ledger unchanged");
                return Ok(false);
            }
        };

        let idx = bucket_index(name, self.buckets.len());
        let chain = &mut self.buckets[idx];

        let record = match chain.iter().position(|r| r.name() == name) {
            Some(pos) => &mut chain[pos],
            None => {
                chain.push(SuspectRecord::new(name));
                self.record_count += 1;
                debug!(suspect = name, bucket = idx, "new suspect record");
                let last = chain.len() - 1;
                &mut chain[last]
            }
        };

        let listed = record.note_association(clue);
        debug!(
            suspect = name,
            clue,
            count = record.count(),
            newly_listed = listed,
            "association recorded"
        );
        Ok(listed)
    }

    /// Looks up the record for a suspect name.
    ///
    /// # Arguments
    ///
    /// * `name` - The suspect name to look up.
    ///
    /// # Returns
    ///
    /// `Some(record)` if the suspect exists, `None` otherwise.
    pub fn get(&self, name: &str) -> Option<&SuspectRecord> {
        let idx = bucket_index(name, self.buckets.len());
        self.buckets[idx].iter().find(|r| r.name() == name)
    }

    /// Returns the suspect with the strictly greatest association count.
    ///
    /// Scans every bucket and chain entry in order; on equal counts the
    /// first-encountered record wins, which makes ties deterministic without
    /// promising any ranking among them.
    ///
    /// # Returns
    ///
    /// `Some(record)` for a non-empty ledger, `None` otherwise.
    pub fn most_likely(&self) -> Option<&SuspectRecord> {
        let mut best: Option<&SuspectRecord> = None;
        for record in self.records() {
            match best {
                Some(current) if record.count() <= current.count() => {}
                _ => best = Some(record),
            }
        }
        best
    }

    /// Iterates over all records in bucket order, then chain order.
    pub fn records(&self) -> impl Iterator<Item = &SuspectRecord> {
        self.buckets.iter().flatten()
    }

    /// Collects all records in bucket order, then chain order.
    ///
    /// # Returns
    ///
    /// The records for reporting; empty when no association has been made.
    pub fn list_all(&self) -> Vec<&SuspectRecord> {
        self.records().collect()
    }

    /// Returns the number of suspect records in the ledger.
    pub fn len(&self) -> usize {
        self.record_count
    }

    /// Returns whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Returns the fixed bucket count of the table.
    pub fn bucket_count(&self) -> usize {
        self.config.get_bucket_count()
    }
}

impl Default for SuspectLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut ledger = SuspectLedger::new();

        assert_eq!(ledger.associate("documento rasgado", Some("Sr. Black")), Ok(true));
        assert_eq!(ledger.associate("luva de couro", Some("Sr. Black")), Ok(true));

        let record = ledger.get("Sr. Black").unwrap();
        assert_eq!(record.count(), 2);
        assert_eq!(record.clues().len(), 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_unnamed_suspect_is_noop() {
        let mut ledger = SuspectLedger::new();

        assert_eq!(ledger.associate("pegada na lareira", None), Ok(false));
        assert_eq!(ledger.associate("pegada na lareira", Some("")), Ok(false));

        assert!(ledger.is_empty());
        assert!(ledger.most_likely().is_none());
    }

    #[test]
    fn test_repeat_association_counts_again() {
        let mut ledger = SuspectLedger::new();

        assert_eq!(ledger.associate("luva de couro", Some("Sr. Black")), Ok(true));
        assert_eq!(ledger.associate("luva de couro", Some("Sr. Black")), Ok(false));

        let record = ledger.get("Sr. Black").unwrap();
        assert_eq!(record.count(), 2);
        assert_eq!(record.clues(), ["luva de couro".to_string()]);
    }

    #[test]
    fn test_empty_clue_is_rejected() {
        let mut ledger = SuspectLedger::new();
        assert_eq!(
            ledger.associate("", Some("Sr. Black")),
            Err(SuspectLedgerError::EmptyClue)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_most_likely_prefers_highest_count() {
        let mut ledger = SuspectLedger::new();

        ledger.associate("documento rasgado", Some("Sr. Black")).unwrap();
        ledger.associate("luva de couro", Some("Sr. Black")).unwrap();
        ledger.associate("marcas de poeira no chão", Some("Sra. White")).unwrap();

        let best = ledger.most_likely().unwrap();
        assert_eq!(best.name(), "Sr. Black");
        assert_eq!(best.count(), 2);
    }

    #[test]
    fn test_colliding_names_share_a_bucket() {
        // Anagrams collide under the checksum hash; the chain scan must still
        // keep their records separate.
        let mut ledger = SuspectLedger::with_config(
            SuspectLedgerConfig::new().with_bucket_count(7),
        );

        ledger.associate("pista um", Some("amor")).unwrap();
        ledger.associate("pista dois", Some("roma")).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("amor").unwrap().count(), 1);
        assert_eq!(ledger.get("roma").unwrap().count(), 1);
    }

    #[test]
    fn test_listing_follows_bucket_then_chain_order() {
        let mut ledger = SuspectLedger::with_config(
            SuspectLedgerConfig::new().with_bucket_count(7),
        );

        ledger.associate("pista um", Some("amor")).unwrap();
        ledger.associate("pista dois", Some("roma")).unwrap();

        // Same bucket, so listing order is the insertion order of the chain.
        let names: Vec<_> = ledger.records().map(SuspectRecord::name).collect();
        assert_eq!(names, ["amor", "roma"]);
    }
}
