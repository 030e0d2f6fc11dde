//! Exploration session for Detective Quest.
//!
//! The session owns the three structures of the game (the manor map, the
//! clue index, and the suspect ledger) and drives the walk through the map.
//! There are no process-wide singletons: everything lives in the
//! [`ExplorationSession`] value and is dropped with it.
//!
//! The session is a small state machine. It is `Exploring` while a current
//! room is in play and `Stopped` once a dead end is reached or the caller
//! stops it. On every room entry (including the root at construction) the
//! room's clue, when present, is recorded exactly once per entry event: first
//! into the clue index, then into the suspect ledger.
//!
//! # Example
//!
//! ```
//! use detective_quest_lib::data_structures::manor_map::Direction;
//! use detective_quest_lib::session::ExplorationSession;
//!
//! let mut session = ExplorationSession::start();
//! assert_eq!(session.current_room().name(), "Hall de Entrada");
//!
//! let room = session.move_to(Direction::Left).unwrap();
//! assert_eq!(room.name(), "Biblioteca");
//! assert_eq!(session.list_clues().len(), 1);
//! ```

use tracing::{debug, info, warn};

use crate::config::QuestConfig;
use crate::data_structures::clue_index::ClueIndex;
use crate::data_structures::manor_map::{build_manor, Direction, Room};
use crate::data_structures::suspect_ledger::SuspectLedger;
use crate::error::exploration::ExplorationError;

/// State of an exploration session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A current room is in play and commands are accepted.
    Exploring,
    /// Terminal state; reached at a dead end or on an explicit stop.
    Stopped,
}

/// A suspect row for the end-of-session report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectSummary {
    /// Suspect name.
    pub name: String,
    /// Number of association events recorded for this suspect.
    pub count: usize,
    /// Distinct clue texts linked to this suspect.
    pub clues: Vec<String>,
}

/// A single exploration of the manor.
///
/// Owns the map, the clue index, and the suspect ledger for its whole
/// lifetime; the three are created together at start and dropped together.
#[derive(Debug)]
pub struct ExplorationSession {
    /// Root of the manor map.
    map: Room,

    /// Path from the root to the current room. Only ever extended by
    /// successful moves, so it always resolves within the map.
    path: Vec<Direction>,

    /// Sorted index of discovered clues.
    clues: ClueIndex,

    /// Clue-to-suspect association ledger.
    ledger: SuspectLedger,

    /// Current machine state.
    state: SessionState,
}

impl ExplorationSession {
    /// Starts a session with default configuration.
    ///
    /// Builds the fixed manor map, enters the root room, and processes its
    /// clue if it has one.
    pub fn start() -> Self {
        Self::with_config(&QuestConfig::default())
    }

    /// Starts a session with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration; only the ledger section is
    ///   consulted here.
    pub fn with_config(config: &QuestConfig) -> Self {
        Self::with_map(build_manor(), config)
    }

    /// Starts a session over a caller-supplied map.
    ///
    /// The map must be a strict tree; the session trusts it the same way it
    /// trusts the compiled-in manor.
    pub fn with_map(map: Room, config: &QuestConfig) -> Self {
        let mut session = Self {
            map,
            path: Vec::new(),
            clues: ClueIndex::new(),
            ledger: SuspectLedger::with_config(config.ledger.to_structure_config()),
            state: SessionState::Exploring,
        };
        info!(room = session.current_room().name(), "exploration started");
        session.process_room_entry();
        session
    }

    /// Returns the room the session currently occupies.
    pub fn current_room(&self) -> &Room {
        let mut room = &self.map;
        for &direction in &self.path {
            room = room
                .child(direction)
                .expect("session path always resolves within the map");
        }
        room
    }

    /// Moves to a child of the current room.
    ///
    /// On success the session enters the child room, processes its clue, and
    /// returns it; entering a dead end stops the session immediately after
    /// clue processing. A missing path leaves the state unchanged.
    ///
    /// # Arguments
    ///
    /// * `direction` - Which child to enter.
    ///
    /// # Returns
    ///
    /// * `Ok(&Room)` - The room that was entered.
    /// * `Err(ExplorationError::NoSuchPath)` - No child in that direction.
    /// * `Err(ExplorationError::SessionStopped)` - The session is terminal.
    pub fn move_to(&mut self, direction: Direction) -> Result<&Room, ExplorationError> {
        if self.state == SessionState::Stopped {
            return Err(ExplorationError::SessionStopped);
        }
        if self.current_room().child(direction).is_none() {
            debug!(%direction, room = self.current_room().name(), "no such path");
            return Err(ExplorationError::NoSuchPath { direction });
        }

        self.path.push(direction);
        debug!(%direction, room = self.current_room().name(), "entered room");
        self.process_room_entry();
        Ok(self.current_room())
    }

    /// Records the current room's clue and handles dead ends.
    ///
    /// Called exactly once per entry event. The map builder only produces
    /// non-empty texts, so the structure errors below are unreachable with
    /// the compiled-in map; they are logged rather than propagated to keep
    /// movement infallible beyond the path checks.
    fn process_room_entry(&mut self) {
        let (clue, suspect) = {
            let room = self.current_room();
            (
                room.clue().map(str::to_string),
                room.suspect_hint().map(str::to_string),
            )
        };

        if let Some(text) = clue {
            match self.clues.insert(&text) {
                Ok(true) => info!(clue = %text, "clue discovered"),
                Ok(false) => debug!(clue = %text, "clue already recorded"),
                Err(e) => warn!(error = %e, "clue discarded by index"),
            }
            if let Err(e) = self.ledger.associate(&text, suspect.as_deref()) {
                warn!(error = %e, "association discarded by ledger");
            }
        }

        if self.current_room().is_leaf() {
            info!(room = self.current_room().name(), "dead end reached");
            self.state = SessionState::Stopped;
        }
    }

    /// Lists all discovered clues in ascending lexicographic order.
    pub fn list_clues(&self) -> Vec<String> {
        self.clues.in_order_list()
    }

    /// Lists all suspects with their counts and clues, in ledger scan order.
    pub fn list_suspects(&self) -> Vec<SuspectSummary> {
        self.ledger
            .records()
            .map(|record| SuspectSummary {
                name: record.name().to_string(),
                count: record.count(),
                clues: record.clues().to_vec(),
            })
            .collect()
    }

    /// Returns the most likely suspect as a `(name, count)` pair.
    ///
    /// Ties are broken by ledger scan order; an empty ledger yields `None`.
    pub fn most_likely_suspect(&self) -> Option<(String, usize)> {
        self.ledger
            .most_likely()
            .map(|record| (record.name().to_string(), record.count()))
    }

    /// Stops the session. Idempotent.
    pub fn stop(&mut self) {
        if self.state != SessionState::Stopped {
            info!("exploration stopped");
            self.state = SessionState::Stopped;
        }
    }

    /// Returns the current machine state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns whether the session has reached its terminal state.
    pub fn is_stopped(&self) -> bool {
        self.state == SessionState::Stopped
    }
}

impl Default for ExplorationSession {
    fn default() -> Self {
        Self::start()
    }
}
