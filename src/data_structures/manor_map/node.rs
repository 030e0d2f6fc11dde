//! Room node implementation for the Manor Map.
//!
//! This module provides the Room structure used in the Manor Map. Rooms are
//! the fundamental building blocks of the map, each optionally carrying a
//! discoverable clue and the suspect it implicates.

use std::fmt;

/// A direction of travel from a room to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Descend into the left child.
    Left,
    /// Descend into the right child.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// A room in the Manor Map.
///
/// Each room has a display name and exclusively owns its children, so the map
/// is a strict tree. A room may carry a clue, and a clue may implicate a
/// suspect; a suspect hint without a clue is never constructed by the builder.
#[derive(Debug)]
pub struct Room {
    /// Display name of the room. Not required to be unique.
    name: String,

    /// Clue text discoverable by entering this room, if any.
    clue: Option<String>,

    /// Suspect implicated by the clue, if any.
    suspect_hint: Option<String>,

    /// Left child room.
    left: Option<Box<Room>>,

    /// Right child room.
    right: Option<Box<Room>>,
}

impl Room {
    /// Creates a new room with the given display name and no clue.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            clue: None,
            suspect_hint: None,
            left: None,
            right: None,
        }
    }

    /// Attach a discoverable clue to this room.
    pub fn with_clue<C: Into<String>>(mut self, clue: C) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Name the suspect implicated by this room's clue.
    pub fn with_suspect<C: Into<String>>(mut self, suspect: C) -> Self {
        self.suspect_hint = Some(suspect.into());
        self
    }

    /// Wires both child pointers at once; `None` leaves a path absent.
    ///
    /// Only meaningful during map construction; the builder is trusted not to
    /// introduce cycles or re-parent rooms.
    pub fn connect(&mut self, left: Option<Room>, right: Option<Room>) {
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
    }

    /// Returns the child room in the given direction, or `None` when there is
    /// no such path.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// A room with no children is a dead end; exploration terminates here.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the display name of the room.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the clue text carried by this room, if any.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Returns the suspect implicated by this room's clue, if any.
    pub fn suspect_hint(&self) -> Option<&str> {
        self.suspect_hint.as_deref()
    }
}
