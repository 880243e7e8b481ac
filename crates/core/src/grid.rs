// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The weekly planning grid.
//!
//! One row per room; within a row, one cell per (start time, weekday)
//! pair, time-major. Cells are addressed by [`CellKey`].

use planif_domain::{DayOfWeek, ResolvedSlot, Room, Session, Slot, TimeOfDay};
use std::collections::{BTreeSet, HashMap, HashSet};

/// The address of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub day: DayOfWeek,
    pub time: TimeOfDay,
    pub room_id: i64,
}

/// An action a session card offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    View,
    Edit,
    Delete,
}

impl CardAction {
    /// Every card exposes these, in this order.
    pub const ALL: [Self; 3] = [Self::View, Self::Edit, Self::Delete];

    /// Returns the button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::View => "Voir",
            Self::Edit => "Modifier",
            Self::Delete => "Supprimer",
        }
    }
}

/// A session as displayed inside one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCard {
    pub session_id: i64,
    pub title: String,
    /// `HH:MM - HH:MM`, or the start alone when the end is unknown.
    pub time_label: String,
    pub instructor: String,
    pub room: String,
    pub group: String,
    /// Lowercase ASCII status key, `planifie` when absent.
    pub status_class: String,
    pub actions: [CardAction; 3],
}

impl SessionCard {
    /// Builds the card for `session` placed on `slot`.
    #[must_use]
    pub fn new(session: &Session, slot: &ResolvedSlot) -> Self {
        let name_or_dash = |name: Option<String>| name.unwrap_or_else(|| String::from("-"));
        Self {
            session_id: session.id,
            title: session.title().to_string(),
            time_label: slot.time_label(),
            instructor: name_or_dash(session.instructor_name()),
            room: name_or_dash(session.room_name()),
            group: name_or_dash(session.group_name()),
            status_class: session.status_key(),
            actions: CardAction::ALL,
        }
    }
}

/// One cell of a room row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub key: CellKey,
    pub cards: Vec<SessionCard>,
}

impl Cell {
    /// Whether at least one session is displayed here.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        !self.cards.is_empty()
    }
}

/// The cells of one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    pub room: Room,
    pub cells: Vec<Cell>,
}

impl RoomRow {
    /// Returns the cell for a weekday and start time.
    #[must_use]
    pub fn cell(&self, day: DayOfWeek, time: TimeOfDay) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.key.day == day && c.key.time == time)
    }
}

/// Outcome of inserting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The card was added.
    Inserted,
    /// The session already has a card in this cell; nothing changed.
    Duplicate,
    /// The key does not address a cell of this grid.
    MissingCell,
}

/// The planning grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    times: Vec<TimeOfDay>,
    rows: Vec<RoomRow>,
    index: HashMap<CellKey, (usize, usize)>,
    rendered: HashSet<(i64, CellKey)>,
}

impl Grid {
    /// Builds an empty grid for the given rooms and slots.
    ///
    /// Start times are the distinct `heureDebut` values across all slots,
    /// ascending. With no slots, every row has zero cells.
    ///
    /// # Arguments
    ///
    /// * `rooms` - One row is produced per room, in order
    /// * `slots` - Every loaded slot, whatever its day or date
    #[must_use]
    pub fn materialize(rooms: &[Room], slots: &[Slot]) -> Self {
        let times: Vec<TimeOfDay> = slots
            .iter()
            .filter_map(|slot| slot.heure_debut)
            .collect::<BTreeSet<TimeOfDay>>()
            .into_iter()
            .collect();

        let mut index: HashMap<CellKey, (usize, usize)> = HashMap::new();
        let rows: Vec<RoomRow> = rooms
            .iter()
            .enumerate()
            .map(|(row_index, room)| {
                let cells: Vec<Cell> = times
                    .iter()
                    .flat_map(|&time| {
                        DayOfWeek::GRID_DAYS.iter().map(move |&day| Cell {
                            key: CellKey {
                                day,
                                time,
                                room_id: room.id,
                            },
                            cards: Vec::new(),
                        })
                    })
                    .collect();
                for (cell_index, cell) in cells.iter().enumerate() {
                    index.entry(cell.key).or_insert((row_index, cell_index));
                }
                RoomRow {
                    room: room.clone(),
                    cells,
                }
            })
            .collect();

        tracing::debug!(
            rooms = rows.len(),
            start_times = times.len(),
            "Materialized planning grid"
        );

        Self {
            times,
            rows,
            index,
            rendered: HashSet::new(),
        }
    }

    /// Clears every card and rebuilds the rows from scratch.
    pub fn rebuild(&mut self, rooms: &[Room], slots: &[Slot]) {
        *self = Self::materialize(rooms, slots);
    }

    /// The distinct start times, ascending.
    #[must_use]
    pub fn times(&self) -> &[TimeOfDay] {
        &self.times
    }

    #[must_use]
    pub fn rows(&self) -> &[RoomRow] {
        &self.rows
    }

    /// Returns the cell at `key`.
    #[must_use]
    pub fn cell(&self, key: &CellKey) -> Option<&Cell> {
        let &(row, cell) = self.index.get(key)?;
        self.rows.get(row)?.cells.get(cell)
    }

    /// Total number of cells across all rows.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Iterates over cells that hold at least one card.
    pub fn occupied_cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.is_occupied())
    }

    /// Total number of cards across the grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .map(|c| c.cards.len())
            .sum()
    }

    /// Finds the cell for a weekday and start time in a room.
    ///
    /// Without a room id, the first cell of any room matching the weekday
    /// and time is used; this may pick the wrong room when several rooms
    /// share the slot.
    ///
    /// # Returns
    ///
    /// * `Some(CellKey)` if a cell matches
    /// * `None` if the grid has no such cell
    #[must_use]
    pub fn locate_cell(
        &self,
        day: DayOfWeek,
        time: TimeOfDay,
        room_id: Option<i64>,
    ) -> Option<CellKey> {
        if let Some(room_id) = room_id {
            let key: CellKey = CellKey { day, time, room_id };
            return self.index.contains_key(&key).then_some(key);
        }

        let found: Option<CellKey> = self
            .rows
            .iter()
            .find_map(|row| row.cell(day, time))
            .map(|cell| cell.key);
        if let Some(key) = found {
            tracing::warn!(
                day = %day,
                time = %time,
                room_id = key.room_id,
                "No room on session; using first cell matching day and time"
            );
        }
        found
    }

    /// Adds a card to the cell at `key`.
    ///
    /// A session gets at most one card per cell; inserting it again is a no-op.
    pub fn place(&mut self, key: CellKey, card: SessionCard) -> Placement {
        let Some(&(row, cell)) = self.index.get(&key) else {
            return Placement::MissingCell;
        };
        if self.rendered.contains(&(card.session_id, key)) {
            tracing::debug!(session_id = card.session_id, ?key, "Card already present");
            return Placement::Duplicate;
        }
        let Some(target) = self.rows.get_mut(row).and_then(|r| r.cells.get_mut(cell)) else {
            return Placement::MissingCell;
        };
        self.rendered.insert((card.session_id, key));
        target.cards.push(card);
        Placement::Inserted
    }

    /// Removes every card while keeping the rows and cells.
    pub fn clear_cards(&mut self) {
        for cell in self.rows.iter_mut().flat_map(|r| r.cells.iter_mut()) {
            cell.cards.clear();
        }
        self.rendered.clear();
    }
}
