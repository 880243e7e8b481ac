// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::grid::{RoomRow, SessionCard};
use planif_domain::status_key;
use std::str::FromStr;

/// Which rooms the grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomFilter {
    #[default]
    All,
    Room(i64),
}

impl FromStr for RoomFilter {
    type Err = std::num::ParseIntError;

    /// `all` (or empty) shows every room; anything else must be a room id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse::<i64>().map(Self::Room)
    }
}

/// Which session statuses the grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Planned in the broad sense: planned, confirmed or waiting.
    Planned,
    /// A single status key.
    Exact(String),
}

impl StatusFilter {
    /// Whether a card with this status class passes.
    #[must_use]
    pub fn matches(&self, status_class: &str) -> bool {
        match self {
            Self::All => true,
            Self::Planned => matches!(status_class, "planifie" | "confirmee" | "attente"),
            Self::Exact(key) => status_class == key,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = status_key(s);
        Ok(match key.as_str() {
            "" | "all" => Self::All,
            "planifie" => Self::Planned,
            _ => Self::Exact(key),
        })
    }
}

/// The room and status filters applied when displaying the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridFilter {
    pub room: RoomFilter,
    pub status: StatusFilter,
}

impl GridFilter {
    #[must_use]
    pub fn row_visible(&self, row: &RoomRow) -> bool {
        match self.room {
            RoomFilter::All => true,
            RoomFilter::Room(id) => row.room.id == id,
        }
    }

    #[must_use]
    pub fn card_visible(&self, card: &SessionCard) -> bool {
        self.status.matches(&card.status_class)
    }

    /// Iterates over the rows that pass the room filter.
    pub fn visible_rows<'a>(&'a self, rows: &'a [RoomRow]) -> impl Iterator<Item = &'a RoomRow> {
        rows.iter().filter(move |row| self.row_visible(row))
    }
}
