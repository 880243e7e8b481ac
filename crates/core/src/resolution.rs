// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolving a session's slot references against the loaded slots.

use planif_domain::{DayOfWeek, ResolvedSlot, Session, Slot, SlotRef, TimeOfDay};
use std::collections::HashMap;
use time::Date;

/// Every slot loaded for the page, indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
    by_id: HashMap<i64, usize>,
}

impl SlotCatalog {
    /// Indexes the given slots. When ids repeat, the first slot wins.
    #[must_use]
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut by_id: HashMap<i64, usize> = HashMap::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            by_id.entry(slot.id).or_insert(index);
        }
        Self { slots, by_id }
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks a slot up by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Slot> {
        self.by_id.get(&id).and_then(|&index| self.slots.get(index))
    }

    /// Returns every slot whose start and end are exactly `start` and `end`.
    #[must_use]
    pub fn with_times(&self, start: TimeOfDay, end: TimeOfDay) -> Vec<&Slot> {
        self.slots
            .iter()
            .filter(|slot| slot.heure_debut == Some(start) && slot.heure_fin == Some(end))
            .collect()
    }
}

/// Why a slot reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// No loaded slot has this id.
    UnknownSlotId(i64),
    /// No loaded slot has these start and end times.
    NoSlotWithTimes { start: TimeOfDay, end: TimeOfDay },
    /// The slot exists but lacks its weekday or start time.
    IncompleteSlot(i64),
    /// The reference has no usable shape.
    Unrecognized,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSlotId(id) => write!(f, "no slot with id {id}"),
            Self::NoSlotWithTimes { start, end } => write!(f, "no slot at {start} - {end}"),
            Self::IncompleteSlot(id) => write!(f, "slot {id} has no weekday or start time"),
            Self::Unrecognized => write!(f, "unrecognized slot reference"),
        }
    }
}

/// A slot reference that was dropped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRef {
    pub reference: SlotRef,
    pub reason: DropReason,
}

/// The outcome of resolving one session.
///
/// Every input reference ends up either in `slots` or in `dropped`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub slots: Vec<ResolvedSlot>,
    pub dropped: Vec<DroppedRef>,
}

fn lookup(catalog: &SlotCatalog, id: i64) -> Result<ResolvedSlot, DropReason> {
    let slot: &Slot = catalog.get(id).ok_or(DropReason::UnknownSlotId(id))?;
    slot.resolved().ok_or(DropReason::IncompleteSlot(id))
}

/// Picks one slot among several sharing the same times.
///
/// Prefers the slot on the session's start date, then one on the same
/// weekday, then the first candidate.
fn disambiguate<'a>(candidates: &[&'a Slot], session_date: Option<Date>) -> Option<&'a Slot> {
    if let [only] = candidates {
        return Some(*only);
    }
    if let Some(date) = session_date {
        if let Some(exact) = candidates.iter().find(|s| s.date == Some(date)) {
            return Some(*exact);
        }
        let weekday: DayOfWeek = DayOfWeek::from_date(date);
        if let Some(same_day) = candidates
            .iter()
            .find(|s| s.jour_semaine == Some(weekday))
        {
            return Some(*same_day);
        }
    }
    let first: Option<&'a Slot> = candidates.first().copied();
    if let Some(slot) = first {
        tracing::warn!(
            slot_id = slot.id,
            candidates = candidates.len(),
            "Ambiguous time range; using first matching slot"
        );
    }
    first
}

fn resolve_one(
    reference: &SlotRef,
    catalog: &SlotCatalog,
    session_date: Option<Date>,
) -> Result<ResolvedSlot, DropReason> {
    match reference {
        SlotRef::Id(id) | SlotRef::Partial { id } => lookup(catalog, *id),
        SlotRef::TimeRange { start, end } => {
            let candidates: Vec<&Slot> = catalog
                .with_times(*start, *end)
                .into_iter()
                .filter(|slot| slot.resolved().is_some())
                .collect();
            disambiguate(&candidates, session_date)
                .and_then(Slot::resolved)
                .ok_or(DropReason::NoSlotWithTimes {
                    start: *start,
                    end: *end,
                })
        }
        SlotRef::Full(slot) => slot.resolved().ok_or(DropReason::IncompleteSlot(slot.id)),
        SlotRef::Unrecognized(_) => Err(DropReason::Unrecognized),
    }
}

/// Resolves every slot reference of a session.
///
/// # Arguments
///
/// * `session` - The session whose `creneaux` are resolved; its start date
///   disambiguates time-range references
/// * `catalog` - The slots loaded for the page
///
/// # Returns
///
/// The resolved slots in reference order, and every dropped reference.
#[must_use]
pub fn resolve_slot_refs(session: &Session, catalog: &SlotCatalog) -> Resolution {
    let session_date: Option<Date> = session.start_date();
    let mut resolution: Resolution = Resolution::default();

    for reference in &session.creneaux {
        match resolve_one(reference, catalog, session_date) {
            Ok(slot) => resolution.slots.push(slot),
            Err(reason) => {
                tracing::warn!(session_id = session.id, %reason, "Dropping slot reference");
                resolution.dropped.push(DroppedRef {
                    reference: reference.clone(),
                    reason,
                });
            }
        }
    }

    resolution
}
