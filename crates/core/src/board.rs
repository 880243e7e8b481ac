// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::filters::GridFilter;
use crate::grid::Grid;
use crate::placement::{PlacementReport, render_sessions};
use crate::planning::sessions_for_planning;
use crate::resolution::SlotCatalog;
use crate::submission::Submission;
use planif_domain::{
    DomainError, Equipment, Group, Instructor, Planning, Room, Session, Slot, WeekView,
};
use time::Date;

/// Everything the planning page holds.
///
/// Loaders fill the collections in; every setter that affects the grid
/// redraws it, so the grid always reflects the collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningBoard {
    week: WeekView,
    catalog: SlotCatalog,
    planning: Option<Planning>,
    rooms: Vec<Room>,
    sessions: Vec<Session>,
    instructors: Vec<Instructor>,
    groups: Vec<Group>,
    equipment: Vec<Equipment>,
    grid: Grid,
    report: PlacementReport,
    filter: GridFilter,
    submission: Submission,
}

impl PlanningBoard {
    /// Creates an empty board showing the week of `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is outside the supported date range.
    pub fn new(today: Date) -> Result<Self, DomainError> {
        Ok(Self {
            week: WeekView::new(today, 0)?,
            catalog: SlotCatalog::default(),
            planning: None,
            rooms: Vec::new(),
            sessions: Vec::new(),
            instructors: Vec::new(),
            groups: Vec::new(),
            equipment: Vec::new(),
            grid: Grid::default(),
            report: PlacementReport::default(),
            filter: GridFilter::default(),
            submission: Submission::new(),
        })
    }

    #[must_use]
    pub const fn week(&self) -> &WeekView {
        &self.week
    }

    #[must_use]
    pub const fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn planning(&self) -> Option<&Planning> {
        self.planning.as_ref()
    }

    #[must_use]
    pub fn planning_id(&self) -> Option<i64> {
        self.planning.as_ref().map(|p| p.id)
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The outcome of the last redraw.
    #[must_use]
    pub const fn report(&self) -> &PlacementReport {
        &self.report
    }

    #[must_use]
    pub const fn filter(&self) -> &GridFilter {
        &self.filter
    }

    #[must_use]
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }

    pub const fn submission_mut(&mut self) -> &mut Submission {
        &mut self.submission
    }

    /// Finds a loaded session by id.
    #[must_use]
    pub fn session(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn set_slots(&mut self, slots: Vec<Slot>) {
        self.catalog = SlotCatalog::new(slots);
        self.redraw();
    }

    pub fn set_planning(&mut self, planning: Planning) {
        self.planning = Some(planning);
        self.redraw();
    }

    pub fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
        self.redraw();
    }

    pub fn set_sessions(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
        self.redraw();
    }

    pub fn set_instructors(&mut self, instructors: Vec<Instructor>) {
        self.instructors = instructors;
    }

    pub fn set_groups(&mut self, groups: Vec<Group>) {
        self.groups = groups;
    }

    pub fn set_equipment(&mut self, equipment: Vec<Equipment>) {
        self.equipment = equipment;
    }

    /// Filters only change what is displayed; the grid is left as is.
    pub fn set_filter(&mut self, filter: GridFilter) {
        self.filter = filter;
    }

    /// Moves the displayed week by `weeks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is outside the supported date range.
    pub fn shift_week(&mut self, weeks: i64) -> Result<(), CoreError> {
        let mut week: WeekView = self.week;
        for _ in 0..weeks.unsigned_abs() {
            week = if weeks < 0 {
                week.previous()?
            } else {
                week.next()?
            };
        }
        self.week = week;
        Ok(())
    }

    /// Rebuilds the grid and places the planning's sessions on it.
    pub fn redraw(&mut self) -> &PlacementReport {
        self.grid.rebuild(&self.rooms, self.catalog.slots());
        let visible: Vec<&Session> = sessions_for_planning(&self.sessions, self.planning_id());
        self.report = render_sessions(&mut self.grid, visible, &self.catalog);
        &self.report
    }
}
