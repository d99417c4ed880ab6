use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// region: Input Types

/// A role filled automatically by the engine.
///
/// Roles whose filler is picked manually from a prerequisite role never reach
/// the engine; the calling layer filters them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleDefinition {
    pub id: i32,
    /// Display label, not consulted by the algorithm.
    pub name: String,
    /// People needed per date. Must be at least 1.
    pub required_count: u32,
    /// Roles sharing a tag may not both go to the same member on one date.
    pub exclusive_group: Option<String>,
}

/// Closed date interval during which a member is unavailable, both bounds
/// inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HolidayRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl HolidayRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A schedulable person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberInfo {
    pub id: Uuid,
    /// Ordering key for the rotation list, nothing more.
    pub name: String,
    /// Roles this member may fill.
    pub role_ids: HashSet<i32>,
    /// Weekdays this member can ever serve, independent of holidays.
    pub available_days: HashSet<Weekday>,
    pub holidays: Vec<HolidayRange>,
}

impl MemberInfo {
    pub fn is_on_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|range| range.contains(date))
    }
}

/// Per-weekday fill-order overrides: `weekday -> role id -> priority`,
/// lower priority fills first. Roles without an entry fill last.
pub type DayRolePriorities = HashMap<Weekday, HashMap<i32, i32>>;

// endregion: Input Types

// region: Output Types

/// One placement of a member into a role on a date. Also the shape of the
/// historical assignments used to seed the rotation pointers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleAssignment {
    pub date: NaiveDate,
    pub role_id: i32,
    pub member_id: Uuid,
}

/// A required slot for which no eligible member was found. Emitted once per
/// vacant slot, so a role needing 2 with only 1 taker yields exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnfilledSlot {
    pub date: NaiveDate,
    pub role_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleOutcome {
    pub assignments: Vec<ScheduleAssignment>,
    pub unfilled_slots: Vec<UnfilledSlot>,
}

// endregion: Output Types
