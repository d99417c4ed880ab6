use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use crate::domain::types::{MemberInfo, RoleDefinition};

/// Per-date assignment bookkeeping, reset for every date the engine
/// processes: which exclusive-group tags each member has consumed and which
/// roles each member already holds on the date.
#[derive(Debug, Default)]
pub struct DayState {
    exclusive_groups_used: HashMap<Uuid, HashSet<String>>,
    roles_assigned: HashMap<Uuid, HashSet<i32>>,
}

impl DayState {
    /// Whether the member may take the role on the given date.
    ///
    /// Checks, in order: weekday availability, holidays (inclusive bounds),
    /// the duplicate-role guard for multi-slot roles, and the
    /// exclusive-group guard. Capability is re-checked even though the
    /// rotation list already encodes it.
    pub fn is_eligible(
        &self,
        member: &MemberInfo,
        role: &RoleDefinition,
        date: NaiveDate,
        weekday: Weekday,
    ) -> bool {
        if !member.role_ids.contains(&role.id) {
            return false;
        }
        if !member.available_days.contains(&weekday) {
            return false;
        }
        if member.is_on_holiday(date) {
            return false;
        }
        if self
            .roles_assigned
            .get(&member.id)
            .is_some_and(|roles| roles.contains(&role.id))
        {
            return false;
        }
        if let Some(tag) = &role.exclusive_group
            && self
                .exclusive_groups_used
                .get(&member.id)
                .is_some_and(|tags| tags.contains(tag))
        {
            return false;
        }
        true
    }

    /// Records a successful placement so later slots on the same date see
    /// the member's consumed role and exclusive group.
    pub fn record_assignment(&mut self, member_id: Uuid, role: &RoleDefinition) {
        self.roles_assigned
            .entry(member_id)
            .or_default()
            .insert(role.id);
        if let Some(tag) = &role.exclusive_group {
            self.exclusive_groups_used
                .entry(member_id)
                .or_default()
                .insert(tag.clone());
        }
    }
}
