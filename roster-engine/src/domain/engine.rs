use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use crate::domain::eligibility::DayState;
use crate::domain::priority::order_roles;
use crate::domain::rotation::{RotationPointers, build_rotation_lists, seed_pointers};
use crate::domain::types::{
    DayRolePriorities, MemberInfo, RoleDefinition, ScheduleAssignment, ScheduleOutcome,
    UnfilledSlot,
};
use crate::domain::weekday::weekday_of;
use crate::error::RosterError;

// region: Input validation

fn validate_input(roles: &[RoleDefinition], members: &[MemberInfo]) -> Result<(), RosterError> {
    let mut role_ids = HashSet::new();
    for role in roles {
        if role.required_count == 0 {
            return Err(RosterError::InvalidRequiredCount { role_id: role.id });
        }
        if !role_ids.insert(role.id) {
            return Err(RosterError::DuplicateRoleId { role_id: role.id });
        }
    }

    let mut member_ids = HashSet::new();
    for member in members {
        if !member_ids.insert(member.id) {
            return Err(RosterError::DuplicateMemberId {
                member_id: member.id,
            });
        }
        for range in &member.holidays {
            if range.start_date > range.end_date {
                return Err(RosterError::InvalidHolidayRange {
                    member_id: member.id,
                    start: range.start_date,
                    end: range.end_date,
                });
            }
        }
    }

    Ok(())
}

// endregion: Input validation

// region: Main algo

/// Assigns members to every required role slot on every date.
///
/// Each role rotates through its name-ordered member list with one pointer
/// per weekday, seeded from `previous_assignments` so fairness carries
/// across runs. Slots nobody can take are reported in
/// [`ScheduleOutcome::unfilled_slots`]; a pointer moves only when a slot is
/// actually filled. The fill is greedy and never backtracks: once placed, a
/// member is not reconsidered even if a different pick would have filled
/// more slots overall.
#[tracing::instrument(skip_all, fields(date_count = dates.len()))]
pub fn generate_schedule(
    dates: &[NaiveDate],
    roles: &[RoleDefinition],
    members: &[MemberInfo],
    previous_assignments: &[ScheduleAssignment],
    day_role_priorities: &DayRolePriorities,
) -> Result<ScheduleOutcome, RosterError> {
    validate_input(roles, members)?;

    tracing::debug!(
        role_count = roles.len(),
        member_count = members.len(),
        history_count = previous_assignments.len(),
        "Starting roster generation"
    );

    let members_by_id: HashMap<Uuid, &MemberInfo> =
        members.iter().map(|m| (m.id, m)).collect();
    let rotation_lists = build_rotation_lists(roles, members);
    let mut pointers: RotationPointers = seed_pointers(&rotation_lists, previous_assignments);

    let mut assignments: Vec<ScheduleAssignment> = Vec::new();
    let mut unfilled_slots: Vec<UnfilledSlot> = Vec::new();

    for &date in dates {
        let weekday = weekday_of(date);
        let mut day_state = DayState::default();

        for role in order_roles(roles, weekday, day_role_priorities) {
            let list = rotation_lists
                .get(&role.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            for _slot in 0..role.required_count {
                let pointer = pointers
                    .get(&role.id)
                    .and_then(|by_day| by_day.get(&weekday))
                    .copied()
                    .unwrap_or(0);

                match next_eligible(list, pointer, &members_by_id, role, date, weekday, &day_state)
                {
                    Some((index, member_id)) => {
                        assignments.push(ScheduleAssignment {
                            date,
                            role_id: role.id,
                            member_id,
                        });
                        day_state.record_assignment(member_id, role);
                        pointers
                            .entry(role.id)
                            .or_default()
                            .insert(weekday, (index + 1) % list.len());
                    }
                    None => {
                        // Pointer stays put: a skipped turn must come back.
                        unfilled_slots.push(UnfilledSlot {
                            date,
                            role_id: role.id,
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(
        assignment_count = assignments.len(),
        unfilled_count = unfilled_slots.len(),
        "Roster generation completed"
    );

    Ok(ScheduleOutcome {
        assignments,
        unfilled_slots,
    })
}

/// Scans the rotation list once around, starting at `pointer`, for the first
/// eligible member. Visits each entry at most once, so an unfillable slot
/// costs exactly `list.len()` eligibility checks.
fn next_eligible(
    list: &[Uuid],
    pointer: usize,
    members_by_id: &HashMap<Uuid, &MemberInfo>,
    role: &RoleDefinition,
    date: NaiveDate,
    weekday: Weekday,
    day_state: &DayState,
) -> Option<(usize, Uuid)> {
    for offset in 0..list.len() {
        let index = (pointer + offset) % list.len();
        let member_id = list[index];
        let Some(member) = members_by_id.get(&member_id) else {
            continue;
        };
        if day_state.is_eligible(member, role, date, weekday) {
            return Some((index, member_id));
        }
    }
    None
}

// endregion: Main algo
