use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use crate::domain::types::{MemberInfo, RoleDefinition, ScheduleAssignment};
use crate::domain::weekday::weekday_of;

/// Rotation pointer state: for each role, for each weekday, the index of the
/// next candidate to try in that role's rotation list.
pub type RotationPointers = HashMap<i32, HashMap<Weekday, usize>>;

/// Builds the rotation list for every role: the members capable of the role,
/// ordered by name (byte-wise, locale-independent) and then by id.
///
/// The order is derived only from member data, never from input array order,
/// so a pointer index keeps the same meaning run over run. Every role gets an
/// entry; a role nobody can fill gets an empty list.
pub fn build_rotation_lists(
    roles: &[RoleDefinition],
    members: &[MemberInfo],
) -> HashMap<i32, Vec<Uuid>> {
    roles
        .iter()
        .map(|role| {
            let mut capable: Vec<&MemberInfo> = members
                .iter()
                .filter(|member| member.role_ids.contains(&role.id))
                .collect();
            capable.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            (role.id, capable.into_iter().map(|m| m.id).collect())
        })
        .collect()
}

/// Seeds the per-(role, weekday) rotation pointers from historical
/// assignments so that fairness carries across scheduling runs.
///
/// For each role and weekday the single latest historical assignment wins
/// (ties on the date keep the first one seen), and the pointer lands just
/// past that member's index, wrapping around. A member no longer in the
/// rotation list leaves that pointer unseeded; unseeded pointers start at 0.
pub fn seed_pointers(
    rotation_lists: &HashMap<i32, Vec<Uuid>>,
    previous_assignments: &[ScheduleAssignment],
) -> RotationPointers {
    let mut latest: HashMap<(i32, Weekday), (NaiveDate, Uuid)> = HashMap::new();
    for assignment in previous_assignments {
        let key = (assignment.role_id, weekday_of(assignment.date));
        match latest.get(&key) {
            Some((held_date, _)) if *held_date >= assignment.date => {}
            _ => {
                latest.insert(key, (assignment.date, assignment.member_id));
            }
        }
    }

    let mut pointers: RotationPointers = HashMap::new();
    for ((role_id, weekday), (_, member_id)) in latest {
        let Some(list) = rotation_lists.get(&role_id) else {
            continue;
        };
        if let Some(index) = list.iter().position(|&id| id == member_id) {
            pointers
                .entry(role_id)
                .or_default()
                .insert(weekday, (index + 1) % list.len());
        }
    }

    let seeded: usize = pointers.values().map(HashMap::len).sum();
    tracing::debug!(seeded_pointers = seeded, "Seeded rotation pointers");

    pointers
}
