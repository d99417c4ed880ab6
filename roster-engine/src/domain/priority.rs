use chrono::Weekday;

use crate::domain::types::{DayRolePriorities, RoleDefinition};

/// Orders the roles to fill on one weekday.
///
/// Without an override map for the weekday, input order is the fill order.
/// With one, roles sort by their priority number (lower fills first); roles
/// absent from the map fill last. The sort is stable, so ties keep input
/// order. The fill order decides which role claims a contested member when
/// an exclusive group or a thin member pool creates contention.
pub fn order_roles<'a>(
    roles: &'a [RoleDefinition],
    weekday: Weekday,
    priorities: &DayRolePriorities,
) -> Vec<&'a RoleDefinition> {
    let mut ordered: Vec<&RoleDefinition> = roles.iter().collect();
    if let Some(overrides) = priorities.get(&weekday) {
        ordered.sort_by_key(|role| overrides.get(&role.id).copied().unwrap_or(i32::MAX));
    }
    ordered
}
