use thiserror::Error;
use uuid::Uuid;

/// Input-contract violations.
///
/// These indicate a bug in the calling layer, never a runtime scheduling
/// shortfall: not being able to fill a slot is reported as data in the
/// outcome, not as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// A role asks for zero people per date.
    #[error("Role {role_id} has required_count 0; it must be at least 1")]
    InvalidRequiredCount { role_id: i32 },

    /// Two roles share an id.
    #[error("Duplicate role id {role_id}")]
    DuplicateRoleId { role_id: i32 },

    /// Two members share an id.
    #[error("Duplicate member id {member_id}")]
    DuplicateMemberId { member_id: Uuid },

    /// A holiday interval ends before it starts.
    #[error("Member {member_id} has a holiday range ending before it starts ({start} > {end})")]
    InvalidHolidayRange {
        member_id: Uuid,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
