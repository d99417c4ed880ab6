//! Rotating role-assignment engine.
//!
//! Given a list of dates, role definitions, and member availability data,
//! [`generate_schedule`](domain::engine::generate_schedule) produces
//! `(date, role, member)` assignments plus the slots that could not be
//! filled, rotating fairly per weekday. The engine is a pure, synchronous
//! function: callers load members, roles, and prior assignments beforehand
//! and persist the outcome afterwards.

pub mod config;
pub mod domain;
pub mod error;

pub use domain::engine::generate_schedule;
pub use domain::types::{
    DayRolePriorities, HolidayRange, MemberInfo, RoleDefinition, ScheduleAssignment,
    ScheduleOutcome, UnfilledSlot,
};
pub use error::RosterError;
