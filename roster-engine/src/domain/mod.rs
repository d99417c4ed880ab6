pub mod eligibility;
pub mod engine;
pub mod priority;
pub mod rotation;
pub mod types;
pub mod weekday;
