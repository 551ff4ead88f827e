//! Section assemblers, one module per record kind.
//!
//! - [`workouts`]: workout summary, details and laps
//! - [`wellness`]: daily wellness entries
//! - [`events`]: event summary and details
//! - [`zones`]: time-in-zone breakdowns shared by the workout formatters

pub mod events;
pub mod wellness;
pub mod workouts;
pub mod zones;
