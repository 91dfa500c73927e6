//! Course timetable with conflict detection.
//!
//! Keeps a user's set of enrolled courses and guarantees that no two of
//! them meet at the same time. Courses come from a read-only
//! [`catalog`]; the enrolled set is persisted through a [`store`].

pub mod catalog;
pub mod config;
pub mod domain;
pub mod record;
pub mod schedule;
pub mod store;

pub use schedule::{ConflictKind, Timetable, TimetableError};
