pub mod guard;
pub mod schedule;
pub mod time;
pub mod token;
