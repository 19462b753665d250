pub mod classify;
pub mod due;
pub mod format;
pub mod info;
pub mod relative;
pub mod timezones;
pub mod updated;
