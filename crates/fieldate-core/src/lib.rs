//! # Fieldate Core Library
//!
//! Date handling for field trial records: flexible parsing of the date
//! conventions found in trial data, compact display formatting, and
//! classification of protocol due dates into urgency buckets.
//!
//! ## Core Modules
//!
//! - [`parse`]: Ordered shape detection and calendar validation
//! - [`urgency`]: Day differences, urgency buckets and their colors
//! - [`format`]: Compact, due, audit and relative display strings
//! - [`protocol`]: Protocol card and last-updated summaries
//! - [`clock`]: Sources of "today"
//! - [`timezone`]: Timezone validation and suggestions
//! - [`models`]: Core data structures
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fieldate_core::{
//!     clock::FixedClock,
//!     format::format_compact_date,
//!     models::UrgencyBucket,
//!     urgency::classify_due_date,
//! };
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
//!
//! assert_eq!(format_compact_date(Some("2024-03-18")), "18 Mar");
//! assert_eq!(classify_due_date(Some("2024-04-16"), &clock), UrgencyBucket::DueSoon);
//! assert_eq!(classify_due_date(Some("10/04/2024"), &clock).color(), "#E53E3E");
//! ```

pub mod clock;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod protocol;
pub mod timezone;
pub mod urgency;
