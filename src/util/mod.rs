//! Utility modules for rostertop.

mod timestamp;

pub use timestamp::{TimestampParseError, display_timestamp, parse_timestamp};
