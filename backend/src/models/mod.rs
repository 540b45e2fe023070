//! Data models shared between the holiday provider client and API handlers.

pub mod holiday;
pub mod long_weekend;
