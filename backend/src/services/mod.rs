pub mod holiday_source;
pub mod long_weekend;
