pub mod health;
pub mod home;
pub mod long_weekends;

pub use health::*;
pub use home::*;
pub use long_weekends::*;
