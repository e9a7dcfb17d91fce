//! Static reference data compiled into the binary.

pub mod airlines;
pub mod cities;
pub mod default_schedule;
pub mod home_tools;
