pub mod backup;
pub mod calendar;
pub mod compare;
pub mod cycle;
pub mod inr;
pub mod log;
pub mod schedule;
pub mod todo;
pub mod tools;
pub mod weather;
