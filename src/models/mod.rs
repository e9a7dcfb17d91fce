pub mod airline;
pub mod category;
pub mod city;
pub mod phase;
pub mod reading;
pub mod schedule;
pub mod task;
pub mod tool;
pub mod weather;
