pub mod airline;
pub mod backup;
pub mod calendar;
pub mod city;
pub mod config;
pub mod cycle;
pub mod db;
pub mod init;
pub mod inr;
pub mod log;
pub mod schedule;
pub mod todo;
pub mod tools;
pub mod weather;
