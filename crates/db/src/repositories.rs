pub mod business;
pub mod employee;
pub mod reservation;
pub mod service;
pub mod working_hours;
