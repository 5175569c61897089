pub mod availability;
pub mod business;
pub mod employee;
pub mod health;
pub mod reservation;
pub mod service;
pub mod working_hours;
