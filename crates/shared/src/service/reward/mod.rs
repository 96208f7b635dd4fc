pub mod calculator;
pub mod service;
