pub mod ranking;
pub mod statistics;
