//! Load two numeric text files, summarize them, and hand histogram data to a
//! plotting sink.

pub mod compare;
pub mod config;
pub mod data;
pub mod plot;
pub mod processing;
pub mod report;
pub mod state;
