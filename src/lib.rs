pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use calculator::{CalcResult, evaluate, evaluate_display};
