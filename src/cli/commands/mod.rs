pub mod config;
pub mod outline;
pub mod steps;
