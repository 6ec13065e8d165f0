// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod demos;
pub mod runner;
pub mod specs;
pub mod stats;
pub mod store;
