// src/lib.rs

#[macro_use]
pub mod macros;

pub mod admin;
pub mod axl;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;

pub use config::Config;
pub use error::{Error, Result};
