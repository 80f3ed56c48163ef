#![forbid(unsafe_code)]

pub mod autonomous;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod intent;
pub mod interaction_log;
pub mod interpret;
pub mod model;
pub mod models;
pub mod platform;
pub mod repl;
pub mod session;
pub mod todo;
pub mod utils;
