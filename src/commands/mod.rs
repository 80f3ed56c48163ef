pub mod ai;
pub mod analytics;
pub mod config;
pub mod help;
pub mod helpers;
pub mod models;
pub mod natural;
pub mod shell;
pub mod switch;
pub mod todos;
pub mod tools;
