pub mod analysis;
pub mod app;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod entry_session;
pub mod logging;
pub mod meal_log;
pub mod nutrients;
pub mod recipes;
pub mod report;
pub mod storage;
