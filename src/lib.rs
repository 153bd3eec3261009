pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod logging;
pub mod metrics;
pub mod process_table;
pub mod report;
pub mod ui;
pub mod view;
