pub mod app;
pub mod assembly;
pub mod bucket;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod stack;
pub mod template;
pub mod writer;
