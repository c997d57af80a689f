pub mod components;
pub mod config;
pub mod date_utils;
pub mod dependent_loader;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod storage;
pub mod table_engine;
