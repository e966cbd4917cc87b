pub mod api;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod leads;
pub mod middleware;
pub mod models;
pub mod views;
