//! Application service layer - config, built-in catalog, quoting

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
