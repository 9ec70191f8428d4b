pub mod advertisement;
pub mod config;
