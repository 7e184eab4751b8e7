pub mod api;
pub mod apps;
pub mod commands;
pub mod http;
