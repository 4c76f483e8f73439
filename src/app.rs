pub mod config;
pub mod error;
pub mod events;
pub mod view_state;
pub mod tool_manager;
pub mod io_service;
pub mod engine;
