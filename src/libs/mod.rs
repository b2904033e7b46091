pub mod activity;
pub mod attendance;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod debounce;
pub mod engine;
pub mod formatter;
pub mod messages;
pub mod state_file;
pub mod summary;
pub mod tracker;
pub mod view;
