pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod store;

pub use api::ApiClient;
pub use config::Config;
pub use store::NoteStore;
