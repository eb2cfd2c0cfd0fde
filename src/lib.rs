pub mod app;
pub mod config;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod readiness;
pub mod session;
pub mod state;
pub mod store;
pub mod streak;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use state::AppState;
