pub mod app;
pub mod errors;
pub mod handlers;
pub mod intake;
pub mod models;
pub mod reminders;
pub mod stats;
pub mod state;
pub mod storage;
pub mod ui;
pub mod widget;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
