pub mod app;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ticket;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_ledger, resolve_data_path};
