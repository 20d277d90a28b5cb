use crate::ledger::EntryLedger;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The shared store injected into every handler: the ledger itself plus the
/// path it is persisted to. Constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub ledger: Arc<Mutex<EntryLedger>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, ledger: EntryLedger) -> Self {
        Self {
            data_path,
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}
