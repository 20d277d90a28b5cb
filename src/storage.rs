use crate::errors::AppError;
use crate::ledger::EntryLedger;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("HOOPENTRY_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/entries.json")
}

/// Loads the ledger from the data file once at startup. A missing file means
/// a fresh event with an empty ledger; a file that exists but does not parse
/// is a startup error and propagates to the caller.
pub async fn load_ledger(path: &Path) -> Result<EntryLedger, Box<dyn std::error::Error>> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(ledger) => Ok(ledger),
            Err(err) => {
                error!("data file {} is corrupt: {err}", path.display());
                Err(err.into())
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(EntryLedger::default()),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Err(err.into())
        }
    }
}

/// Rewrites the whole data file. Called after every append and clear.
pub async fn persist_ledger(path: &Path, ledger: &EntryLedger) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(ledger)?;
    fs::write(path, payload).await?;
    Ok(())
}
