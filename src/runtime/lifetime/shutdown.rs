use tokio::signal;
use tracing::{info, warn};

use crate::storage::{RecordStore, UserStore};

/// Resolves once Ctrl+C arrives. Links and accounts live in memory only,
/// so the final state is logged and then dropped with the process.
pub async fn listen_for_shutdown(records: &RecordStore, users: &UserStore) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    info!(
        links = records.len(),
        users = users.len(),
        total_visits = records.total_visits(),
        "Discarding in-memory state"
    );
}
