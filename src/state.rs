use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{constants::EVENT_CHANNEL_CAPACITY, GameEngine};

/// Shared application state
///
/// The engine lock is the transaction boundary: mutating routes hold the
/// write guard for a whole engine call, reads take the read guard. Update
/// triggers are published on `events` after the lock is released.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<GameEngine>>,
    pub events: broadcast::Sender<String>,
}

impl AppState {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            engine: Arc::new(RwLock::new(GameEngine::new())),
            events,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
