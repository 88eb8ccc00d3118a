use super::QueuedPlayer;

/// Ordered queue of players waiting for the next game
///
/// Order is insertion order and becomes the seat order when a game starts.
#[derive(Debug, Default)]
pub struct WaitingQueue {
    players: Vec<QueuedPlayer>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Add a player by name, idempotently
    ///
    /// If the name is already queued, the existing entry's identifier is
    /// returned and the queue is left unchanged.
    ///
    /// # Returns
    ///
    /// The player_id of the new or existing entry
    pub fn join(&mut self, name: &str) -> String {
        if let Some(existing) = self.players.iter().find(|p| p.name == name) {
            return existing.player_id.clone();
        }

        let player = QueuedPlayer::new(name.to_string());
        let player_id = player.player_id.clone();
        self.players.push(player);
        player_id
    }

    /// Append a fresh entry without the duplicate-name check
    ///
    /// Used when a finished game's players are moved back into the queue.
    pub fn push(&mut self, name: &str) -> String {
        let player = QueuedPlayer::new(name.to_string());
        let player_id = player.player_id.clone();
        self.players.push(player);
        player_id
    }

    /// Remove every queued player, returning their names in queue order
    pub fn drain_names(&mut self) -> Vec<String> {
        self.players.drain(..).map(|p| p.name).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Queued players in join order
    pub fn players(&self) -> &[QueuedPlayer] {
        &self.players
    }
}
