/// Minimum number of queued players required to start a game
pub const MIN_PLAYERS: usize = 2;

/// Maximum length of a player name after trimming
pub const MAX_NAME_LEN: usize = 20;

/// Length of generated game identifiers
pub const GAME_ID_LEN: usize = 12;

/// Capacity of the update-trigger broadcast channel
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Largest text frame accepted on a WebSocket connection
pub const MAX_WS_MESSAGE_BYTES: usize = 1024;
