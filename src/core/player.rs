use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{constants::MAX_NAME_LEN, GameError};

/// A player waiting in the queue for the next game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedPlayer {
    /// Unique player identifier
    pub player_id: String,
    /// Player's display name, also used as their mark on the board
    pub name: String,
    /// Timestamp when the player joined the queue
    pub joined_at: OffsetDateTime,
}

impl QueuedPlayer {
    /// Create a new queue entry with a freshly generated identifier
    ///
    /// # Arguments
    ///
    /// * `name` - The player's validated display name
    pub fn new(name: String) -> Self {
        Self {
            player_id: Uuid::new_v4().to_string(),
            name,
            joined_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Validate and clean a player name
///
/// # Arguments
///
/// * `name` - Raw name input
///
/// # Returns
///
/// Cleaned name if valid, `GameError::InvalidName` otherwise
///
/// # Validation Rules
///
/// - Must not be empty after trimming
/// - Length: 1-20 characters
/// - Only alphanumeric characters and spaces allowed
///
/// The cleaned name doubles as the player's board mark, so the same rules
/// bound what can appear in a cell.
pub fn validate_name(name: &str) -> Result<String, GameError> {
    let cleaned = name.trim();

    if cleaned.is_empty() {
        return Err(GameError::InvalidName("name cannot be empty".to_string()));
    }

    if cleaned.len() > MAX_NAME_LEN {
        return Err(GameError::InvalidName(format!(
            "name must be {} characters or less",
            MAX_NAME_LEN
        )));
    }

    if !cleaned
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace())
    {
        return Err(GameError::InvalidName(
            "name must contain only letters, numbers, and spaces".to_string(),
        ));
    }

    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_unique_id() {
        let p1 = QueuedPlayer::new("Alice".to_string());
        let p2 = QueuedPlayer::new("Alice".to_string());

        assert_eq!(p1.name, "Alice");
        assert!(!p1.player_id.is_empty());
        assert_ne!(p1.player_id, p2.player_id);
    }

    #[test]
    fn test_validate_name_valid() {
        assert_eq!(validate_name("Alice").unwrap(), "Alice");
        assert_eq!(validate_name("Bob123").unwrap(), "Bob123");
        assert_eq!(validate_name("Charlie 456").unwrap(), "Charlie 456");
    }

    #[test]
    fn test_validate_name_trims_whitespace() {
        assert_eq!(validate_name("  Alice  ").unwrap(), "Alice");
    }

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_name_too_long() {
        let long_name = "a".repeat(21);
        assert!(validate_name(&long_name).is_err());

        let max_name = "a".repeat(20);
        assert!(validate_name(&max_name).is_ok());
    }

    #[test]
    fn test_validate_name_invalid_chars() {
        assert!(validate_name("Alice!").is_err());
        assert!(validate_name("Bob@123").is_err());
        assert!(validate_name("Charlie#").is_err());
    }
}
