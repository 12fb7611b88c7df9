//! Player entry collected before the first piece falls.

use crate::types::DEFAULT_PLAYER_AGE;

/// Why a player entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// The name was empty after trimming
    #[error("player name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    name: String,
    age: u8,
}

impl PlayerProfile {
    /// Validate a player entry. Surrounding whitespace is dropped from the name.
    pub fn new(name: &str, age: Option<u8>) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            age: age.unwrap_or(DEFAULT_PLAYER_AGE),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}
