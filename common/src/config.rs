//! Wedding content: couple, venues, seed guests and messages, gift accounts.
//!
//! The content ships inside the binary as TOML and is parsed once at startup.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::guest::GuestDirectory;
use crate::message::{Message, MessageBoard};

const EMBEDDED_TOML: &str = include_str!("../wedding.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse wedding config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid wedding config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Couple {
    pub bride: String,
    pub groom: String,
}

impl Couple {
    /// "Radit & Jani"
    pub fn display(&self) -> String {
        format!("{} & {}", self.groom, self.bride)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub time: NaiveTime,
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl Venue {
    /// "2:00 PM"
    pub fn time_label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    /// "Jani (Bride)"
    pub holder: String,
    pub bank: String,
    pub account_number: String,
    pub account_name: String,
}

/// A story bubble or carousel photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub caption: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingConfig {
    pub couple: Couple,
    /// Account name on the feed-style posts.
    pub handle: String,
    pub date: NaiveDate,
    pub ceremony: Venue,
    pub reception: Venue,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(default)]
    pub stories: Vec<Photo>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl WeddingConfig {
    /// The configuration bundled at compile time.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_TOML)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: WeddingConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.couple.bride.trim().is_empty() || self.couple.groom.trim().is_empty() {
            return Err(ConfigError::Invalid("couple names must not be empty".into()));
        }
        let seeded = GuestDirectory::from_names(&self.guests);
        if seeded.len() != self.guests.len() {
            return Err(ConfigError::Invalid(
                "guest list contains blank or repeated names".into(),
            ));
        }
        Ok(())
    }

    /// "Saturday, June 15, 2024"
    pub fn date_label(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    pub fn guest_directory(&self) -> GuestDirectory {
        GuestDirectory::from_names(&self.guests)
    }

    pub fn message_board(&self) -> MessageBoard {
        MessageBoard::from_messages(self.messages.clone())
    }
}
