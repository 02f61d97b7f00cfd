use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InviteError;

/// Sequence number for a guestbook entry.
pub type MessageId = u64;

/// Label given to freshly posted messages.
pub const JUST_NOW: &str = "Just now";

/// A guest's stated attendance intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpStatus {
    #[serde(rename = "attending")]
    Attending,
    #[serde(rename = "not attending")]
    NotAttending,
    #[serde(rename = "maybe")]
    Maybe,
}

impl RsvpStatus {
    pub fn all() -> &'static [RsvpStatus] {
        &[Self::Attending, Self::NotAttending, Self::Maybe]
    }

    /// Form value, also used in the seed data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attending => "attending",
            Self::NotAttending => "not attending",
            Self::Maybe => "maybe",
        }
    }

    /// Parse a form value. The empty string means "RSVP later".
    pub fn from_form(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.as_str() == value)
    }

    /// Option text in the RSVP dropdown.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Attending => "Yes, I'll be there! 🎉",
            Self::NotAttending => "Sorry, can't make it 😔",
            Self::Maybe => "Not sure yet 🤔",
        }
    }

    /// Badge text shown on a posted message.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Attending => "✅ Attending",
            Self::NotAttending => "❌ Can't attend",
            Self::Maybe => "🤔 Maybe",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guestbook entry, optionally carrying an RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub author: String,
    pub body: String,
    /// Display label ("2 hours ago", "Just now"); not sortable.
    pub timestamp: String,
    #[serde(default)]
    pub rsvp: Option<RsvpStatus>,
}

impl Message {
    /// First character of the author's name, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Attendance tally across the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpSummary {
    pub attending: usize,
    pub not_attending: usize,
    pub maybe: usize,
}

/// Guestbook, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBoard {
    messages: Vec<Message>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the board. `seed` is expected newest-first.
    pub fn from_messages(seed: Vec<Message>) -> Self {
        Self { messages: seed }
    }

    /// Prepend a new message.
    ///
    /// The body is checked before the author. Both are stored as typed.
    pub fn post(
        &mut self,
        author: &str,
        body: &str,
        rsvp: Option<RsvpStatus>,
    ) -> Result<&Message, InviteError> {
        if body.trim().is_empty() {
            return Err(InviteError::EmptyMessage);
        }
        if author.trim().is_empty() {
            return Err(InviteError::EmptyAuthor);
        }
        let message = Message {
            id: self.next_id(),
            author: author.to_string(),
            body: body.to_string(),
            timestamp: JUST_NOW.to_string(),
            rsvp,
        };
        self.messages.insert(0, message);
        Ok(&self.messages[0])
    }

    fn next_id(&self) -> MessageId {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn rsvp_summary(&self) -> RsvpSummary {
        self.messages
            .iter()
            .filter_map(|m| m.rsvp)
            .fold(RsvpSummary::default(), |mut acc, status| {
                match status {
                    RsvpStatus::Attending => acc.attending += 1,
                    RsvpStatus::NotAttending => acc.not_attending += 1,
                    RsvpStatus::Maybe => acc.maybe += 1,
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MessageBoard {
        MessageBoard::from_messages(vec![
            Message {
                id: 3,
                author: "David & Lisa Chen".into(),
                body: "Thinking of you!".into(),
                timestamp: "1 day ago".into(),
                rsvp: Some(RsvpStatus::NotAttending),
            },
            Message {
                id: 7,
                author: "Emma Rodriguez".into(),
                body: "See you there!".into(),
                timestamp: "5 hours ago".into(),
                rsvp: None,
            },
        ])
    }

    #[test]
    fn first_post_on_empty_board() {
        let mut board = MessageBoard::new();
        board
            .post("Sam", "Congrats!", Some(RsvpStatus::Attending))
            .unwrap();
        let all: Vec<_> = board.iter().cloned().collect();
        assert_eq!(
            all,
            vec![Message {
                id: 1,
                author: "Sam".into(),
                body: "Congrats!".into(),
                timestamp: "Just now".into(),
                rsvp: Some(RsvpStatus::Attending),
            }]
        );
    }

    #[test]
    fn post_prepends_with_larger_id() {
        let mut board = seeded();
        let id = board.post("Sam", "Hooray", None).unwrap().id;
        assert_eq!(id, 8);
        assert_eq!(board.iter().next().map(|m| m.id), Some(8));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn ids_keep_increasing() {
        let mut board = MessageBoard::new();
        let a = board.post("A", "one", None).unwrap().id;
        let b = board.post("B", "two", None).unwrap().id;
        assert!(b > a);
    }

    #[test]
    fn empty_body_is_rejected() {
        let mut board = seeded();
        assert_eq!(board.post("Sam", "   ", None), Err(InviteError::EmptyMessage));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn body_is_checked_before_author() {
        let mut board = seeded();
        assert_eq!(board.post("", "", None), Err(InviteError::EmptyMessage));
        assert_eq!(board.post(" ", "hi", None), Err(InviteError::EmptyAuthor));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn text_is_stored_untrimmed() {
        let mut board = MessageBoard::new();
        let msg = board.post(" Sam", "Congrats! ", None).unwrap();
        assert_eq!(msg.author, " Sam");
        assert_eq!(msg.body, "Congrats! ");
    }

    #[test]
    fn form_values_round_trip() {
        assert_eq!(RsvpStatus::from_form("not attending"), Some(RsvpStatus::NotAttending));
        assert_eq!(RsvpStatus::from_form(""), None);
        assert_eq!(RsvpStatus::from_form("Attending"), None);
    }

    #[test]
    fn summary_counts_rsvps_only() {
        let mut board = seeded();
        board.post("Sam", "Yay", Some(RsvpStatus::Attending)).unwrap();
        board.post("Kim", "Hmm", Some(RsvpStatus::Maybe)).unwrap();
        assert_eq!(
            board.rsvp_summary(),
            RsvpSummary {
                attending: 1,
                not_attending: 1,
                maybe: 1
            }
        );
    }

    #[test]
    fn initial_handles_empty_author() {
        let msg = Message {
            id: 1,
            author: String::new(),
            body: "x".into(),
            timestamp: JUST_NOW.into(),
            rsvp: None,
        };
        assert_eq!(msg.initial(), "");
    }
}
