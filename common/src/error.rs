use thiserror::Error;

/// Rejections produced at the input validation boundary.
///
/// None of these are fatal: the operation that produced one leaves its state
/// untouched, and the view turns the error into a toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InviteError {
    #[error("Guest name cannot be empty")]
    EmptyGuestName,
    #[error("{0} is already in the guest list")]
    DuplicateGuest(String),
    #[error("Can't find your name? Please contact the couple.")]
    UnknownGuest,
    #[error("Choose your name from the dropdown to continue")]
    NoGuestSelected,
    #[error("Your message cannot be empty")]
    EmptyMessage,
    #[error("We'd love to know who this message is from")]
    EmptyAuthor,
}

impl InviteError {
    /// Short headline shown above the description.
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyGuestName => "Please enter a guest name",
            Self::DuplicateGuest(_) => "Guest already exists",
            Self::UnknownGuest => "Guest not found",
            Self::NoGuestSelected => "Please select your name",
            Self::EmptyMessage => "Please write a message",
            Self::EmptyAuthor => "Please enter your name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_the_guest() {
        let err = InviteError::DuplicateGuest("Emma Rodriguez".into());
        assert_eq!(err.to_string(), "Emma Rodriguez is already in the guest list");
        assert_eq!(err.title(), "Guest already exists");
    }
}
