use dioxus::prelude::*;

use wedding_common::config::WeddingConfig;
use wedding_common::error::InviteError;
use wedding_common::guest::GuestDirectory;
use wedding_common::message::MessageBoard;

/// Guest list and guestbook shared by every view.
///
/// Seeded once from the wedding config when the app mounts, so edits made on
/// one page are visible on the others until the page is reloaded.
#[derive(Clone, Debug, Default)]
pub struct WeddingState {
    pub guests: GuestDirectory,
    pub board: MessageBoard,
    /// Guest named by a personal invitation link (`/?guest=`), pre-selected
    /// on the login form.
    pub invited_guest: Option<String>,
}

impl WeddingState {
    pub fn seeded(config: &WeddingConfig) -> Self {
        Self {
            guests: config.guest_directory(),
            board: config.message_board(),
            invited_guest: None,
        }
    }

    /// Login gate. A personal-link pre-selection is used up once someone
    /// gets in.
    pub fn sign_in(&mut self, name: &str) -> Result<(), InviteError> {
        self.guests.admit(name)?;
        self.invited_guest = None;
        Ok(())
    }

    pub fn forget_invitation(&mut self) {
        self.invited_guest = None;
    }
}

pub fn use_wedding_state() -> Signal<WeddingState> {
    use_context::<Signal<WeddingState>>()
}

pub fn use_wedding_config() -> WeddingConfig {
    use_context::<WeddingConfig>()
}

#[cfg(test)]
mod tests {
    use wedding_common::guest::GuestDirectory;

    use super::*;

    fn invited_state() -> WeddingState {
        WeddingState {
            guests: GuestDirectory::from_names(["Sarah & Mike Johnson", "Emma Rodriguez"]),
            invited_guest: Some("Sarah & Mike Johnson".into()),
            ..Default::default()
        }
    }

    #[test]
    fn sign_in_uses_up_the_invitation() {
        let mut state = invited_state();
        state.sign_in("Emma Rodriguez").unwrap();
        assert_eq!(state.invited_guest, None);
    }

    #[test]
    fn rejected_sign_in_keeps_the_invitation() {
        let mut state = invited_state();
        assert_eq!(state.sign_in(""), Err(InviteError::NoGuestSelected));
        assert_eq!(state.sign_in("Nobody"), Err(InviteError::UnknownGuest));
        assert_eq!(state.invited_guest.as_deref(), Some("Sarah & Mike Johnson"));
    }

    #[test]
    fn seeded_state_starts_without_invitation() {
        let config = WeddingConfig::embedded().unwrap();
        let mut state = WeddingState::seeded(&config);
        assert_eq!(state.invited_guest, None);
        state.invited_guest = Some("Emma Rodriguez".into());
        state.forget_invitation();
        assert_eq!(state.invited_guest, None);
    }
}
