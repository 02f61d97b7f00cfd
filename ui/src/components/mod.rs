pub mod app;
pub mod browser;
pub mod gift_view;
pub mod home_view;
pub mod login_view;
pub mod messages_view;
pub mod notes_accordion;
pub mod party_details_view;
pub mod session_state;
pub mod settings_view;
pub mod toast;
pub mod wedding_state;
