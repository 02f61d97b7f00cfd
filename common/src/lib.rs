pub mod carousel;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod guest;
pub mod invite;
pub mod message;
pub mod notice;
pub mod session;
