pub mod about;
pub mod config;
pub mod credits;
pub mod error;
pub mod i18n;
pub mod markup;
pub mod meta;
pub mod platform;
pub mod versions;

#[cfg(feature = "gui")]
pub mod gui;
