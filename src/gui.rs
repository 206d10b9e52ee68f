pub mod about_dialog;
pub mod versions;
