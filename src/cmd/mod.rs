pub mod layout;
pub mod transition;
