pub mod about;
pub mod home;
pub mod layout;
pub mod play;
