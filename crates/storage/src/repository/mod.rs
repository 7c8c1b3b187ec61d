pub mod athlete;
pub mod event;
pub mod home;
pub mod race;
pub mod user;
