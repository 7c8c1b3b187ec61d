pub mod home;
pub mod media;
