pub mod athlete;
pub mod event;
pub mod race;
pub mod status;
pub mod user;

pub use athlete::Athlete;
pub use event::Event;
pub use race::Race;
pub use status::{AthleteStatus, PublicationStatus, UnknownStatus};
pub use user::User;
