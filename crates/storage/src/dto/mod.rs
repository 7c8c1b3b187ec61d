use serde::{Deserialize, Deserializer};

pub mod athlete;
pub mod event;
pub mod home;
pub mod race;
pub mod user;

/// Keeps an explicit `null` (`Some(None)`, clear the field) apart from a
/// missing key (`None`, leave it alone).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
