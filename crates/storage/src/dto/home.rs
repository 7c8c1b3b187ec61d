use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{athlete::AthleteResponse, event::EventResponse, race::RaceResponse};

/// Everything the homepage renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub athletes: Vec<AthleteResponse>,
    pub races: Vec<RaceResponse>,
    pub events: Vec<EventResponse>,
}
