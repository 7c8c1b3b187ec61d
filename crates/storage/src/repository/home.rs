use sqlx::PgPool;

use crate::dto::{athlete::AthleteResponse, home::HomeResponse};
use crate::error::Result;

use super::{athlete::AthleteRepository, event::EventRepository, race::RaceRepository};

pub const HOME_ATHLETE_LIMIT: i64 = 8;
pub const HOME_RACE_LIMIT: i64 = 8;
pub const HOME_EVENT_LIMIT: i64 = 4;

/// Reads backing the homepage
pub struct HomeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> HomeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active athletes, latest published races and newest published events.
    /// The three queries don't depend on each other, so they run
    /// concurrently on separate pool connections.
    pub async fn load(&self) -> Result<HomeResponse> {
        let athletes = AthleteRepository::new(self.pool);
        let races = RaceRepository::new(self.pool);
        let events = EventRepository::new(self.pool);

        let (athletes, races, events) = tokio::try_join!(
            athletes.list_active(HOME_ATHLETE_LIMIT),
            races.list_published_by_date(HOME_RACE_LIMIT),
            events.list_published_recent(HOME_EVENT_LIMIT),
        )?;

        Ok(HomeResponse {
            athletes: athletes.into_iter().map(AthleteResponse::from).collect(),
            races,
            events,
        })
    }
}
