use sqlx::PgPool;
use storage::{dto::home::HomeResponse, error::Result, repository::home::HomeRepository};

/// Load the homepage lists
pub async fn load_home(pool: &PgPool) -> Result<HomeResponse> {
    let home = HomeRepository::new(pool).load().await?;

    tracing::debug!(
        athletes = home.athletes.len(),
        races = home.races.len(),
        events = home.events.len(),
        "Loaded homepage"
    );

    Ok(home)
}
