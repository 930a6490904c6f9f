use catalog_admin::db::{establish_connection_pool_with_size, run_pool_migrations};
use catalog_admin::domain::pagination::SearchQuery;
use catalog_admin::models::config::ServerConfig;
use catalog_admin::repository::DieselRepository;
use catalog_admin::services::categories::list_categories;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::load()?;

    let pool = establish_connection_pool_with_size(&config.database_url, config.pool_size)?;
    let applied = run_pool_migrations(&pool)?;
    log::info!("Applied {applied} pending migration(s) to {}", config.database_url);

    let repo = DieselRepository::new(pool);
    let page = list_categories(SearchQuery::default().paginate(0, 1), &repo)?;
    log::info!("Catalog ready with {} categories", page.total);

    Ok(())
}
