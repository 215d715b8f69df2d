pub mod app_config;
pub mod catalog;
pub mod db;
pub mod entries;
pub mod markdown;
pub mod orm;
pub mod polls;
pub mod taxonomy;

/// Initialize environment, logging, and configuration.
///
/// Call once at application startup, before [`db::init_db`].
pub fn init() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    app_config::init();
}
