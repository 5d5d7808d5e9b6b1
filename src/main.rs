use std::env;
use std::path::Path;
use std::sync::Arc;

use dotenvy::dotenv;

use referral_admin::models::config::load_server_config;
use referral_admin::{build_repository, run};

fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match load_server_config(Path::new("config"), &app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    // The upstream client blocks, so it is built before the runtime starts.
    let repo = match build_repository(&server_config.data_source) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Error initialising data source: {err}");
            std::process::exit(1);
        }
    };

    // Workers only hold clones; the last handle is released here, off the runtime.
    let result = actix_web::rt::System::new().block_on(run(server_config, Arc::clone(&repo)));
    drop(repo);
    result
}
