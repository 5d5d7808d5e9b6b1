#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::{DataSourceConfig, DataSourceKind, ServerConfig};
#[cfg(feature = "server")]
use crate::repository::errors::RepositoryResult;
#[cfg(feature = "server")]
use crate::repository::{AdminRepository, FixtureRepository, HttpRepository};

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
pub mod list_query;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod notify;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

/// Rows shown per page on every list view.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Builds the data source named by the configuration.
///
/// Must be called outside the async runtime: the HTTP source owns a blocking
/// client.
#[cfg(feature = "server")]
pub fn build_repository(config: &DataSourceConfig) -> RepositoryResult<Arc<dyn AdminRepository>> {
    match config.kind {
        DataSourceKind::Fixture => {
            log::info!("Serving bundled fixture data");
            Ok(Arc::new(FixtureRepository::seeded()?))
        }
        DataSourceKind::Http => {
            let repo = HttpRepository::from_config(config)?;
            log::info!(
                "Proxying upstream API at {}",
                config.base_url.as_deref().unwrap_or_default()
            );
            Ok(Arc::new(repo))
        }
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(
    server_config: ServerConfig,
    repo: Arc<dyn AdminRepository>,
) -> std::io::Result<()> {
    let repo: web::Data<dyn AdminRepository> = web::Data::from(repo);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting dashboard API for {} on {}:{}",
        server_config.domain,
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(web::Data::new(server_config.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
