use std::sync::Arc;

use actix_web::web;
use referral_admin::repository::{AdminRepository, FixtureRepository};

/// Fresh copy of the bundled demo data for a single test.
pub fn seeded_repo() -> Arc<FixtureRepository> {
    Arc::new(FixtureRepository::seeded().expect("seed should load"))
}

/// The seeded repository as handlers receive it.
#[allow(dead_code)]
pub fn app_data(repo: Arc<FixtureRepository>) -> web::Data<dyn AdminRepository> {
    let repo: Arc<dyn AdminRepository> = repo;
    web::Data::from(repo)
}
