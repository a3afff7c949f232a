pub mod api;
pub mod config;
pub mod docs;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::cohort;
pub use modules::student;

use crate::cohort::adapter::outgoing::{CohortQueryPostgres, CohortRepositoryPostgres};
use crate::cohort::application::cohort_use_cases::CohortUseCases;
use crate::cohort::application::service::{
    CreateCohortService, DeleteCohortService, GetCohortsService, GetSingleCohortService,
    PatchCohortService,
};
use crate::student::adapter::outgoing::{StudentQueryPostgres, StudentRepositoryPostgres};
use crate::student::application::service::{
    CreateStudentService, DeleteStudentService, GetSingleStudentService,
    GetStudentsByCohortService, GetStudentsService, PatchStudentService,
};
use crate::student::application::student_use_cases::StudentUseCases;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;


#[derive(Clone)]
pub struct AppState {
    pub cohort: CohortUseCases,
    pub student: StudentUseCases,
}

impl AppState {
    /// Wire the Postgres adapters into the services.
    pub fn from_db(db: &Arc<DatabaseConnection>) -> Self {
        let cohort_repo = CohortRepositoryPostgres::new(Arc::clone(db));
        let cohort_query = CohortQueryPostgres::new(Arc::clone(db));
        let student_repo = StudentRepositoryPostgres::new(Arc::clone(db));
        let student_query = StudentQueryPostgres::new(Arc::clone(db));

        Self {
            cohort: CohortUseCases {
                create: Arc::new(CreateCohortService::new(cohort_repo.clone())),
                get_list: Arc::new(GetCohortsService::new(cohort_query.clone())),
                get_single: Arc::new(GetSingleCohortService::new(cohort_query)),
                patch: Arc::new(PatchCohortService::new(cohort_repo.clone())),
                delete: Arc::new(DeleteCohortService::new(cohort_repo)),
            },
            student: StudentUseCases {
                create: Arc::new(CreateStudentService::new(student_repo.clone())),
                get_list: Arc::new(GetStudentsService::new(student_query.clone())),
                get_by_cohort: Arc::new(GetStudentsByCohortService::new(student_query.clone())),
                get_single: Arc::new(GetSingleStudentService::new(student_query)),
                patch: Arc::new(PatchStudentService::new(student_repo.clone())),
                delete: Arc::new(DeleteStudentService::new(student_repo)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(config.database.idle_timeout)
        .max_lifetime(config.database.max_lifetime)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = AppState::from_db(&db_arc);

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let config_for_server = config.clone();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&config_for_server.cors_allowed_origins))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(config_for_server.clone()))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(crate::docs::public_files(&config_for_server.public_dir))
            .default_service(web::to(crate::docs::route_not_found))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    info!("Server stopped, closing database connection");
    close_database(&db_arc)
        .await
        .context("Failed to close database connection")?;

    Ok(())
}

/// Close the shared pool, even while other `Arc` handles to it are still alive.
pub async fn close_database(db: &Arc<DatabaseConnection>) -> Result<(), DbErr> {
    db.as_ref().clone().close().await
}

#[cfg(not(tarpaulin_include))]
fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}

/// API routes. Static files and the fallback are registered by the caller, after these.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs page
    cfg.service(crate::docs::docs_page);
    // Students (by-cohort listing before the single-student route)
    cfg.service(crate::student::adapter::incoming::web::routes::get_students_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::create_student_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::get_students_by_cohort_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::get_student_by_id_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::update_student_handler);
    cfg.service(crate::student::adapter::incoming::web::routes::delete_student_handler);
    // Cohorts
    cfg.service(crate::cohort::adapter::incoming::web::routes::get_cohorts_handler);
    cfg.service(crate::cohort::adapter::incoming::web::routes::create_cohort_handler);
    cfg.service(crate::cohort::adapter::incoming::web::routes::get_cohort_by_id_handler);
    cfg.service(crate::cohort::adapter::incoming::web::routes::update_cohort_handler);
    cfg.service(crate::cohort::adapter::incoming::web::routes::delete_cohort_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
