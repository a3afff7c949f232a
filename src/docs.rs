use actix_files::{Files, NamedFile};
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    get, guard, web, HttpResponse,
};
use std::path::Path;

use crate::{config::AppConfig, shared::api::ApiResponse};

const ROUTE_NOT_FOUND: &str = "This route does not exist";

/// Static HTML page describing the API.
#[get("/docs")]
pub async fn docs_page(config: web::Data<AppConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(&config.docs_page).await?)
}

/// Fallback for every unmatched route.
pub async fn route_not_found() -> HttpResponse {
    ApiResponse::not_found(ROUTE_NOT_FOUND)
}

/// Serve `dir` at the root for GET/HEAD. Must be registered after every other service.
pub fn public_files(dir: &Path) -> Files {
    Files::new("/", dir)
        .index_file("index.html")
        .guard(guard::Any(guard::Get()).or(guard::Head()))
        .default_handler(fn_service(|req: ServiceRequest| async {
            let (req, _) = req.into_parts();
            Ok(ServiceResponse::new(req, ApiResponse::not_found(ROUTE_NOT_FOUND)))
        }))
}
