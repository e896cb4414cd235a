pub mod admin_handlers;
pub mod auth_handlers;
pub mod contact_handlers;
pub mod form;
pub mod public_handlers;

use actix_web::web;

use crate::auth;

/// Route table, shared between `main` and the HTTP tests. Callers register
/// the app data (`ContentStore`, `AppConfig`, `Mailer`, `RateLimiter`) and
/// the session middleware themselves.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public pages
        .route("/", web::get().to(public_handlers::home))
        .route("/services", web::get().to(public_handlers::services))
        .route("/services/{slug}", web::get().to(public_handlers::service_detail))
        .route("/how-it-works", web::get().to(public_handlers::how_it_works))
        .route("/contact", web::get().to(contact_handlers::form))
        .route("/contact", web::post().to(contact_handlers::submit))
        .route("/lang/{code}", web::get().to(public_handlers::switch_lang))
        // Admin login (outside the auth guard)
        .route("/admin/login", web::get().to(auth_handlers::login_page))
        .route("/admin/login", web::post().to(auth_handlers::login_submit))
        // Admin area
        .service(
            web::scope("/admin")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("", web::get().to(admin_handlers::editor))
                .route("/content", web::post().to(admin_handlers::save))
                .route("/content/slides/add", web::post().to(admin_handlers::slide_add))
                .route(
                    "/content/slides/{index}/delete",
                    web::post().to(admin_handlers::slide_remove),
                )
                .route("/logout", web::post().to(auth_handlers::logout)),
        )
        // Anything else is a 404 (registered last)
        .default_service(web::to(|| async {
            let html = include_str!("../../templates/errors/404.html");
            actix_web::HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }));
}
