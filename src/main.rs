use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, middleware, web, App, HttpServer};

use digitalhilfe::auth::rate_limit::RateLimiter;
use digitalhilfe::config::AppConfig;
use digitalhilfe::contact::Mailer;
use digitalhilfe::content::ContentStore;
use digitalhilfe::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let store = ContentStore::new(config.content_path.clone());
    // First load materializes the default content file if none exists yet.
    store.load();

    let mailer = web::Data::new(Mailer::from_config(config.mail.as_ref()));
    let limiter = web::Data::new(RateLimiter::new());

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(mailer.clone())
            .app_data(limiter.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
