//! HTTP-level tests: the public pages against default content, the admin
//! auth guard, and the language switch.

mod common;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{cookie::Key, test, web, App};

use common::*;
use digitalhilfe::auth::password;
use digitalhilfe::auth::rate_limit::RateLimiter;
use digitalhilfe::config::AppConfig;
use digitalhilfe::contact::Mailer;
use digitalhilfe::content::ContentStore;
use digitalhilfe::handlers;

fn test_config(store: &ContentStore) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        content_path: store.path().to_path_buf(),
        admin_username: ADMIN_USER.to_string(),
        admin_password_hash: password::hash_password(ADMIN_PASS).expect("hash"),
        mail: None,
    }
}

/// Build the full app against a temp store, mirroring `main`.
macro_rules! init_app {
    ($store:expr) => {{
        let config = test_config(&$store);
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                )
                .app_data(web::Data::new($store))
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(Mailer::disabled()))
                .app_data(web::Data::new(RateLimiter::new()))
                .configure(handlers::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn home_page_renders_default_content() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);

    // German is the default language.
    assert!(html.contains("Digitalhilfe"));
    assert!(html.contains("IT-Hilfe im Ehrenamt"));
}

#[actix_web::test]
async fn services_page_lists_all_default_services() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/services").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);

    for title in ["Vereinswebsite", "Mitgliederverwaltung", "E-Mail einrichten"] {
        assert!(html.contains(title), "missing service: {title}");
    }
}

#[actix_web::test]
async fn known_service_detail_renders() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri("/services/vereins-website")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_service_is_404() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri("/services/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn admin_area_redirects_to_login() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/admin").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/admin/login");
}

#[actix_web::test]
async fn login_page_renders() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/admin/login").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn contact_post_without_csrf_token_is_rejected() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let body = serde_urlencoded::to_string([
        ("name", "Erika Musterfrau"),
        ("email", "erika@example.com"),
        ("subject", "Drucker kaputt"),
        ("message", "Der Drucker druckt nichts mehr."),
        ("csrf_token", ""),
    ])
    .unwrap();

    let req = test::TestRequest::post()
        .uri("/contact")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn lang_switch_redirects_back() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri("/lang/en?next=/services")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/services");
}

#[actix_web::test]
async fn lang_switch_rejects_offsite_redirects() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri("/lang/en?next=//evil.example")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn unknown_route_is_404() {
    let (_dir, store) = temp_store();
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/no-such-page").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
