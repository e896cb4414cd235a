use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::auth::rate_limit::RateLimiter;
use crate::auth::session::{get_admin, set_admin};
use crate::auth::{csrf, password};
use crate::config::AppConfig;
use crate::errors::{render, AppError};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // Already logged in? Straight to the editor.
    if get_admin(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    render(LoginTemplate {
        error: None,
        csrf_token,
    })
}

pub async fn login_submit(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        let csrf_token = csrf::get_or_create_token(&session);
        return render(LoginTemplate {
            error: Some("Too many failed login attempts. Please try again later.".to_string()),
            csrf_token,
        });
    }

    let username_ok = form.username.trim() == config.admin_username;
    let password_ok = matches!(
        password::verify_password(&form.password, &config.admin_password_hash),
        Ok(true)
    );

    if username_ok && password_ok {
        limiter.clear(ip);
        set_admin(&session, &config.admin_username);
        Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin"))
            .finish())
    } else {
        limiter.record_failure(ip);
        let csrf_token = csrf::get_or_create_token(&session);
        render(LoginTemplate {
            error: Some("Invalid username or password".to_string()),
            csrf_token,
        })
    }
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/login"))
        .finish())
}
