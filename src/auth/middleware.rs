use actix_session::SessionExt;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error, HttpResponse,
};

/// Middleware guarding the admin area: requests without a logged-in admin
/// session are redirected to the login page.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let logged_in = session.get::<String>("admin_user").unwrap_or(None).is_some();

    if !logged_in {
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/login"))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
