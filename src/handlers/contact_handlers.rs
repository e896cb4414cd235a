use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::contact::{ContactSubmission, Mailer};
use crate::content::ContentStore;
use crate::errors::{render, AppError};
use crate::i18n::Lang;
use crate::templates_structs::{ContactTemplate, SiteContext};

pub async fn form(
    store: web::Data<ContentStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let doc = store.load();
    let ctx = SiteContext::build(&session, "/contact");
    let csrf_token = csrf::get_or_create_token(&session);
    render(ContactTemplate::new(ctx, &doc.contact, csrf_token))
}

pub async fn submit(
    store: web::Data<ContentStore>,
    mailer: web::Data<Mailer>,
    session: Session,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let doc = store.load();
    let ctx = SiteContext::build(&session, "/contact");
    let lang = ctx.lang;
    let submission = form.into_inner().into_submission();

    // Field-level validation blocks the send entirely; the visitor's input
    // is preserved in the re-rendered form.
    let errors = submission.validate();
    if !errors.is_empty() {
        let csrf_token = csrf::get_or_create_token(&session);
        let mut tmpl = ContactTemplate::new(ctx, &doc.contact, csrf_token);
        tmpl.form = submission;
        tmpl.errors = errors;
        return render(tmpl);
    }

    match mailer.send_contact(&submission).await {
        Ok(()) => {
            set_flash(&session, success_message(lang));
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/contact"))
                .finish())
        }
        Err(detail) => {
            // Transport diagnostics stay in the log; the visitor only sees
            // a generic failure.
            log::error!("Contact mail send failed: {detail}");
            let csrf_token = csrf::get_or_create_token(&session);
            let mut tmpl = ContactTemplate::new(ctx, &doc.contact, csrf_token);
            tmpl.form = submission;
            tmpl.sent_error = Some(failure_message(lang).to_string());
            render(tmpl)
        }
    }
}

#[derive(serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub details: String,
    pub csrf_token: String,
}

impl ContactForm {
    fn into_submission(self) -> ContactSubmission {
        ContactSubmission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            details: self.details,
        }
    }
}

fn success_message(lang: Lang) -> &'static str {
    match lang {
        Lang::De => "Vielen Dank! Ihre Nachricht wurde verschickt.",
        Lang::En => "Thank you! Your message has been sent.",
    }
}

fn failure_message(lang: Lang) -> &'static str {
    match lang {
        Lang::De => "Ihre Nachricht konnte leider nicht verschickt werden. Bitte versuchen Sie es später erneut oder rufen Sie uns an.",
        Lang::En => "Unfortunately your message could not be sent. Please try again later or give us a call.",
    }
}
