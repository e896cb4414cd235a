// Template context structures for the Askama templates: a shared context
// per audience (visitor / admin) plus per-page structs.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_admin, get_lang, take_flash};
use crate::errors::AppError;
use crate::i18n::{Bilingual, Lang};

/// Context shared by all public pages: resolved navigation labels, the
/// visitor's language and the current path (for the language switch links).
pub struct SiteContext {
    pub lang: Lang,
    pub lang_code: String,
    pub other_lang_code: String,
    pub path: String,
    pub nav_home: String,
    pub nav_services: String,
    pub nav_how_it_works: String,
    pub nav_contact: String,
    pub flash: Option<String>,
}

impl SiteContext {
    pub fn build(session: &Session, path: &str) -> Self {
        let lang = get_lang(session);
        let other = match lang {
            Lang::De => Lang::En,
            Lang::En => Lang::De,
        };
        Self {
            lang,
            lang_code: lang.code().to_string(),
            other_lang_code: other.code().to_string(),
            path: path.to_string(),
            nav_home: Bilingual::new("Startseite", "Home").get(lang).to_string(),
            nav_services: Bilingual::new("Angebote", "Services").get(lang).to_string(),
            nav_how_it_works: Bilingual::new("So funktioniert's", "How it works")
                .get(lang)
                .to_string(),
            nav_contact: Bilingual::new("Kontakt", "Contact").get(lang).to_string(),
            flash: take_flash(session),
        }
    }
}

/// Context shared by all admin pages.
pub struct AdminContext {
    pub username: String,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl AdminContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let username = get_admin(session)
            .ok_or_else(|| AppError::Session("No admin user in session".to_string()))?;
        Ok(Self {
            username,
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        })
    }
}

mod admin;
mod public;

pub use self::admin::{EditorServiceRow, EditorTemplate, LoginTemplate};
pub use self::public::{
    ContactTemplate, HowItWorksTemplate, IndexTemplate, ServiceCardView, ServiceDetailTemplate,
    ServicesTemplate, SlideView, StepView,
};
