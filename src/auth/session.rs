use actix_session::Session;

use crate::i18n::Lang;

/// Username of the logged-in admin, if any. One admin account exists; the
/// presence of this key is the whole authorization model.
pub fn get_admin(session: &Session) -> Option<String> {
    session.get::<String>("admin_user").unwrap_or(None)
}

pub fn set_admin(session: &Session, username: &str) {
    let _ = session.insert("admin_user", username);
}

/// The visitor's language choice; defaults to German for new sessions.
pub fn get_lang(session: &Session) -> Lang {
    session
        .get::<String>("lang")
        .unwrap_or(None)
        .map(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

pub fn set_lang(session: &Session, lang: Lang) {
    let _ = session.insert("lang", lang.code());
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
