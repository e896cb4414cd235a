use askama::Template;

use crate::content::types::{ContentDocument, ServiceItemOverride};

use super::AdminContext;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub csrf_token: String,
}

/// One row of the per-service editor: the override record plus the
/// compiled-in German title as a stable heading.
pub struct EditorServiceRow {
    pub slug: String,
    pub heading: String,
    pub item: ServiceItemOverride,
}

/// The full-document editor form. `save_error` is set when a save failed
/// and the submitted (unsaved) document is being re-rendered for retry.
#[derive(Template)]
#[template(path = "admin/editor.html")]
pub struct EditorTemplate {
    pub ctx: AdminContext,
    pub doc: ContentDocument,
    pub services: Vec<EditorServiceRow>,
    pub save_error: Option<String>,
}
