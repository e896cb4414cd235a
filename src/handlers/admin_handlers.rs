use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::content::types::{
    ContactContent, ContentDocument, HomeContent, HowItWorksContent, HowItWorksStep,
    ServiceItemOverride, ServicesPageContent, Slide,
};
use crate::content::{defaults, slides, ContentStore};
use crate::errors::{render, AppError};
use crate::services::definitions;
use crate::templates_structs::{AdminContext, EditorServiceRow, EditorTemplate};

use super::form::{get_bilingual, get_field, has_field, parse_form_body};

/// GET /admin — load the persisted document and show the full editor form.
/// The store's load() already falls back per document, so the editor always
/// starts from a complete record.
pub async fn editor(
    store: web::Data<ContentStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = AdminContext::build(&session)?;
    let doc = store.load();
    let services = service_rows(&doc);
    render(EditorTemplate {
        ctx,
        doc,
        services,
        save_error: None,
    })
}

/// POST /admin/content — the single save-all. On failure the submitted
/// document is re-rendered unchanged so the operator can retry.
pub async fn save(
    store: web::Data<ContentStore>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;

    let doc = document_from_form(&params);
    let outcome = store.save(&doc);

    if outcome.success {
        set_flash(&session, &outcome.message);
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin"))
            .finish());
    }

    let ctx = AdminContext::build(&session)?;
    let services = service_rows(&doc);
    render(EditorTemplate {
        ctx,
        doc,
        services,
        save_error: Some(outcome.message),
    })
}

/// POST /admin/content/slides/add — append a placeholder slide to the
/// submitted (in-memory) document and re-render the editor without saving.
pub async fn slide_add(
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;

    let mut doc = document_from_form(&params);
    slides::append_slide(&mut doc.home.slideshow_items);

    let ctx = AdminContext::build(&session)?;
    let services = service_rows(&doc);
    render(EditorTemplate {
        ctx,
        doc,
        services,
        save_error: None,
    })
}

/// POST /admin/content/slides/{index}/delete — remove one slide from the
/// submitted document by list position, again without saving.
pub async fn slide_remove(
    session: Session,
    path: web::Path<usize>,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;

    let mut doc = document_from_form(&params);
    let index = path.into_inner();
    if !slides::remove_slide(&mut doc.home.slideshow_items, index) {
        log::warn!("Slide remove: index {index} out of range, ignoring");
    }

    let ctx = AdminContext::build(&session)?;
    let services = service_rows(&doc);
    render(EditorTemplate {
        ctx,
        doc,
        services,
        save_error: None,
    })
}

/// Build the per-service editor rows in definition order. A service the
/// document has no entry for falls back to the default override text, the
/// same second safety net the original editor applied per section.
fn service_rows(doc: &ContentDocument) -> Vec<EditorServiceRow> {
    let mut fallback = defaults::default_service_items();
    definitions::all()
        .into_iter()
        .map(|def| {
            let item = doc
                .services_items
                .get(def.slug)
                .cloned()
                .or_else(|| fallback.remove(def.slug))
                .unwrap_or_default();
            EditorServiceRow {
                slug: def.slug.to_string(),
                heading: def.title.de.clone(),
                item,
            }
        })
        .collect()
}

/// Reassemble the complete content document from the flat editor form.
/// Field names mirror the editor template: `home_*`, `slide_{i}_*`, `sp_*`,
/// `item_{slug}_*`, `hiw_*`, `step_{i}_*`, `contact_*`.
pub fn document_from_form(params: &[(String, String)]) -> ContentDocument {
    ContentDocument {
        home: home_from_form(params),
        services_page: services_page_from_form(params),
        services_items: items_from_form(params),
        how_it_works: how_it_works_from_form(params),
        contact: contact_from_form(params),
    }
}

fn home_from_form(params: &[(String, String)]) -> HomeContent {
    HomeContent {
        title: get_bilingual(params, "home_title"),
        description: get_bilingual(params, "home_description"),
        services_button: get_bilingual(params, "home_services_button"),
        contact_button: get_bilingual(params, "home_contact_button"),
        slideshow_items: slides_from_form(params),
    }
}

fn slides_from_form(params: &[(String, String)]) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut i = 0;
    loop {
        let id_key = format!("slide_{i}_id");
        if !has_field(params, &id_key) {
            break;
        }
        let prefix = format!("slide_{i}");
        let cta_link = get_field(params, &format!("{prefix}_cta_link")).trim().to_string();
        slides.push(Slide {
            // Editor ids are never 0, so 0 marks a tampered value for re-id below.
            id: get_field(params, &id_key).trim().parse().unwrap_or(0),
            image_url: get_field(params, &format!("{prefix}_image_url")).to_string(),
            image_hint: get_field(params, &format!("{prefix}_image_hint")).to_string(),
            alt: get_bilingual(params, &format!("{prefix}_alt")),
            title: get_bilingual(params, &format!("{prefix}_title")),
            description: get_bilingual(params, &format!("{prefix}_description")),
            cta_text: get_bilingual(params, &format!("{prefix}_cta_text")),
            cta_link: if cta_link.is_empty() { None } else { Some(cta_link) },
        });
        i += 1;
    }

    // Unparseable ids get fresh unique ones instead of colliding at 0.
    while let Some(pos) = slides.iter().position(|s| s.id == 0) {
        slides[pos].id = slides::next_slide_id(&slides);
    }

    slides
}

fn services_page_from_form(params: &[(String, String)]) -> ServicesPageContent {
    ServicesPageContent {
        title: get_bilingual(params, "sp_title"),
        description: get_bilingual(params, "sp_description"),
        clubs_title: get_bilingual(params, "sp_clubs_title"),
        clubs_description: get_bilingual(params, "sp_clubs_description"),
        individuals_title: get_bilingual(params, "sp_individuals_title"),
        individuals_description: get_bilingual(params, "sp_individuals_description"),
    }
}

fn items_from_form(
    params: &[(String, String)],
) -> std::collections::BTreeMap<String, ServiceItemOverride> {
    definitions::all()
        .into_iter()
        .map(|def| {
            let prefix = format!("item_{}", def.slug);
            let item = ServiceItemOverride {
                title: get_bilingual(params, &format!("{prefix}_title")),
                short_description: get_bilingual(params, &format!("{prefix}_short_description")),
                long_description: get_bilingual(params, &format!("{prefix}_long_description")),
                image_url: get_field(params, &format!("{prefix}_image_url")).to_string(),
                image_hint: get_field(params, &format!("{prefix}_image_hint")).to_string(),
            };
            (def.slug.to_string(), item)
        })
        .collect()
}

fn how_it_works_from_form(params: &[(String, String)]) -> HowItWorksContent {
    let mut steps = Vec::new();
    let mut i = 0;
    loop {
        let base = format!("step_{i}_title");
        // Stop at the first index the form did not submit. A blanked-out
        // title is still a submitted step and must survive reassembly.
        if !has_field(params, &format!("{base}_de")) {
            break;
        }
        steps.push(HowItWorksStep {
            title: get_bilingual(params, &base),
            description: get_bilingual(params, &format!("step_{i}_description")),
        });
        i += 1;
    }
    HowItWorksContent {
        title: get_bilingual(params, "hiw_title"),
        intro: get_bilingual(params, "hiw_intro"),
        steps,
    }
}

fn contact_from_form(params: &[(String, String)]) -> ContactContent {
    ContactContent {
        title: get_bilingual(params, "contact_title"),
        description: get_bilingual(params, "contact_description"),
        name_label: get_bilingual(params, "contact_name_label"),
        email_label: get_bilingual(params, "contact_email_label"),
        subject_label: get_bilingual(params, "contact_subject_label"),
        message_label: get_bilingual(params, "contact_message_label"),
        details_label: get_bilingual(params, "contact_details_label"),
        submit_label: get_bilingual(params, "contact_submit_label"),
        phone: get_field(params, "contact_phone").to_string(),
    }
}
