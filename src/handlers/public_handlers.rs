use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::session::set_lang;
use crate::content::ContentStore;
use crate::errors::{render, AppError};
use crate::i18n::{Bilingual, Lang};
use crate::services::{merge, ServiceCategory};
use crate::templates_structs::{
    HowItWorksTemplate, IndexTemplate, ServiceCardView, ServiceDetailTemplate, ServicesTemplate,
    SiteContext, SlideView, StepView,
};

pub async fn home(
    store: web::Data<ContentStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let doc = store.load();
    let ctx = SiteContext::build(&session, "/");
    let lang = ctx.lang;
    let home = &doc.home;

    let tmpl = IndexTemplate {
        title: home.title.get(lang).to_string(),
        description: home.description.get(lang).to_string(),
        services_button: home.services_button.get(lang).to_string(),
        contact_button: home.contact_button.get(lang).to_string(),
        slides: home
            .slideshow_items
            .iter()
            .map(|s| SlideView::from_slide(s, lang))
            .collect(),
        ctx,
    };
    render(tmpl)
}

pub async fn services(
    store: web::Data<ContentStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let doc = store.load();
    let ctx = SiteContext::build(&session, "/services");
    let lang = ctx.lang;
    let page = &doc.services_page;

    let merged = merge::merge_all(&doc.services_items);
    let cards = |category: ServiceCategory| -> Vec<ServiceCardView> {
        merged
            .iter()
            .filter(|s| s.category == category)
            .map(|s| ServiceCardView::from_merged(s, lang))
            .collect()
    };

    let tmpl = ServicesTemplate {
        title: page.title.get(lang).to_string(),
        description: page.description.get(lang).to_string(),
        clubs_title: page.clubs_title.get(lang).to_string(),
        clubs_description: page.clubs_description.get(lang).to_string(),
        clubs: cards(ServiceCategory::Clubs),
        individuals_title: page.individuals_title.get(lang).to_string(),
        individuals_description: page.individuals_description.get(lang).to_string(),
        individuals: cards(ServiceCategory::Individuals),
        ctx,
    };
    render(tmpl)
}

pub async fn service_detail(
    store: web::Data<ContentStore>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let doc = store.load();

    // Unknown slug is an explicit 404, distinct from any empty-content case.
    let service = merge::merge_one(&slug, &doc.services_items).ok_or(AppError::NotFound)?;

    let ctx = SiteContext::build(&session, &format!("/services/{slug}"));
    let lang = ctx.lang;
    let tmpl = ServiceDetailTemplate {
        icon: service.icon.to_string(),
        title: service.title.get(lang).to_string(),
        long_description: service.long_description.get(lang).to_string(),
        image_url: service.image_url.clone(),
        image_hint: service.image_hint.clone(),
        back_label: Bilingual::new("Zurück zu den Angeboten", "Back to services")
            .get(lang)
            .to_string(),
        ctx,
    };
    render(tmpl)
}

pub async fn how_it_works(
    store: web::Data<ContentStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let doc = store.load();
    let ctx = SiteContext::build(&session, "/how-it-works");
    let lang = ctx.lang;
    let page = &doc.how_it_works;

    let tmpl = HowItWorksTemplate {
        title: page.title.get(lang).to_string(),
        intro: page.intro.get(lang).to_string(),
        steps: page
            .steps
            .iter()
            .map(|s| StepView::from_step(s, lang))
            .collect(),
        ctx,
    };
    render(tmpl)
}

#[derive(Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub next: Option<String>,
}

/// Store the visitor's language choice in the session and go back to the
/// page they came from. `next` must be a site-local path.
pub async fn switch_lang(
    session: Session,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
) -> HttpResponse {
    let lang = Lang::from_code(&path.into_inner());
    set_lang(&session, lang);

    let next = query
        .next
        .as_deref()
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or("/");

    HttpResponse::SeeOther()
        .insert_header(("Location", next.to_string()))
        .finish()
}
