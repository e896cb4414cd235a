use askama::Template;

use crate::contact::{ContactErrors, ContactSubmission};
use crate::content::types::{ContactContent, HowItWorksStep, Slide};
use crate::i18n::Lang;
use crate::services::MergedService;

use super::SiteContext;

/// A slide with both languages resolved to the visitor's choice.
pub struct SlideView {
    pub image_url: String,
    pub image_hint: String,
    pub alt: String,
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: Option<String>,
}

impl SlideView {
    pub fn from_slide(slide: &Slide, lang: Lang) -> Self {
        Self {
            image_url: slide.image_url.clone(),
            image_hint: slide.image_hint.clone(),
            alt: slide.alt.get(lang).to_string(),
            title: slide.title.get(lang).to_string(),
            description: slide.description.get(lang).to_string(),
            cta_text: slide.cta_text.get(lang).to_string(),
            cta_link: slide.cta_link.clone(),
        }
    }
}

/// A merged service resolved for display on the services overview.
pub struct ServiceCardView {
    pub slug: String,
    pub icon: String,
    pub title: String,
    pub short_description: String,
    pub image_url: String,
    pub image_hint: String,
}

impl ServiceCardView {
    pub fn from_merged(service: &MergedService, lang: Lang) -> Self {
        Self {
            slug: service.slug.to_string(),
            icon: service.icon.to_string(),
            title: service.title.get(lang).to_string(),
            short_description: service.short_description.get(lang).to_string(),
            image_url: service.image_url.clone(),
            image_hint: service.image_hint.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: SiteContext,
    pub title: String,
    pub description: String,
    pub services_button: String,
    pub contact_button: String,
    pub slides: Vec<SlideView>,
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub ctx: SiteContext,
    pub title: String,
    pub description: String,
    pub clubs_title: String,
    pub clubs_description: String,
    pub clubs: Vec<ServiceCardView>,
    pub individuals_title: String,
    pub individuals_description: String,
    pub individuals: Vec<ServiceCardView>,
}

#[derive(Template)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate {
    pub ctx: SiteContext,
    pub icon: String,
    pub title: String,
    pub long_description: String,
    pub image_url: String,
    pub image_hint: String,
    pub back_label: String,
}

pub struct StepView {
    pub title: String,
    pub description: String,
}

impl StepView {
    pub fn from_step(step: &HowItWorksStep, lang: Lang) -> Self {
        Self {
            title: step.title.get(lang).to_string(),
            description: step.description.get(lang).to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "how_it_works.html")]
pub struct HowItWorksTemplate {
    pub ctx: SiteContext,
    pub title: String,
    pub intro: String,
    pub steps: Vec<StepView>,
}

/// Contact page: resolved labels plus the (possibly invalid) submission so
/// the form re-renders with the visitor's values preserved.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub ctx: SiteContext,
    pub title: String,
    pub description: String,
    pub phone: String,
    pub name_label: String,
    pub email_label: String,
    pub subject_label: String,
    pub message_label: String,
    pub details_label: String,
    pub submit_label: String,
    pub form: ContactSubmission,
    pub errors: ContactErrors,
    pub sent_error: Option<String>,
    pub csrf_token: String,
}

impl ContactTemplate {
    pub fn new(ctx: SiteContext, content: &ContactContent, csrf_token: String) -> Self {
        let lang = ctx.lang;
        Self {
            title: content.title.get(lang).to_string(),
            description: content.description.get(lang).to_string(),
            phone: content.phone.clone(),
            name_label: content.name_label.get(lang).to_string(),
            email_label: content.email_label.get(lang).to_string(),
            subject_label: content.subject_label.get(lang).to_string(),
            message_label: content.message_label.get(lang).to_string(),
            details_label: content.details_label.get(lang).to_string(),
            submit_label: content.submit_label.get(lang).to_string(),
            form: ContactSubmission::default(),
            errors: ContactErrors::default(),
            sent_error: None,
            ctx,
            csrf_token,
        }
    }
}
