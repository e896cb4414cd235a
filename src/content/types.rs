use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::Bilingual;

/// One entry in the homepage's rotating promotional banner.
/// Ids are unique within the list but need not be contiguous; list order
/// is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    pub image_url: String,
    pub image_hint: String,
    pub alt: Bilingual,
    pub title: Bilingual,
    pub description: Bilingual,
    pub cta_text: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub title: Bilingual,
    pub description: Bilingual,
    pub services_button: Bilingual,
    pub contact_button: Bilingual,
    pub slideshow_items: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPageContent {
    pub title: Bilingual,
    pub description: Bilingual,
    pub clubs_title: Bilingual,
    pub clubs_description: Bilingual,
    pub individuals_title: Bilingual,
    pub individuals_description: Bilingual,
}

/// Persisted bilingual text correction for one service, addressed by slug.
/// Empty fields mean "keep the compiled-in default"; icon, category and slug
/// are never part of an override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItemOverride {
    pub title: Bilingual,
    pub short_description: Bilingual,
    pub long_description: Bilingual,
    pub image_url: String,
    pub image_hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowItWorksStep {
    pub title: Bilingual,
    pub description: Bilingual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowItWorksContent {
    pub title: Bilingual,
    pub intro: Bilingual,
    pub steps: Vec<HowItWorksStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub title: Bilingual,
    pub description: Bilingual,
    pub name_label: Bilingual,
    pub email_label: Bilingual,
    pub subject_label: Bilingual,
    pub message_label: Bilingual,
    pub details_label: Bilingual,
    pub submit_label: Bilingual,
    /// Language-independent.
    pub phone: String,
}

/// The single aggregate record of all editable site text. Persisted as one
/// JSON document with exactly these five top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub home: HomeContent,
    pub services_page: ServicesPageContent,
    pub services_items: BTreeMap<String, ServiceItemOverride>,
    pub how_it_works: HowItWorksContent,
    pub contact: ContactContent,
}
