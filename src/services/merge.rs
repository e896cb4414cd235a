use std::collections::BTreeMap;

use crate::content::types::ServiceItemOverride;
use crate::i18n::Bilingual;

use super::definitions::{self, ServiceCategory, ServiceDefinition};

/// A service definition with any persisted text overrides applied. This is
/// what every public page renders; it is never persisted itself.
#[derive(Debug, Clone)]
pub struct MergedService {
    pub slug: &'static str,
    pub category: ServiceCategory,
    pub icon: &'static str,
    pub title: Bilingual,
    pub short_description: Bilingual,
    pub long_description: Bilingual,
    pub image_url: String,
    pub image_hint: String,
}

/// Per-language overlay: the override wins only where it carries text.
fn overlay(default: &Bilingual, over: &Bilingual) -> Bilingual {
    Bilingual {
        de: pick(&default.de, &over.de),
        en: pick(&default.en, &over.en),
    }
}

fn pick(default: &str, over: &str) -> String {
    if over.trim().is_empty() {
        default.to_string()
    } else {
        over.to_string()
    }
}

fn merge(def: ServiceDefinition, over: Option<&ServiceItemOverride>) -> MergedService {
    let over = over.cloned().unwrap_or_default();
    MergedService {
        slug: def.slug,
        category: def.category,
        icon: def.icon,
        title: overlay(&def.title, &over.title),
        short_description: overlay(&def.short_description, &over.short_description),
        long_description: overlay(&def.long_description, &over.long_description),
        image_url: pick(def.image_url, &over.image_url),
        image_hint: pick(def.image_hint, &over.image_hint),
    }
}

/// Merge every compiled-in service with its override (if any). Iterates the
/// definitions, so the result keeps definition order and overrides for
/// unknown slugs are silently ignored.
pub fn merge_all(items: &BTreeMap<String, ServiceItemOverride>) -> Vec<MergedService> {
    definitions::all()
        .into_iter()
        .map(|def| {
            let over = items.get(def.slug);
            merge(def, over)
        })
        .collect()
}

/// Merge a single service by slug; `None` for slugs with no definition,
/// regardless of what the overrides map contains.
pub fn merge_one(slug: &str, items: &BTreeMap<String, ServiceItemOverride>) -> Option<MergedService> {
    let def = definitions::find(slug)?;
    let over = items.get(slug);
    Some(merge(def, over))
}
