//! Merge layer tests — override precedence, unknown-slug inertness, and
//! definition-order preservation.

use std::collections::BTreeMap;

use digitalhilfe::content::defaults;
use digitalhilfe::content::types::ServiceItemOverride;
use digitalhilfe::i18n::Bilingual;
use digitalhilfe::services::{definitions, merge};

fn first_slug() -> &'static str {
    definitions::all()[0].slug
}

#[test]
fn no_overrides_renders_definitions_verbatim() {
    let merged = merge::merge_all(&BTreeMap::new());
    let defs = definitions::all();

    assert_eq!(merged.len(), defs.len());
    for (m, d) in merged.iter().zip(&defs) {
        assert_eq!(m.slug, d.slug);
        assert_eq!(m.title, d.title);
        assert_eq!(m.short_description, d.short_description);
        assert_eq!(m.image_url, d.image_url);
    }
}

#[test]
fn non_empty_override_field_wins() {
    let slug = first_slug();
    let mut items = BTreeMap::new();
    items.insert(
        slug.to_string(),
        ServiceItemOverride {
            title: Bilingual::new("Eigener Titel", ""),
            ..Default::default()
        },
    );

    let merged = merge::merge_one(slug, &items).unwrap();
    let def = definitions::find(slug).unwrap();

    // The edited German title wins; the untouched English one keeps the default.
    assert_eq!(merged.title.de, "Eigener Titel");
    assert_eq!(merged.title.en, def.title.en);
    // Fields without override text keep the definition entirely.
    assert_eq!(merged.short_description, def.short_description);
    assert_eq!(merged.image_url, def.image_url);
}

#[test]
fn whitespace_only_override_does_not_win() {
    let slug = first_slug();
    let mut items = BTreeMap::new();
    items.insert(
        slug.to_string(),
        ServiceItemOverride {
            title: Bilingual::new("   ", "   "),
            ..Default::default()
        },
    );

    let merged = merge::merge_one(slug, &items).unwrap();
    assert_eq!(merged.title, definitions::find(slug).unwrap().title);
}

#[test]
fn unknown_slug_override_is_inert() {
    let mut items = BTreeMap::new();
    items.insert(
        "does-not-exist".to_string(),
        ServiceItemOverride {
            title: Bilingual::new("Geist", "Ghost"),
            ..Default::default()
        },
    );

    let merged = merge::merge_all(&items);
    assert!(merged.iter().all(|m| m.slug != "does-not-exist"));
    assert_eq!(merged.len(), definitions::all().len());

    assert!(merge::merge_one("does-not-exist", &items).is_none());
}

#[test]
fn merge_preserves_definition_order() {
    // Overrides come from a sorted map; the display order must still be
    // the compiled-in definition order.
    let items = defaults::default_service_items();
    let merged = merge::merge_all(&items);
    let defs = definitions::all();

    let merged_slugs: Vec<_> = merged.iter().map(|m| m.slug).collect();
    let def_slugs: Vec<_> = defs.iter().map(|d| d.slug).collect();
    assert_eq!(merged_slugs, def_slugs);
}

#[test]
fn default_items_mirror_definition_text() {
    let items = defaults::default_service_items();
    for def in definitions::all() {
        let item = items.get(def.slug).expect("every definition has a default item");
        assert_eq!(item.title, def.title);
        assert_eq!(item.long_description, def.long_description);
        assert_eq!(item.image_url, def.image_url);
    }
}
