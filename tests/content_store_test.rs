//! Content store tests — load fallback, self-healing, atomic save, and
//! the load/save round-trip.

mod common;

use common::*;
use digitalhilfe::content::{defaults, ContentStore};

#[test]
fn load_without_file_returns_defaults() {
    let (_dir, store) = temp_store();

    let doc = store.load();

    assert_eq!(doc, defaults::default_document());
}

#[test]
fn load_without_file_self_heals() {
    let (dir, store) = temp_store();

    let first = store.load();
    assert!(content_path(&dir).exists(), "load should write the default file");

    // An independent store reading the same path sees a structurally equal document.
    let second = ContentStore::new(content_path(&dir)).load();
    assert_eq!(first, second);
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, store) = temp_store();

    let mut doc = store.load();
    doc.home.title.de = "Geänderte Startseite".to_string();
    doc.contact.phone = "+49 40 111111".to_string();

    let outcome = store.save(&doc);
    assert!(outcome.success, "{}", outcome.message);

    assert_eq!(store.load(), doc);
}

#[test]
fn save_of_unedited_load_is_idempotent() {
    let (_dir, store) = temp_store();

    let loaded = store.load();
    let outcome = store.save(&loaded);
    assert!(outcome.success);

    assert_eq!(store.load(), loaded);
}

#[test]
fn garbage_json_falls_back_to_defaults() {
    let (_dir, store) = temp_store_with("this is { not json");

    assert_eq!(store.load(), defaults::default_document());
}

#[test]
fn garbage_json_is_healed_on_disk() {
    let (dir, store) = temp_store_with("{{{{");

    store.load();

    let raw = std::fs::read_to_string(content_path(&dir)).unwrap();
    let healed: serde_json::Value = serde_json::from_str(&raw).expect("healed file must be JSON");
    assert!(healed.get("home").is_some());
}

#[test]
fn missing_top_level_section_discards_whole_document() {
    let mut value = serde_json::to_value(defaults::default_document()).unwrap();
    value["home"]["title"]["de"] = serde_json::json!("Eigener Titel");
    value.as_object_mut().unwrap().remove("contact");

    let (_dir, store) = temp_store_with(&value.to_string());
    let doc = store.load();

    // No partial acceptance: the edited home title is gone too.
    assert_eq!(doc, defaults::default_document());
}

#[test]
fn missing_slideshow_attribute_discards_whole_document() {
    let mut value = serde_json::to_value(defaults::default_document()).unwrap();
    value["home"].as_object_mut().unwrap().remove("slideshowItems");

    let (_dir, store) = temp_store_with(&value.to_string());

    assert_eq!(store.load(), defaults::default_document());
}

#[test]
fn non_array_slideshow_is_replaced_in_isolation() {
    let mut value = serde_json::to_value(defaults::default_document()).unwrap();
    value["home"]["slideshowItems"] = serde_json::json!({"not": "a list"});
    value["home"]["title"]["de"] = serde_json::json!("Bleibt erhalten");

    let (_dir, store) = temp_store_with(&value.to_string());
    let doc = store.load();

    assert_eq!(doc.home.slideshow_items, defaults::default_slides());
    assert_eq!(doc.home.title.de, "Bleibt erhalten");
}

#[test]
fn wrongly_typed_field_discards_whole_document() {
    let mut value = serde_json::to_value(defaults::default_document()).unwrap();
    value["contact"]["phone"] = serde_json::json!(42);

    let (_dir, store) = temp_store_with(&value.to_string());

    assert_eq!(store.load(), defaults::default_document());
}

#[test]
fn persisted_file_uses_expected_top_level_keys() {
    let (dir, store) = temp_store();
    store.load();

    let raw = std::fs::read_to_string(content_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let obj = value.as_object().unwrap();

    for key in ["home", "servicesPage", "servicesItems", "howItWorks", "contact"] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert!(value["home"]["slideshowItems"].is_array());
}
