use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::defaults;
use super::types::ContentDocument;

/// Result of a save attempt. The store never panics or returns an error
/// type to the caller; failures are reported as data so the admin editor
/// can show them and keep the operator's edits.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

/// Whole-document JSON persistence for the site content. Single-writer by
/// design: saves are last-write-wins with no version check.
#[derive(Clone)]
pub struct ContentStore {
    path: PathBuf,
}

const REQUIRED_SECTIONS: [&str; 5] =
    ["home", "servicesPage", "servicesItems", "howItWorks", "contact"];

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted document. Never fails: a missing, unreadable or
    /// malformed file resolves to the default document, which is also
    /// written back to disk so the next load finds a valid file.
    pub fn load(&self) -> ContentDocument {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "Content file {} not readable ({e}), using defaults",
                    self.path.display()
                );
                return self.heal();
            }
        };

        match parse_document(&raw) {
            Some(doc) => doc,
            None => {
                log::warn!(
                    "Content file {} is malformed, replacing with defaults",
                    self.path.display()
                );
                self.heal()
            }
        }
    }

    /// Serialize and persist the full document. Writes to a sibling temp
    /// file and renames it over the target, so readers never observe a
    /// partial write.
    pub fn save(&self, doc: &ContentDocument) -> SaveOutcome {
        let json = match serde_json::to_string_pretty(doc) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize content document: {e}");
                return SaveOutcome {
                    success: false,
                    message: "Could not serialize the content document.".to_string(),
                };
            }
        };

        if let Err(e) = self.write_atomic(&json) {
            log::error!("Failed to write {}: {e}", self.path.display());
            return SaveOutcome {
                success: false,
                message: "Could not write the content file. Your edits were not saved.".to_string(),
            };
        }

        SaveOutcome {
            success: true,
            message: "Content saved.".to_string(),
        }
    }

    fn write_atomic(&self, json: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    /// Build defaults and try to persist them back (self-heal). A failed
    /// heal write is logged but the caller still gets usable content.
    fn heal(&self) -> ContentDocument {
        let doc = defaults::default_document();
        let outcome = self.save(&doc);
        if !outcome.success {
            log::warn!(
                "Could not self-heal content file {}: {}",
                self.path.display(),
                outcome.message
            );
        }
        doc
    }
}

/// Shape-check and deserialize one raw JSON document. Returns `None` when
/// the document must be discarded as a whole: not JSON, not an object,
/// a required top-level section missing, `home.slideshowItems` missing, or
/// any field failing the typed deserialization. A present-but-non-array
/// `slideshowItems` is the one finer-grained case: it alone is replaced by
/// the default slide list while the rest of the document is kept.
fn parse_document(raw: &str) -> Option<ContentDocument> {
    let mut value: Value = serde_json::from_str(raw).ok()?;
    let obj = value.as_object_mut()?;

    for key in REQUIRED_SECTIONS {
        if !obj.contains_key(key) {
            return None;
        }
    }

    let home = obj.get_mut("home")?.as_object_mut()?;
    let needs_default_slides = match home.get("slideshowItems") {
        None => return None,
        Some(items) => !items.is_array(),
    };
    if needs_default_slides {
        let fallback = serde_json::to_value(defaults::default_slides()).ok()?;
        home.insert("slideshowItems".to_string(), fallback);
    }

    serde_json::from_value(value).ok()
}
