use crate::i18n::Bilingual;

use super::types::Slide;

/// Id for a newly appended slide: one above the current maximum, or 1 for
/// an empty list. Ids are only unique, never required to be contiguous.
pub fn next_slide_id(slides: &[Slide]) -> u32 {
    slides.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

/// Append a placeholder slide and return its id. Operates purely on the
/// in-memory list; nothing is persisted until the editor saves.
pub fn append_slide(slides: &mut Vec<Slide>) -> u32 {
    let id = next_slide_id(slides);
    slides.push(Slide {
        id,
        image_url: String::new(),
        image_hint: String::new(),
        alt: Bilingual::new("Neuer Slide", "New slide"),
        title: Bilingual::new("Neuer Slide", "New slide"),
        description: Bilingual::new("Beschreibung folgt.", "Description to follow."),
        cta_text: Bilingual::default(),
        cta_link: None,
    });
    id
}

/// Remove the slide at `index`. Returns false for an out-of-range index.
pub fn remove_slide(slides: &mut Vec<Slide>, index: usize) -> bool {
    if index < slides.len() {
        slides.remove(index);
        true
    } else {
        false
    }
}
