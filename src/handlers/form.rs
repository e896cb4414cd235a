//! Hand-rolled parsing for the admin editor's large dynamic form. The slide
//! and per-service field names carry indices/slugs, so the body is parsed
//! into key-value pairs instead of a fixed Deserialize struct.

use crate::i18n::Bilingual;

/// Decode a URL-encoded string (form data): `+` → space, `%HH` → byte.
/// Works on raw bytes; a `%` followed by anything but two ASCII hex digits
/// (including multi-byte UTF-8) is kept literally.
pub fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len());
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' && i + 2 < b.len() {
            let hi = char::from(b[i + 1]).to_digit(16);
            let lo = char::from(b[i + 2]).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Parse URL-encoded form body into key-value pairs.
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

/// Whether the form submitted the key at all, even with an empty value.
/// The indexed slide/step loops terminate on absence, not on emptiness.
pub fn has_field(params: &[(String, String)], key: &str) -> bool {
    params.iter().any(|(k, _)| k == key)
}

pub fn get_field<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// Read the `<base>_de` / `<base>_en` pair of a bilingual form field.
pub fn get_bilingual(params: &[(String, String)], base: &str) -> Bilingual {
    Bilingual {
        de: get_field(params, &format!("{base}_de")).to_string(),
        en: get_field(params, &format!("{base}_en")).to_string(),
    }
}
