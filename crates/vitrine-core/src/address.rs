//! Reflecting the active variant into the page's addressable state.
//!
//! The active variant ID lives in the URL's `variant` query parameter. The
//! replacement here is pure string-to-string; the caller applies it to the
//! page as a state replacement (no navigation, no history entry), so
//! applying the same ID repeatedly is idempotent by construction.

use crate::ids::VariantId;
use percent_encoding::percent_decode_str;

/// Query parameter carrying the active variant ID.
pub const VARIANT_PARAM: &str = "variant";

/// Read the variant ID named by a page URL, if any.
///
/// Returns `None` for an absent parameter or a value that is not a valid
/// numeric ID; the caller falls through to the next precedence tier.
pub fn variant_param(url: &str) -> Option<VariantId> {
    let rest = url.split('#').next().unwrap_or(url);
    let query = rest.split_once('?')?.1;

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == VARIANT_PARAM {
            let decoded = percent_decode_str(value).decode_utf8().ok()?;
            return decoded.parse::<u64>().ok().map(VariantId::new);
        }
    }
    None
}

/// Rewrite a URL so its `variant` parameter names the given variant.
///
/// Unrelated parameters and the fragment are preserved in order; the
/// parameter is appended when absent. Repeated application with the same
/// ID yields the same URL.
pub fn replace_variant_param(url: &str, id: VariantId) -> String {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };

    let mut pairs: Vec<String> = Vec::new();
    let mut replaced = false;
    if let Some(query) = query {
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let key = pair.split_once('=').map(|(k, _)| k).unwrap_or(pair);
            if key == VARIANT_PARAM {
                // Collapse repeated variant parameters into one.
                if !replaced {
                    pairs.push(format!("{}={}", VARIANT_PARAM, id));
                    replaced = true;
                }
            } else {
                pairs.push(pair.to_string());
            }
        }
    }
    if !replaced {
        pairs.push(format!("{}={}", VARIANT_PARAM, id));
    }

    let mut out = String::from(base);
    out.push('?');
    out.push_str(&pairs.join("&"));
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
