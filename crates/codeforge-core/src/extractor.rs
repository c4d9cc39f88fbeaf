//! Fenced-block extraction from model output
//!
//! The model is asked for exactly one fenced block but is not guaranteed to
//! comply. Extraction is total: it always yields a string, degrading from an
//! exactly tagged fence, to any fence, to the raw text.

use tracing::debug;

/// Triple-backtick fence marker
pub const FENCE: &str = "```";

/// Fence tag used for README output regardless of the target language
pub const MARKDOWN_TAG: &str = "markdown";

/// Which fallback tier produced an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionTier {
    /// Found a fence tagged with the expected tag
    TaggedFence,
    /// Found a fence with another tag or none
    AnyFence,
    /// No fence at all; the whole trimmed text
    RawText,
}

/// Text between the first `marker` and the next fence, or to the end
fn after_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(marker)?;
    Some(match rest.split_once(FENCE) {
        Some((inside, _)) => inside,
        None => rest,
    })
}

/// Extract the payload and report which tier matched.
///
/// 1. first "```{tag}" up to the next "```"
/// 2. first "```" up to the next "```"
/// 3. the whole text
///
/// Every tier trims surrounding whitespace. When several blocks match, the
/// first one wins.
pub fn extract_with_tier(raw: &str, expected_tag: &str) -> (String, ExtractionTier) {
    let tagged = format!("{}{}", FENCE, expected_tag);

    if let Some(payload) = after_marker(raw, &tagged) {
        return (payload.trim().to_string(), ExtractionTier::TaggedFence);
    }

    if let Some(payload) = after_marker(raw, FENCE) {
        return (payload.trim().to_string(), ExtractionTier::AnyFence);
    }

    (raw.trim().to_string(), ExtractionTier::RawText)
}

/// Extract the payload of the first fenced block tagged `expected_tag`
pub fn extract_fenced(raw: &str, expected_tag: &str) -> String {
    let (payload, tier) = extract_with_tier(raw, expected_tag);
    debug!(?tier, expected_tag, "extracted payload");
    payload
}

/// Recover the payload from a view previously produced by [`wrap_as_markdown`].
///
/// Drops the opening fence line and everything from the last fence onwards.
/// Text that is not fenced, or whose opening fence has no newline after it,
/// comes back trimmed and otherwise untouched.
pub fn unwrap_rendered(view: &str) -> String {
    let view = view.trim();

    if !view.starts_with(FENCE) {
        return view.to_string();
    }

    match view.split_once('\n') {
        Some((_, body)) => match body.rsplit_once(FENCE) {
            Some((inside, _)) => inside.trim().to_string(),
            None => body.trim().to_string(),
        },
        None => view.to_string(),
    }
}

/// Render a payload as a fenced markdown block
pub fn wrap_as_markdown(payload: &str, fence_tag: &str) -> String {
    format!("{}{}\n{}\n{}", FENCE, fence_tag, payload.trim(), FENCE)
}
