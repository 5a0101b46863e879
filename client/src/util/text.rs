//! Text shaping for the decoration pass and copy buttons.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Stagger between consecutive letters of the hover wave, in seconds.
pub const LETTER_STAGGER_SECS: f64 = 0.04;

pub const LETTER_TRANSITION: &str = "transform .32s cubic-bezier(.2,.9,.3,1), color .28s";

/// One per-character span of a wrapped link label.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterSpan {
    pub glyph: String,
    pub delay_secs: f64,
}

impl LetterSpan {
    pub fn transition_delay(&self) -> String {
        format!("{}s", self.delay_secs)
    }
}

/// Split a trimmed label into staggered letters; spaces become no-break spaces.
pub fn letter_spans(label: &str) -> Vec<LetterSpan> {
    label
        .trim()
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            #[allow(clippy::cast_precision_loss)]
            let delay_secs = index as f64 * LETTER_STAGGER_SECS;
            let glyph = if ch == ' ' { '\u{00A0}'.to_string() } else { ch.to_string() };
            LetterSpan { glyph, delay_secs }
        })
        .collect()
}

/// Clipboard payload for a code block's rendered text.
pub fn code_payload(rendered: &str) -> String {
    rendered.trim().to_owned()
}

/// Caret position at the end of `value`, in UTF-16 units as the DOM counts them.
pub fn caret_end(value: &str) -> u32 {
    u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX)
}
