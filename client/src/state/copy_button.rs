//! Per-code-block copy feedback state.

/// How long the confirmation stays up after a successful copy.
pub const REVERT_DELAY_MS: u32 = 1500;

pub const FEEDBACK_LABEL: &str = "Copied!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Confirmed,
}

impl CopyFeedback {
    /// Icon for this feedback state under `theme`.
    pub fn icon(self, theme: super::theme::Theme) -> &'static str {
        match self {
            Self::Idle => theme.copy_icon(),
            Self::Confirmed => theme.tick_icon(),
        }
    }

    pub fn shows_label(self) -> bool {
        self == Self::Confirmed
    }
}
