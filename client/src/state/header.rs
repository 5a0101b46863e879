//! Two-tier header translation and the search affordance it drives.
//!
//! DESIGN
//! ======
//! Scroll position and explicit clicks both move the search affordance.
//! Scroll may only force it toward `Collapsed`/`Hidden`; `Expanded` is entered
//! solely through [`HeaderState::expand_search`]. Every transition reports what
//! changed so the DOM layer writes only what it must.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Visibility of the search affordance in the secondary header tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchAffordance {
    /// Icon not shown; the primary header is at least partly visible.
    #[default]
    Hidden,
    /// Icon shown, input closed.
    Collapsed,
    /// Input open and interactive.
    Expanded,
}

impl SearchAffordance {
    /// `aria-hidden` value for the affordance container.
    pub fn aria_hidden(self) -> bool {
        self != Self::Expanded
    }
}

/// Effects of one scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOutcome {
    /// Upward offset for both header tiers, in px.
    pub translate: f64,
    /// The primary tier is fully hidden; its own search input must be emptied.
    pub clear_top_search: bool,
    /// The affordance changed state and must be re-rendered.
    pub affordance_changed: bool,
    /// An open search box was force-closed; its draft must be discarded.
    pub discard_draft: bool,
}

/// Header geometry plus the shared search affordance state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderState {
    top_header_height: f64,
    translate: f64,
    affordance: SearchAffordance,
}

impl HeaderState {
    pub fn new(top_header_height: f64) -> Self {
        Self { top_header_height: sanitize(top_header_height), ..Self::default() }
    }

    pub fn top_header_height(&self) -> f64 {
        self.top_header_height
    }

    pub fn translate(&self) -> f64 {
        self.translate
    }

    pub fn affordance(&self) -> SearchAffordance {
        self.affordance
    }

    /// Refresh the cached primary-tier height after a viewport resize.
    pub fn set_top_header_height(&mut self, height: f64) {
        self.top_header_height = sanitize(height);
    }

    /// Map a scroll position to header offset and apply forced transitions.
    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollOutcome {
        let translate = clamp_translate(scroll_y, self.top_header_height);
        self.translate = translate;

        let before = self.affordance;
        let fully_hidden = translate >= self.top_header_height;
        let mut discard_draft = false;

        if fully_hidden {
            if self.affordance != SearchAffordance::Expanded {
                self.affordance = SearchAffordance::Collapsed;
            }
        } else {
            match self.affordance {
                SearchAffordance::Collapsed => self.affordance = SearchAffordance::Hidden,
                SearchAffordance::Expanded => {
                    self.affordance = SearchAffordance::Collapsed;
                    discard_draft = true;
                }
                SearchAffordance::Hidden => {}
            }
        }

        ScrollOutcome {
            translate,
            clear_top_search: fully_hidden,
            affordance_changed: before != self.affordance,
            discard_draft,
        }
    }

    /// Open the search box. Returns `false` when it was already open.
    pub fn expand_search(&mut self) -> bool {
        if self.affordance == SearchAffordance::Expanded {
            return false;
        }
        self.affordance = SearchAffordance::Expanded;
        true
    }

    /// Close an open search box. Returns `false` when it was not open.
    pub fn collapse_search(&mut self) -> bool {
        if self.affordance != SearchAffordance::Expanded {
            return false;
        }
        self.affordance = SearchAffordance::Collapsed;
        true
    }
}

/// `clamp(scroll_y, 0, top_header_height)`; non-finite input maps to 0.
pub fn clamp_translate(scroll_y: f64, top_header_height: f64) -> f64 {
    let scroll_y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
    scroll_y.max(0.0).min(sanitize(top_header_height))
}

/// CSS transform for a header tier lifted by `translate` px.
pub fn translate_css(translate: f64) -> String {
    format!("translateY(-{translate}px)")
}

fn sanitize(height: f64) -> f64 {
    if height.is_finite() { height.max(0.0) } else { 0.0 }
}
