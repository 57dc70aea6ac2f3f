//! Page-level UI state owned by the composition root.
//!
//! Theme and scroll are two independent flags. Both are folded into one
//! [`PageState`] so `App` can hold them in a single reducer and hand plain
//! values down to the sections that style themselves from them.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Root class the stylesheet keys its palette on.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        config::DEFAULT_THEME
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        ScrollState {
            is_scrolled: offset > config::SCROLL_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub theme: Theme,
    pub scroll: ScrollState,
}

pub enum PageAction {
    ToggleTheme,
    Scrolled(f64),
}

impl PageState {
    /// Applies an action, returning `None` when nothing observable changed.
    pub fn apply(&self, action: PageAction) -> Option<PageState> {
        match action {
            PageAction::ToggleTheme => Some(PageState {
                theme: self.theme.toggled(),
                ..*self
            }),
            PageAction::Scrolled(offset) => {
                let scroll = ScrollState::from_offset(offset);
                (scroll != self.scroll).then(|| PageState { scroll, ..*self })
            }
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => {
                debug!(
                    "page state: theme={:?} scrolled={}",
                    next.theme, next.scroll.is_scrolled
                );
                Rc::new(next)
            }
            // Same allocation back, so Yew skips the re-render.
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_starts_dark_and_unscrolled() {
        let state = PageState::default();
        assert!(state.theme.is_dark());
        assert!(!state.scroll.is_scrolled);
    }

    #[test]
    fn toggle_flips_theme_back_and_forth() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Light);
        let state = state.reduce(PageAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn scroll_flag_follows_threshold() {
        let state = Rc::new(PageState::default());

        let state = state.reduce(PageAction::Scrolled(0.0));
        assert!(!state.scroll.is_scrolled);
        let state = state.reduce(PageAction::Scrolled(51.0));
        assert!(state.scroll.is_scrolled);
        let state = state.reduce(PageAction::Scrolled(10.0));
        assert!(!state.scroll.is_scrolled);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!ScrollState::from_offset(50.0).is_scrolled);
        assert!(ScrollState::from_offset(50.5).is_scrolled);
    }

    #[test]
    fn scroll_on_same_side_keeps_state_instance() {
        let state = Rc::new(PageState::default()).reduce(PageAction::Scrolled(120.0));
        let again = Rc::clone(&state).reduce(PageAction::Scrolled(400.0));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn scroll_does_not_touch_theme() {
        let state = Rc::new(PageState::default())
            .reduce(PageAction::ToggleTheme)
            .reduce(PageAction::Scrolled(90.0));
        assert_eq!(state.theme, Theme::Light);
        assert!(state.scroll.is_scrolled);
    }

    #[test]
    fn theme_classes() {
        assert_eq!(Theme::Dark.class(), "theme-dark");
        assert_eq!(Theme::Light.class(), "theme-light");
    }
}
