use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config;
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub scrolled: bool,
    pub on_toggle_theme: Callback<()>,
}

/// Sun while dark (switch to light), moon while light.
pub fn toggle_icon(theme: Theme) -> Icon {
    if theme.is_dark() {
        Icon::Sun
    } else {
        Icon::Moon
    }
}

const SECTIONS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Services", "#services"),
    ("Contact", "#contact"),
];

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        theme,
        scrolled,
        on_toggle_theme,
    } = props;

    let toggle = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let toggle_label = if theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <IconView icon={Icon::Sparkles} class="icon-md accent" />
                    <span class="brand gradient-text">{ config::BRAND }</span>
                </div>

                <div class="nav-links">
                    { for SECTIONS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link">{ *label }</a>
                    }) }
                </div>

                <button class="theme-toggle" onclick={toggle} aria-label={toggle_label}>
                    <IconView icon={toggle_icon(*theme)} class="icon-sm" />
                </button>
            </div>
        </nav>
    }
}
