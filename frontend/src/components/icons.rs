use yew::prelude::*;

/// Line icons used across the page, drawn as 24x24 stroked SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Bot,
    ChevronDown,
    Database,
    Moon,
    Sparkles,
    Sun,
    Workflow,
    Zap,
}

impl Icon {
    fn paths(self) -> Html {
        match self {
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::Bot => html! {
                <>
                    <path d="M12 8V4H8" />
                    <rect width="16" height="12" x="4" y="8" rx="2" />
                    <path d="M2 14h2" />
                    <path d="M20 14h2" />
                    <path d="M15 13v2" />
                    <path d="M9 13v2" />
                </>
            },
            Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
            Icon::Database => html! {
                <>
                    <ellipse cx="12" cy="5" rx="9" ry="3" />
                    <path d="M3 5V19A9 3 0 0 0 21 19V5" />
                    <path d="M3 12A9 3 0 0 0 21 12" />
                </>
            },
            Icon::Moon => html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> },
            Icon::Sparkles => html! {
                <>
                    <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
                    <path d="M5 3v4" />
                    <path d="M19 17v4" />
                    <path d="M3 5h4" />
                    <path d="M17 19h4" />
                </>
            },
            Icon::Sun => html! {
                <>
                    <circle cx="12" cy="12" r="4" />
                    <path d="M12 2v2" />
                    <path d="M12 20v2" />
                    <path d="m4.93 4.93 1.41 1.41" />
                    <path d="m17.66 17.66 1.41 1.41" />
                    <path d="M2 12h2" />
                    <path d="M20 12h2" />
                    <path d="m6.34 17.66-1.41 1.41" />
                    <path d="m19.07 4.93-1.41 1.41" />
                </>
            },
            Icon::Workflow => html! {
                <>
                    <rect width="8" height="8" x="3" y="3" rx="2" />
                    <path d="M7 11v4a2 2 0 0 0 2 2h4" />
                    <rect width="8" height="8" x="13" y="13" rx="2" />
                </>
            },
            Icon::Zap => html! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" /> },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={classes!("icon", props.class.clone())}
            aria-hidden="true"
        >
            { props.icon.paths() }
        </svg>
    }
}
