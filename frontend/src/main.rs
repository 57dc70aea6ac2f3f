use log::info;
use yew::prelude::*;

mod config;
mod error;
mod scroll;
mod state;
mod typewriter {
    pub mod machine;
    pub mod session;
    pub mod timer;
}
mod components {
    pub mod icons;
    pub mod nav;
    pub mod service_card;
    pub mod typewriter_text;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;
use scroll::use_scroll_offset;
use state::{PageAction, PageState};

#[function_component]
fn App() -> Html {
    let page = use_reducer(PageState::default);

    {
        let page = page.dispatcher();
        use_scroll_offset(Callback::from(move |offset: f64| {
            page.dispatch(PageAction::Scrolled(offset))
        }));
    }

    let on_toggle_theme = {
        let page = page.dispatcher();
        Callback::from(move |_: ()| {
            info!("Theme toggled");
            page.dispatch(PageAction::ToggleTheme)
        })
    };

    html! {
        <div class={classes!("page", page.theme.class())}>
            <Nav
                theme={page.theme}
                scrolled={page.scroll.is_scrolled}
                on_toggle_theme={on_toggle_theme}
            />
            <Landing theme={page.theme} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
