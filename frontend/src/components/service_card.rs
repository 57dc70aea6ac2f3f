use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    pub theme: Theme,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class={classes!("service-card", props.theme.class())}>
            <div class="service-icon">
                <IconView icon={props.icon} class="icon-lg" />
            </div>
            <h3>{ props.title.clone() }</h3>
            <p class="muted">{ props.description.clone() }</p>
        </div>
    }
}
