use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Id selector an in-page `href` points at, or `None` for a bare `#`
/// (and for anything that is not an in-page link).
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(_) => Some(href),
    }
}

/// Document offset that puts a target's top edge just under the fixed navbar.
pub fn scroll_offset(target_top: f64, page_y: f64, nav_height: f64) -> f64 {
    target_top + page_y - nav_height
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls to the element `href` names. Missing targets are ignored.
pub fn scroll_to_anchor(href: &str) {
    let Some(selector) = anchor_target(href) else {
        return;
    };
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let Some(target) = document.query_selector(selector).ok().flatten() else {
        log::warn!("anchor {} has no target on this page", href);
        return;
    };

    let nav_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0);
    let page_y = window.page_y_offset().unwrap_or(0.0);

    smooth_scroll_to(scroll_offset(target.get_bounding_client_rect().top(), page_y, nav_height));
}

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_follow: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that glides to its target instead of jumping.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_follow.emit(());
            scroll_to_anchor(&href);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
