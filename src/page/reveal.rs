use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};
use yew::prelude::*;

use crate::config;

const REVEAL_SELECTOR: &str = ".fade-in, .zoom-in";

/// Whether an element whose top edge sits at `top` should start animating.
pub fn in_reveal_zone(top: f64, viewport_height: f64) -> bool {
    top < viewport_height / config::REVEAL_VIEWPORT_DIVISOR
}

/// Indices of the elements, given their top edges, that are due to start.
pub fn due_for_reveal(tops: &[f64], viewport_height: f64) -> Vec<usize> {
    tops.iter()
        .enumerate()
        .filter(|(_, top)| in_reveal_zone(**top, viewport_height))
        .map(|(index, _)| index)
        .collect()
}

fn start_animation(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("animation-play-state", "running");
    }
}

fn elements(nodes: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(nodes) = nodes else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal_elements(document: &Document) -> Vec<Element> {
    elements(document.query_selector_all(REVEAL_SELECTOR))
}

fn reveal_in_view(window: &web_sys::Window, candidates: Vec<Element>) {
    let Some(viewport_height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };
    let tops: Vec<f64> = candidates.iter().map(|e| e.get_bounding_client_rect().top()).collect();
    for index in due_for_reveal(&tops, viewport_height) {
        start_animation(&candidates[index]);
    }
}

fn check_scroll(window: &web_sys::Window, document: &Document) {
    reveal_in_view(window, reveal_elements(document));
}

/// Starts reveal animations under `root` that are already in view. For
/// content mounted after the page-level observer collected its targets.
pub fn reveal_within(root: &Element) {
    if let Some(window) = window() {
        reveal_in_view(&window, elements(root.query_selector_all(REVEAL_SELECTOR)));
    }
}

fn observe_reveals(window: &web_sys::Window, document: &Document) -> Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> {
    if !Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        return None;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    start_animation(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_OBSERVER_THRESHOLD));
    options.set_root_margin(config::REVEAL_OBSERVER_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for element in reveal_elements(document) {
        observer.observe(&element);
    }
    Some((observer, callback))
}

/// Plays `.fade-in` / `.zoom-in` animations as their elements scroll into view.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let listener = window().and_then(|window| {
                let document = window.document()?;

                let scroll_callback = {
                    let window = window.clone();
                    let document = document.clone();
                    Closure::<dyn Fn()>::new(move || check_scroll(&window, &document))
                };
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

                // Initial check in case elements are already in view
                check_scroll(&window, &document);

                let observer = observe_reveals(&window, &document);
                Some((window, scroll_callback, observer))
            });

            move || {
                if let Some((window, scroll_callback, observer)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_above_the_lower_quarter_of_the_viewport() {
        assert!(in_reveal_zone(0.0, 1300.0));
        assert!(in_reveal_zone(999.0, 1300.0));
        assert!(!in_reveal_zone(1000.0, 1300.0));
    }

    #[test]
    fn only_elements_in_the_zone_are_due() {
        let tops = [120.0, 900.0, -40.0, 615.0, 616.0];
        assert_eq!(due_for_reveal(&tops, 800.0), vec![0, 2, 3]);
    }

    #[test]
    fn nothing_is_due_without_candidates() {
        assert!(due_for_reveal(&[], 800.0).is_empty());
    }

    #[test]
    fn elements_above_the_fold_count_as_in_view() {
        assert!(in_reveal_zone(-250.0, 800.0));
    }
}
