use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::page::smooth_scroll::smooth_scroll_to;

pub fn scroll_top_visible(page_y: f64) -> bool {
    page_y > config::SCROLL_TOP_THRESHOLD
}

fn page_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| scroll_top_visible(page_y()));

    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                visible.set(scroll_top_visible(page_y()));
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let back_to_top = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <div class={classes!("scroll-to-top", (*visible).then_some("visible"))} onclick={back_to_top}>
            <i class="fas fa-arrow-up"></i>
        </div>
    }
}
