use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::mode::{CarouselAction, Mode, ModeController};
use crate::carousel::slider::MusicSlider;
use crate::catalog::TRACKS;
use crate::config;
use crate::page::player::MusicCard;

fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Featured tracks: a grid on wide screens, a slider at or below the breakpoint.
#[function_component(MusicSection)]
pub fn music_section() -> Html {
    let carousel = use_reducer(|| {
        let mut carousel = ModeController::new(config::SLIDER_BREAKPOINT, TRACKS.len());
        if let Some(width) = viewport_width() {
            carousel.evaluate(width);
        }
        carousel
    });
    let (width, _) = use_window_size();

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |width| {
                carousel.dispatch(CarouselAction::Resize(*width));
                || ()
            },
            width,
        );
    }

    let on_action = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |action: CarouselAction| dispatcher.dispatch(action))
    };

    let grid_style = if carousel.grid_hidden() { "display: none;" } else { "display: grid;" };

    html! {
        <section id="music" class={classes!("music", (carousel.mode() == Mode::Slider).then_some("slider-mode"))}>
            <div class="container">
                <h2 class="section-title fade-in">{"Featured Tracks"}</h2>
                {
                    if let Some(navigator) = carousel.slider() {
                        html! {
                            <MusicSlider tracks={TRACKS} navigator={navigator.clone()} on_action={on_action} />
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="music-grid" style={grid_style}>
                    { for TRACKS.iter().map(|track| html! { <MusicCard track={*track} /> }) }
                </div>
            </div>
        </section>
    }
}
