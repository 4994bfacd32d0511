use gloo_timers::callback::Interval;
use web_sys::{Element, TouchEvent};
use yew::prelude::*;

use crate::carousel::autoplay::Autoplay;
use crate::carousel::mode::CarouselAction;
use crate::carousel::navigator::SlideNavigator;
use crate::carousel::swipe::SwipeTracker;
use crate::catalog::Track;
use crate::config;
use crate::page::player::MusicCard;
use crate::page::reveal::reveal_within;

/// Slider DOM events, reduced to the values the slider cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderInput {
    PointerEnter,
    PointerLeave,
    TouchStart(f64),
    TouchEnd(f64),
    PreviousArrow,
    NextArrow,
    Dot(usize),
}

/// Input state one mounted slider owns: its autoplay slot and the touch in
/// progress.
#[derive(Debug)]
pub struct SliderInputs<H> {
    autoplay: Autoplay<H>,
    swipe: SwipeTracker,
}

impl<H> Default for SliderInputs<H> {
    fn default() -> Self {
        Self {
            autoplay: Autoplay::default(),
            swipe: SwipeTracker::default(),
        }
    }
}

impl<H> SliderInputs<H> {
    /// Feeds one input through and returns the navigation it asks for.
    /// `spawn_autoplay` is only called when the pointer leaves.
    pub fn handle(&mut self, input: SliderInput, spawn_autoplay: impl FnOnce() -> H) -> Option<CarouselAction> {
        match input {
            SliderInput::PointerEnter => {
                self.autoplay.stop();
                None
            }
            SliderInput::PointerLeave => {
                self.autoplay.start(spawn_autoplay);
                None
            }
            SliderInput::TouchStart(x) => {
                self.swipe.begin(x);
                None
            }
            SliderInput::TouchEnd(x) => self.swipe.finish(x).direction().map(CarouselAction::from),
            SliderInput::PreviousArrow => Some(CarouselAction::Previous),
            SliderInput::NextArrow => Some(CarouselAction::Next),
            SliderInput::Dot(index) => Some(CarouselAction::GoTo(index as isize)),
        }
    }

    pub fn start_autoplay(&mut self, spawn: impl FnOnce() -> H) {
        self.autoplay.start(spawn);
    }

    pub fn stop_autoplay(&mut self) -> bool {
        self.autoplay.stop()
    }
}

fn autoplay_timer(on_action: Callback<CarouselAction>) -> Interval {
    Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
        on_action.emit(CarouselAction::Next);
    })
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

#[derive(Properties, PartialEq)]
pub struct MusicSliderProps {
    pub tracks: &'static [Track],
    pub navigator: SlideNavigator,
    pub on_action: Callback<CarouselAction>,
}

/// One-card-at-a-time view of the music grid, mounted only while the
/// viewport is narrow. Unmounting it drops the autoplay timer.
#[function_component(MusicSlider)]
pub fn music_slider(props: &MusicSliderProps) -> Html {
    let inputs = use_mut_ref(SliderInputs::<Interval>::default);
    let slider_ref = use_node_ref();

    {
        let inputs = inputs.clone();
        let on_action = props.on_action.clone();
        let slider_ref = slider_ref.clone();
        use_effect_with_deps(
            move |_| {
                // Slides mount after the page observer collected its targets
                if let Some(root) = slider_ref.cast::<Element>() {
                    reveal_within(&root);
                }
                inputs.borrow_mut().start_autoplay(|| autoplay_timer(on_action));
                move || {
                    inputs.borrow_mut().stop_autoplay();
                }
            },
            (),
        );
    }

    let send = {
        let inputs = inputs.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |input: SliderInput| {
            let action = inputs
                .borrow_mut()
                .handle(input, || autoplay_timer(on_action.clone()));
            if let Some(action) = action {
                on_action.emit(action);
            }
        })
    };

    let touch_start = {
        let send = send.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                send.emit(SliderInput::TouchStart(x));
            }
        })
    };

    let touch_end = {
        let send = send.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                send.emit(SliderInput::TouchEnd(x));
            }
        })
    };

    let navigator = &props.navigator;

    html! {
        <div
            ref={slider_ref}
            class="music-slider"
            onmouseenter={send.reform(|_: MouseEvent| SliderInput::PointerEnter)}
            onmouseleave={send.reform(|_: MouseEvent| SliderInput::PointerLeave)}
            ontouchstart={touch_start}
            ontouchend={touch_end}
        >
            <div class="slider-container" style={format!("transform: {};", navigator.track_transform())}>
                { for props.tracks.iter().map(|track| html! {
                    <div class="slider-item">
                        <MusicCard track={*track} />
                    </div>
                }) }
            </div>
            <div class="slider-nav">
                { for (0..navigator.count()).map(|index| html! {
                    <div
                        class={classes!("slider-dot", navigator.is_active(index).then_some("active"))}
                        data-index={index.to_string()}
                        onclick={send.reform(move |_: MouseEvent| SliderInput::Dot(index))}
                    ></div>
                }) }
            </div>
            <div class="slider-arrows">
                <div class="slider-arrow slider-arrow-left" onclick={send.reform(|_: MouseEvent| SliderInput::PreviousArrow)}>
                    <i class="fas fa-chevron-left"></i>
                </div>
                <div class="slider-arrow slider-arrow-right" onclick={send.reform(|_: MouseEvent| SliderInput::NextArrow)}>
                    <i class="fas fa-chevron-right"></i>
                </div>
            </div>
        </div>
    }
}
