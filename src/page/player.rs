use yew::prelude::*;

use crate::catalog::Track;

/// Simulated playback state of a single music card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

impl Playback {
    pub fn toggled(self) -> Self {
        match self {
            Playback::Paused => Playback::Playing,
            Playback::Playing => Playback::Paused,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Playback::Paused => "fa-play",
            Playback::Playing => "fa-pause",
        }
    }

    pub fn announcement(self, track: &Track) -> String {
        match self {
            Playback::Playing => format!("Now playing: {} by {}", track.title, track.artist),
            Playback::Paused => format!("Paused: {} by {}", track.title, track.artist),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MusicCardProps {
    pub track: Track,
}

#[function_component(MusicCard)]
pub fn music_card(props: &MusicCardProps) -> Html {
    let track = props.track;
    let playback = use_state(Playback::default);

    let toggle_playback = {
        let playback = playback.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the click from reaching the card (or the slider under it)
            e.stop_propagation();
            let next = (*playback).toggled();
            log::info!("{}", next.announcement(&track));
            playback.set(next);
        })
    };

    html! {
        <div class="music-card zoom-in">
            <div class="music-cover">
                <img src={track.cover} alt={track.title} loading="lazy" />
                <button class="play-button" onclick={toggle_playback}>
                    <i class={classes!("fas", playback.icon_class())}></i>
                </button>
            </div>
            <h3>{track.title}</h3>
            <p>{track.artist}</p>
        </div>
    }
}
