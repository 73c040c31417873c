use std::rc::Rc;

use dhyan_common::audio::{format_time, PlaybackEvent, PlaybackState, SKIP_SECONDS};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Default, PartialEq)]
struct Playback(PlaybackState);

impl Reducible for Playback {
    type Action = PlaybackEvent;

    fn reduce(self: Rc<Self>, event: PlaybackEvent) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(event);
        Rc::new(Playback(next))
    }
}

#[derive(Properties, PartialEq)]
pub struct AudioPlayerProps {
    pub src: String,
}

/// Custom controls over a hidden `<audio>` element.
#[function_component(AudioPlayer)]
pub fn audio_player(props: &AudioPlayerProps) -> Html {
    let audio_ref = use_node_ref();
    let playback = use_reducer(Playback::default);
    let state = &playback.0;

    // A new source starts from scratch.
    {
        let playback = playback.dispatcher();
        use_effect_with_deps(
            move |_| {
                playback.dispatch(PlaybackEvent::Reset);
                || ()
            },
            props.src.clone(),
        );
    }

    {
        let audio_ref = audio_ref.clone();
        use_effect_with_deps(
            move |speed| {
                if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                    audio.set_playback_rate(*speed);
                }
                || ()
            },
            state.speed(),
        );
    }

    let media_event = |read: fn(&HtmlAudioElement) -> PlaybackEvent| {
        let audio_ref = audio_ref.clone();
        let playback = playback.dispatcher();
        Callback::from(move |_: Event| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                playback.dispatch(read(&audio));
            }
        })
    };
    let on_time_update = media_event(|audio| PlaybackEvent::Time(audio.current_time()));
    let on_metadata = media_event(|audio| PlaybackEvent::Duration(audio.duration()));
    let on_play = media_event(|_| PlaybackEvent::Playing(true));
    let on_pause = media_event(|_| PlaybackEvent::Playing(false));

    let toggle = {
        let audio_ref = audio_ref.clone();
        let playing = state.is_playing();
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            if playing {
                if let Err(e) = audio.pause() {
                    log::warn!("Pause failed: {:?}", e);
                }
                return;
            }
            match audio.play() {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("Playback refused: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("Play failed: {:?}", e),
            }
        })
    };

    // The element is the clock: clamp against what it reports right now.
    let seek_to = {
        let audio_ref = audio_ref.clone();
        let playback = playback.dispatcher();
        move |target: Option<f64>, delta: f64| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            let mut now = PlaybackState::default();
            now.set_duration(audio.duration());
            now.time_update(audio.current_time());
            let position = match target {
                Some(target) => now.seek(target),
                None => now.skip(delta),
            };
            audio.set_current_time(position);
            playback.dispatch(PlaybackEvent::Seek(position));
        }
    };

    let back = {
        let seek_to = seek_to.clone();
        Callback::from(move |_: MouseEvent| seek_to(None, -SKIP_SECONDS))
    };
    let forward = {
        let seek_to = seek_to.clone();
        Callback::from(move |_: MouseEvent| seek_to(None, SKIP_SECONDS))
    };
    let on_seek = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Ok(target) = input.value().parse::<f64>() {
            seek_to(Some(target), 0.0);
        }
    });

    let cycle_speed = {
        let playback = playback.dispatcher();
        Callback::from(move |_: MouseEvent| playback.dispatch(PlaybackEvent::CycleSpeed))
    };

    html! {
        <div class="audio-player">
            <style>{AUDIO_CSS}</style>
            <audio
                ref={audio_ref}
                src={props.src.clone()}
                preload="metadata"
                ontimeupdate={on_time_update}
                onloadedmetadata={on_metadata}
                onplay={on_play}
                onpause={on_pause.clone()}
                onended={on_pause}
            />
            <button class="audio-skip" onclick={back} aria-label="Back 5 seconds">{"-5s"}</button>
            <button class="audio-toggle" onclick={toggle}>
                { if state.is_playing() { "Pause" } else { "Play" } }
            </button>
            <button class="audio-skip" onclick={forward} aria-label="Forward 5 seconds">{"+5s"}</button>
            <span class="audio-time">{format_time(state.current())}</span>
            <input
                class="audio-seek"
                type="range"
                min="0"
                max={state.duration().to_string()}
                step="0.1"
                value={state.current().to_string()}
                oninput={on_seek}
            />
            <span class="audio-time">{format_time(state.duration())}</span>
            <button class="audio-speed" onclick={cycle_speed}>{state.label()}</button>
        </div>
    }
}

const AUDIO_CSS: &str = r#"
.audio-player {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.9rem 1.25rem;
    margin: 2rem 0;
    border-radius: 999px;
    background: #f4ebe1;
}
.audio-player button {
    border: none;
    background: none;
    font: inherit;
    cursor: pointer;
}
.audio-toggle {
    min-width: 4rem;
    padding: 0.4rem 1rem !important;
    border-radius: 999px;
    background: #1f1a17 !important;
    color: white;
}
.audio-seek {
    flex: 1;
}
.audio-time {
    font-variant-numeric: tabular-nums;
    font-size: 0.875rem;
}
.audio-speed {
    font-weight: 600;
}
"#;
