use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct BirthdayOverlayProps {
    pub song_playing: bool,
    pub on_toggle_song: Callback<()>,
}

#[function_component(BirthdayOverlay)]
pub fn birthday_overlay(props: &BirthdayOverlayProps) -> Html {
    let on_toggle = {
        let cb = props.on_toggle_song.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="birthday-overlay">
            <h2>
                {"Happy Birthday!"}
                <span class="sparkle"><Icon icon_id={IconId::HeroiconsOutlineSparkles} width={"24"} height={"24"} /></span>
            </h2>
            <p class="wish">{"Wishing you a year filled with love, joy, and dreams come true."}</p>
            <div class="song-controls">
                <button class="song-btn" type="button" onclick={on_toggle}>
                    <Icon icon_id={if props.song_playing {IconId::LucidePause} else {IconId::LucidePlay}} width={"20"} height={"20"} />
                </button>
                <span class="song-label">{ if props.song_playing {"Pause Music"} else {"Play Music"} }</span>
            </div>
        </div>
    }
}
