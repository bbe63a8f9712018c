use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct NavControlsProps {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Drives the play/pause icon of the background track button.
    pub music_playing: bool,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_toggle_music: Callback<()>,
}

#[function_component(NavControls)]
pub fn nav_controls(props: &NavControlsProps) -> Html {
    let on_prev = {
        let cb = props.on_previous.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_music = {
        let cb = props.on_toggle_music.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="nav-controls">
            <button class="nav-arrow" type="button" title="Previous year" disabled={!props.can_go_back} onclick={on_prev}>
                <Icon icon_id={IconId::LucideChevronLeft} width={"32"} height={"32"} />
            </button>
            <button class="music-btn" type="button" title={if props.music_playing {"Pause"} else {"Play"}} onclick={on_music}>
                <Icon icon_id={if props.music_playing {IconId::LucidePause} else {IconId::LucidePlay}} width={"32"} height={"32"} />
            </button>
            <button class="nav-arrow" type="button" title="Next year" disabled={!props.can_go_forward} onclick={on_next}>
                <Icon icon_id={IconId::LucideChevronRight} width={"32"} height={"32"} />
            </button>
        </div>
    }
}
