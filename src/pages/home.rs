use std::rc::Rc;
use yew::prelude::*;

use crate::audio::{AudioState, Track};
use crate::components::birthday_overlay::BirthdayOverlay;
use crate::components::nav_controls::NavControls;
use crate::components::snowfall::Snowfall;
use crate::components::year_image::PhotoFrame;
use crate::components::year_strip::YearStrip;
use crate::config::AppConfig;
use crate::playback::AudioDeck;
use crate::timeline::{Timeline, TimelineAction, YEAR_SEQUENCE};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub config: Rc<AppConfig>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let config = props.config.clone();
    let debug_logs = config.debug_logs;
    let assets = use_memo(config.clone(), |config| config.assets());

    let timeline = use_reducer(Timeline::default);
    let audio_state = use_state(AudioState::default);
    let background_ref = use_node_ref();
    let birthday_ref = use_node_ref();

    let deck = {
        let background_ref = background_ref.clone();
        let birthday_ref = birthday_ref.clone();
        let setter = audio_state.setter();
        use_memo((), move |_| {
            AudioDeck::new(background_ref, birthday_ref, Callback::from(move |state| setter.set(state)))
        })
    };

    if debug_logs {
        web_sys::console::log_1(&format!("Component rendered, current index: {}", timeline.index()).into());
    }

    // Buffer both tracks once the elements exist; silence them on unmount.
    {
        let deck = deck.clone();
        use_effect_with((), move |_| {
            deck.attach();
            move || deck.detach()
        });
    }

    let navigate = {
        let timeline = timeline.clone();
        move |label: &'static str, action: TimelineAction| {
            let timeline = timeline.clone();
            Callback::from(move |_: ()| {
                if debug_logs {
                    web_sys::console::log_1(&format!("{} clicked, current index: {}", label, timeline.index()).into());
                }
                timeline.dispatch(action);
            })
        }
    };
    let on_previous = navigate("Prev", TimelineAction::Previous);
    let on_next = navigate("Next", TimelineAction::Next);

    let on_select_year = {
        let timeline = timeline.clone();
        Callback::from(move |year: i32| {
            if debug_logs {
                web_sys::console::log_1(&format!("Updating timeline to year: {}", year).into());
            }
            timeline.dispatch(TimelineAction::GoToYear(year));
        })
    };

    let on_slider_change = {
        let timeline = timeline.clone();
        Callback::from(move |value: f64| {
            timeline.dispatch(TimelineAction::SliderValue(value));
        })
    };

    let toggle = |track: Track| {
        let deck = deck.clone();
        Callback::from(move |_: ()| deck.toggle(track))
    };
    let on_toggle_music = toggle(Track::Background);
    let on_toggle_song = toggle(Track::Birthday);

    let year = timeline.displayed_year();

    html! {
        <div class="page">
            <div class="story-card">
                <h1>{"9 year story in pictures"}</h1>

                <NavControls
                    can_go_back={!timeline.is_first()}
                    can_go_forward={!timeline.is_last()}
                    music_playing={audio_state.background_playing()}
                    {on_previous}
                    {on_next}
                    {on_toggle_music}
                />

                <YearStrip
                    years={YEAR_SEQUENCE}
                    current_index={timeline.index()}
                    {on_select_year}
                    {on_slider_change}
                />

                <div class="photo-frame">
                    <PhotoFrame {year} assets={assets.clone()} {debug_logs} />
                    if timeline.is_final_year() {
                        <BirthdayOverlay
                            song_playing={audio_state.birthday_playing()}
                            {on_toggle_song}
                        />
                    }
                </div>

                <Snowfall config={config.snowfall.clone()} />

                <audio ref={background_ref} src={assets.background_track()} loop=true preload="auto" style="display:none" />
                <audio ref={birthday_ref} src={assets.birthday_track()} loop=true preload="auto" style="display:none" />
            </div>
        </div>
    }
}
