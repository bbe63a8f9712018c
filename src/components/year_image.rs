use std::rc::Rc;
use yew::prelude::*;

use crate::config::AssetPaths;
use crate::timeline::FINAL_YEAR;

const EXIT_ANIMATION: &str = "photo-exit";

/// Which photo is on screen while the timeline moves.
///
/// The outgoing card finishes its exit animation before the incoming one is
/// mounted. Requests made during an exit only change the card that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoStage {
    shown: i32,
    target: i32,
    /// Bumped for every mounted card so the entrance always replays.
    generation: u32,
}

pub enum PhotoAction {
    Show(i32),
    ExitFinished,
}

impl PhotoStage {
    pub fn new(year: i32) -> Self {
        Self { shown: year, target: year, generation: 0 }
    }

    pub fn shown(&self) -> i32 {
        self.shown
    }

    pub fn is_exiting(&self) -> bool {
        self.shown != self.target
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Reducible for PhotoStage {
    type Action = PhotoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PhotoAction::Show(year) if year != self.target => Rc::new(PhotoStage { target: year, ..*self }),
            PhotoAction::ExitFinished if self.is_exiting() => Rc::new(PhotoStage {
                shown: self.target,
                target: self.target,
                generation: self.generation.wrapping_add(1),
            }),
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PhotoFrameProps {
    pub year: i32,
    pub assets: Rc<AssetPaths>,
    #[prop_or(false)]
    pub debug_logs: bool,
}

/// Shows the photo for `year`, animating the previous one out first.
#[function_component(PhotoFrame)]
pub fn photo_frame(props: &PhotoFrameProps) -> Html {
    let stage = {
        let year = props.year;
        use_reducer(move || PhotoStage::new(year))
    };

    {
        let stage = stage.clone();
        use_effect_with(props.year, move |year| {
            stage.dispatch(PhotoAction::Show(*year));
            || ()
        });
    }

    let on_exit_end = {
        let stage = stage.clone();
        Callback::from(move |_| stage.dispatch(PhotoAction::ExitFinished))
    };

    let shown = stage.shown();
    html! {
        <YearImage
            key={stage.generation()}
            year={shown}
            src={props.assets.image(shown)}
            highlight={shown == FINAL_YEAR}
            exiting={stage.is_exiting()}
            {on_exit_end}
            debug_logs={props.debug_logs}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct YearImageProps {
    pub year: i32,
    pub src: String,
    /// Adds the zoom/tilt hover effect reserved for the last photo.
    #[prop_or(false)]
    pub highlight: bool,
    #[prop_or(false)]
    pub exiting: bool,
    #[prop_or_default]
    pub on_exit_end: Callback<()>,
    #[prop_or(false)]
    pub debug_logs: bool,
}

/// Photo card for one year.
#[function_component(YearImage)]
pub fn year_image(props: &YearImageProps) -> Html {
    if props.debug_logs {
        web_sys::console::log_1(&format!("Year image rendered for year: {}", props.year).into());
    }

    let on_animation_start = {
        let year = props.year;
        let debug_logs = props.debug_logs;
        Callback::from(move |e: AnimationEvent| {
            if debug_logs {
                web_sys::console::log_1(
                    &format!("Animation {} started for year: {} at {}", e.animation_name(), year, js_sys::Date::now()).into(),
                );
            }
        })
    };

    let on_animation_end = {
        let year = props.year;
        let debug_logs = props.debug_logs;
        let on_exit_end = props.on_exit_end.clone();
        Callback::from(move |e: AnimationEvent| {
            let name = e.animation_name();
            if debug_logs {
                web_sys::console::log_1(
                    &format!("Animation completed for year: {} with {} at {}", year, name, js_sys::Date::now()).into(),
                );
            }
            if name == EXIT_ANIMATION {
                on_exit_end.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!("year-image", props.exiting.then_some("exiting"))}
            onanimationstart={on_animation_start}
            onanimationend={on_animation_end}
        >
            <img
                class={classes!("year-photo", props.highlight.then_some("final"))}
                src={props.src.clone()}
                alt={format!("Year {}", props.year)}
                loading="lazy"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(stage: PhotoStage, action: PhotoAction) -> PhotoStage {
        *Rc::new(stage).reduce(action)
    }

    #[test]
    fn new_stage_shows_the_year_without_exit() {
        let stage = PhotoStage::new(2017);
        assert_eq!(stage.shown(), 2017);
        assert!(!stage.is_exiting());
    }

    #[test]
    fn old_photo_stays_until_its_exit_ends() {
        let stage = reduce(PhotoStage::new(2017), PhotoAction::Show(2018));
        assert_eq!(stage.shown(), 2017);
        assert!(stage.is_exiting());

        let stage = reduce(stage, PhotoAction::ExitFinished);
        assert_eq!(stage.shown(), 2018);
        assert!(!stage.is_exiting());
        assert_eq!(stage.generation(), 1);
    }

    #[test]
    fn moves_during_exit_retarget_the_next_photo() {
        let stage = reduce(PhotoStage::new(2017), PhotoAction::Show(2018));
        let stage = reduce(stage, PhotoAction::Show(2021));
        assert_eq!(stage.shown(), 2017);

        let stage = reduce(stage, PhotoAction::ExitFinished);
        assert_eq!(stage.shown(), 2021);
    }

    #[test]
    fn returning_to_the_shown_year_cancels_the_exit() {
        let stage = reduce(PhotoStage::new(2020), PhotoAction::Show(2021));
        let stage = reduce(stage, PhotoAction::Show(2020));
        // Target equals shown again, so nothing is leaving.
        assert!(!stage.is_exiting());
        assert_eq!(stage.generation(), 0);
    }

    #[test]
    fn stray_exit_end_and_same_year_are_ignored() {
        let start = Rc::new(PhotoStage::new(2019));
        let after = start.clone().reduce(PhotoAction::ExitFinished);
        assert!(Rc::ptr_eq(&start, &after));
        let after = after.reduce(PhotoAction::Show(2019));
        assert!(Rc::ptr_eq(&start, &after));
    }
}
