use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::audio::{AudioCommand, AudioController, AudioEvent, AudioState, Track};

/// Drives the two hidden `<audio>` elements from an [`AudioController`].
///
/// Each element is only ever played or paused through this deck. Results of
/// `play()` arrive asynchronously and are fed back as events.
pub struct AudioDeck {
    controller: RefCell<AudioController>,
    background: NodeRef,
    birthday: NodeRef,
    on_change: Callback<AudioState>,
}

impl AudioDeck {
    pub fn new(background: NodeRef, birthday: NodeRef, on_change: Callback<AudioState>) -> Self {
        // Nothing is accepted until the elements are mounted.
        let mut controller = AudioController::default();
        controller.detach();
        Self {
            controller: RefCell::new(controller),
            background,
            birthday,
            on_change,
        }
    }

    fn element(&self, track: Track) -> Option<HtmlAudioElement> {
        match track {
            Track::Background => self.background.cast::<HtmlAudioElement>(),
            Track::Birthday => self.birthday.cast::<HtmlAudioElement>(),
        }
    }

    /// Starts buffering both tracks.
    pub fn attach(&self) {
        self.controller.borrow_mut().attach();
        for track in [Track::Background, Track::Birthday] {
            if let Some(audio) = self.element(track) {
                audio.set_loop(true);
                audio.load();
            }
        }
    }

    /// Silences both tracks; results still in flight are dropped.
    pub fn detach(self: &Rc<Self>) {
        let commands = self.controller.borrow_mut().detach();
        for command in commands {
            self.run(command);
        }
    }

    /// Plays `track` if it is idle, pauses it if it is playing.
    pub fn toggle(self: &Rc<Self>, track: Track) {
        let state = self.controller.borrow().state();
        self.dispatch(AudioEvent::toggle(track, state));
    }

    pub fn dispatch(self: &Rc<Self>, event: AudioEvent) {
        let (commands, before, after) = {
            let mut controller = self.controller.borrow_mut();
            let before = controller.state();
            let commands = controller.handle(event);
            (commands, before, controller.state())
        };
        if before != after {
            self.on_change.emit(after);
        }
        for command in commands {
            self.run(command);
        }
    }

    fn run(self: &Rc<Self>, command: AudioCommand) {
        match command {
            AudioCommand::Pause(track) => {
                if let Some(audio) = self.element(track) {
                    if let Err(e) = audio.pause() {
                        web_sys::console::error_2(&format!("{} pause error:", track.label()).into(), &e);
                    }
                }
            }
            AudioCommand::Play(track) => {
                let Some(audio) = self.element(track) else {
                    self.fail(track, &JsValue::from_str("audio element is not mounted"));
                    return;
                };
                match audio.play() {
                    Ok(promise) => {
                        let deck = Rc::clone(self);
                        wasm_bindgen_futures::spawn_local(async move {
                            match JsFuture::from(promise).await {
                                Ok(_) => deck.dispatch(AudioEvent::Started(track)),
                                Err(e) => deck.fail(track, &e),
                            }
                        });
                    }
                    Err(e) => self.fail(track, &e),
                }
            }
        }
    }

    fn fail(self: &Rc<Self>, track: Track, error: &JsValue) {
        // Paused or superseded requests are rejected with AbortError; not an error.
        if self.controller.borrow().awaits_start(track) {
            web_sys::console::error_2(&format!("{} play error:", track.label()).into(), error);
        }
        self.dispatch(AudioEvent::Failed(track));
    }
}
