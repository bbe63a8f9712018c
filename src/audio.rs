//! Playback mode for the two looping tracks.
//!
//! The controller never touches the DOM. It turns user intent and playback
//! results into [`AudioCommand`]s which the deck in `playback.rs` executes
//! against the `<audio>` elements. A track only counts as playing once the
//! element has confirmed the start.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
    Birthday,
}

impl Track {
    pub fn label(self) -> &'static str {
        match self {
            Track::Background => "Background",
            Track::Birthday => "Birthday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioState {
    #[default]
    Idle,
    BackgroundPlaying,
    BirthdayPlaying,
}

impl AudioState {
    fn playing(track: Track) -> Self {
        match track {
            Track::Background => AudioState::BackgroundPlaying,
            Track::Birthday => AudioState::BirthdayPlaying,
        }
    }

    pub fn is_playing(self, track: Track) -> bool {
        self == AudioState::playing(track)
    }

    pub fn background_playing(self) -> bool {
        self == AudioState::BackgroundPlaying
    }

    pub fn birthday_playing(self) -> bool {
        self == AudioState::BirthdayPlaying
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    PlayBackground,
    PauseBackground,
    PlayBirthday,
    PauseBirthday,
    /// The element reported that playback actually began.
    Started(Track),
    /// The play request was rejected (autoplay policy, decode error, abort).
    Failed(Track),
}

impl AudioEvent {
    /// Play if the track is idle, pause if it is playing.
    pub fn toggle(track: Track, state: AudioState) -> Self {
        match (track, state.is_playing(track)) {
            (Track::Background, false) => AudioEvent::PlayBackground,
            (Track::Background, true) => AudioEvent::PauseBackground,
            (Track::Birthday, false) => AudioEvent::PlayBirthday,
            (Track::Birthday, true) => AudioEvent::PauseBirthday,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play(Track),
    Pause(Track),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioController {
    state: AudioState,
    pending: Option<Track>,
    /// Set once the page is gone; every later event is dropped.
    detached: bool,
}

impl AudioController {
    pub fn state(&self) -> AudioState {
        self.state
    }

    #[cfg(test)]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn attach(&mut self) {
        self.detached = false;
    }

    /// Stops both tracks and ignores everything that arrives afterwards,
    /// including results of `play()` calls still in flight.
    pub fn detach(&mut self) -> Vec<AudioCommand> {
        self.detached = true;
        self.pending = None;
        self.state = AudioState::Idle;
        vec![AudioCommand::Pause(Track::Background), AudioCommand::Pause(Track::Birthday)]
    }

    /// Whether a rejected start of `track` is a real failure worth reporting.
    /// A rejection for a request that was already paused or superseded is the
    /// browser aborting it on our behalf.
    pub fn awaits_start(&self, track: Track) -> bool {
        !self.detached && self.pending == Some(track)
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<Track> {
        self.pending
    }

    pub fn handle(&mut self, event: AudioEvent) -> Vec<AudioCommand> {
        if self.detached {
            return Vec::new();
        }
        match event {
            AudioEvent::PlayBackground => match self.state {
                AudioState::BackgroundPlaying => Vec::new(),
                // Asking for the background while the birthday song plays
                // hands playback back the same way pausing the song does.
                AudioState::BirthdayPlaying => self.handle(AudioEvent::PauseBirthday),
                AudioState::Idle => self.request(Track::Background),
            },
            AudioEvent::PauseBackground => match self.state {
                AudioState::BackgroundPlaying => {
                    self.state = AudioState::Idle;
                    vec![AudioCommand::Pause(Track::Background)]
                }
                _ => self.cancel(Track::Background),
            },
            AudioEvent::PlayBirthday => match self.state {
                AudioState::BirthdayPlaying => Vec::new(),
                AudioState::BackgroundPlaying => {
                    self.state = AudioState::Idle;
                    let mut commands = vec![AudioCommand::Pause(Track::Background)];
                    commands.extend(self.request(Track::Birthday));
                    commands
                }
                AudioState::Idle => self.request(Track::Birthday),
            },
            AudioEvent::PauseBirthday => match self.state {
                AudioState::BirthdayPlaying => {
                    self.state = AudioState::Idle;
                    let mut commands = vec![AudioCommand::Pause(Track::Birthday)];
                    commands.extend(self.request(Track::Background));
                    commands
                }
                _ => self.cancel(Track::Birthday),
            },
            AudioEvent::Started(track) => {
                if self.pending == Some(track) {
                    self.pending = None;
                    self.state = AudioState::playing(track);
                    Vec::new()
                } else if self.state.is_playing(track) {
                    Vec::new()
                } else {
                    // Superseded request; silence the element again.
                    vec![AudioCommand::Pause(track)]
                }
            }
            AudioEvent::Failed(track) => {
                if self.pending == Some(track) {
                    self.pending = None;
                }
                Vec::new()
            }
        }
    }

    fn request(&mut self, track: Track) -> Vec<AudioCommand> {
        if self.pending == Some(track) {
            return Vec::new();
        }
        let mut commands = Vec::new();
        if let Some(other) = self.pending.replace(track) {
            commands.push(AudioCommand::Pause(other));
        }
        commands.push(AudioCommand::Play(track));
        commands
    }

    fn cancel(&mut self, track: Track) -> Vec<AudioCommand> {
        if self.pending == Some(track) {
            self.pending = None;
            vec![AudioCommand::Pause(track)]
        } else {
            Vec::new()
        }
    }
}
