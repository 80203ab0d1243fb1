//! Optional text-to-speech output.
//!
//! Speech is best-effort. When no engine is found the widget gets a
//! [`NoSpeech`], which reports itself unavailable and drops every utterance.

use std::cell::RefCell;
use std::process::{Child, Command, Stdio};

/// Locale every utterance is spoken in.
pub const SPEECH_LANG: &str = "en-US";

/// Something to say.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// The text.
    pub text: String,
    /// BCP 47 language tag.
    pub lang: &'static str,
    /// Speaking rate, 1.0 is the engine default.
    pub rate: f32,
    /// Voice pitch, 1.0 is the engine default.
    pub pitch: f32,
}

impl Utterance {
    /// An utterance in the fixed locale at default rate and pitch.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: SPEECH_LANG,
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// A text-to-speech capability.
pub trait Speaker {
    /// Whether speaking does anything.
    fn is_available(&self) -> bool;

    /// Speak without blocking. Failures are swallowed.
    fn speak(&self, utterance: &Utterance);
}

/// The speaker used when speech is unavailable or disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeech;

impl Speaker for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _utterance: &Utterance) {}
}

/// Speech engines driven through their command-line front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEngine {
    /// `espeak-ng`
    EspeakNg,
    /// `espeak`
    Espeak,
    /// speech-dispatcher's `spd-say`
    SpdSay,
    /// macOS `say`
    Say,
}

impl SpeechEngine {
    /// Engines in order of preference for this platform.
    pub fn candidates() -> &'static [SpeechEngine] {
        if cfg!(target_os = "macos") {
            &[SpeechEngine::Say, SpeechEngine::EspeakNg]
        } else {
            &[
                SpeechEngine::EspeakNg,
                SpeechEngine::Espeak,
                SpeechEngine::SpdSay,
            ]
        }
    }

    /// Executable name.
    pub fn program(self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::SpdSay => "spd-say",
            Self::Say => "say",
        }
    }

    fn probe_args(self) -> &'static [&'static str] {
        match self {
            Self::Say => &["-v", "?"],
            _ => &["--version"],
        }
    }

    /// Command-line arguments that speak `utterance`.
    pub fn args(self, utterance: &Utterance) -> Vec<String> {
        let lang = utterance.lang.to_lowercase();
        let short_lang = lang.split('-').next().unwrap_or("en").to_string();
        match self {
            Self::EspeakNg | Self::Espeak => vec![
                "-v".into(),
                lang,
                "-s".into(),
                scale(175.0, utterance.rate).to_string(),
                "-p".into(),
                scale(50.0, utterance.pitch).to_string(),
                utterance.text.clone(),
            ],
            // spd-say takes -100..=100 offsets around 0.
            Self::SpdSay => vec![
                "-l".into(),
                short_lang,
                "-r".into(),
                offset(utterance.rate).to_string(),
                "-p".into(),
                offset(utterance.pitch).to_string(),
                utterance.text.clone(),
            ],
            Self::Say => vec![
                "-r".into(),
                scale(175.0, utterance.rate).to_string(),
                utterance.text.clone(),
            ],
        }
    }

    fn is_installed(self) -> bool {
        Command::new(self.program())
            .args(self.probe_args())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

fn scale(base: f32, factor: f32) -> u32 {
    (base * factor.clamp(0.1, 10.0)).round() as u32
}

fn offset(factor: f32) -> i32 {
    (((factor - 1.0) * 100.0).round() as i32).clamp(-100, 100)
}

/// Speaks by spawning an external engine.
///
/// Only the newest utterance plays: starting one stops the previous engine
/// process, so fast rolls do not talk over each other.
#[derive(Debug)]
pub struct CommandSpeaker {
    engine: SpeechEngine,
    current: RefCell<Option<Child>>,
}

impl CommandSpeaker {
    /// Use a specific engine.
    pub fn new(engine: SpeechEngine) -> Self {
        Self {
            engine,
            current: RefCell::new(None),
        }
    }

    /// Probe the platform's engines once and pick the first installed.
    pub fn detect() -> Option<Self> {
        SpeechEngine::candidates()
            .iter()
            .copied()
            .find(|engine| engine.is_installed())
            .map(Self::new)
    }

    /// The engine in use.
    pub fn engine(&self) -> SpeechEngine {
        self.engine
    }

    /// Stop the utterance in progress, if any, and reap its process.
    pub fn interrupt(&self) {
        let Some(mut child) = self.current.borrow_mut().take() else {
            return;
        };
        if let Ok(None) = child.try_wait() {
            child.kill().ok();
        }
        child.wait().ok();
    }

    fn track(&self, child: Child) {
        self.interrupt();
        *self.current.borrow_mut() = Some(child);
    }
}

impl Speaker for CommandSpeaker {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance) {
        self.interrupt();
        let spawned = Command::new(self.engine.program())
            .args(self.engine.args(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.track(child),
            Err(e) => {
                tracing::warn!(engine = self.engine.program(), error = %e, "speech failed");
            }
        }
    }
}

/// Pick the detected engine, or [`NoSpeech`] when there is none or speech is off.
pub fn detect_speaker(enabled: bool) -> Box<dyn Speaker> {
    if !enabled {
        tracing::info!("speech disabled");
        return Box::new(NoSpeech);
    }
    match CommandSpeaker::detect() {
        Some(speaker) => {
            tracing::info!(engine = speaker.engine().program(), "speech engine found");
            Box::new(speaker)
        }
        None => {
            tracing::info!("no speech engine found, text only");
            Box::new(NoSpeech)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Speaker, Utterance};

    /// Collects utterances instead of speaking them. Clones share the log.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSpeaker {
        spoken: Rc<RefCell<Vec<Utterance>>>,
    }

    impl RecordingSpeaker {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn spoken(&self) -> Vec<Utterance> {
            self.spoken.borrow().clone()
        }
    }

    impl Speaker for RecordingSpeaker {
        fn is_available(&self) -> bool {
            true
        }

        fn speak(&self, utterance: &Utterance) {
            self.spoken.borrow_mut().push(utterance.clone());
        }
    }
}
