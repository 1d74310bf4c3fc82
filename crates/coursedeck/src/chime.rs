use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

const FREQUENCY_HZ: f32 = 800.0;
const DURATION: Duration = Duration::from_millis(100);
const GAIN: f32 = 0.3;

/// Short click cue played on control interactions.
///
/// Audio is strictly decorative: a missing output device, a failed sink, or
/// anything else just turns `play` into a no-op.
pub struct Chime {
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
}

impl Chime {
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
            },
            Err(_) => Self {
                _stream: None,
                handle: None,
            },
        }
    }

    pub fn play(&self) {
        let Some(handle) = &self.handle else { return };
        let Ok(sink) = Sink::try_new(handle) else {
            return;
        };

        let mut tone = SineWave::new(FREQUENCY_HZ).take_duration(DURATION);
        tone.set_filter_fadeout();
        sink.append(tone.amplify(GAIN));
        sink.detach();
    }
}
