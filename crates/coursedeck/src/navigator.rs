/// One entry of the navigator's slide list. The navigator never looks at
/// slide content; it only needs the title for toast messages.
#[derive(Debug, Clone)]
pub struct SlideHandle {
    pub title: Option<String>,
}

/// Inbound navigation command. Every input source (keyboard, swipe, buttons,
/// indicator dots) reduces to one of these before reaching the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    First,
    GoTo(usize),
}

/// Receiver for the visual side effects of a successful navigation.
///
/// The frame loop implements this against real chrome; tests implement it
/// with a recorder.
pub trait RenderSink {
    fn scroll_to_slide(&mut self, index: usize);
    fn pulse_slide(&mut self, index: usize);
    fn restart_title_animation(&mut self, index: usize);
    fn show_progress(&mut self, percent: f32);
    fn show_counter(&mut self, text: String);
    fn set_active_indicator(&mut self, index: usize);
    fn show_toast(&mut self, message: String);
}

/// Slide navigation state machine: an ordered slide list fixed at load time
/// and a cursor that is always a valid index while the list is non-empty.
///
/// Out-of-range requests are silent no-ops; there is no wraparound at either
/// end. Side effects fire only when the cursor actually moves to a valid
/// target (including re-selecting the current slide).
pub struct Navigator {
    slides: Vec<SlideHandle>,
    cursor: usize,
}

impl Navigator {
    pub fn new(slides: Vec<SlideHandle>) -> Self {
        Self { slides, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn dispatch(&mut self, command: NavCommand, sink: &mut dyn RenderSink) {
        match command {
            NavCommand::Next => {
                if self.cursor + 1 < self.slides.len() {
                    self.go_to(self.cursor + 1, sink);
                }
            }
            NavCommand::Prev => {
                if self.cursor > 0 {
                    self.go_to(self.cursor - 1, sink);
                }
            }
            NavCommand::First => self.go_to(0, sink),
            NavCommand::GoTo(index) => self.go_to(index, sink),
        }
    }

    fn go_to(&mut self, index: usize, sink: &mut dyn RenderSink) {
        if index >= self.slides.len() {
            return;
        }

        self.cursor = index;
        let count = self.slides.len();

        sink.scroll_to_slide(index);
        sink.pulse_slide(index);
        sink.restart_title_animation(index);
        sink.show_progress((index + 1) as f32 / count as f32 * 100.0);
        sink.show_counter(format!("{} / {}", index + 1, count));
        sink.set_active_indicator(index);

        let toast = self.slides[index]
            .title
            .clone()
            .unwrap_or_else(|| format!("Slide {}", index + 1));
        sink.show_toast(toast);
    }
}
