use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::certificate;
use crate::chime::Chime;
use crate::commands::certificate::save_color_image;
use crate::config::Config;
use crate::deck::{self, Deck};
use crate::navigator::{NavCommand, Navigator, RenderSink, SlideHandle};
use crate::particles::ParticleField;
use crate::theme::{Theme, ThemePreference};

const TOAST_DURATION: f32 = 2.0;
const PULSE_DURATION: f32 = 1.6;
const TITLE_ENTRY_DURATION: f32 = 0.5;
const SWIPE_THRESHOLD: f32 = 50.0;
const SCROLL_EASE: f32 = 0.15;
const WELCOME_TOAST: &str = "Welcome! Use arrow keys or swipe to navigate";

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let fade_start = TOAST_DURATION - 0.5;
        if elapsed < fade_start {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - fade_start) / 0.5
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

/// A glow ring around one slide's content region after navigating to it.
struct Pulse {
    slide: usize,
    start: Instant,
}

/// UI-facing half of the navigator: records the side effects of each
/// navigation so the frame loop can render them.
struct Chrome {
    scroll_target_slide: usize,
    pulse: Option<Pulse>,
    /// Per-slide restart timestamp of the title entry animation.
    title_anim: Vec<Option<Instant>>,
    progress_percent: f32,
    counter_text: String,
    active_indicator: usize,
    toast: Option<Toast>,
}

impl Chrome {
    fn new(slide_count: usize) -> Self {
        Self {
            scroll_target_slide: 0,
            pulse: None,
            title_anim: vec![None; slide_count],
            progress_percent: 0.0,
            counter_text: String::new(),
            active_indicator: 0,
            toast: None,
        }
    }
}

impl RenderSink for Chrome {
    fn scroll_to_slide(&mut self, index: usize) {
        self.scroll_target_slide = index;
    }

    fn pulse_slide(&mut self, index: usize) {
        self.pulse = Some(Pulse {
            slide: index,
            start: Instant::now(),
        });
    }

    fn restart_title_animation(&mut self, index: usize) {
        if let Some(slot) = self.title_anim.get_mut(index) {
            *slot = Some(Instant::now());
        }
    }

    fn show_progress(&mut self, percent: f32) {
        self.progress_percent = percent;
    }

    fn show_counter(&mut self, text: String) {
        self.counter_text = text;
    }

    fn set_active_indicator(&mut self, index: usize) {
        self.active_indicator = index;
    }

    fn show_toast(&mut self, message: String) {
        self.toast = Some(Toast::new(message));
    }
}

/// Tracks a pointer press that may become a horizontal swipe.
enum ActiveSwipe {
    None,
    Tracking { origin: egui::Pos2, current: egui::Pos2 },
}

/// Hit rects of the on-screen controls, cached from the last drawn frame for
/// press hit-testing.
struct ControlRects {
    first: egui::Rect,
    prev: egui::Rect,
    next: egui::Rect,
    theme_toggle: egui::Rect,
    dots: Vec<egui::Rect>,
}

impl Default for ControlRects {
    fn default() -> Self {
        Self {
            first: egui::Rect::NOTHING,
            prev: egui::Rect::NOTHING,
            next: egui::Rect::NOTHING,
            theme_toggle: egui::Rect::NOTHING,
            dots: Vec::new(),
        }
    }
}

struct CertificateModal {
    name: String,
    generated: bool,
}

struct SlideshowApp {
    deck: Deck,
    navigator: Navigator,
    chrome: Chrome,
    theme_preference: ThemePreference,
    theme: Theme,
    last_system_dark: bool,
    particles: ParticleField,
    chime: Chime,
    scroll_offset: f32,
    active_swipe: ActiveSwipe,
    controls: ControlRects,
    certificate: Option<CertificateModal>,
    /// Certificate rect of the last drawn modal frame, for screenshot crop.
    certificate_rect: egui::Rect,
    pending_certificate_save: bool,
    show_help: bool,
    last_esc: Option<Instant>,
    frame_count: u32,
    fps: f32,
    fps_update: Instant,
}

impl SlideshowApp {
    fn new(deck: Deck, theme_preference: ThemePreference) -> Self {
        let slide_count = deck.slides.len();
        let handles: Vec<SlideHandle> = deck
            .slides
            .iter()
            .map(|s| SlideHandle {
                title: s.title.clone(),
            })
            .collect();

        let now = Instant::now();
        Self {
            deck,
            navigator: Navigator::new(handles),
            chrome: Chrome::new(slide_count),
            theme_preference,
            theme: theme_preference.resolve(false),
            last_system_dark: false,
            particles: ParticleField::new(),
            chime: Chime::new(),
            scroll_offset: 0.0,
            active_swipe: ActiveSwipe::None,
            controls: ControlRects::default(),
            certificate: None,
            certificate_rect: egui::Rect::ZERO,
            pending_certificate_save: false,
            show_help: false,
            last_esc: None,
            frame_count: 0,
            fps: 0.0,
            fps_update: now,
        }
    }

    fn slide_count(&self) -> usize {
        self.navigator.len()
    }

    fn cycle_theme(&mut self) {
        self.theme_preference = self.theme_preference.cycled();
        self.theme = self.theme_preference.resolve(self.last_system_dark);
        self.chrome
            .show_toast(format!("Theme: {}", self.theme_preference));
        self.chime.play();
        if let Err(e) = Config::save_theme(self.theme_preference) {
            eprintln!("Failed to persist theme preference: {e}");
        }
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_update.elapsed().as_secs_f32();
        if elapsed >= 0.5 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_update = Instant::now();
        }
    }

    /// Pointer presses on controls, and press/drag/release swipe tracking.
    /// Uses the control rects cached from the previous frame.
    fn handle_pointer_input(&mut self, ctx: &egui::Context) -> Vec<NavCommand> {
        let mut commands = Vec::new();

        let (pressed, down, pointer_pos) = ctx.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_down(egui::PointerButton::Primary),
                i.pointer.hover_pos(),
            )
        });

        let Some(pos) = pointer_pos else {
            return commands;
        };

        if pressed {
            if self.controls.theme_toggle.contains(pos) {
                self.cycle_theme();
            } else if self.controls.first.contains(pos) {
                self.chime.play();
                commands.push(NavCommand::First);
            } else if self.controls.prev.contains(pos) {
                self.chime.play();
                commands.push(NavCommand::Prev);
            } else if self.controls.next.contains(pos) {
                self.chime.play();
                commands.push(NavCommand::Next);
            } else if let Some(i) = self.controls.dots.iter().position(|d| d.contains(pos)) {
                commands.push(NavCommand::GoTo(i));
            } else {
                self.active_swipe = ActiveSwipe::Tracking {
                    origin: pos,
                    current: pos,
                };
            }
            return commands;
        }

        if down {
            if let ActiveSwipe::Tracking { current, .. } = &mut self.active_swipe {
                *current = pos;
            }
            return commands;
        }

        // Released: a horizontal drag past the threshold is a swipe
        if let ActiveSwipe::Tracking { origin, current } =
            std::mem::replace(&mut self.active_swipe, ActiveSwipe::None)
        {
            let dx = current.x - origin.x;
            if dx <= -SWIPE_THRESHOLD {
                commands.push(NavCommand::Next);
            } else if dx >= SWIPE_THRESHOLD {
                commands.push(NavCommand::Prev);
            }
        }

        commands
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }
}

impl eframe::App for SlideshowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_fps();

        // Follow the window system when the preference says so
        let system_dark = matches!(ctx.system_theme(), Some(egui::Theme::Dark));
        if system_dark != self.last_system_dark {
            self.last_system_dark = system_dark;
            self.theme = self.theme_preference.resolve(system_dark);
        }

        // Handle a certificate screenshot requested last frame
        if self.pending_certificate_save {
            let mut saved = false;
            let ppp = ctx.pixels_per_point();
            let crop = self.certificate_rect;
            ctx.input(|i| {
                for event in &i.events {
                    if let egui::Event::Screenshot { image, .. } = event {
                        let region = image.region(&crop, Some(ppp));
                        save_color_image(&region, std::path::Path::new("certificate.png"));
                        saved = true;
                    }
                }
            });
            if saved {
                self.pending_certificate_save = false;
                self.chrome
                    .show_toast("Certificate saved to certificate.png".to_string());
            }
        }

        let modal_open = self.certificate.is_some();
        let mut commands: Vec<NavCommand> = Vec::new();
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            if i.key_pressed(egui::Key::Escape) {
                if self.certificate.is_some() {
                    self.certificate = None;
                    self.last_esc = None;
                    return;
                }
                if self.show_help {
                    self.show_help = false;
                    self.last_esc = None;
                    return;
                }
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.chrome
                    .show_toast("Press Esc again to exit".to_string());
                return;
            }

            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            if modal_open {
                return;
            }

            if i.key_pressed(egui::Key::D) {
                self.cycle_theme();
                return;
            }
            if i.key_pressed(egui::Key::H) {
                self.show_help = !self.show_help;
                return;
            }
            if i.key_pressed(egui::Key::C) {
                self.certificate = Some(CertificateModal {
                    name: String::new(),
                    generated: false,
                });
                self.chime.play();
                return;
            }

            if i.key_pressed(egui::Key::ArrowRight) {
                commands.push(NavCommand::Next);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                commands.push(NavCommand::Prev);
            }
            if i.key_pressed(egui::Key::Home) {
                commands.push(NavCommand::First);
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if !modal_open && !self.show_help {
            commands.extend(self.handle_pointer_input(ctx));
        }

        for cmd in commands {
            self.navigator.dispatch(cmd, &mut self.chrome);
        }

        // Expire transient chrome
        if self.chrome.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.chrome.toast = None;
        }
        if self
            .chrome
            .pulse
            .as_ref()
            .is_some_and(|p| p.start.elapsed().as_secs_f32() >= PULSE_DURATION)
        {
            self.chrome.pulse = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = Self::compute_scale(rect);

                self.particles.draw(ui, rect, &self.theme);
                self.animate_scroll(ctx, rect);
                self.draw_slides(ui, rect, scale);
                self.draw_chrome(ui, rect, scale);

                if let Some(ref toast) = self.chrome.toast {
                    draw_toast(ui, rect, scale, toast, &self.theme);
                    ctx.request_repaint();
                }

                if self.show_help {
                    draw_help(ui, &self.theme, rect, scale);
                }
            });

        self.show_certificate_modal(ctx);

        // Particles animate continuously
        ctx.request_repaint();
    }
}

impl SlideshowApp {
    /// Ease the scroll offset toward the target slide ("smooth scroll into
    /// view"). Moves 15% of the remaining distance each frame.
    fn animate_scroll(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        let target = self.chrome.scroll_target_slide as f32 * rect.height();
        let diff = target - self.scroll_offset;
        if diff.abs() < 0.5 {
            self.scroll_offset = target;
        } else {
            self.scroll_offset += diff * SCROLL_EASE;
            ctx.request_repaint();
        }
    }

    fn draw_slides(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let h = rect.height();
        for (i, slide) in self.deck.slides.iter().enumerate() {
            let y = rect.top() + i as f32 * h - self.scroll_offset;
            let slide_rect =
                egui::Rect::from_min_size(egui::pos2(rect.left(), y), egui::vec2(rect.width(), h));
            if !slide_rect.intersects(rect) {
                continue;
            }
            self.draw_slide(ui, i, slide, slide_rect, scale);
        }
    }

    fn draw_slide(
        &self,
        ui: &egui::Ui,
        index: usize,
        slide: &crate::deck::Slide,
        rect: egui::Rect,
        scale: f32,
    ) {
        let content_rect = rect.shrink2(egui::vec2(120.0 * scale, 80.0 * scale));
        ui.painter().rect_filled(
            content_rect,
            12.0 * scale,
            Theme::with_opacity(self.theme.chrome_background, 0.85),
        );

        // Pulse ring from the most recent navigation
        if let Some(ref pulse) = self.chrome.pulse {
            if pulse.slide == index {
                let elapsed = pulse.start.elapsed().as_secs_f32();
                if elapsed < PULSE_DURATION {
                    let opacity = 1.0 - elapsed / PULSE_DURATION;
                    ui.painter().rect_stroke(
                        content_rect.expand(4.0 * scale),
                        12.0 * scale,
                        egui::Stroke::new(
                            3.0 * scale,
                            Theme::with_opacity(self.theme.accent, opacity),
                        ),
                        egui::StrokeKind::Outside,
                    );
                }
            }
        }

        let inner = content_rect.shrink(48.0 * scale);
        let mut cursor_y = inner.top() + 20.0 * scale;

        if let Some(ref title) = slide.title {
            // Entry animation: fade in and rise over the first half second
            let progress = match self.chrome.title_anim.get(index).copied().flatten() {
                Some(start) => {
                    (start.elapsed().as_secs_f32() / TITLE_ENTRY_DURATION).clamp(0.0, 1.0)
                }
                None => 1.0,
            };
            let opacity = progress;
            let rise = (1.0 - progress) * 20.0 * scale;

            let color = Theme::with_opacity(self.theme.heading_color, opacity);
            let galley = ui.painter().layout(
                title.clone(),
                egui::FontId::proportional(self.theme.title_size * scale),
                color,
                inner.width(),
            );
            let pos = egui::pos2(
                inner.center().x - galley.rect.width() / 2.0,
                cursor_y + rise,
            );
            cursor_y += galley.rect.height() + 40.0 * scale;
            ui.painter().galley(pos, galley, color);
        }

        if !slide.body.is_empty() {
            let galley = ui.painter().layout(
                slide.body.clone(),
                egui::FontId::proportional(self.theme.body_size * scale),
                self.theme.foreground,
                inner.width(),
            );
            let pos = egui::pos2(inner.left(), cursor_y);
            ui.painter().galley(pos, galley, self.theme.foreground);
        }
    }

    fn draw_chrome(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        // Progress bar across the top edge
        let bar_width = self.chrome.progress_percent / 100.0 * rect.width();
        let bar_rect = egui::Rect::from_min_size(
            rect.left_top(),
            egui::vec2(bar_width, 4.0 * scale.max(0.5)),
        );
        ui.painter().rect_filled(bar_rect, 0.0, self.theme.accent);

        // Slide counter, bottom right
        let counter_color = Theme::with_opacity(self.theme.foreground, 0.5);
        let counter_galley = ui.painter().layout_no_wrap(
            self.chrome.counter_text.clone(),
            egui::FontId::monospace(14.0 * scale),
            counter_color,
        );
        let counter_pos = egui::pos2(
            rect.right() - counter_galley.rect.width() - 16.0 * scale,
            rect.bottom() - 30.0 * scale,
        );
        ui.painter()
            .galley(counter_pos, counter_galley, counter_color);

        // Footer, bottom left
        if let Some(ref footer) = self.deck.meta.footer {
            let footer_color = Theme::with_opacity(self.theme.foreground, 0.4);
            let galley = ui.painter().layout_no_wrap(
                footer.clone(),
                egui::FontId::proportional(14.0 * scale),
                footer_color,
            );
            let pos = egui::pos2(rect.left() + 16.0 * scale, rect.bottom() - 30.0 * scale);
            ui.painter().galley(pos, galley, footer_color);
        }

        self.draw_indicator_dots(ui, rect, scale);
        self.draw_nav_buttons(ui, rect, scale);

        // FPS overlay, top right under the theme toggle
        let fps_text = format!("{:.0} fps", self.fps);
        let fps_color = Theme::with_opacity(self.theme.foreground, 0.3);
        let fps_galley =
            ui.painter()
                .layout_no_wrap(fps_text, egui::FontId::monospace(14.0 * scale), fps_color);
        let fps_pos = egui::pos2(
            rect.right() - fps_galley.rect.width() - 12.0 * scale,
            rect.top() + 48.0 * scale,
        );
        ui.painter().galley(fps_pos, fps_galley, fps_color);
    }

    /// One dot per slide, bottom center; the active one is a filled accent.
    fn draw_indicator_dots(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let count = self.slide_count();
        let radius = 6.0 * scale;
        let spacing = 22.0 * scale;
        let total = count as f32 * spacing;
        let y = rect.bottom() - 50.0 * scale;
        let left = rect.center().x - total / 2.0 + spacing / 2.0;

        self.controls.dots.clear();
        for i in 0..count {
            let center = egui::pos2(left + i as f32 * spacing, y);
            if i == self.chrome.active_indicator {
                ui.painter().circle_filled(center, radius, self.theme.accent);
            } else {
                ui.painter().circle_stroke(
                    center,
                    radius * 0.8,
                    egui::Stroke::new(
                        1.5 * scale,
                        Theme::with_opacity(self.theme.foreground, 0.5),
                    ),
                );
            }
            self.controls.dots.push(egui::Rect::from_center_size(
                center,
                egui::vec2(spacing, spacing),
            ));
        }
    }

    fn draw_nav_buttons(&mut self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let size = 40.0 * scale;
        let gap = 10.0 * scale;
        let y = rect.bottom() - 60.0 * scale - size;
        let right = rect.right() - 20.0 * scale;

        let next = egui::Rect::from_min_size(
            egui::pos2(right - size, y),
            egui::vec2(size, size),
        );
        let prev = next.translate(egui::vec2(-(size + gap), 0.0));
        let first = prev.translate(egui::vec2(-(size + gap), 0.0));
        let theme_toggle = egui::Rect::from_min_size(
            egui::pos2(right - size, rect.top() + 12.0 * scale),
            egui::vec2(size, size),
        );

        self.draw_control_button(ui, first, "\u{25B2}", scale);
        self.draw_control_button(ui, prev, "\u{25C0}", scale);
        self.draw_control_button(ui, next, "\u{25B6}", scale);
        self.draw_control_button(ui, theme_toggle, "\u{25D0}", scale);

        self.controls.first = first;
        self.controls.prev = prev;
        self.controls.next = next;
        self.controls.theme_toggle = theme_toggle;
    }

    fn draw_control_button(&self, ui: &egui::Ui, rect: egui::Rect, glyph: &str, scale: f32) {
        ui.painter().rect_filled(
            rect,
            8.0 * scale,
            Theme::with_opacity(self.theme.chrome_background, 0.9),
        );
        let color = Theme::with_opacity(self.theme.foreground, 0.8);
        let galley = ui.painter().layout_no_wrap(
            glyph.to_string(),
            egui::FontId::proportional(16.0 * scale),
            color,
        );
        let pos = egui::pos2(
            rect.center().x - galley.rect.width() / 2.0,
            rect.center().y - galley.rect.height() / 2.0,
        );
        ui.painter().galley(pos, galley, color);
    }

    fn show_certificate_modal(&mut self, ctx: &egui::Context) {
        let Some(mut modal) = self.certificate.take() else {
            return;
        };

        let mut close = false;
        let mut generate = false;
        let mut save = false;
        let mut back = false;

        egui::Window::new("Completion Certificate")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if modal.generated {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(
                            certificate::CANVAS_WIDTH / 2.0,
                            certificate::CANVAS_HEIGHT / 2.0,
                        ),
                        egui::Sense::hover(),
                    );
                    certificate::draw(
                        ui,
                        rect,
                        modal.name.trim(),
                        "the Interactive Web Development course",
                        &certificate::completion_date(),
                    );
                    self.certificate_rect = rect;

                    ui.horizontal(|ui| {
                        if ui.button("Save PNG").clicked() {
                            save = true;
                        }
                        if ui.button("Back").clicked() {
                            back = true;
                        }
                        if ui.button("Close").clicked() {
                            close = true;
                        }
                    });
                } else {
                    ui.label("Name to print on the certificate:");
                    ui.text_edit_singleline(&mut modal.name);
                    ui.horizontal(|ui| {
                        if ui.button("Generate").clicked() {
                            generate = true;
                        }
                        if ui.button("Close").clicked() {
                            close = true;
                        }
                    });
                }
            });

        if generate {
            if modal.name.trim().is_empty() {
                self.chrome.show_toast("Please enter your name!".to_string());
            } else {
                modal.generated = true;
                self.chime.play();
            }
        }
        if back {
            modal.generated = false;
        }
        if save {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.pending_certificate_save = true;
            self.chime.play();
        }

        if !close {
            self.certificate = Some(modal);
        }
    }
}

fn draw_toast(ui: &egui::Ui, rect: egui::Rect, scale: f32, toast: &Toast, theme: &Theme) {
    let opacity = toast.opacity();
    if opacity <= 0.0 {
        return;
    }
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.chrome_background, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        toast.message.clone(),
        egui::FontId::proportional(20.0 * scale),
        toast_color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.bottom() - 120.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

fn draw_help(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("\u{2192} / swipe left", "Next slide"),
        ("\u{2190} / swipe right", "Previous slide"),
        ("Home", "First slide"),
        ("C", "Completion certificate"),
        ("D", "Cycle theme (system/light/dark)"),
        ("F", "Toggle fullscreen"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.chrome_background, 0.92);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let help_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let help_width = 420.0 * scale;

    let help_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(help_width, help_height));
    ui.painter().rect_filled(help_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = egui::pos2(help_rect.left() + padding, help_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = help_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        let key_galley = ui.painter().layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter().galley(
            egui::pos2(help_rect.left() + padding, y),
            key_galley,
            key_color,
        );

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(15.0 * scale),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(help_rect.left() + padding + 190.0 * scale, y),
            desc_galley,
            text_color,
        );

        y += line_height;
    }
}

pub fn run(file: PathBuf, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let deck = deck::load(&file)?;

    if deck.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let title = deck.meta.title.clone().unwrap_or_else(|| {
        format!(
            "coursedeck - {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        )
    });

    let slide_count = deck.slides.len();

    // CLI flag overrides config
    let config = Config::load_or_default();
    let initial_slide = match (start_slide, config.start_mode.as_deref()) {
        (Some(s), _) => s.saturating_sub(1),
        (None, Some("first") | None) => 0,
        (None, Some(n)) => n.parse::<usize>().map(|v| v.saturating_sub(1)).unwrap_or(0),
    };
    let initial_slide = initial_slide.min(slide_count.saturating_sub(1));

    let theme_preference = config.theme.unwrap_or_default();

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title.clone())
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title.clone())
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = SlideshowApp::new(deck, theme_preference);
            app.navigator
                .dispatch(NavCommand::GoTo(initial_slide), &mut app.chrome);
            app.chrome.show_toast(WELCOME_TOAST.to_string());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
