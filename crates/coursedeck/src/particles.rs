use std::time::Instant;

use eframe::egui;

use crate::theme::Theme;

pub const PARTICLE_COUNT: usize = 50;

/// One decorative particle: spawned at a random horizontal position below the
/// viewport, floating to the top over `period` seconds with a sideways drift,
/// then looping.
#[derive(Debug, Clone)]
struct Particle {
    /// Horizontal spawn position as a fraction of the viewport width.
    x: f32,
    /// Total sideways drift over one loop, as a fraction of the width.
    drift: f32,
    /// Radius in points.
    size: f32,
    /// Seconds for one bottom-to-top float.
    period: f32,
    /// Seconds before the first launch.
    delay: f32,
    color_index: usize,
}

impl Particle {
    fn random() -> Self {
        Self {
            x: fastrand::f32(),
            drift: (fastrand::f32() - 0.5) * 0.1,
            size: fastrand::f32() * 4.0 + 1.0,
            period: fastrand::f32() * 20.0 + 15.0,
            delay: fastrand::f32() * 5.0,
            color_index: fastrand::usize(..3),
        }
    }

    /// Progress through the current loop at time `t`, in [0, 1).
    /// None before the particle's first launch.
    fn phase(&self, t: f32) -> Option<f32> {
        let local = t - self.delay;
        if local < 0.0 {
            return None;
        }
        Some((local % self.period) / self.period)
    }

    fn position_at(&self, t: f32, rect: egui::Rect) -> Option<egui::Pos2> {
        let phase = self.phase(t)?;
        let x = rect.left() + (self.x + self.drift * phase).rem_euclid(1.0) * rect.width();
        // Travel from just below the bottom edge to just above the top edge
        let y = rect.bottom() + 10.0 - phase * (rect.height() + 20.0);
        Some(egui::pos2(x, y))
    }
}

/// The full decorative background field.
pub struct ParticleField {
    particles: Vec<Particle>,
    start: Instant,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: (0..PARTICLE_COUNT).map(|_| Particle::random()).collect(),
            start: Instant::now(),
        }
    }

    pub fn draw(&self, ui: &egui::Ui, rect: egui::Rect, theme: &Theme) {
        let t = self.start.elapsed().as_secs_f32();
        let palette = theme.particle_palette();

        for particle in &self.particles {
            let Some(pos) = particle.position_at(t, rect) else {
                continue;
            };
            let color = palette[particle.color_index % palette.len()];
            ui.painter().circle_filled(pos, particle.size, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_particle() -> Particle {
        Particle {
            x: 0.5,
            drift: 0.04,
            size: 3.0,
            period: 20.0,
            delay: 2.0,
            color_index: 1,
        }
    }

    #[test]
    fn field_spawns_fifty_particles() {
        let field = ParticleField::new();
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn random_parameters_stay_in_range() {
        for _ in 0..200 {
            let p = Particle::random();
            assert!((0.0..=1.0).contains(&p.x));
            assert!(p.size >= 1.0 && p.size <= 5.0);
            assert!(p.period >= 15.0 && p.period <= 35.0);
            assert!(p.delay >= 0.0 && p.delay <= 5.0);
            assert!(p.color_index < 3);
        }
    }

    #[test]
    fn no_position_before_launch() {
        let p = fixed_particle();
        assert!(p.phase(1.9).is_none());
        assert!(p.phase(2.0).is_some());
    }

    #[test]
    fn phase_loops_within_unit_interval() {
        let p = fixed_particle();
        for t in [2.0, 12.0, 21.9, 22.1, 102.0] {
            let phase = p.phase(t).unwrap();
            assert!((0.0..1.0).contains(&phase), "phase {phase} at t {t}");
        }
        // One full period later the phase repeats
        let a = p.phase(5.0).unwrap();
        let b = p.phase(25.0).unwrap();
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn position_travels_bottom_to_top() {
        let p = fixed_particle();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 800.0));
        let early = p.position_at(2.01, rect).unwrap();
        let late = p.position_at(2.0 + 19.99, rect).unwrap();
        assert!(early.y > 780.0, "starts near the bottom: {}", early.y);
        assert!(late.y < 20.0, "ends near the top: {}", late.y);
        assert!(early.x >= rect.left() && early.x <= rect.right());
    }
}
