use std::path::{Path, PathBuf};

use eframe::egui;

use crate::certificate;

/// Offscreen-style renderer: draws the certificate once, screenshots the
/// viewport, saves it as PNG, and closes.
struct CertificateApp {
    name: String,
    course: String,
    date: String,
    output: PathBuf,
    screenshot_requested: bool,
    done: bool,
}

impl eframe::App for CertificateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Check for screenshot result from previous frame
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    save_color_image(image, &self.output);
                    eprintln!("  Saved {}", self.output.display());
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.done = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                certificate::draw(ui, rect, &self.name, &self.course, &self.date);
            });

        // Request screenshot after rendering (will arrive next frame)
        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

pub(crate) fn save_color_image(image: &egui::ColorImage, path: &Path) {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)
        .unwrap_or_else(|e| eprintln!("Failed to save {}: {e}", path.display()));
}

pub fn run(name: String, course: String, output: PathBuf) -> anyhow::Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("Please enter your name!");
    }

    let date = certificate::completion_date();
    eprintln!("Rendering certificate for {name} to {}", output.display());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([certificate::CANVAS_WIDTH, certificate::CANVAS_HEIGHT])
        .with_title("coursedeck certificate")
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "coursedeck certificate",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(CertificateApp {
                name,
                course,
                date,
                output,
                screenshot_requested: false,
                done: false,
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    eprintln!("Certificate export complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected_before_any_rendering() {
        for name in ["", "   ", "\t\n"] {
            let err = run(name.to_string(), "a course".to_string(), "out.png".into())
                .unwrap_err();
            assert_eq!(err.to_string(), "Please enter your name!");
        }
    }
}
