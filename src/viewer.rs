// src/viewer.rs

use crate::error::ViewerResult;
use crate::plot_functions::plot_range_and_mask::plot_range_and_mask;
use crate::types::{Figure, PreparedCase};

/// Receives each prepared test case in table order.
pub trait FigureSink {
    /// Draws and presents one case. Returns once the viewer is done with it.
    fn present(&mut self, case: &PreparedCase) -> ViewerResult<()>;
}

/// Shows every figure in a native window and blocks until that window is closed.
#[derive(Debug, Default)]
pub struct WindowViewer;

impl FigureSink for WindowViewer {
    fn present(&mut self, case: &PreparedCase) -> ViewerResult<()> {
        let figure = plot_range_and_mask(&case.title, &case.frames, case.intensity)?;
        show_figure(figure)
    }
}

/// Opens a window for `figure` and returns after the user closes it.
pub fn show_figure(figure: Figure) -> ViewerResult<()> {
    let size = [figure.width as f32, figure.height as f32];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size([size[0] * 0.5, size[1] * 0.5])
            .with_title(figure.title.clone()),
        // The driver needs control back once the window closes
        run_and_return: true,
        ..Default::default()
    };

    let app_name = figure.title.clone();
    tracing::debug!(title = %app_name, "opening figure window");
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |_cc| Ok(Box::new(FigureWindow::new(figure)))),
    )?;
    Ok(())
}

struct FigureWindow {
    pending: Option<Figure>,
    texture: Option<egui::TextureHandle>,
}

impl FigureWindow {
    fn new(figure: Figure) -> Self {
        Self {
            pending: Some(figure),
            texture: None,
        }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload once, on the first frame
        if let Some(figure) = self.pending.take() {
            let image = egui::ColorImage::from_rgb(
                [figure.width as usize, figure.height as usize],
                &figure.pixels,
            );
            self.texture = Some(ctx.load_texture(
                figure.title,
                image,
                egui::TextureOptions::NEAREST,
            ));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::new(texture).shrink_to_fit());
                    });
                }
            });
    }
}
