// File: crates/chart-core/src/raster.rs
// Summary: PNG preview of a Chart using a Skia CPU raster surface.

use std::path::Path;

use skia_safe as skia;

use crate::axis::{Axis, Orient};
use crate::chart::Chart;
use crate::error::{ChartError, Result};

impl Chart {
    /// Render the chart to PNG bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let (w, h) = (self.opts.width as i32, self.opts.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        let canvas = surface.canvas();
        let theme = &self.opts.theme;

        canvas.clear(theme.background.to_skia());

        let mut grid = skia::Paint::default();
        grid.set_anti_alias(true);
        grid.set_stroke_width(1.0);
        grid.set_color(theme.grid.to_skia());

        let mut label = skia::Paint::default();
        label.set_anti_alias(true);
        label.set_color(theme.axis_label.to_skia());
        let mut font = skia::Font::default();
        font.set_size(10.0);

        draw_axis(canvas, &self.x_axis(), &grid, &label, &font);
        draw_axis(canvas, &self.y_axis(), &grid, &label, &font);

        let stroke_width = self.opts.stroke_width as f32;
        draw_polyline(canvas, &self.threshold_xy(), theme.threshold_stroke.to_skia(), stroke_width);
        draw_polyline(canvas, &self.data_xy(), theme.data_stroke.to_skia(), stroke_width);

        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_style(skia::paint::Style::Fill);
        marker.set_color(theme.data_stroke.to_skia());
        for (x, y) in self.data_xy() {
            canvas.draw_circle((x as f32, y as f32), self.opts.marker_radius as f32, &marker);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "wrote chart png");
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, grid: &skia::Paint, label: &skia::Paint, font: &skia::Font) {
    let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
    let len = axis.tick_size_inner as f32;
    let pad = axis.tick_padding as f32;
    for tick in &axis.ticks {
        let p = tick.px as f32;
        match axis.orient {
            Orient::Bottom => {
                canvas.draw_line((tx + p, ty), (tx + p, ty + len), grid);
                canvas.draw_str(&tick.label, (tx + p - 10.0, ty + pad + 10.0), font, label);
            }
            Orient::Left => {
                // Left ticks grow rightwards from the axis when the size is negative.
                canvas.draw_line((tx, ty + p), (tx - len, ty + p), grid);
                canvas.draw_str(&tick.label, (tx - pad - 18.0, ty + p + 3.0), font, label);
            }
        }
    }
}

fn draw_polyline(canvas: &skia::Canvas, pts: &[(f64, f64)], color: skia::Color, width: f32) {
    if pts.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to((pts[0].0 as f32, pts[0].1 as f32));
    for &(x, y) in &pts[1..] {
        path.line_to((x as f32, y as f32));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_stroke_miter(1.0);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}
