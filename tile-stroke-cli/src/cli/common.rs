//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use tile_stroke::{PathCommand, PathRecorder};

/// Output format for rendered tiles.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Svg,
    Json,
}

/// An opaque RGB color parsed from `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Parse `#rrggbb` (the `#` is optional).
pub fn parse_color(s: &str) -> Result<Rgb, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected #rrggbb, got '{}'", s));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("bad hex color '{}'", s))
    };
    Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Paint settings for one output image.
#[derive(Clone, Copy, Debug)]
pub struct Appearance {
    pub size: u32,
    pub stroke: Rgb,
    pub stroke_width: f32,
    pub fill: Rgb,
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Convert recorded commands to a tiny-skia path.
///
/// Returns `None` when there is nothing to draw (no commands, or only moves).
pub fn to_skia_path(commands: &[PathCommand]) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathCommand::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
        }
    }
    pb.finish()
}

/// Rasterize fill and stroke paths onto a white square pixmap.
pub fn rasterize(fill: &PathRecorder, stroke: &PathRecorder, look: &Appearance) -> Result<Pixmap> {
    let Some(mut pixmap) = Pixmap::new(look.size, look.size) else {
        bail!("invalid image size {}", look.size);
    };
    pixmap.fill(Color::WHITE);

    if let Some(path) = to_skia_path(fill.commands()) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(look.fill.0, look.fill.1, look.fill.2, 255);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
    }

    if let Some(path) = to_skia_path(stroke.commands()) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(look.stroke.0, look.stroke.1, look.stroke.2, 255);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: look.stroke_width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    Ok(pixmap)
}

/// Standalone SVG document with one fill path and one stroke path.
pub fn to_svg(fill: &PathRecorder, stroke: &PathRecorder, look: &Appearance) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">
<rect width="100%" height="100%" fill="white"/>
"#,
        look.size
    ));

    if !fill.is_empty() {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\" stroke=\"none\"/>\n",
            fill.to_svg_path_data(),
            look.fill.to_hex()
        ));
    }
    if !stroke.is_empty() {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>\n",
            stroke.to_svg_path_data(),
            look.stroke.to_hex(),
            look.stroke_width
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_stroke::{Point, Surface};

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_color("#ff8000"), Ok(Rgb(255, 128, 0)));
        assert_eq!(parse_color("000000"), Ok(Rgb(0, 0, 0)));
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert_eq!(Rgb(255, 128, 0).to_hex(), "#ff8000");
    }

    #[test]
    fn moves_only_is_not_a_path() {
        assert!(to_skia_path(&[PathCommand::MoveTo(Point::new(1.0, 1.0))]).is_none());
        assert!(to_skia_path(&[]).is_none());
    }

    #[test]
    fn svg_contains_both_paths() {
        let mut fill = PathRecorder::new();
        fill.move_to(0.0, 0.0);
        fill.line_to(10.0, 0.0);
        fill.line_to(10.0, 10.0);
        let mut stroke = PathRecorder::new();
        stroke.move_to(1.0, 1.0);
        stroke.line_to(5.0, 5.0);

        let look = Appearance {
            size: 64,
            stroke: Rgb(0, 0, 0),
            stroke_width: 2.0,
            fill: Rgb(200, 200, 200),
        };
        let svg = to_svg(&fill, &stroke, &look);
        assert!(svg.contains(r#"viewBox="0 0 64 64""#));
        assert!(svg.contains(r##"fill="#c8c8c8""##));
        assert!(svg.contains("M1.00 1.00 L5.00 5.00"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn rasterize_draws_stroke() {
        let fill = PathRecorder::new();
        let mut stroke = PathRecorder::new();
        stroke.move_to(0.0, 8.0);
        stroke.line_to(16.0, 8.0);

        let look = Appearance {
            size: 16,
            stroke: Rgb(0, 0, 0),
            stroke_width: 4.0,
            fill: Rgb(255, 255, 255),
        };
        let pixmap = rasterize(&fill, &stroke, &look).unwrap();
        let on_line = pixmap.pixel(8, 8).unwrap();
        let off_line = pixmap.pixel(8, 1).unwrap();
        assert_eq!(on_line.red(), 0);
        assert_eq!(off_line.red(), 255);
    }
}
