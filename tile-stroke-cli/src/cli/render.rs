//! Render command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use log::info;
use serde::Serialize;

use tile_stroke::render::{DEFAULT_PAD, DEFAULT_SKIP};
use tile_stroke::{
    DashPattern, PathCommand, PathRecorder, RenderConfig, ScaleTransform, StrokeStyle, TileData,
    render_feature,
};

use super::common::{
    Appearance, OutputFormat, Rgb, parse_color, rasterize, read_input, to_svg, write_output,
};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Tile JSON file (`-` for stdin)
    pub tile: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Output edge length in pixels
    #[arg(short, long, default_value_t = 256)]
    pub size: u32,

    /// Dash pattern in pixels, alternating draw and skip (e.g. `4,2`)
    #[arg(short, long, value_delimiter = ',')]
    pub dash: Option<Vec<f64>>,

    /// Also fill polygon features
    #[arg(long)]
    pub fill: bool,

    #[arg(long, default_value_t = 1.5)]
    pub stroke_width: f32,

    #[arg(long, value_parser = parse_color, default_value = "#333333")]
    pub stroke: Rgb,

    #[arg(long, value_parser = parse_color, default_value = "#d8d0c0")]
    pub fill_color: Rgb,

    /// How far (tile units) clipped line ends are extended past the tile edge
    #[arg(long, default_value_t = DEFAULT_PAD)]
    pub pad: f64,

    /// Neighbour distance (tile units) ignored when extending line ends
    #[arg(long, default_value_t = DEFAULT_SKIP)]
    pub skip: f64,
}

/// Path commands in JSON output format.
#[derive(Serialize)]
struct JsonOutput<'a> {
    fill: &'a [PathCommand],
    stroke: &'a [PathCommand],
}

/// Fill and stroke paths for a whole tile.
pub struct TilePaths {
    pub fill: PathRecorder,
    pub stroke: PathRecorder,
}

/// Render every feature of `tile` into a fill path and a stroke path.
///
/// Line endpoints on the tile edge are extruded in `tile` itself.
pub fn render_tile(
    tile: &mut TileData,
    stroke_style: &StrokeStyle,
    fill: bool,
    size: u32,
    base: RenderConfig,
) -> Result<TilePaths> {
    let config = tile.render_config(base);
    let transform = ScaleTransform::fit(tile.granularity, size as f64, size as f64);
    let fill_style = StrokeStyle::fill();

    let mut paths = TilePaths {
        fill: PathRecorder::new(),
        stroke: PathRecorder::new(),
    };

    for (i, feature) in tile.features.iter_mut().enumerate() {
        if fill && feature.is_polygonal() {
            render_feature(&mut paths.fill, feature, &fill_style, &transform, &config)
                .with_context(|| format!("feature {} ({})", i, feature.type_name()))?;
        }
        render_feature(&mut paths.stroke, feature, stroke_style, &transform, &config)
            .with_context(|| format!("feature {} ({})", i, feature.type_name()))?;
    }

    Ok(paths)
}

/// Execute the render command.
pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let input = read_input(&args.tile)?;
    let mut tile = TileData::from_json(&input).with_context(|| format!("in {}", args.tile))?;

    let stroke_style = match &args.dash {
        Some(lengths) => StrokeStyle::dashed(DashPattern::new(lengths).context("--dash")?),
        None => StrokeStyle::solid(),
    };
    let base = RenderConfig::default()
        .with_pad(args.pad)
        .with_skip(args.skip);

    if let Some(pattern) = &stroke_style.dashes {
        info!("dash period {} px", pattern.period());
    }

    let points: usize = tile.features.iter().map(|f| f.point_count()).sum();
    let paths = render_tile(&mut tile, &stroke_style, args.fill, args.size, base)?;
    info!(
        "rendered {} features ({} points): {} fill commands, {} stroke commands",
        tile.features.len(),
        points,
        paths.fill.commands().len(),
        paths.stroke.commands().len()
    );

    let look = Appearance {
        size: args.size,
        stroke: args.stroke,
        stroke_width: args.stroke_width,
        fill: args.fill_color,
    };

    let bytes = match args.format {
        OutputFormat::Png => {
            if args.output.is_none() {
                bail!("PNG output needs --output");
            }
            rasterize(&paths.fill, &paths.stroke, &look)?
                .encode_png()
                .context("failed to encode PNG")?
        }
        OutputFormat::Svg => to_svg(&paths.fill, &paths.stroke, &look).into_bytes(),
        OutputFormat::Json => {
            let output = JsonOutput {
                fill: paths.fill.commands(),
                stroke: paths.stroke.commands(),
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            json.into_bytes()
        }
    };

    write_output(args.output.as_deref(), &bytes)?;
    if let Some(path) = &args.output {
        info!("wrote {:?} to {}", args.format, path.display());
    }
    Ok(())
}
