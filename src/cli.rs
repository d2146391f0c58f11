/// CLI argument parsing and one-shot command handling.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lettertile::color::{self, PaletteKind};
use lettertile::config::Config;
use lettertile::geometry::Bounds;
use lettertile::label::{AUTO, RenderedLabel, ShapeKind};
use lettertile::surface::{RecordingSurface, TileWidget};
use ratatui::layout::Rect;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lettertile",
    version,
    about = "Lettertile - shape-backed text labels with palette colors"
)]
pub struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the palette color a key maps to
    Color {
        key: String,
        #[arg(short, long)]
        palette: Option<PaletteKind>,
    },
    /// Draw one label inline in the terminal
    Render {
        #[command(flatten)]
        label: LabelArgs,
        /// Width in cells
        #[arg(long, default_value_t = 16)]
        cols: u16,
        /// Height in cells (two pixels each)
        #[arg(long, default_value_t = 8)]
        rows: u16,
    },
    /// Print the draw calls a label makes for the given bounds
    Inspect {
        #[command(flatten)]
        label: LabelArgs,
        /// Draw bounds as WIDTHxHEIGHT
        #[arg(long, default_value = "100x100", value_parser = parse_bounds)]
        bounds: Bounds,
    },
}

#[derive(Args, Debug)]
pub struct LabelArgs {
    pub text: String,
    #[arg(short, long)]
    pub shape: Option<ShapeKind>,
    /// Corner radius for round-rect
    #[arg(long)]
    pub radius: Option<i32>,
    /// Border thickness (0 = none)
    #[arg(short, long)]
    pub border: Option<i32>,
    /// Fixed width; follows the bounds when unset
    #[arg(long)]
    pub width: Option<i32>,
    /// Fixed height; follows the bounds when unset
    #[arg(long)]
    pub height: Option<i32>,
    /// Fixed font size; half the shorter side when unset
    #[arg(long)]
    pub font_size: Option<i32>,
    #[arg(long)]
    pub bold: bool,
    #[arg(long)]
    pub upper: bool,
    /// Text color as #RRGGBB or #AARRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    pub text_color: String,
    /// Background color; keyed from the text when unset
    #[arg(long)]
    pub bg_color: Option<String>,
    #[arg(short, long)]
    pub palette: Option<PaletteKind>,
}

impl LabelArgs {
    /// Build the label, falling back to config values for unset flags.
    pub fn to_label(&self, config: &Config) -> Result<RenderedLabel> {
        let palette = self.palette.unwrap_or(config.palette);
        let text_color = color::parse_hex(&self.text_color)?;
        let bg_color = match &self.bg_color {
            Some(hex) => color::parse_hex(hex)?,
            None => palette.generator().get_color(self.text.as_str()),
        };
        let radius = self.radius.unwrap_or(config.radius);

        let mut builder = RenderedLabel::builder()
            .begin_config()
            .width(self.width.unwrap_or(AUTO))
            .height(self.height.unwrap_or(AUTO))
            .font_size(self.font_size.unwrap_or(AUTO))
            .with_border(self.border.unwrap_or(config.border))
            .end_config();
        if self.bold || config.bold {
            builder = builder.bold();
        }
        if self.upper || config.uppercase {
            builder = builder.to_upper_case();
        }

        let label = match self.shape.unwrap_or(config.shape) {
            ShapeKind::Rect => builder.build_rect(&self.text, text_color, bg_color),
            ShapeKind::Round => builder.build_round(&self.text, text_color, bg_color),
            ShapeKind::RoundRect => {
                builder.build_round_rect(&self.text, text_color, bg_color, radius)
            }
        };
        Ok(label)
    }
}

/// Execute a one-shot command (color, render or inspect).
pub fn run(command: Command, config: &Config) -> Result<()> {
    info!(?command, "running command");
    match command {
        Command::Color { key, palette } => handle_color(&key, palette.unwrap_or(config.palette)),
        Command::Render { label, cols, rows } => handle_render(&label, cols, rows, config)?,
        Command::Inspect { label, bounds } => handle_inspect(&label, bounds, config)?,
    }
    Ok(())
}

fn handle_color(key: &str, palette: PaletteKind) {
    let generator = palette.generator();
    let index = generator.index_of(key);
    println!(
        "{key}: {} (palette '{}', index {index})",
        color::to_hex(generator.get_color(key)),
        palette.name()
    );
}

fn handle_render(args: &LabelArgs, cols: u16, rows: u16, config: &Config) -> Result<()> {
    let label = args.to_label(config)?;
    crate::tui::draw_inline(rows, |frame| {
        let area = frame.area();
        let tile = Rect::new(area.x, area.y, cols.min(area.width), rows.min(area.height));
        frame.render_widget(TileWidget::new(&label), tile);
    })
    .context("failed to draw label")
}

fn handle_inspect(args: &LabelArgs, bounds: Bounds, config: &Config) -> Result<()> {
    let label = args.to_label(config)?;
    for line in inspect_lines(&label, bounds) {
        println!("{line}");
    }
    Ok(())
}

fn inspect_lines(label: &RenderedLabel, bounds: Bounds) -> Vec<String> {
    let mut surface = RecordingSurface::new();
    label.draw(&mut surface, bounds);
    let mut lines = vec![format!(
        "label {:?} shape={:?} intrinsic={}x{} border={}",
        label.text(),
        label.shape().kind(),
        label.intrinsic_width(),
        label.intrinsic_height(),
        label.border_thickness()
    )];
    lines.extend(surface.ops().iter().map(|op| format!("  {op}")));
    lines
}

fn parse_bounds(value: &str) -> Result<Bounds, String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid dimension '{s}': {e}"))
    };
    Ok(Bounds::sized(parse(w)?, parse(h)?))
}
