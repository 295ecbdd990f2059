mod app;
mod export;
mod sankey;
mod util;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::export::{ExportFormat, ExportRequest, run_export};
use crate::sankey::{ColorPolicy, LabelHue, Palette, RandomHue, Rgb, Size};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory whose files populate the dataset selector.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Seed for category hues, for reproducible colors.
    #[arg(long, conflicts_with_all = ["stable_colors", "palette"])]
    seed: Option<u64>,

    /// Derive each category's hue from its label.
    #[arg(long, conflicts_with = "palette")]
    stable_colors: bool,

    /// Comma-separated `#rrggbb` colors assigned to categories in order.
    #[arg(long, value_delimiter = ',', value_parser = parse_color)]
    palette: Vec<Rgb>,

    /// Lay out this dataset file and write it out instead of opening a window.
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "svg", requires = "export")]
    format: ExportFormat,

    /// Export destination; stdout when omitted.
    #[arg(long, requires = "export")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 1000.0, requires = "export")]
    width: f64,

    #[arg(long, default_value_t = 700.0, requires = "export")]
    height: f64,
}

impl Args {
    fn color_policy(&self) -> Box<dyn ColorPolicy> {
        if !self.palette.is_empty() {
            Box::new(Palette::new(self.palette.clone()))
        } else if self.stable_colors {
            Box::new(LabelHue)
        } else if let Some(seed) = self.seed {
            Box::new(RandomHue::seeded(seed))
        } else {
            Box::new(RandomHue::from_os_rng())
        }
    }
}

fn parse_color(text: &str) -> Result<Rgb, String> {
    Rgb::from_hex(text).ok_or_else(|| format!("expected #rrggbb, got {text:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut colors = args.color_policy();

    if let Some(input) = &args.export {
        let request = ExportRequest {
            input,
            output: args.output.as_deref(),
            format: args.format,
            viewport: Size::new(args.width, args.height),
        };
        return run_export(&request, colors.as_mut());
    }

    tracing::info!(data_dir = %args.data_dir.display(), "starting viewer");
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([Size::REFERENCE.width as f32, Size::REFERENCE.height as f32])
            .with_title(app::INITIAL_TITLE),
        ..Default::default()
    };

    let data_dir = args.data_dir;
    eframe::run_native(
        app::INITIAL_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::SankeyApp::new(cc, data_dir, colors)))),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
