use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::sankey::{
    ColorPolicy, LayoutConfig, SankeyLayout, Size, ViewScale, layout, load_dataset, render_svg,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Svg,
    Json,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    title: &'a str,
    total: f64,
    viewport: Size,
    scale: ViewScale,
    layout: &'a SankeyLayout,
}

pub struct ExportRequest<'a> {
    pub input: &'a Path,
    pub output: Option<&'a Path>,
    pub format: ExportFormat,
    pub viewport: Size,
}

pub fn run_export(request: &ExportRequest<'_>, colors: &mut dyn ColorPolicy) -> Result<()> {
    let dataset = load_dataset(request.input)
        .with_context(|| format!("failed to load {}", request.input.display()))?;
    let layout = layout(&dataset, &LayoutConfig::default(), colors);

    let rendered = match request.format {
        ExportFormat::Svg => render_svg(&layout, request.viewport),
        ExportFormat::Json => {
            let export = JsonExport {
                title: &dataset.title,
                total: dataset.total,
                viewport: request.viewport,
                scale: ViewScale::fit(layout.canvas, request.viewport),
                layout: &layout,
            };
            serde_json::to_string_pretty(&export).context("failed to encode layout as JSON")?
        }
    };

    match request.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), format = ?request.format, "exported diagram");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("failed to write to stdout")?;
        }
    }

    Ok(())
}
