use std::path::PathBuf;

use eframe::egui::{self, Context};

use crate::sankey::{
    ColorPolicy, Dataset, LayoutConfig, SankeyError, SankeyLayout, layout, list_datasets,
    load_dataset,
};

mod diagram;
mod render_utils;
mod ui;

pub const INITIAL_TITLE: &str = "Select a file and click View";

pub struct SankeyApp {
    data_dir: PathBuf,
    files: Vec<String>,
    selected: Option<String>,
    state: AppState,
    notice: Option<Notice>,
    colors: Box<dyn ColorPolicy>,
    config: LayoutConfig,
    pending_title: Option<String>,
}

enum AppState {
    Idle,
    Ready(Box<Diagram>),
    Fatal(String),
}

struct Diagram {
    dataset: Dataset,
    layout: SankeyLayout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Notice {
    title: String,
    message: String,
}

impl Notice {
    fn from_error(error: &SankeyError) -> Self {
        match error {
            SankeyError::NoSelection => Self {
                title: "Error".to_owned(),
                message: "Please select a file".to_owned(),
            },
            other => Self {
                title: "Error Reading File".to_owned(),
                message: format!("An error occurred while reading the file:\n{other}"),
            },
        }
    }
}

impl SankeyApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        data_dir: PathBuf,
        colors: Box<dyn ColorPolicy>,
    ) -> Self {
        Self::with_colors(data_dir, colors)
    }

    fn with_colors(data_dir: PathBuf, colors: Box<dyn ColorPolicy>) -> Self {
        let files = list_datasets(&data_dir);
        Self {
            data_dir,
            files,
            selected: None,
            state: AppState::Idle,
            notice: None,
            colors,
            config: LayoutConfig::default(),
            pending_title: None,
        }
    }

    fn rescan(&mut self) {
        self.files = list_datasets(&self.data_dir);
        if let Some(selected) = &self.selected
            && !self.files.contains(selected)
        {
            self.selected = None;
        }
    }

    /// Loads and lays out the selected dataset; the current diagram is only
    /// replaced when both steps succeed.
    fn view_selected(&mut self) {
        match self.load_selected() {
            Ok(diagram) => {
                self.pending_title = Some(diagram.dataset.title.clone());
                self.state = AppState::Ready(Box::new(diagram));
            }
            Err(error) if error.is_fatal() => {
                tracing::error!(error = %error, "dataset file is not accessible");
                self.state = AppState::Fatal(error.to_string());
            }
            Err(error) => {
                tracing::warn!(error = %error, "dataset rejected");
                self.notice = Some(Notice::from_error(&error));
            }
        }
    }

    fn load_selected(&mut self) -> Result<Diagram, SankeyError> {
        let selected = self.selected.as_deref().ok_or(SankeyError::NoSelection)?;
        let dataset = load_dataset(&self.data_dir.join(selected))?;
        let layout = layout(&dataset, &self.config, self.colors.as_mut());
        Ok(Diagram { dataset, layout })
    }
}

impl eframe::App for SankeyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut view_requested = false;

        egui::TopBottomPanel::top("controls")
            .resizable(false)
            .show(ctx, |ui| self.draw_controls(ui, &mut view_requested));

        if view_requested {
            self.view_selected();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match &self.state {
                AppState::Idle => {}
                AppState::Ready(loaded) => diagram::draw_diagram(ui, &loaded.layout),
                AppState::Fatal(error) => {
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Dataset file could not be read");
                        ui.add_space(6.0);
                        ui.label(error.as_str());
                    });
                }
            });

        self.draw_notice(ctx);

        if let Some(title) = self.pending_title.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }
}
