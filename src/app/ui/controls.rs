use eframe::egui::{self, Align, Layout, Ui};

use crate::util::format_value;

use super::super::{AppState, SankeyApp};

const SELECTOR_WIDTH: f32 = 150.0;
const BUTTON_WIDTH: f32 = 100.0;
const CONTROL_HEIGHT: f32 = 23.0;

impl SankeyApp {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui, view_requested: &mut bool) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_space(24.0);

            let selected_text = self.selected.as_deref().unwrap_or("Select a dataset");
            egui::ComboBox::from_id_salt("dataset_selector")
                .width(SELECTOR_WIDTH)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    if self.files.is_empty() {
                        ui.label(format!("No files in {}", self.data_dir.display()));
                    }
                    for name in &self.files {
                        ui.selectable_value(&mut self.selected, Some(name.clone()), name.as_str());
                    }
                })
                .response
                .on_hover_text("Datasets found in the data directory.");

            ui.add_space(16.0);
            let view = ui
                .add_sized(
                    [BUTTON_WIDTH, CONTROL_HEIGHT],
                    egui::Button::new(egui::RichText::new("View").size(14.0)),
                )
                .on_hover_text("Read the selected dataset and draw its diagram.");
            if view.clicked() {
                *view_requested = true;
            }

            if ui
                .button("Rescan")
                .on_hover_text("Reload the list of datasets.")
                .clicked()
            {
                self.rescan();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let AppState::Ready(diagram) = &self.state {
                    if diagram.dataset.is_empty() {
                        ui.label("no categories");
                        return;
                    }
                    ui.label(format!(
                        "{} categories | total {}",
                        diagram.dataset.len(),
                        format_value(diagram.dataset.total)
                    ));
                }
            });
        });
        ui.add_space(6.0);
    }
}
