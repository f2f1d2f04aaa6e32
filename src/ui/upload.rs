// src/ui/upload.rs
use eframe::egui;

use crate::model::FormType;
use crate::state::{AppState, Screen};

/// Upload form shown on the dashboard while no dataset is installed.
pub fn show_upload_form(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(result) = state.upload.query.poll() {
        match result {
            Ok(data) => {
                log::info!("dataset {} processed", data.id);
                state.upload.reset_form();
                state.install_dataset(Some(data));
                return;
            }
            Err(err) => {
                log::warn!("upload failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }

    ui.group(|ui| {
        ui.set_max_width(420.0);
        ui.heading("Dataset Information");
        ui.add_space(8.0);

        ui.add_sized(
            [ui.available_width(), 20.0],
            egui::TextEdit::singleline(&mut state.upload.dataset_name).hint_text("Dataset name"),
        );
        ui.add_space(4.0);

        egui::ComboBox::from_label("Kind of data")
            .selected_text(state.upload.kind.description())
            .show_ui(ui, |ui| {
                for kind in FormType::ALL {
                    ui.selectable_value(&mut state.upload.kind, kind, kind.description());
                }
            });
        ui.add_space(12.0);

        if state.upload.query.in_flight() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Processing your data. This can take a minute.");
            });
        } else if ui.button("📁 Upload CSV File").clicked() {
            start_upload(ui, state);
        }
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("A single .csv export of the survey is accepted.")
                .small()
                .weak(),
        );
    });
}

/// Validate the form, then let the user pick exactly one CSV to send.
fn start_upload(ui: &egui::Ui, state: &mut AppState) {
    if state.upload.dataset_name.trim().is_empty() {
        state.flash.error("Please enter a dataset name");
        return;
    }
    if !state.session.user().is_logged_in() {
        state.flash.error("User ID is required. Please log in first.");
        state.navigate(Screen::Login);
        return;
    }

    let file_dialog = rfd::FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_title("Choose a survey dataset");

    if let Some(path) = file_dialog.pick_file() {
        let api = state.api.clone();
        let username = state.session.user().username.clone();
        let dataset_name = state.upload.dataset_name.trim().to_string();
        let kind = state.upload.kind;
        state.upload.query.dispatch(ui.ctx(), move || {
            api.upload_dataset(&username, &dataset_name, kind, &path)
        });
    }
}
