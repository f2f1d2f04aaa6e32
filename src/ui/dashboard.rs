// src/ui/dashboard.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::{answers, classification, clusters, risk_chart, student, upload};

/// The main screen: an upload prompt until a dataset is installed, the
/// result views afterwards.
pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Dashboard");
    ui.add_space(8.0);

    if state.session.data().is_none() {
        ui.label("Upload a survey dataset to see clustering results.");
        ui.add_space(8.0);
        upload::show_upload_form(ui, state);
        return;
    }

    // Action row
    ui.horizontal(|ui| {
        if ui.button("⬆ Upload New").clicked() {
            state.install_dataset(None);
        }
        if ui.button("🎨 Change Colors").clicked() {
            state.reroll_colors();
        }
    });
    // "Upload New" drops the dataset within this frame; render nothing
    // stale below it.
    if state.session.data().is_none() {
        return;
    }

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.heading("Clusters");
        ui.add_space(4.0);
        clusters::show_cluster_cards(ui, &state.clusters);
    });

    ui.add_space(8.0);
    risk_chart::show_risk_chart(ui, &state.clusters);

    ui.add_space(8.0);
    answers::show_answers_view(ui, state);

    ui.add_space(8.0);
    student::show_student_view(ui, state);

    if let Some((form, summary)) = state.session.data().and_then(|data| {
        data.data_summary
            .classification_summary
            .as_ref()
            .map(|summary| (data.form_type, summary))
    }) {
        ui.add_space(8.0);
        classification::show_classification_view(ui, form, summary);
    }
}
