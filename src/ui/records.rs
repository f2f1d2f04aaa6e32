// src/ui/records.rs
use chrono::NaiveDateTime;
use eframe::egui;

use crate::state::{AppState, Screen};

/// Past uploads for the logged-in user: reopen results or delete them.
pub fn show_records_view(ui: &mut egui::Ui, state: &mut AppState) {
    let username = state.session.user().username.clone();
    if !state.records.requested && !username.is_empty() {
        state.records.requested = true;
        let api = state.api.clone();
        state
            .records
            .list_query
            .dispatch(ui.ctx(), move || api.list_records(&username));
    }

    if let Some(result) = state.records.list_query.poll() {
        match result {
            Ok(records) => state.session.set_records(records),
            Err(err) => {
                log::warn!("records fetch failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }
    if let Some(result) = state.records.view_query.poll() {
        match result {
            Ok(data) => {
                state.install_dataset(Some(data));
                state.navigate(Screen::Dashboard);
                return;
            }
            Err(err) => {
                log::warn!("record open failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }
    if let Some(result) = state.records.delete_query.poll() {
        match result {
            Ok(_) => {
                state.flash.success("Record deleted successfully");
                // Refetch rather than patching the list locally.
                state.records.requested = false;
            }
            Err(err) => {
                log::warn!("record delete failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }

    ui.heading("Records");
    ui.add_space(8.0);

    if state.records.list_query.in_flight() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading records...");
        });
        return;
    }

    let records = state.session.records().to_vec();
    if records.is_empty() {
        ui.label("No records found.");
        return;
    }

    let busy = state.records.view_query.in_flight() || state.records.delete_query.in_flight();
    egui::Grid::new("records_grid")
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Name");
            ui.strong("Owner");
            ui.strong("Type");
            ui.strong("Created");
            ui.strong("");
            ui.strong("");
            ui.end_row();

            for record in &records {
                ui.label(&record.name);
                ui.label(&record.username);
                ui.label(record.form_type.as_str());
                ui.label(format_created_at(&record.created_at));

                if ui
                    .add_enabled(!busy, egui::Button::new("▶ View Results"))
                    .clicked()
                {
                    let api = state.api.clone();
                    let form = record.form_type;
                    let uuid = record.uuid;
                    state
                        .records
                        .view_query
                        .dispatch(ui.ctx(), move || api.dataset_result(form, &uuid));
                }
                if ui
                    .add_enabled(
                        !busy,
                        egui::Button::new(
                            egui::RichText::new("🗑 Delete").color(egui::Color32::RED),
                        ),
                    )
                    .clicked()
                {
                    let api = state.api.clone();
                    let uuid = record.uuid;
                    state
                        .records
                        .delete_query
                        .dispatch(ui.ctx(), move || api.delete_record(&uuid));
                }
                ui.end_row();
            }
        });
}

/// Render the server's `YYYY-MM-DD HH:MM:SS` timestamp in a friendlier
/// form; anything unparseable passes through untouched.
fn format_created_at(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        Ok(timestamp) => timestamp.format("%b %e, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_server_timestamps() {
        assert_eq!(
            format_created_at("2024-04-02 09:15:00"),
            "Apr  2, 2024 09:15"
        );
    }

    #[test]
    fn passes_unknown_formats_through() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
        assert_eq!(format_created_at(""), "");
    }
}
