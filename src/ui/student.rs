// src/ui/student.rs
use eframe::egui;

use crate::state::AppState;

/// Look one student up by name and inspect or reassign their cluster.
pub fn show_student_view(ui: &mut egui::Ui, state: &mut AppState) {
    let (form, uuid) = match state.session.data() {
        Some(data) => (data.form_type, data.id),
        None => return,
    };

    if let Some(result) = state.student.lookup.poll() {
        match result {
            Ok(student) => state.student.set_student(student, form),
            Err(err) => {
                log::warn!("student lookup failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }
    if let Some(result) = state.student.update.poll() {
        match result {
            Ok(_) => {
                state.student.confirm_update();
                state.flash.success("Student cluster updated successfully");
            }
            Err(err) => {
                log::warn!("cluster update failed: {err:?}");
                state.student.revert_update();
                state.flash.error(err.to_string());
            }
        }
    }

    ui.group(|ui| {
        ui.heading("Student Summary");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.add_sized(
                [240.0, 20.0],
                egui::TextEdit::singleline(&mut state.student.search)
                    .hint_text("Student name"),
            );
            let can_search =
                !state.student.search.trim().is_empty() && !state.student.lookup.in_flight();
            if ui
                .add_enabled(can_search, egui::Button::new("🔍 Search"))
                .clicked()
            {
                let api = state.api.clone();
                let name = state.student.search.trim().to_string();
                state
                    .student
                    .lookup
                    .dispatch(ui.ctx(), move || api.student(&uuid, form, &name));
            }
            if state.student.lookup.in_flight() {
                ui.spinner();
            }
        });

        let (name, grade, gender, cluster) = match &state.student.student {
            Some(student) => (
                student.name.clone(),
                student.grade_label(),
                student.gender_label().to_string(),
                student.cluster_label(),
            ),
            None => {
                ui.add_space(4.0);
                ui.label("Search for a student to see their responses.");
                return;
            }
        };

        ui.add_space(8.0);
        egui::Grid::new("student_info")
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.label(&name);
                ui.end_row();
                ui.strong("Grade");
                ui.label(grade);
                ui.end_row();
                ui.strong("Gender");
                ui.label(gender);
                ui.end_row();
                ui.strong("Cluster");
                ui.label(cluster);
                ui.end_row();
            });

        ui.add_space(8.0);
        show_cluster_editor(ui, state, &name);
        ui.add_space(8.0);
        show_question_pager(ui, state);
    });
}

fn show_cluster_editor(ui: &mut egui::Ui, state: &mut AppState, name: &str) {
    let (form, uuid) = match state.session.data() {
        Some(data) => (data.form_type, data.id),
        None => return,
    };
    let cluster_count = state.clusters.len() as i64;
    if cluster_count == 0 {
        return;
    }

    ui.horizontal(|ui| {
        ui.label("Assign cluster:");
        egui::ComboBox::from_id_source("student_cluster_select")
            .selected_text(format!("Cluster {}", state.student.selected_cluster))
            .show_ui(ui, |ui| {
                for cluster in 0..cluster_count {
                    ui.selectable_value(
                        &mut state.student.selected_cluster,
                        cluster,
                        format!("Cluster {cluster}"),
                    );
                }
            });

        let current = state
            .student
            .student
            .as_ref()
            .and_then(|student| student.cluster);
        let changed = current != Some(state.student.selected_cluster);
        let can_update = changed && !state.student.update.in_flight();
        if ui
            .add_enabled(can_update, egui::Button::new("Update"))
            .clicked()
        {
            // Shown as saved right away; a failed write rolls it back.
            let cluster = state.student.selected_cluster;
            state.student.apply_optimistic(cluster);
            let api = state.api.clone();
            let name = name.to_string();
            state.student.update.dispatch(ui.ctx(), move || {
                api.update_student_cluster(&uuid, form, &name, cluster)
            });
        }
        if state.student.update.in_flight() {
            ui.spinner();
        }
    });
}

fn show_question_pager(ui: &mut egui::Ui, state: &mut AppState) {
    if state.student.pairs.is_empty() {
        ui.label("No responses available for this student.");
        return;
    }

    let total = state.student.pairs.len();
    let index = state.student.question_index.min(total - 1);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(index > 0, egui::Button::new("◀ Previous"))
            .clicked()
        {
            state.student.prev_question();
        }
        ui.label(format!("Question {} of {}", index + 1, total));
        if ui
            .add_enabled(index + 1 < total, egui::Button::new("Next ▶"))
            .clicked()
        {
            state.student.next_question();
        }
    });

    let (question, answer) = &state.student.pairs[state.student.question_index.min(total - 1)];
    ui.add_space(4.0);
    ui.label(egui::RichText::new(question).strong());
    ui.label(format!("Answer: {answer}"));
}
