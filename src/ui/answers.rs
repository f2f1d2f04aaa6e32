// src/ui/answers.rs
use eframe::egui;

use crate::model::{answer_percentages, FormType};
use crate::state::answers_state::{Gender, GRADES};
use crate::state::AppState;

const DEFAULT_BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(42, 127, 254);

/// Answer distribution for one question at a time, filterable by cluster,
/// grade and gender. The unfiltered view reads the aggregate that arrived
/// with the dataset; any filter combination is fetched on demand.
pub fn show_answers_view(ui: &mut egui::Ui, state: &mut AppState) {
    let (form, uuid) = match state.session.data() {
        Some(data) => (data.form_type, data.id),
        None => return,
    };

    if let Some(result) = state.answers.query.poll() {
        match result {
            Ok(breakdown) => state.answers.filtered = Some(breakdown),
            Err(err) => {
                log::warn!("answer summary fetch failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }

    ui.group(|ui| {
        ui.heading("Answer Summary");
        ui.add_space(4.0);

        show_filter_row(ui, state);

        // Any filter change supersedes the previous fetch; the sequence
        // token in the query slot discards late replies from it.
        let filter = state.answers.filter;
        if !filter.is_unfiltered() && state.answers.fetched_for != Some(filter) {
            state.answers.fetched_for = Some(filter);
            state.answers.filtered = None;
            let api = state.api.clone();
            state.answers.query.dispatch(ui.ctx(), move || {
                api.answer_summary(
                    &uuid,
                    form,
                    &filter.cluster_param(),
                    &filter.grade_param(),
                    &filter.gender_param(),
                )
            });
        } else if filter.is_unfiltered() && state.answers.fetched_for.is_some() {
            state.answers.fetched_for = None;
            state.answers.filtered = None;
        }

        ui.add_space(8.0);
        show_question_nav(ui, state, form);
        ui.add_space(8.0);

        let question_count = form.questions().len();
        let index = state.answers.question_index.min(question_count - 1);
        let question = form.questions()[index];
        ui.label(egui::RichText::new(question).strong());
        ui.add_space(4.0);

        let counts = if state.answers.filter.is_unfiltered() {
            state
                .session
                .data()
                .and_then(|data| data.data_summary.answers_summary.full.get(question).cloned())
        } else {
            state
                .answers
                .filtered
                .as_ref()
                .and_then(|breakdown| breakdown.get(question))
                .cloned()
        };

        // The unfiltered aggregate is local, so only a filtered view has
        // anything to wait for.
        if !state.answers.filter.is_unfiltered() && state.answers.query.in_flight() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Fetching filtered answers...");
            });
            return;
        }

        match counts {
            Some(counts) if !counts.is_empty() => {
                let percentages = answer_percentages(&counts);
                let color = state
                    .answers
                    .filter
                    .cluster
                    .and_then(|index| state.clusters.get(index as usize))
                    .map(|cluster| cluster.color)
                    .unwrap_or(DEFAULT_BAR_COLOR);

                let plot = egui_plot::Plot::new("answer_distribution")
                    .height(220.0)
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .show_background(false)
                    .show_axes([false, true])
                    .include_y(0.0);
                plot.show(ui, |plot_ui| {
                    let bars: Vec<egui_plot::Bar> = percentages
                        .iter()
                        .enumerate()
                        .map(|(i, (option, pct))| {
                            egui_plot::Bar::new(i as f64 + 1.0, *pct)
                                .width(0.6)
                                .name(option)
                                .fill(color)
                        })
                        .collect();
                    plot_ui.bar_chart(egui_plot::BarChart::new(bars));
                });

                // Option labels below the bars, left to right.
                ui.horizontal_wrapped(|ui| {
                    for (option, pct) in &percentages {
                        ui.label(format!("{option}: {pct:.1}%"));
                        ui.add_space(8.0);
                    }
                });
            }
            _ => {
                ui.label("No responses recorded for this question.");
            }
        }
    });
}

fn show_filter_row(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let filter = &mut state.answers.filter;

        egui::ComboBox::from_id_source("answers_cluster_filter")
            .selected_text(match filter.cluster {
                Some(index) => format!("Cluster {index}"),
                None => "All clusters".to_string(),
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.cluster, None, "All clusters");
                for index in 0..state.clusters.len() as u32 {
                    ui.selectable_value(
                        &mut filter.cluster,
                        Some(index),
                        format!("Cluster {index}"),
                    );
                }
            });

        egui::ComboBox::from_id_source("answers_grade_filter")
            .selected_text(match filter.grade {
                Some(grade) => format!("Grade {grade}"),
                None => "All grades".to_string(),
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.grade, None, "All grades");
                for grade in GRADES {
                    ui.selectable_value(&mut filter.grade, Some(grade), format!("Grade {grade}"));
                }
            });

        egui::ComboBox::from_id_source("answers_gender_filter")
            .selected_text(match filter.gender {
                Some(gender) => gender.as_str().to_string(),
                None => "All genders".to_string(),
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.gender, None, "All genders");
                for gender in Gender::ALL {
                    ui.selectable_value(&mut filter.gender, Some(gender), gender.as_str());
                }
            });
    });
}

fn show_question_nav(ui: &mut egui::Ui, state: &mut AppState, form: FormType) {
    let question_count = form.questions().len();
    ui.horizontal(|ui| {
        let at_start = state.answers.question_index == 0;
        if ui
            .add_enabled(!at_start, egui::Button::new("◀ Previous"))
            .clicked()
        {
            state.answers.prev_question();
        }

        ui.label(format!(
            "Question {} of {}",
            state.answers.question_index + 1,
            question_count
        ));

        let at_end = state.answers.question_index + 1 >= question_count;
        if ui
            .add_enabled(!at_end, egui::Button::new("Next ▶"))
            .clicked()
        {
            state.answers.next_question(question_count);
        }
    });
}
