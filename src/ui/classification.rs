// src/ui/classification.rs
use eframe::egui;

use crate::model::{ClassificationSummary, FormType};

const CELL_COLOR: egui::Color32 = egui::Color32::from_rgb(66, 133, 244);
const CELL_SIZE: f32 = 42.0;

/// Classifier report: accuracy, shaded confusion matrix, per-class table.
pub fn show_classification_view(
    ui: &mut egui::Ui,
    form: FormType,
    summary: &ClassificationSummary,
) {
    ui.group(|ui| {
        ui.heading("Classification Summary");
        ui.label(format!("Model: {} Model ({})", form.as_str(), summary.model_name));
        ui.label(format!("Accuracy: {:.2}", summary.accuracy));
        ui.add_space(8.0);

        ui.strong("Confusion Matrix");
        ui.add_space(4.0);
        show_confusion_matrix(ui, summary);
        ui.add_space(4.0);
        show_intensity_legend(ui);
        ui.add_space(8.0);

        ui.strong("Report");
        ui.add_space(4.0);
        egui::Grid::new("classification_report")
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Class");
                ui.strong("Precision");
                ui.strong("Recall");
                ui.strong("F1-Score");
                ui.strong("Support");
                ui.end_row();

                for (label, metrics) in summary.class_entries() {
                    ui.label(label);
                    ui.label(format!("{:.2}", metrics.precision));
                    ui.label(format!("{:.2}", metrics.recall));
                    ui.label(format!("{:.2}", metrics.f1_score));
                    match metrics.support {
                        Some(support) => ui.label(format!("{support:.0}")),
                        None => ui.label("N/A"),
                    };
                    ui.end_row();
                }
            });
    });
}

/// "Low [gradient] High" strip keying the cell shading.
fn show_intensity_legend(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Low").small());
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(80.0, 14.0), egui::Sense::hover());
        let mut mesh = egui::epaint::Mesh::default();
        mesh.colored_vertex(rect.left_top(), egui::Color32::WHITE);
        mesh.colored_vertex(rect.right_top(), CELL_COLOR);
        mesh.colored_vertex(rect.right_bottom(), CELL_COLOR);
        mesh.colored_vertex(rect.left_bottom(), egui::Color32::WHITE);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        let painter = ui.painter();
        painter.add(egui::Shape::mesh(mesh));
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(180)),
        );
        ui.label(egui::RichText::new("High").small());
    });
}

/// Cells shade with their share of the largest count; the text flips to
/// dark on faint cells so low counts stay readable.
fn show_confusion_matrix(ui: &mut egui::Ui, summary: &ClassificationSummary) {
    egui::Grid::new("confusion_matrix")
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            for (actual, row) in summary.confusion_matrix.iter().enumerate() {
                for (predicted, &count) in row.iter().enumerate() {
                    let intensity = summary.cell_intensity(count);
                    let fill = egui::Color32::from_rgba_unmultiplied(
                        CELL_COLOR.r(),
                        CELL_COLOR.g(),
                        CELL_COLOR.b(),
                        (intensity * 255.0) as u8,
                    );
                    let text_color = if intensity > 0.5 {
                        egui::Color32::WHITE
                    } else {
                        egui::Color32::DARK_GRAY
                    };

                    let (rect, response) = ui.allocate_exact_size(
                        egui::Vec2::splat(CELL_SIZE),
                        egui::Sense::hover(),
                    );
                    let painter = ui.painter();
                    painter.rect_filled(rect, 2.0, fill);
                    painter.rect_stroke(
                        rect,
                        2.0,
                        egui::Stroke::new(1.0, egui::Color32::from_gray(180)),
                    );
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        count.to_string(),
                        egui::FontId::proportional(13.0),
                        text_color,
                    );
                    response
                        .on_hover_text(format!("Actual {actual}, predicted {predicted}: {count}"));
                }
                ui.end_row();
            }
        });
}
