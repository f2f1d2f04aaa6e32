// src/ui/clusters.rs
use eframe::egui;

use crate::model::Cluster;

/// One colored count card per cluster.
pub fn show_cluster_cards(ui: &mut egui::Ui, clusters: &[Cluster]) {
    if clusters.is_empty() {
        ui.label("No clusters to display.");
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for cluster in clusters {
            egui::Frame::none()
                .fill(cluster.color)
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.set_min_width(110.0);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(cluster.name.as_str())
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(format!("{} Students", cluster.count))
                                .color(egui::Color32::WHITE)
                                .heading(),
                        );
                    });
                });
        }
    });
}
