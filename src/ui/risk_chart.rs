// src/ui/risk_chart.rs
use eframe::egui;
use eframe::egui::epaint::Mesh;

use crate::model::{cluster, Cluster};

const DONUT_SIZE: f32 = 160.0;
// Hole radius as a share of the outer radius.
const CUTOUT: f32 = 0.55;

/// Donut chart of cluster membership with a percentage legend.
pub fn show_risk_chart(ui: &mut egui::Ui, clusters: &[Cluster]) {
    ui.group(|ui| {
        ui.heading("Overall Result");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            draw_donut(ui, clusters);
            ui.add_space(12.0);
            ui.vertical(|ui| {
                let percentages = cluster::percentages(clusters);
                for (cluster, pct) in clusters.iter().zip(percentages) {
                    ui.horizontal(|ui| {
                        color_dot(ui, cluster.color);
                        ui.label(format!("{} ({:.2}%)", cluster.name, pct));
                    });
                }
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} students total",
                        cluster::total_students(clusters)
                    ))
                    .weak(),
                );
            });
        });
    });
}

fn color_dot(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(12.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 5.0, color);
}

fn draw_donut(ui: &mut egui::Ui, clusters: &[Cluster]) {
    let (response, painter) =
        ui.allocate_painter(egui::Vec2::splat(DONUT_SIZE), egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let outer = rect.width().min(rect.height()) * 0.5;
    let inner = outer * CUTOUT;

    let total = cluster::total_students(clusters);
    if total == 0 {
        // Nothing to apportion; draw an empty ring.
        painter.circle_stroke(
            center,
            (outer + inner) * 0.5,
            egui::Stroke::new(outer - inner, egui::Color32::from_gray(230)),
        );
        return;
    }

    // Segments start at twelve o'clock and run clockwise.
    let mut start = -std::f32::consts::FRAC_PI_2;
    for cluster in clusters {
        let sweep = cluster.count as f32 / total as f32 * std::f32::consts::TAU;
        ring_segment(&painter, center, inner, outer, start, start + sweep, cluster.color);
        start += sweep;
    }
}

/// Fill the ring between `inner` and `outer` from angle `a0` to `a1` with
/// a triangle strip.
fn ring_segment(
    painter: &egui::Painter,
    center: egui::Pos2,
    inner: f32,
    outer: f32,
    a0: f32,
    a1: f32,
    color: egui::Color32,
) {
    let steps = (((a1 - a0).abs() / 0.05).ceil() as usize).max(2);
    let mut mesh = Mesh::default();
    for i in 0..=steps {
        let angle = a0 + (a1 - a0) * (i as f32 / steps as f32);
        let dir = egui::vec2(angle.cos(), angle.sin());
        mesh.colored_vertex(center + dir * inner, color);
        mesh.colored_vertex(center + dir * outer, color);
    }
    for i in 0..steps {
        let base = (i * 2) as u32;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
}
