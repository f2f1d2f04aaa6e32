// src/app.rs
use std::time::Duration;

use eframe::egui;

use crate::api::ApiClient;
use crate::state::{gate, AppState, FlashLevel, Gate, Screen};
use crate::storage::SessionStore;

pub struct GuidanceApp {
    state: AppState,
}

impl GuidanceApp {
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self {
            state: AppState::new(api, store),
        }
    }

    fn show_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Guidance");
        ui.add_space(4.0);
        ui.label(self.state.session.user().full_name());
        ui.colored_label(egui::Color32::from_rgb(46, 160, 67), "● Online");
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        let entries = [
            (Screen::Dashboard, "🏠 Dashboard"),
            (Screen::Records, "🗄 Records"),
        ];
        for (screen, label) in entries {
            if ui
                .selectable_label(self.state.current_screen == screen, label)
                .clicked()
            {
                self.state.navigate(screen);
            }
        }
        // Admin-only entry; the guard re-checks on every frame anyway.
        if self.state.session.user().is_admin()
            && ui
                .selectable_label(
                    self.state.current_screen == Screen::ManageAccounts,
                    "👥 Manage Accounts",
                )
                .clicked()
        {
            self.state.navigate(Screen::ManageAccounts);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(12.0);
            if ui.button("🚪 Log Out").clicked() {
                self.state.logout();
            }
            ui.add_space(4.0);
        });
    }

    fn show_flashes(&self, ctx: &egui::Context) {
        if self.state.flash.is_empty() {
            return;
        }
        egui::Area::new("flash_toasts")
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for flash in self.state.flash.iter() {
                    let fill = match flash.level {
                        FlashLevel::Success => egui::Color32::from_rgb(30, 90, 50),
                        FlashLevel::Error => egui::Color32::from_rgb(120, 40, 40),
                    };
                    egui::Frame::none()
                        .fill(fill)
                        .rounding(egui::Rounding::same(4.0))
                        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&flash.text).color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(4.0);
                }
            });
    }
}

impl eframe::App for GuidanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.flash.sweep();

        // Route guard runs before anything renders.
        if let Gate::Redirect(to) = gate(self.state.current_screen, &self.state.session) {
            self.state.navigate(to);
        }
        let screen = self.state.current_screen;

        if screen.is_protected() {
            egui::SidePanel::left("sidebar")
                .resizable(false)
                .default_width(190.0)
                .show(ctx, |ui| {
                    self.show_sidebar(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("screen_scroll")
                .show(ui, |ui| match screen {
                    Screen::Login => crate::ui::login::show_login_view(ui, &mut self.state),
                    Screen::Signup => crate::ui::signup::show_signup_view(ui, &mut self.state),
                    Screen::Dashboard => {
                        crate::ui::dashboard::show_dashboard_view(ui, &mut self.state)
                    }
                    Screen::Records => crate::ui::records::show_records_view(ui, &mut self.state),
                    Screen::ManageAccounts => {
                        crate::ui::accounts::show_accounts_view(ui, &mut self.state)
                    }
                });
        });

        self.show_flashes(ctx);
        if !self.state.flash.is_empty() {
            // Keep repainting until the last toast expires.
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
