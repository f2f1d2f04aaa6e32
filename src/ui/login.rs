// src/ui/login.rs
use eframe::egui;

use crate::state::{AppState, Screen};

pub fn show_login_view(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(result) = state.auth.login_query.poll() {
        match result {
            Ok(user) => {
                log::info!("logged in as {}", user.username);
                state.complete_login(user);
                return;
            }
            Err(err) => {
                log::warn!("login failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("Guidance");
        ui.label("Student screening dashboard");
        ui.add_space(24.0);

        ui.group(|ui| {
            ui.set_max_width(320.0);
            ui.heading("Log In");
            ui.add_space(8.0);

            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut state.auth.username).hint_text("Username"),
            );
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut state.auth.password)
                    .hint_text("Password")
                    .password(true),
            );
            ui.add_space(12.0);

            let can_submit = !state.auth.username.trim().is_empty()
                && !state.auth.password.is_empty()
                && !state.auth.login_query.in_flight();
            if ui
                .add_enabled(can_submit, egui::Button::new("Log In"))
                .clicked()
            {
                let api = state.api.clone();
                let username = state.auth.username.trim().to_string();
                let password = state.auth.password.clone();
                state
                    .auth
                    .login_query
                    .dispatch(ui.ctx(), move || api.authenticate(&username, &password));
            }
            if state.auth.login_query.in_flight() {
                ui.add_space(4.0);
                ui.spinner();
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 110.0);
            ui.label("Don't have an account?");
            if ui.link("Sign up").clicked() {
                state.navigate(Screen::Signup);
            }
        });
    });
}
