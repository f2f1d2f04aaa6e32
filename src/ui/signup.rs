// src/ui/signup.rs
use eframe::egui;

use crate::api::NewUser;
use crate::state::{AppState, Screen};

pub fn show_signup_view(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(result) = state.auth.signup_query.poll() {
        match result {
            Ok(_) => {
                state.flash.success("Sign up successful!");
                state.auth.signup.clear();
                state.navigate(Screen::Login);
                return;
            }
            Err(err) => {
                log::warn!("signup failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Create an Account");
        ui.add_space(16.0);

        ui.group(|ui| {
            ui.set_max_width(320.0);
            let form = &mut state.auth.signup;

            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut form.username).hint_text("Username"),
            );
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut form.first_name).hint_text("First name"),
            );
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut form.last_name).hint_text("Last name"),
            );
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut form.password)
                    .hint_text("Password")
                    .password(true),
            );
            ui.add_space(4.0);
            ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut form.confirm_password)
                    .hint_text("Confirm password")
                    .password(true),
            );

            if !form.confirm_password.is_empty() && form.password != form.confirm_password {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::RED, "⚠ Passwords do not match");
            }
            ui.add_space(12.0);

            let in_flight = state.auth.signup_query.in_flight();
            if ui
                .add_enabled(!in_flight, egui::Button::new("Sign Up"))
                .clicked()
            {
                match state.auth.signup.validate() {
                    Ok(()) => {
                        let api = state.api.clone();
                        let new_user = NewUser {
                            username: state.auth.signup.username.trim().to_string(),
                            password: state.auth.signup.password.clone(),
                            first_name: state.auth.signup.first_name.trim().to_string(),
                            last_name: state.auth.signup.last_name.trim().to_string(),
                            user_type: None,
                        };
                        state
                            .auth
                            .signup_query
                            .dispatch(ui.ctx(), move || api.create_user(&new_user));
                    }
                    Err(reason) => state.flash.error(reason),
                }
            }
            if in_flight {
                ui.add_space(4.0);
                ui.spinner();
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 110.0);
            ui.label("Already have an account?");
            if ui.link("Log in").clicked() {
                state.navigate(Screen::Login);
            }
        });
    });
}
