// src/ui/accounts.rs
use eframe::egui;

use crate::api::NewUser;
use crate::model::user::ADMIN_TYPE;
use crate::state::AppState;

/// Admin-only user administration: list, create admins, delete.
pub fn show_accounts_view(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.accounts.requested {
        state.accounts.requested = true;
        let api = state.api.clone();
        state
            .accounts
            .list_query
            .dispatch(ui.ctx(), move || api.list_users());
    }

    if let Some(result) = state.accounts.list_query.poll() {
        match result {
            Ok(users) => state.accounts.users = users,
            Err(err) => {
                log::warn!("user list fetch failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }
    if let Some(result) = state.accounts.create_query.poll() {
        match result {
            Ok(_) => {
                state.flash.success("Admin user created successfully");
                state.accounts.form.clear();
                state.accounts.requested = false;
            }
            Err(err) => {
                log::warn!("user create failed: {err:?}");
                state.flash.error(err.to_string());
            }
        }
    }
    if let Some(result) = state.accounts.delete_query.poll() {
        match result {
            Ok(_) => {
                if let Some(id) = state.accounts.deleting_id.take() {
                    state.accounts.remove_user(&id);
                }
                state.flash.success("User deleted successfully");
            }
            Err(err) => {
                log::warn!("user delete failed: {err:?}");
                state.accounts.deleting_id = None;
                state.flash.error(err.to_string());
            }
        }
    }

    ui.heading("Manage Accounts");
    ui.add_space(8.0);

    let form_open = state.accounts.form.open;
    if ui
        .button(if form_open { "Cancel" } else { "➕ Add New Admin" })
        .clicked()
    {
        if form_open {
            state.accounts.form.clear();
        } else {
            state.accounts.form.open = true;
        }
    }

    if state.accounts.form.open {
        ui.add_space(8.0);
        show_admin_form(ui, state);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    if state.accounts.list_query.in_flight() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading users...");
        });
        return;
    }

    let users = state.accounts.users.clone();
    if users.is_empty() {
        ui.label("No users found.");
    } else {
        egui::Grid::new("users_grid")
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Username");
                ui.strong("Type");
                ui.strong("");
                ui.end_row();

                for user in &users {
                    ui.label(user.full_name());
                    ui.label(&user.username);
                    ui.label(&user.user_type);
                    let deleting = state.accounts.deleting_id.as_deref() == Some(user.id.as_str());
                    if deleting {
                        ui.spinner();
                    } else if ui
                        .button(egui::RichText::new("🗑 Delete").color(egui::Color32::RED))
                        .clicked()
                    {
                        state.accounts.pending_delete = Some(user.clone());
                    }
                    ui.end_row();
                }
            });
    }

    show_delete_confirm(ui, state);
}

fn show_admin_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_max_width(320.0);
        ui.heading("New Admin");
        ui.add_space(4.0);

        let form = &mut state.accounts.form;
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
        ui.add_space(8.0);

        let in_flight = state.accounts.create_query.in_flight();
        if ui
            .add_enabled(!in_flight, egui::Button::new("Create Admin"))
            .clicked()
        {
            match state.accounts.form.validate() {
                Ok(()) => {
                    let api = state.api.clone();
                    let new_user = NewUser {
                        username: state.accounts.form.username.trim().to_string(),
                        password: state.accounts.form.password.clone(),
                        first_name: state.accounts.form.first_name.trim().to_string(),
                        last_name: state.accounts.form.last_name.trim().to_string(),
                        user_type: Some(ADMIN_TYPE.to_string()),
                    };
                    state
                        .accounts
                        .create_query
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
}

fn show_delete_confirm(ui: &mut egui::Ui, state: &mut AppState) {
    let target = match state.accounts.pending_delete.clone() {
        Some(target) => target,
        None => return,
    };

    egui::Window::new("Delete User")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "Are you sure you want to delete {}?",
                target.full_name()
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.accounts.pending_delete = None;
                }
                if ui
                    .button(egui::RichText::new("🗑 Delete").color(egui::Color32::RED))
                    .clicked()
                {
                    state.accounts.pending_delete = None;
                    state.accounts.deleting_id = Some(target.id.clone());
                    let api = state.api.clone();
                    let id = target.id.clone();
                    state
                        .accounts
                        .delete_query
                        .dispatch(ui.ctx(), move || api.delete_user(&id));
                }
            });
        });
}
