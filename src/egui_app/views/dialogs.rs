//! Modal dialogs: add / edit form, delete confirmation and notifications.
//!
//! Each dialog blocks the page behind it until it is closed.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::types::{FormMode, NotificationKind};
use crate::shared::Position;

pub fn render_form(ctx: &egui::Context, state: &mut AppState) {
    let busy = state.is_loading();
    let error = state.form_error.clone();
    let Some(form) = state.form.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;

    let title = match form.mode {
        FormMode::Add => "Add User",
        FormMode::Edit => "Edit User",
    };

    egui::Modal::new(egui::Id::new("employee_form"))
        .frame(theme::dialog_frame())
        .show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(egui::RichText::new(title).size(20.0).color(colors::TEXT_DARK));
            ui.add_space(12.0);

            if let Some(ref error) = error {
                ui.label(egui::RichText::new(error.as_str()).color(colors::ERROR));
                ui.add_space(8.0);
            }

            egui::Grid::new("employee_form_fields").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("NIK:");
                let nik_editable = form.mode == FormMode::Add;
                ui.add_enabled(nik_editable, egui::TextEdit::singleline(&mut form.nik).desired_width(220.0));
                ui.end_row();

                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(220.0));
                ui.end_row();

                ui.label("Email:");
                ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(220.0));
                ui.end_row();

                if form.mode == FormMode::Add {
                    ui.label("Password:");
                    ui.add(egui::TextEdit::singleline(&mut form.password).password(true).desired_width(220.0));
                    ui.end_row();
                }

                ui.label("Position:");
                egui::ComboBox::from_id_salt("employee_position")
                    .selected_text(form.position.as_str())
                    .show_ui(ui, |ui| {
                        for position in Position::ALL {
                            ui.selectable_value(&mut form.position, position, position.as_str());
                        }
                    });
                ui.end_row();
            });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let label = match form.mode {
                    FormMode::Add => "Add",
                    FormMode::Edit => "Save",
                };
                if ui.add_enabled(!busy, theme::primary_button(label)).clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        state.submit_form();
    } else if cancel {
        state.close_form();
    }
}

pub fn render_delete_confirmation(ctx: &egui::Context, state: &mut AppState) {
    let Some(nik) = state.pending_delete.clone() else {
        return;
    };

    let mut confirm = false;
    let mut cancel = false;

    egui::Modal::new(egui::Id::new("confirm_delete"))
        .frame(theme::dialog_frame())
        .show(ctx, |ui| {
            ui.set_width(300.0);
            ui.label(egui::RichText::new("Are you sure?").size(20.0).color(colors::TEXT_DARK));
            ui.add_space(8.0);
            ui.label(format!("Employee {} will be removed.", nik));
            ui.label(egui::RichText::new("This action cannot be undone!").color(colors::TEXT_SECONDARY));
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.add(theme::danger_button("Yes, delete it!")).clicked() {
                    confirm = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        state.confirm_delete();
    } else if cancel {
        state.cancel_delete();
    }
}

pub fn render_notification(ctx: &egui::Context, state: &mut AppState) {
    let Some(notification) = state.notification.clone() else {
        return;
    };

    let mut dismiss = false;
    let color = match notification.kind {
        NotificationKind::Success => colors::SUCCESS,
        NotificationKind::Error => colors::ERROR,
    };

    egui::Modal::new(egui::Id::new("notification"))
        .frame(theme::dialog_frame())
        .show(ctx, |ui| {
            ui.set_width(280.0);
            ui.label(egui::RichText::new(notification.title.as_str()).size(20.0).color(color));
            ui.add_space(8.0);
            ui.label(notification.message.as_str());
            ui.add_space(16.0);
            if ui.add(theme::primary_button("OK")).clicked() {
                dismiss = true;
            }
        });

    if dismiss {
        state.dismiss_notification();
    }
}
