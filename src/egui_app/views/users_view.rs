use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::shared::EmployeeRecord;

enum RowAction {
    Edit(EmployeeRecord),
    Delete(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Employees").size(22.0).color(colors::TEXT_DARK));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(theme::primary_button("Add User")).clicked() {
                state.open_add();
            }
            if ui.button("Refresh").clicked() {
                state.refresh_users();
            }
        });
    });
    ui.add_space(12.0);

    if state.users.is_empty() {
        ui.label(egui::RichText::new("No employees yet.").color(colors::TEXT_SECONDARY));
        return;
    }

    let mut action = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("users_table")
            .striped(true)
            .num_columns(5)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for header in ["NIK", "Name", "Email", "Position", "Actions"] {
                    ui.label(egui::RichText::new(header).strong().color(colors::TEXT_DARK));
                }
                ui.end_row();

                for user in &state.users {
                    ui.label(user.nik.as_str());
                    ui.label(user.name.as_str());
                    ui.label(user.email.as_str());
                    ui.label(user.position.as_str());
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            action = Some(RowAction::Edit(user.clone()));
                        }
                        if ui.add(theme::danger_button("Delete")).clicked() {
                            action = Some(RowAction::Delete(user.nik.clone()));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    match action {
        Some(RowAction::Edit(user)) => state.open_edit(&user),
        Some(RowAction::Delete(nik)) => state.request_delete(&nik),
        None => {}
    }
}
