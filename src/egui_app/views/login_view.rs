use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        let top_space = (ui.available_height() - 260.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        theme::dialog_frame().show(ui, |ui| {
            ui.set_width(320.0);
            ui.label(egui::RichText::new("Sign in").size(24.0).color(colors::TEXT_DARK));
            ui.add_space(16.0);

            if let Some(ref error) = state.login_error {
                ui.label(egui::RichText::new(error.as_str()).color(colors::ERROR));
                ui.add_space(8.0);
            }

            egui::Grid::new("login_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label(egui::RichText::new("NIK:").color(colors::TEXT_SECONDARY));
                ui.add(egui::TextEdit::singleline(&mut state.nik_input).desired_width(200.0));
                ui.end_row();

                ui.label(egui::RichText::new("Password:").color(colors::TEXT_SECONDARY));
                let password = ui.add(
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .desired_width(200.0),
                );
                if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    state.handle_login();
                }
                ui.end_row();
            });

            ui.add_space(16.0);

            let busy = state.is_loading();
            if ui.add_enabled(!busy, theme::primary_button("Login").min_size(egui::vec2(120.0, 32.0))).clicked() {
                state.handle_login();
            }

            if busy {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
    });
}
