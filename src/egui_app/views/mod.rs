use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::types::AppView;

pub mod login_view;
pub mod users_view;
pub mod dialogs;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(theme::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Employee Admin").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.current_view == AppView::Users {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(ref me) = state.me {
                            ui.colored_label(colors::TEXT_LIGHT, format!("{} ({})", me.name, me.position));
                        }
                    }
                    if state.is_loading() {
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(theme::page_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::Login => login_view::render(ui, state),
            AppView::Users => users_view::render(ui, state),
        });
}

/// Form, delete confirmation and notification, in stacking order
pub fn render_dialogs(ctx: &egui::Context, state: &mut AppState) {
    dialogs::render_form(ctx, state);
    dialogs::render_delete_confirmation(ctx, state);
    dialogs::render_notification(ctx, state);
}
