/**
 * Employee Admin Desktop Client - Main Entry Point
 *
 * Implements eframe::App around the shared `AppState`: results from
 * background requests are applied at the start of every frame, then the
 * panels and dialogs are drawn.
 */
use eframe::egui;
use employee_admin::egui_app::{theme, views, AppState};

fn main() -> Result<(), eframe::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Admin",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AdminApp::default()))
        }),
    )
}

/// Main application state
#[derive(Default)]
struct AdminApp {
    state: AppState,
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_dialogs(ctx, &mut self.state);

        if self.state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
