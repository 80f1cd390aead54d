use std::sync::mpsc::{channel, Receiver, Sender};

use crate::egui_app::api;
use crate::egui_app::config::Config;
use crate::egui_app::types::{ApiOutcome, AppView, EmployeeForm, FormMode, Notification};
use crate::shared::EmployeeRecord;

/// Central application state shared across egui views.
///
/// Network calls run on background threads and report through one channel;
/// [`AppState::poll`] drains it once per frame.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,
    pub nik_input: String,
    pub password_input: String,
    pub login_error: Option<String>,
    /// Signed-in employee, from `GET /api/me`
    pub me: Option<EmployeeRecord>,
    pub users: Vec<EmployeeRecord>,
    /// Open add / edit form
    pub form: Option<EmployeeForm>,
    pub form_error: Option<String>,
    /// NIK awaiting delete confirmation
    pub pending_delete: Option<String>,
    pub notification: Option<Notification>,
    /// Requests started and not yet reported
    pub in_flight: usize,
    tx: Sender<ApiOutcome>,
    rx: Receiver<ApiOutcome>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let (tx, rx) = channel();
        Self {
            config,
            current_view: AppView::Login,
            nik_input: String::new(),
            password_input: String::new(),
            login_error: None,
            me: None,
            users: Vec::new(),
            form: None,
            form_error: None,
            pending_delete: None,
            notification: None,
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Apply every result that arrived since the last frame
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(outcome);
        }
    }

    pub fn apply(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::LoggedIn(Ok(token)) => {
                tracing::info!("Signed in as {}", self.nik_input);
                self.config.set_token(Some(token));
                self.password_input.clear();
                self.login_error = None;
                self.current_view = AppView::Users;
                self.fetch_me();
                self.refresh_users();
            }
            ApiOutcome::LoggedIn(Err(e)) => {
                self.login_error = Some(e);
            }
            ApiOutcome::Me(Ok(me)) => {
                self.me = Some(me);
            }
            ApiOutcome::Me(Err(e)) => {
                tracing::warn!("Could not load signed-in employee: {}", e);
            }
            ApiOutcome::Users(Ok(users)) => {
                self.users = users;
            }
            ApiOutcome::Users(Err(e)) => {
                tracing::warn!("Failed to fetch users: {}", e);
                self.notification = Some(Notification::error(
                    "Failed to fetch users. Please try again later.",
                ));
            }
            ApiOutcome::Saved(mode, Ok(record)) => {
                tracing::info!("Saved employee {}", record.nik);
                self.form = None;
                self.form_error = None;
                let message = match mode {
                    FormMode::Add => "User added successfully!",
                    FormMode::Edit => "User updated successfully!",
                };
                self.notification = Some(Notification::success("Success", message));
                self.refresh_users();
            }
            ApiOutcome::Saved(_, Err(e)) => {
                self.notification = Some(Notification::error(e));
            }
            ApiOutcome::Deleted(Ok(message)) => {
                tracing::info!("{}", message);
                self.notification = Some(Notification::success("Deleted!", "User has been deleted."));
                self.refresh_users();
            }
            ApiOutcome::Deleted(Err(e)) => {
                self.notification = Some(Notification::error(e));
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.nik_input.trim().is_empty() || self.password_input.is_empty() {
            self.login_error = Some("NIK and Password are required.".to_string());
            return;
        }
        self.login_error = None;

        let nik = self.nik_input.trim().to_string();
        let password = self.password_input.clone();
        self.spawn(move |config| ApiOutcome::LoggedIn(api::login(&config, nik, password)));
    }

    pub fn logout(&mut self) {
        self.config.clear_token();
        self.current_view = AppView::Login;
        self.me = None;
        self.users.clear();
        self.form = None;
        self.pending_delete = None;
        self.password_input.clear();
    }

    pub fn fetch_me(&mut self) {
        self.spawn(|config| ApiOutcome::Me(api::get_me(&config)));
    }

    pub fn refresh_users(&mut self) {
        self.spawn(|config| ApiOutcome::Users(api::list_users(&config)));
    }

    pub fn open_add(&mut self) {
        self.form = Some(EmployeeForm::add());
        self.form_error = None;
    }

    pub fn open_edit(&mut self, record: &EmployeeRecord) {
        self.form = Some(EmployeeForm::edit(record));
        self.form_error = None;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.form_error = None;
    }

    /// Validate the open form and send it
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };

        if let Err(message) = form.validate() {
            self.form_error = Some(message.to_string());
            return;
        }
        self.form_error = None;

        match form.mode {
            FormMode::Add => {
                let request = form.to_register_request();
                self.spawn(move |config| {
                    ApiOutcome::Saved(FormMode::Add, api::register_user(&config, request))
                });
            }
            FormMode::Edit => {
                let request = form.to_update_request();
                self.spawn(move |config| {
                    ApiOutcome::Saved(FormMode::Edit, api::update_user(&config, request))
                });
            }
        }
    }

    pub fn request_delete(&mut self, nik: &str) {
        self.pending_delete = Some(nik.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) {
        let Some(nik) = self.pending_delete.take() else {
            return;
        };
        self.spawn(move |config| ApiOutcome::Deleted(api::delete_user(&config, &nik)));
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: FnOnce(Config) -> ApiOutcome + Send + 'static,
    {
        self.in_flight += 1;
        let config = self.config.clone();
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(request(config));
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
