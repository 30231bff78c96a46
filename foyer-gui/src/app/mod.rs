pub mod form;
pub mod message;
pub mod view;

use iced::Task;
use tracing_subscriber::filter::LevelFilter;

use foyer_ui::widget::Element;

use crate::{
    dir::FoyerDirectory,
    logger::setup_logger,
    services::auth::AuthClient,
};

use form::{validate, Field, FormData, FormErrors};
use message::{Message, ViewMessage};

const SUBMISSION_FAILED: &str = "Something went wrong, please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Login => "Welcome back",
            Mode::Register => "Create your account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Mode::Login => "Log in to your account",
            Mode::Register => "Fill in your details to register",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Mode::Login => "Log in",
            Mode::Register => "Register",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            Mode::Login => "Don't have an account?",
            Mode::Register => "Already have an account?",
        }
    }

    pub fn switch_action(self) -> &'static str {
        match self {
            Mode::Login => "Register",
            Mode::Register => "Log in",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Mode::Login => "Login successful",
            Mode::Register => "Registration successful",
        }
    }
}

/// Outcome of the last submission, rendered by the view as a banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(&'static str),
    Failure(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub foyer_directory: FoyerDirectory,
}

impl Config {
    pub fn new(foyer_directory: FoyerDirectory) -> Self {
        Self { foyer_directory }
    }
}

#[derive(Default)]
pub struct App {
    pub(crate) mode: Mode,
    pub(crate) form: FormData,
    pub(crate) errors: FormErrors,
    pub(crate) show_password: bool,
    pub(crate) remember_me: bool,
    pub(crate) processing: bool,
    pub(crate) notification: Option<Notification>,
    auth: AuthClient,
}

impl App {
    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (App, Task<Message>) {
        if let Err(e) = setup_logger(
            log_level.unwrap_or(LevelFilter::INFO),
            config.foyer_directory,
        ) {
            eprintln!("Failed to set up the logger: {}", e);
        }
        (App::default(), Task::none())
    }

    pub fn title(&self) -> String {
        format!("Foyer v{}", crate::VERSION)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::EmailEdited(value)) => {
                // Optimistic clearing: a stale error goes away as soon as the
                // field is edited, full validation only happens on submit.
                self.errors.clear(Field::Email);
                self.form.email = value;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.errors.clear(Field::Password);
                self.form.password = value;
            }
            Message::View(ViewMessage::TogglePasswordVisibility) => {
                self.show_password = !self.show_password;
            }
            Message::View(ViewMessage::RememberMeToggled(checked)) => {
                self.remember_me = checked;
            }
            Message::View(ViewMessage::SwitchMode) => {
                self.mode = self.mode.toggle();
                self.form = FormData::default();
                self.errors = FormErrors::default();
                self.notification = None;
            }
            Message::View(ViewMessage::Submit) => {
                if self.processing {
                    tracing::debug!("A submission is already in flight, ignoring");
                    return Task::none();
                }
                let errors = validate(&self.form);
                if !errors.is_empty() {
                    self.errors = errors;
                    return Task::none();
                }
                self.processing = true;
                self.notification = None;
                let client = self.auth.clone();
                let form = self.form.clone();
                let mode = self.mode;
                return Task::perform(
                    async move {
                        match mode {
                            Mode::Login => client.sign_in(&form.email, &form.password).await,
                            Mode::Register => client.register(&form.email, &form.password).await,
                        }
                    },
                    Message::Submitted,
                );
            }
            Message::Submitted(res) => {
                // Single reset point for both outcomes so the loading state
                // can never remain stuck.
                self.processing = false;
                match res {
                    Ok(()) => {
                        tracing::info!("{} succeeded for {}", self.mode.action(), self.form.email);
                        self.notification = Some(Notification::Success(self.mode.success_message()));
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.notification = Some(Notification::Failure(SUBMISSION_FAILED));
                    }
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::login(self).map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::AuthError;

    fn edit(app: &mut App, msg: ViewMessage) {
        let _ = app.update(Message::View(msg));
    }

    fn filled(email: &str, password: &str) -> App {
        let mut app = App::default();
        edit(&mut app, ViewMessage::EmailEdited(email.to_string()));
        edit(&mut app, ViewMessage::PasswordEdited(password.to_string()));
        app
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut app = filled("bad", "123");
        edit(&mut app, ViewMessage::Submit);
        assert!(app.errors.get(Field::Email).is_some());
        assert!(app.errors.get(Field::Password).is_some());

        edit(&mut app, ViewMessage::EmailEdited("ba".to_string()));
        assert!(app.errors.get(Field::Email).is_none());
        assert!(app.errors.get(Field::Password).is_some());

        let mut app = filled("bad", "123");
        edit(&mut app, ViewMessage::Submit);
        edit(&mut app, ViewMessage::PasswordEdited("1234".to_string()));
        assert!(app.errors.get(Field::Password).is_none());
        assert!(app.errors.get(Field::Email).is_some());
    }

    #[test]
    fn submit_with_invalid_form_stays_idle() {
        let mut app = filled("bad", "123");
        edit(&mut app, ViewMessage::Submit);
        assert!(!app.processing);
        assert_eq!(app.errors.get(Field::Email), Some(form::EMAIL_INVALID));
        assert_eq!(
            app.errors.get(Field::Password),
            Some(form::PASSWORD_TOO_SHORT)
        );
    }

    #[test]
    fn submit_with_valid_form_starts_processing() {
        let mut app = filled("a@b.com", "abcdef");
        edit(&mut app, ViewMessage::Submit);
        assert!(app.processing);
        assert!(app.errors.is_empty());
    }

    #[test]
    fn submit_while_processing_is_ignored() {
        let mut app = filled("a@b.com", "abcdef");
        edit(&mut app, ViewMessage::Submit);
        assert!(app.processing);

        // A second submit with a now-invalid form must not even validate.
        edit(&mut app, ViewMessage::EmailEdited("bad".to_string()));
        edit(&mut app, ViewMessage::Submit);
        assert!(app.processing);
        assert!(app.errors.is_empty());
    }

    #[test]
    fn submission_settles_back_to_idle_with_a_notification() {
        let mut app = filled("a@b.com", "abcdef");
        edit(&mut app, ViewMessage::Submit);
        assert!(app.processing);

        let _ = app.update(Message::Submitted(Ok(())));
        assert!(!app.processing);
        assert_eq!(
            app.notification,
            Some(Notification::Success(Mode::Login.success_message()))
        );
    }

    #[test]
    fn failed_submission_also_resets_processing() {
        let mut app = filled("a@b.com", "abcdef");
        edit(&mut app, ViewMessage::Submit);

        let _ = app.update(Message::Submitted(Err(AuthError {
            http_status: Some(500),
            error: "boom".to_string(),
        })));
        assert!(!app.processing);
        assert_eq!(
            app.notification,
            Some(Notification::Failure(SUBMISSION_FAILED))
        );
    }

    #[test]
    fn switching_mode_resets_form_and_errors() {
        let mut app = filled("bad", "123");
        edit(&mut app, ViewMessage::Submit);
        assert!(!app.errors.is_empty());

        edit(&mut app, ViewMessage::SwitchMode);
        assert_eq!(app.mode, Mode::Register);
        assert_eq!(app.form, FormData::default());
        assert!(app.errors.is_empty());
        assert_eq!(app.notification, None);

        edit(&mut app, ViewMessage::SwitchMode);
        assert_eq!(app.mode, Mode::Login);
    }

    #[test]
    fn switching_mode_is_independent_of_processing() {
        let mut app = filled("a@b.com", "abcdef");
        edit(&mut app, ViewMessage::Submit);
        assert!(app.processing);

        edit(&mut app, ViewMessage::SwitchMode);
        assert_eq!(app.mode, Mode::Register);
        assert_eq!(app.form, FormData::default());
    }

    #[test]
    fn toggling_visibility_twice_is_the_identity() {
        let mut app = App::default();
        assert!(!app.show_password);
        edit(&mut app, ViewMessage::TogglePasswordVisibility);
        assert!(app.show_password);
        edit(&mut app, ViewMessage::TogglePasswordVisibility);
        assert!(!app.show_password);
    }

    #[test]
    fn visibility_survives_a_mode_switch() {
        let mut app = App::default();
        edit(&mut app, ViewMessage::TogglePasswordVisibility);
        edit(&mut app, ViewMessage::SwitchMode);
        assert!(app.show_password);
    }
}
