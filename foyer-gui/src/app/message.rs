use crate::services::auth::AuthError;

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Submitted(Result<(), AuthError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    PasswordEdited(String),
    TogglePasswordVisibility,
    RememberMeToggled(bool),
    SwitchMode,
    Submit,
}
