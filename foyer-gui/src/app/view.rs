use iced::widget::{checkbox, horizontal_rule};
use iced::{Alignment, Length};

use foyer_ui::{
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use super::form::Field;
use super::message::ViewMessage;
use super::{App, Mode, Notification};

pub fn login(app: &App) -> Element<'_, ViewMessage> {
    let email = form::Value {
        value: app.form.email.clone(),
        valid: app.errors.get(Field::Email).is_none(),
    };
    let password = form::Value {
        value: app.form.password.clone(),
        valid: app.errors.get(Field::Password).is_none(),
    };

    let email_input = if app.processing {
        form::Form::new_disabled("Email address", &email)
    } else {
        form::Form::new_trimmed("Email address", &email, ViewMessage::EmailEdited)
    }
    .maybe_warning(app.errors.get(Field::Email))
    .size(P1_SIZE)
    .padding(10);

    let password_input = if app.processing {
        form::Form::new_disabled("Password", &password)
    } else {
        form::Form::new("Password", &password, ViewMessage::PasswordEdited)
    }
    .secure(!app.show_password)
    .maybe_warning(app.errors.get(Field::Password))
    .size(P1_SIZE)
    .padding(10);

    let password_row = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(password_input)
        .push(
            button::link(if app.show_password { "Hide" } else { "Show" })
                .on_press(ViewMessage::TogglePasswordVisibility),
        );

    let remember_row = (app.mode == Mode::Login).then(|| {
        Row::new()
            .align_y(Alignment::Center)
            .push(
                Container::new(
                    checkbox("Remember me", app.remember_me)
                        .on_toggle(ViewMessage::RememberMeToggled)
                        .text_size(P2_SIZE),
                )
                .width(Length::Fill),
            )
            // Visual stub, no action wired in.
            .push(button::link("Forgot password?"))
    });

    let submit = button::primary(if app.processing {
        "Processing..."
    } else {
        app.mode.action()
    })
    .width(Length::Fill)
    .on_press_maybe((!app.processing).then_some(ViewMessage::Submit));

    let divider = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(horizontal_rule(1))
        .push(text("or").style(theme::text::secondary))
        .push(horizontal_rule(1));

    // Visual stub, no action wired in.
    let social = button::secondary("Continue with Google").width(Length::Fill);

    let switch = Row::new()
        .spacing(5)
        .align_y(Alignment::Center)
        .push(text(app.mode.switch_prompt()).style(theme::text::secondary))
        .push(button::link(app.mode.switch_action()).on_press(ViewMessage::SwitchMode));

    let card = Container::new(
        Column::new()
            .spacing(20)
            .push(
                Column::new()
                    .spacing(10)
                    .width(Length::Fill)
                    .align_x(Alignment::Center)
                    .push(h2(app.mode.title()))
                    .push(text(app.mode.subtitle()).style(theme::text::secondary)),
            )
            .push(email_input)
            .push(password_row)
            .push_maybe(remember_row)
            .push(submit)
            .push(divider)
            .push(social)
            .push(
                Container::new(switch)
                    .width(Length::Fill)
                    .center_x(Length::Fill),
            ),
    )
    .max_width(460)
    .padding(40)
    .style(theme::card::simple);

    let mut col = Column::new().spacing(20);
    if let Some(n) = &app.notification {
        col = col.push(match n {
            Notification::Success(message) => notification::success(message),
            Notification::Failure(message) => notification::failure(message),
        });
    }

    col.push(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(40),
    )
    .into()
}
