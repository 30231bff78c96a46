#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::error;

use foyer_ui::{component::text, font, theme};

use foyer_gui::{
    app::{App, Config},
    args::{parse_args, Arg},
    dir::FoyerDirectory,
    logger::parse_log_level,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = match args.as_slice() {
        [] => {
            let datadir = FoyerDirectory::new_default()?;
            Config::new(datadir)
        }
        [Arg::DatadirPath(datadir)] => Config::new(datadir.clone()),
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    config.foyer_directory.init()?;

    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Foyer".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 520.0,
            height: 780.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 460.0,
            height: 640.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or("'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
