//! PuzzleN desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop PuzzleN application.

use std::process::ExitCode;

use clap::Parser as _;
use puzzlen_app::{
    app::{PuzzleApp, StartupError},
    cli::Args,
};

const APP_ID: &str = "io.github.puzzlen";

fn run(args: &Args) -> Result<(), StartupError> {
    let config = args.to_config();
    let app = PuzzleApp::new(config, args.seed)?;

    #[expect(clippy::cast_precision_loss)]
    let inner_size = {
        let (width, height) = config.pixel_size();
        (width as f32, height as f32)
    };
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(app.title())
            .with_resizable(false)
            .with_inner_size(inner_size),
        ..Default::default()
    };
    let title = app.title().to_owned();
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
