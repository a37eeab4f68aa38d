use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

mod app;
mod config;
mod host;
mod ui;
mod utils;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Project data file to open; defaults to the last one opened.
    project: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = config::load_config();
    let project = args.project.or_else(|| config.last_project.clone());

    eframe::run_native(
        "Story Editor",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
            ..Default::default()
        },
        Box::new(move |cc| Ok(Box::new(app::StoryEditorApp::new(cc, config, project)))),
    )
}
