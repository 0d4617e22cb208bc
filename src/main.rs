#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Person Profile Card - profile viewer with a mounted-duration timer
#[derive(Parser, Debug)]
#[command(name = "profilecard-desktop")]
#[command(about = "Person profile card with a show/hide toggle and mount timer")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(long, default_value = "Person Profile App")]
    title: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting profile card viewer ({}x{})",
        args.width,
        args.height
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
