//! Triband GUI - standalone 3-band EQ editor.

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use triband_config::{ReleasePolicy, Variant, default_config_path};
use triband_core::{EqParam, PLUGIN_INFO};
use triband_gui::{Overrides, StandaloneHost, TribandApp, resolve_config};

/// Triband EQ editor.
#[derive(Parser, Debug)]
#[command(name = "triband-gui")]
#[command(about = "Standalone knob surface for the Triband 3-band EQ")]
#[command(version)]
struct Args {
    /// Config file (default: <config dir>/triband/editor.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Editor variant: three-q (gain color feedback) or eq (static colors)
    #[arg(long)]
    variant: Option<Variant>,

    /// Which gestures close on release: all-knobs or active-only
    #[arg(long)]
    release_policy: Option<ReleasePolicy>,

    /// UI scale factor
    #[arg(long)]
    scale: Option<f32>,

    /// Initial high shelf gain in dB
    #[arg(long, allow_negative_numbers = true)]
    high: Option<f32>,

    /// Initial low shelf gain in dB
    #[arg(long, allow_negative_numbers = true)]
    low: Option<f32>,

    /// Initial mid band gain in dB
    #[arg(long, allow_negative_numbers = true)]
    mid: Option<f32>,

    /// Initial mid band frequency in Hz
    #[arg(long)]
    freq: Option<f32>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    tracing::info!("Starting {}", PLUGIN_INFO.name);

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let overrides = Overrides {
        variant: args.variant,
        release_policy: args.release_policy,
        scale: args.scale,
    };
    let config = resolve_config(&config_path, &overrides);

    let host = StandaloneHost::new();
    let initial = [
        (EqParam::HighGain, args.high),
        (EqParam::LowGain, args.low),
        (EqParam::MidGain, args.mid),
        (EqParam::MidFreq, args.freq),
    ];
    for (param, value) in initial {
        if let Some(value) = value {
            host.automate(param, value);
        }
    }

    let size = [
        PLUGIN_INFO.ui_width as f32 * config.scale,
        PLUGIN_INFO.ui_height as f32 * config.scale,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_resizable(false)
            .with_title(PLUGIN_INFO.name),
        ..Default::default()
    };

    eframe::run_native(
        PLUGIN_INFO.name,
        options,
        Box::new(move |cc| Ok(Box::new(TribandApp::new(cc, &config, host)))),
    )
}
