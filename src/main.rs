// SPDX-License-Identifier: GPL-3.0-only

use camera_ui_state::constants::{
    AspectRatio, CaptureMode, ConcurrentCameraMode, DarkMode, DynamicRange, ExternalCaptureMode,
    FlashMode, ImageOutputFormat, LensFacing, StabilizationMode, StreamConfig, VideoQuality,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-ui-state")]
#[command(about = "Derive and inspect the capture screen state of the camera app")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    /// Settings file (default: $CAMERA_UI_STATE_SETTINGS or the user config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the capture UI state once and print it as JSON
    Derive {
        /// Camera system constraints JSON (default: built-in two-lens device)
        #[arg(short, long)]
        constraints: Option<PathBuf>,

        /// Camera state JSON (default: running camera, nothing recording)
        #[arg(short = 's', long)]
        state: Option<PathBuf>,

        /// How the app was launched
        #[arg(short, long, value_enum, default_value = "standard")]
        external: ExternalCaptureMode,

        /// Use the stored settings as-is instead of constraining them first
        #[arg(long)]
        raw: bool,
    },

    /// Inspect or change the stored settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Feed a JSON Lines message script through the capture controller
    Replay {
        /// Script with one controller message per line
        script: PathBuf,

        /// How the app was launched
        #[arg(short, long, value_enum, default_value = "standard")]
        external: ExternalCaptureMode,

        /// Write setting changes back to the settings file
        #[arg(long)]
        persist: bool,
    },

    /// Print the built-in constraints as a starting point for custom ones
    ConstraintsTemplate,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the stored settings
    Show,
    /// Restore default settings
    Reset,
    /// Change individual settings
    Set(SettingsChanges),
}

/// Settings to overwrite; anything not given is kept
#[derive(Args, Debug, Default)]
pub struct SettingsChanges {
    #[arg(long, value_enum)]
    pub lens: Option<LensFacing>,
    #[arg(long, value_enum)]
    pub flash: Option<FlashMode>,
    #[arg(long, value_enum)]
    pub capture_mode: Option<CaptureMode>,
    #[arg(long, value_enum)]
    pub aspect_ratio: Option<AspectRatio>,
    #[arg(long, value_enum)]
    pub stream_config: Option<StreamConfig>,
    #[arg(long, value_enum)]
    pub stabilization: Option<StabilizationMode>,
    #[arg(long, value_enum)]
    pub dynamic_range: Option<DynamicRange>,
    #[arg(long, value_enum)]
    pub image_format: Option<ImageOutputFormat>,
    #[arg(long, value_enum)]
    pub video_quality: Option<VideoQuality>,
    /// Target frame rate, 0 for automatic
    #[arg(long)]
    pub frame_rate: Option<u32>,
    #[arg(long, value_enum)]
    pub concurrent: Option<ConcurrentCameraMode>,
    #[arg(long, value_enum)]
    pub dark_mode: Option<DarkMode>,
    #[arg(long)]
    pub audio: Option<bool>,
    /// Maximum video duration in seconds, 0 for unlimited
    #[arg(long)]
    pub max_video_duration: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_ui_state=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli::settings_store(cli.settings);

    match cli.command {
        Commands::Derive {
            constraints,
            state,
            external,
            raw,
        } => cli::derive_state(&store, constraints, state, external, raw),
        Commands::Settings(SettingsCommand::Show) => cli::show_settings(&store),
        Commands::Settings(SettingsCommand::Reset) => cli::reset_settings(&store),
        Commands::Settings(SettingsCommand::Set(changes)) => cli::set_settings(&store, changes),
        Commands::Replay {
            script,
            external,
            persist,
        } => cli::replay(&store, script, external, persist),
        Commands::ConstraintsTemplate => cli::constraints_template(),
    }
}
