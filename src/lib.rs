//! Prize Wheel - a spinning prize wheel for the terminal
//!
//! The wheel is divided into equal sectors, one per prize. The host picks the
//! winning segment up front; the wheel then turns forward through a few full
//! revolutions and eases to a stop with the winner's center under the fixed
//! pointer at the top.
//!
//! # Features
//!
//! - **Deterministic landing**: the host decides the outcome, the animation only presents it
//! - **Forward-only motion**: every spin continues from where the last one stopped
//! - **Exactly-once completion**: each spin carries an id, so late or repeated timer
//!   notifications are ignored
//! - **SVG export**: the same geometry rendered as a standalone `0 0 100 100` document
//!
//! # Getting Started
//!
//! ```sh
//! prizewheel                                  # interactive wheel
//! prizewheel --config prizes.toml             # custom prize list
//! prizewheel export --output wheel.svg --winner 4
//! prizewheel layout --pretty                  # sector geometry as JSON
//! prizewheel init                             # write the default configuration
//! ```
//!
//! # Library Usage
//!
//! ```
//! use prizewheel::segment::default_segments;
//! use prizewheel::spin::compute_target_rotation;
//!
//! let segments = default_segments();
//! let target = compute_target_rotation(0.0, 2, segments.len(), 5).unwrap();
//! assert_eq!(target, 2047.5);
//! ```
//!
//! # Modules
//!
//! - [`app`] - Application state management
//! - [`components`] - UI components (wheel, prize list, status bar, help)
//! - [`config`] - Configuration loading and saving
//! - [`events`] - Actions and modes
//! - [`geometry`] - Sector layout and label placement
//! - [`segment`] - Prize segments
//! - [`spin`] - Target rotation math and the spin lifecycle
//! - [`svg`] - SVG rendering
//! - [`timer`] - Spin completion timer
//! - [`ui`] - Terminal UI rendering

pub mod app;
pub mod components;
pub mod config;
pub mod events;
pub mod geometry;
pub mod handlers;
pub mod logging;
pub mod segment;
pub mod spin;
pub mod svg;
pub mod timer;
pub mod ui;

pub use clap::Parser;

use clap::Subcommand;
use std::path::PathBuf;

/// Command-line arguments for the prize wheel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read the configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the wheel as an SVG document
    Export {
        /// Output file
        #[arg(long, short)]
        output: PathBuf,

        /// Rotation of the wheel, in degrees
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotation: f64,

        /// Render the wheel at rest on this segment, spun forward from --rotation
        #[arg(long)]
        winner: Option<usize>,
    },
    /// Print the sector layout as JSON
    Layout {
        #[arg(long)]
        pretty: bool,
    },
    /// Write the active configuration to a TOML file
    Init {
        /// Destination; defaults to the user configuration file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_interactive() {
        let args = Args::try_parse_from(["prizewheel"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_export_args() {
        let args = Args::try_parse_from([
            "prizewheel",
            "export",
            "--output",
            "wheel.svg",
            "--rotation",
            "-45",
            "--winner",
            "3",
        ])
        .unwrap();
        match args.command {
            Some(Commands::Export {
                output,
                rotation,
                winner,
            }) => {
                assert_eq!(output, PathBuf::from("wheel.svg"));
                assert_eq!(rotation, -45.0);
                assert_eq!(winner, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let args =
            Args::try_parse_from(["prizewheel", "layout", "--config", "prizes.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("prizes.toml")));
        assert!(matches!(args.command, Some(Commands::Layout { pretty: false })));
    }

    #[test]
    fn test_init_args() {
        let args = Args::try_parse_from(["prizewheel", "init"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Init { output: None })));
    }
}
