// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use portfolio3d::showcase::{SettingsSource, ShowcasePlugin, ShowcaseSettings, ThemeMode};

/// Portfolio page with an interactive 3D showcase
#[derive(Parser, Debug)]
#[command(name = "portfolio3d")]
#[command(author, version, about = "Personal portfolio page with an interactive 3D showcase")]
struct Cli {
    /// Path to a RON settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "portfolio3d.ron")]
    config: PathBuf,

    /// Starting theme: dark or light
    #[arg(short, long, value_parser = parse_theme_arg)]
    theme: Option<ThemeMode>,

    /// Keep the knot violet even while the pointer hovers it
    #[arg(long)]
    static_mesh: bool,

    /// Print the effective settings as RON and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_theme_arg(s: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(s).ok_or_else(|| format!("Unknown theme: {}. Valid: dark, light", s))
}

/// Settings from the config file with CLI overrides applied, plus where
/// they came from.
fn resolve_settings(cli: &Cli) -> Result<(ShowcaseSettings, SettingsSource), String> {
    let (mut settings, source) = match ShowcaseSettings::load(&cli.config)? {
        Some(settings) => (settings, SettingsSource::File(cli.config.clone())),
        None => (
            ShowcaseSettings::default(),
            SettingsSource::Defaults {
                missing: cli.config.clone(),
            },
        ),
    };

    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if cli.static_mesh {
        settings.mesh.follow_hover = false;
    }

    Ok((settings, source))
}

fn main() -> AppExit {
    let cli = Cli::parse();

    let (settings, source) = match resolve_settings(&cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return AppExit::from_code(2);
        }
    };

    if cli.print_config {
        return match settings.to_ron_string() {
            Ok(text) => {
                println!("{}", text);
                AppExit::Success
            }
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                AppExit::from_code(1)
            }
        };
    }

    let window = &settings.window;
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window.title.clone(),
                        resolution: (window.width, window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: settings.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(ShowcasePlugin::new(settings.clone(), source))
        .run()
}
