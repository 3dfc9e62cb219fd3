use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use solarbench::BenchmarkPlugin;
use solarbench::cli::{Args, handle_list_variants, load_and_apply_config};

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_variants {
        handle_list_variants();
        return AppExit::Success;
    }

    let mut app = App::new();

    // Logs go to stderr; stdout carries only the energies
    app.add_plugins(LogPlugin {
        level: if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        },
        ..default()
    });

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return AppExit::error();
        }
    };

    if args.print_config {
        return match config.to_toml() {
            Ok(toml_string) => {
                print!("{toml_string}");
                AppExit::Success
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {e}");
                AppExit::error()
            }
        };
    }

    app.add_plugins(BenchmarkPlugin::with_config(config));

    app.run()
}
