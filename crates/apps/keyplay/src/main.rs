//! Keyplay - replays keyboard shortcut sequences against a simulated page
//!
//! Useful for checking what a key sequence does under a given hotkeys
//! configuration without opening a browser.

use anyhow::Result;
use clap::Parser;
use hotkeys::HotkeysConfig;
use log::info;
use std::path::PathBuf;

mod replay;
mod script;

use replay::{render_step, replay};
use script::Script;

#[derive(Debug, Parser)]
#[command(name = "keyplay", version, about)]
struct Cli {
    /// Replay script (JSON)
    script: PathBuf,

    /// Hotkeys config file; defaults to hotkeys.json in the config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per step, then the summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = HotkeysConfig::load(cli.config.as_deref())?;
    let script = Script::from_file(&cli.script)?;
    info!(
        "Replaying {} steps on {}",
        script.steps.len(),
        script.path
    );

    let result = replay(&script, config);

    if cli.json {
        for step in &result.steps {
            println!("{}", serde_json::to_string(step)?);
        }
        println!("{}", serde_json::to_string(&result.summary)?);
    } else {
        for step in &result.steps {
            println!("{}", render_step(step));
        }
        let summary = &result.summary;
        println!(
            "\n{} navigation(s), {} focus change(s), {} hook call(s), {} dialog(s); ended on {}",
            summary.navigations,
            summary.focus_changes,
            summary.hook_calls,
            summary.dialogs,
            summary.final_path
        );
    }

    Ok(())
}
