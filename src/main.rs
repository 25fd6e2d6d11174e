use anyhow::{Context, Result};
use bugterm::config::Config;
use bugterm::ui::{CrosstermConsole, UiOptions};
use bugterm::{logger, BugCache, ExternalEditor};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: bugterm [STORE_FILE]
       bugterm --generate-config [PATH]

Keys: Ctrl+C quits from anywhere. Press 'q' on the bug list to quit.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        _ => {}
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let store_path = match args.first() {
        Some(path) => PathBuf::from(path),
        None => config.store_path()?,
    };
    let mut store = BugCache::open(&store_path, config.identity.name.clone())
        .with_context(|| format!("Failed to open bug store: {}", store_path.display()))?;
    let mut editor = ExternalEditor::from_config(&config.editor);
    let mut console = CrosstermConsole::new();

    bugterm::run(&mut store, &mut editor, &mut console, &UiOptions::from(&config))?;

    Ok(())
}
