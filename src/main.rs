use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use lumo::core::config::{self, CliOverrides, DEFAULT_LOG_LEVEL};

#[derive(Parser)]
#[command(name = "lumo", about = "Guest dashboard for the TV in your cabin")]
struct Args {
    /// Base URL of the guest API
    #[arg(long)]
    api_url: Option<String>,

    /// Screen to open on start (home, vibe, info, guest)
    #[arg(short, long)]
    screen: Option<String>,

    /// Log level written to lumo.log (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lumo.log in current directory.
    // The logger passes everything; log::max_level does the filtering so
    // the configured level can be applied once config is resolved.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lumo.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(DEFAULT_LOG_LEVEL);

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::LumoConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            api_url: args.api_url.as_deref(),
            screen: args.screen.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );
    for notice in &resolved.notices {
        log::warn!("{}", notice);
    }
    log::set_max_level(resolved.log_level);

    log::info!(
        "Lumo starting up (api: {}, screen: {:?})",
        resolved.api_base_url,
        resolved.start_screen
    );

    lumo::tui::run(resolved)
}
