use clap::Parser;
use packlist::core::config::{self, CliOverrides};
use packlist::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packlist", about = "Terminal packing list manager")]
struct Args {
    /// Config file to use instead of ~/.packlist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists, so its messages are
    // collected and logged once the logger is up.
    let mut notices = Vec::new();
    let file_config = match &args.config {
        Some(path) => config::load_config_from(path, &mut notices),
        None => config::load_config(&mut notices),
    }
    .map_err(std::io::Error::other)?;

    let mut resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level.as_deref(),
            log_file: args.log_file.as_deref(),
        },
    );
    notices.append(&mut resolved.notices);

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Packlist starting up (log level {})", resolved.log_level);
    for notice in &notices {
        notice.log();
    }

    tui::run(resolved)
}
