use clap::Parser;
use gadget_list::Menu;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gadget-list", about = "Track which gadgets you carry on which days")]
struct Args {
    /// Write logs to this file; nothing is logged without it
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

/// Send log records to `path`. Fails if a logger is already installed.
fn init_logging(path: &Path, level: LevelFilter) -> io::Result<()> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let log_file = File::create(path)?;
    WriteLogger::init(level, log_config, log_file).map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, args.log_level)?;
    }

    log::info!("gadget-list starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logger_install_is_reported() {
        let path = std::env::temp_dir().join(format!("gadget-list-{}.log", std::process::id()));
        init_logging(&path, LevelFilter::Debug).unwrap();

        let err = init_logging(&path, LevelFilter::Debug).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);

        let _ = std::fs::remove_file(&path);
    }
}
