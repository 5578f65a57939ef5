use clap::Parser;
use manor::Variant;
use manor::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "manor", about = "Explore the manor and collect clues")]
struct Args {
    /// Game variant (defaults to the config file, then "detective")
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// TOML file with [[rooms]] rows to play instead of the built-in manor
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Turns recorded per exploration
    #[arg(long)]
    visit_capacity: Option<usize>,

    /// Where to write the debug log
    #[arg(long, default_value = "manor.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - stdout belongs to the game
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let cli = CliOverrides {
        variant: args.variant,
        map_file: args.map,
        visit_capacity: args.visit_capacity,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Manor starting up: {:?}", resolved);

    let map = config::load_map(&resolved)?;
    manor::terminal::run(resolved, map)?;
    Ok(())
}
