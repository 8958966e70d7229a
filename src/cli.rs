use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    version,
    about = "Compute distance, speed and calories from workout sensor packages"
)]
pub struct Cli {
    /// Sensor packages as CODE:f1,f2,... (codes: SWM, RUN, WLK).
    ///
    /// SWM: actions,duration_h,weight_kg,pool_length_m,lap_count
    /// RUN: actions,duration_h,weight_kg
    /// WLK: actions,duration_h,weight_kg,height_cm
    ///
    /// Without packages or --input, the built-in sample packages are used.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Read more packages from a file, one per line (`#` starts a comment).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print one JSON object per report instead of the summary line.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
