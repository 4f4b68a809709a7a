use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

pub const DEFAULT_INPUT: &str = "./input/*.bmp";
pub const DEFAULT_OUTPUT: &str = "./output/";

pub struct CmdOptions {
    pub input: String,
    pub output: PathBuf,
    pub fail_fast: bool,
    pub log_level: LevelFilter,
}

impl CmdOptions {
    pub fn from_matches(matches: &ArgMatches) -> CmdOptions {
        let log_level = if matches.get_flag("trace") {
            LevelFilter::Trace
        } else if matches.get_flag("debug") {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        CmdOptions {
            input: matches
                .get_one::<String>("input")
                .cloned()
                .unwrap_or_else(|| DEFAULT_INPUT.to_string()),
            output: matches
                .get_one::<String>("output")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            fail_fast: matches.get_flag("fail-fast"),
            log_level,
        }
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("drcs-convert")
        .about("Convert DRCS bitmaps to PNG")
        .arg(Arg::new("input")
            .help("Input file path (supports glob patterns)")
            .default_value(DEFAULT_INPUT))
        .arg(Arg::new("output")
            .help("Output directory")
            .default_value(DEFAULT_OUTPUT))
        .arg(Arg::new("fail-fast")
            .long("fail-fast")
            .action(ArgAction::SetTrue)
            .help("Stop at the first file that fails to convert"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
}
