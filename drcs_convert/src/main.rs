mod args;
mod filemanager;
mod logging;

use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    let matches = args::create_cmd_args().get_matches();
    let options = args::CmdOptions::from_matches(&matches);

    logging::init_logging(options.log_level);

    match filemanager::convert_all(&options) {
        Ok(summary) => {
            info!(
                "Converted {} file(s), {} failed",
                summary.converted, summary.failed
            );
            if summary.failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
