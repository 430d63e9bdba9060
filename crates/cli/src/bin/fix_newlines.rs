use clap::Parser;
use std::process::ExitCode;
use textnorm_cli::app;
use textnorm_cli::args::NewlineArgs;
use textnorm_cli::config::AppConfig;
use textnorm_cli::logging;

fn main() -> ExitCode {
    let args = NewlineArgs::parse();
    logging::init(args.common.log_level());

    match AppConfig::try_from(&args) {
        Ok(config) => app::execute("fix_newlines", &config, &args.normalizer()),
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            ExitCode::FAILURE
        }
    }
}
