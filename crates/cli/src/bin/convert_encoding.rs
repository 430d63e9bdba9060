use clap::Parser;
use std::process::ExitCode;
use textnorm_cli::app;
use textnorm_cli::args::EncodingArgs;
use textnorm_cli::config::AppConfig;
use textnorm_cli::logging;
use textnorm_engine::normalizer::EncodingNormalizer;

fn main() -> ExitCode {
    let args = EncodingArgs::parse();
    logging::init(args.common.log_level());

    match AppConfig::try_from(&args) {
        Ok(config) => app::execute("convert_encoding", &config, &EncodingNormalizer),
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            ExitCode::FAILURE
        }
    }
}
