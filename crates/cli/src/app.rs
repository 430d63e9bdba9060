// crates/cli/src/app.rs
use crate::config::AppConfig;
use crate::error::Result;
use crate::presentation;
use std::process::ExitCode;
use textnorm_engine::normalizer::Normalizer;
use textnorm_engine::report::RunSummary;

/// Run one tool end to end and map the outcome to an exit code.
///
/// Per-file problems never fail the process; only an unusable root or a
/// strict-mode abort does.
pub fn execute<N: Normalizer>(tool: &str, app: &AppConfig, normalizer: &N) -> ExitCode {
    let code = match run(tool, app, normalizer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    };

    if app.pause
        && let Err(e) = presentation::wait_for_enter()
    {
        log::debug!("pause interrupted: {e}");
    }
    code
}

fn run<N: Normalizer>(tool: &str, app: &AppConfig, normalizer: &N) -> Result<RunSummary> {
    log::debug!("{tool} config: {:?}", app.engine);
    presentation::print_banner(tool, &app.engine.walk.root, app.format);

    let result = textnorm_engine::run(&app.engine, normalizer, |event| {
        presentation::print_event(&event, app.format);
    })?;

    for (path, err) in &result.errors {
        log::warn!("{}: {err}", path.display());
    }
    presentation::print_summary(tool, &result.summary, app.format);
    Ok(result.summary)
}
