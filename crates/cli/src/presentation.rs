// crates/cli/src/presentation.rs
use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use textnorm_engine::Event;
use textnorm_engine::options::OutputFormat;
use textnorm_engine::report::{FileReport, Outcome, RunSummary};

pub fn print_banner(tool: &str, root: &Path, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("[{tool}] Scanning directory: {} ...", root.display());
    }
}

pub fn print_event(event: &Event<'_>, format: OutputFormat) {
    match format_event(event, format) {
        Ok(Some(line)) => println!("{line}"),
        Ok(None) => {}
        Err(e) => log::error!("failed to format status line: {e}"),
    }
}

pub fn print_summary(tool: &str, summary: &RunSummary, format: OutputFormat) {
    match format_summary(tool, summary, format) {
        Ok(line) => println!("{line}"),
        Err(e) => log::error!("failed to format summary: {e}"),
    }
}

/// Status line for one file, or `None` when the text format stays quiet about it.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_event(event: &Event<'_>, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(text_event(event)),
        OutputFormat::Jsonl => jsonl_event(event).map(Some),
    }
}

fn text_event(event: &Event<'_>) -> Option<String> {
    match event {
        Event::Processed(report) => text_report(report),
        Event::Failed(path, err) => Some(format!("[error] {}: {err}", path.display())),
    }
}

fn text_report(report: &FileReport) -> Option<String> {
    let path = report.path.display();
    let dry = if report.dry_run { " (dry-run)" } else { "" };
    match report.outcome {
        Outcome::Rewritten => Some(match (report.line_breaks, report.encoding) {
            (Some(n), _) => format!("[fixed]{dry} {path} ({n} line breaks)"),
            (None, Some(enc)) => format!("[converted]{dry} {enc} -> utf-8-bom: {path}"),
            (None, None) => format!("[converted]{dry} {path}"),
        }),
        Outcome::Undecodable => Some(format!("[skipped] cannot detect encoding: {path}")),
        Outcome::Unchanged | Outcome::AlreadyNormalized => None,
    }
}

fn jsonl_event(event: &Event<'_>) -> Result<String> {
    let value = match event {
        Event::Processed(report) => {
            let mut v = serde_json::to_value(report)?;
            if let Some(obj) = v.as_object_mut() {
                obj.insert("type".to_string(), "file".into());
            }
            v
        }
        Event::Failed(path, err) => serde_json::json!({
            "type": "error",
            "path": path,
            "message": err.to_string(),
        }),
    };
    Ok(serde_json::to_string(&value)?)
}

/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_summary(tool: &str, summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "[{tool}] Done. Scanned {} files: {} rewritten, {} unchanged, {} undecodable, {} failed.",
            summary.scanned,
            summary.rewritten,
            summary.unchanged,
            summary.undecodable,
            summary.failed
        )),
        OutputFormat::Jsonl => {
            let mut v = serde_json::to_value(summary)?;
            if let Some(obj) = v.as_object_mut() {
                obj.insert("type".to_string(), "total".into());
                obj.insert("tool".to_string(), tool.into());
                obj.insert("version".to_string(), crate::VERSION.into());
            }
            Ok(serde_json::to_string(&v)?)
        }
    }
}

/// Block until a line (or EOF) arrives on stdin.
///
/// # Errors
/// Returns an error if stdout cannot be flushed or stdin cannot be read.
pub fn wait_for_enter() -> Result<()> {
    print!("Press Enter to exit...");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
