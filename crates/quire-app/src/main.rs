mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "quire=info";

/// A bare level applies to every `quire*` target (filter targets match by
/// prefix); anything else is taken as a filter directive.
fn log_directive(level: Option<&str>) -> String {
    match level {
        None => DEFAULT_LOG_DIRECTIVE.to_string(),
        Some(level @ ("trace" | "debug" | "info" | "warn" | "error")) => format!("quire={level}"),
        Some(directive) => directive.to_string(),
    }
}

fn init_logging(level: Option<&str>) {
    let mut filter = EnvFilter::from_default_env();
    for directive in log_directive(level).split(',') {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("ignoring log directive '{directive}': {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!("Quire v{} starting", env!("CARGO_PKG_VERSION"));

    let result = commands::Context::from_args(&args).and_then(|mut ctx| {
        let stdout = std::io::stdout();
        commands::run(&args.command, &mut ctx, &mut stdout.lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("quire: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_targets_quire() {
        assert_eq!(log_directive(None), "quire=info");
    }

    #[test]
    fn bare_level_targets_quire() {
        assert_eq!(log_directive(Some("debug")), "quire=debug");
    }

    #[test]
    fn custom_directive_passes_through() {
        assert_eq!(log_directive(Some("quire_config=trace")), "quire_config=trace");
    }
}
