use clap::Parser;
use shipcheck::{
    audit, Cli, JsonReporter, OutputFormat, Reporter, ScanReport, TerminalReporter,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SHIPCHECK_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = match audit::run(&cli.path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };

    let rendered = match cli.format {
        OutputFormat::Json => JsonReporter::new().report(&report),
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(&report),
    };
    let output = match rendered {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };
    println!("{output}");

    exit_code(&report, cli.strict)
}

/// Go passes; Conditional Go passes unless strict; No-Go always fails.
fn exit_code(report: &ScanReport, strict: bool) -> ExitCode {
    match report.score.verdict {
        "Go" => ExitCode::SUCCESS,
        "Conditional Go" if !strict => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
