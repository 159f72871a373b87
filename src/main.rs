use std::io::{self, Write};

use benchtab::config::ReportConfig;
use benchtab::io::SampleReader;
use benchtab::report::{ReportBuilder, TableRenderer, TabledRenderer};
use benchtab::{error, Result};
use tracing_subscriber::EnvFilter;

fn run() -> Result<()> {
    let config = ReportConfig::load()?;
    let reader = SampleReader::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let table = ReportBuilder::new(&config).build(&reader, &mut out)?;
    let rendered = TabledRenderer::new(config.style).render(&table);
    writeln!(out, "{}", rendered)?;

    Ok(())
}

fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benchtab=warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "report generation failed");
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}
