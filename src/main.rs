//! navfix - regenerate the EPUB navigation fixture corpus

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use navfix::{Catalog, GeneratorConfig, generate, verify_archive};

#[derive(Parser)]
#[command(name = "navfix")]
#[command(version, about = "Regenerate the EPUB navigation fixture corpus", long_about = None)]
#[command(after_help = "Fixtures are written to tests/ebooks/fixtures/<name>/ and <name>.epub.
Set RUST_LOG=debug to trace every archive entry.")]
struct Cli {
    /// Re-open every archive after writing and check it against its source tree
    #[arg(long)]
    verify: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = Catalog::standard();
    let config = GeneratorConfig::default();

    match run(&catalog, &config, cli.verify) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(catalog: &Catalog, config: &GeneratorConfig, verify: bool) -> navfix::Result<()> {
    let generated = generate(catalog, config)?;

    if verify {
        for (output, fixture) in generated.iter().zip(catalog) {
            let report = verify_archive(&output.archive, fixture.tree())?;
            info!(fixture = output.name, entries = report.entries.len(), "verified archive");
        }
    }

    info!(
        fixtures = generated.len(),
        root = %config.fixtures_root().display(),
        "fixture corpus ready"
    );
    Ok(())
}
