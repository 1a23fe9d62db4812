use clap::Parser;
use lookin_docs::{config, docs, generate, output, sources};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lookin-docs")]
#[command(about = "Regenerate the LookIn architecture docs")]
#[command(long_about = "\
Regenerate the LookIn architecture docs

Reads whatever sources are available and writes one markdown file per
document. Missing sources fall back to built-in content, field by field.

Sources (paths configurable in ./lookin.toml):

  catalogs/*.json            Warehouse table catalogs (description, columns)
  ../johanna/config.yaml     Chat service settings (version, port, engine, author)
  ../jiramntr/               Main project, for catalog and template counts

Output:

  docs/<name>.md             One file per document, rewritten on every run

Set RUST_LOG=debug to see which sources were found.")]
#[command(version)]
struct Cli {
    /// List the documents that would be generated, without writing anything
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let root = std::env::current_dir()?;
    let config = config::load_config(&root)?;
    let registry = docs::registry();

    if cli.list {
        output::print_list_output(registry, &config.paths.output);
        return Ok(());
    }

    let paths = config.paths.resolve(&root);
    let sources = sources::load_sources(&paths)?;

    output::print_generate_header(registry.len(), &config.paths.output);
    let report = generate::generate(registry, &sources, &paths.output)?;
    output::print_generate_output(&report);
    report.ensure_complete()?;

    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
