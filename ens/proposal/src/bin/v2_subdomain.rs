//! Builds the proposal that creates `v2deployments.uniswap.eth` and writes the
//! v2 deployment addresses of every chain onto it as text records.
//!
//! The descriptor is printed as JSON for the simulation pipeline. All inputs
//! default to the built-in literals; a TOML file given with `--config`, and
//! `ENS_PROPOSAL__*` environment variables, override them:
//!
//! ```plain
//! ENS_PROPOSAL__PROPOSAL__LABEL=v3deployments v2-subdomain --output proposal.json
//! ```

use {
    anyhow::Context,
    clap::Parser,
    config_parser::parse_config,
    ens_proposal::{Config, ProposalBuilder, render_descriptor},
    std::{fs, path::PathBuf},
    tracing::metadata::LevelFilter,
};

const ENV_PREFIX: &str = "ENS_PROPOSAL";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// TOML file overriding the built-in proposal literals
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the descriptor here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level, overriding the config [default: info]
    #[arg(long)]
    log_level: Option<String>,

    /// Add the governor `propose` calldata to the output as `proposeCalldata`
    #[arg(long)]
    propose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: Config = parse_config(cli.config.as_deref(), ENV_PREFIX)?;

    let log_level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_max_level(log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    let proposal = ProposalBuilder::from_config(&cfg.proposal)?.build()?;

    let json = render_descriptor(&proposal.descriptor, cli.propose)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote proposal descriptor");
        },
        None => println!("{json}"),
    }

    Ok(())
}
