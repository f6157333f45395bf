use anyhow::Context;
use scov_cli::{command, logging, run_compare, run_coverage, run_parsers, Overrides, ScovConfig};
use std::io::Write;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = command().get_matches();
    let config_path = matches.get_one::<PathBuf>("config").cloned();

    let (name, args) = matches
        .subcommand()
        .context("a subcommand is required")?;

    let config = ScovConfig::load(config_path.as_deref())
        .context("failed to load configuration")?
        .apply_env()
        .context("invalid SCOV_* environment")?;
    let config = Overrides::from_matches(args).apply(config);

    logging::init(&config.log)?;
    tracing::debug!(?config, "resolved configuration");

    let path = |id: &str| -> anyhow::Result<PathBuf> {
        args.get_one::<PathBuf>(id)
            .cloned()
            .with_context(|| format!("missing <{id}> argument"))
    };

    let outcome = match name {
        "compare" => run_compare(&path("source")?, &path("qa")?, &config).await?,
        "coverage" => run_coverage(&path("source")?, &path("qa")?, &config).await?,
        "parsers" => run_parsers(),
        other => anyhow::bail!("unknown subcommand: {other}"),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(outcome.output.as_bytes())?;
    stdout.flush()?;
    drop(stdout);

    if outcome.exit_code != 0 {
        std::process::exit(outcome.exit_code);
    }
    Ok(())
}
