use clap::Parser;
use kua::config::Cli;
use kua::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    kua::commands::search::run(&config)?;

    Ok(())
}

/// `-v` raises the default level to info; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
