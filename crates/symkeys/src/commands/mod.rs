pub(crate) mod build;
pub(crate) mod completions;
pub(crate) mod render;

use anyhow::Result;
use symkeys_config as cli;

pub(crate) fn dispatch(cli: cli::Cli, config: &cli::TomlConfig) -> Result<()> {
    match cli.command {
        cli::Commands::Build(args) => build::handle(&args, &config.build),
        cli::Commands::Render(args) => render::handle(&args, &config.render),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}
