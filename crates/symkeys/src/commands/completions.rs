use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use symkeys_config as cli;

pub(crate) fn handle(args: cli::CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut std::io::stdout())
}

fn write_completions(shell: cli::Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(clap_shell(shell), &mut cmd, name, out);
    Ok(())
}

fn clap_shell(shell: cli::Shell) -> clap_complete::Shell {
    match shell {
        cli::Shell::Bash => clap_complete::Shell::Bash,
        cli::Shell::Elvish => clap_complete::Shell::Elvish,
        cli::Shell::Fish => clap_complete::Shell::Fish,
        cli::Shell::Powershell => clap_complete::Shell::PowerShell,
        cli::Shell::Zsh => clap_complete::Shell::Zsh,
    }
}
