// Entrypoint for the `gist` CLI.
// - Keeps `main` small: parse arguments, wire the real collaborators into
//   the create flow and report failures with an `Error:` prefix.

use clap::Parser;
use gist_cli::api::GistClient;
use gist_cli::cli::Cli;
use gist_cli::config::default_candidates;
use gist_cli::create;
use gist_cli::ui::TerminalPrompt;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let args = create::CreateArgs::from(cli.command);
    let stdout = std::io::stdout();

    create::run(
        &args,
        &default_candidates(),
        &mut TerminalPrompt,
        GistClient::from_env,
        &mut stdout.lock(),
    )?;
    Ok(())
}
