// UI layer: the terminal interactions of the CLI. Asking for a token goes
// through the `TokenProvider` trait so the create flow can run without a
// real console.

use crate::config::ConfigFile;
use anyhow::{bail, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

pub const TOKEN_HELP: &str = "This command needs GitHub Personal API token";
pub const TOKEN_URL: &str = "https://github.com/settings/tokens";

/// Source of a GitHub token when none is configured yet.
pub trait TokenProvider {
    fn provide_token(&mut self) -> Result<String>;
}

/// Prompts on the terminal with `dialoguer`.
#[derive(Default)]
pub struct TerminalPrompt;

impl TokenProvider for TerminalPrompt {
    fn provide_token(&mut self) -> Result<String> {
        // stdout carries only the gist URL.
        eprintln!("{}", TOKEN_HELP);
        eprintln!("Generate token from here: {}", TOKEN_URL);
        let token: String = Input::new()
            .with_prompt("Input Token")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Token must not be blank")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(token)
    }
}

/// Return the configured token, asking `provider` once and persisting the
/// answer when the config has none.
pub fn provision_token(config: &mut ConfigFile, provider: &mut dyn TokenProvider) -> Result<String> {
    if !config.token().is_empty() {
        return Ok(config.token().to_string());
    }
    let token = provider.provide_token()?.trim().to_string();
    if token.is_empty() {
        bail!("Token must not be blank");
    }
    config.set_token(&token)?;
    debug!("stored token in {}", config.path().display());
    Ok(token)
}

/// Spinner on stderr shown while the remote call is running. It is drawn
/// once and never ticks in the background; indicatif hides it when stderr
/// is not a terminal.
pub fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.tick();
    pb
}
