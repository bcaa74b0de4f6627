// The `create` command: load config, make sure a token exists, read the
// file, publish it and print the URL. Every collaborator is passed in so
// the flow can be driven from tests.

use crate::api::{Snippet, SnippetPublisher, SnippetRequest};
use crate::config::ConfigFile;
use crate::error::UsageError;
use crate::ui::{provision_token, spinner, TokenProvider};
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments of `gist create`.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub files: Vec<PathBuf>,
    pub public: bool,
    pub description: Option<String>,
}

/// Run the command. `connect` builds an authenticated publisher from the
/// token; it is only called once the file has been read.
pub fn run<P, F, W>(
    args: &CreateArgs,
    config_paths: &[PathBuf],
    tokens: &mut dyn TokenProvider,
    connect: F,
    out: &mut W,
) -> Result<Snippet>
where
    P: SnippetPublisher,
    F: FnOnce(&str) -> Result<P>,
    W: Write,
{
    let path = match args.files.as_slice() {
        [path] => path,
        _ => return Err(UsageError.into()),
    };

    let mut config = ConfigFile::load_or_create(config_paths)?;
    let token = provision_token(&mut config, tokens)?;

    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("read {} bytes from {}", content.len(), path.display());

    let req = SnippetRequest {
        filename: snippet_name(path),
        content,
        public: args.public,
        description: args.description.clone(),
    };

    let publisher = connect(&token)?;
    let pb = spinner("Creating gist...");
    let result = publisher.create_snippet(&req);
    pb.finish_and_clear();
    let gist = result?;

    writeln!(out, "{}", gist.html_url)?;
    Ok(gist)
}

/// Name the snippet after the last path component of the input.
fn snippet_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(String::from)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_name_uses_file_name() {
        assert_eq!(snippet_name(Path::new("src/main.rs")), "main.rs");
        assert_eq!(snippet_name(Path::new("notes.txt")), "notes.txt");
        assert_eq!(snippet_name(Path::new("..")), "..");
    }
}
