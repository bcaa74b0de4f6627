// Library root
// -----------
// The `gist` binary is a thin wrapper around these modules.
//
// Module responsibilities:
// - `api`: HTTP interaction with the GitHub gist endpoint, behind the
//   `SnippetPublisher` trait.
// - `config`: locating, loading and persisting the token config file.
// - `ui`: terminal prompt for the token and the progress spinner.
// - `create`: the `create` command flow tying the pieces together.
// - `cli`: clap definitions for the command line.
pub mod api;
pub mod cli;
pub mod config;
pub mod create;
pub mod error;
pub mod ui;
