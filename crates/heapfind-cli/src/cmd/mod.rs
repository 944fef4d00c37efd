/// Command module for the `heapfind` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input text and parsed arguments and returns `Ok(())` on
/// success or a [`crate::error::CliError`] on failure.
pub mod components;
pub mod connected;
pub mod sort;
