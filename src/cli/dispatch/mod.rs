//! Command-line argument dispatch.
//!
//! Maps validated CLI arguments to the action to run, building the explicit
//! configuration values (such as the administrator secret) that the server
//! receives instead of reading the environment on its own.

use crate::admin::AdminConfig;
use crate::api;
use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::admin;
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if an argument is present but invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let admin_opts = admin::Options::parse(matches)?;

    let frontend_origin = admin_opts
        .frontend_origin
        .as_deref()
        .map(api::frontend_origin)
        .transpose()
        .context("invalid STOREFRONT_ADMIN_FRONTEND_ORIGIN")?;

    Ok(Action::Server(Args {
        port,
        admin: AdminConfig::new(admin_opts.password),
        frontend_origin,
    }))
}
