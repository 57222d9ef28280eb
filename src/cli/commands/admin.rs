use clap::{Arg, ArgMatches, Command};

pub const ARG_ADMIN_PASSWORD: &str = "admin-password";
pub const ARG_FRONTEND_ORIGIN: &str = "frontend-origin";

#[derive(Clone, Default)]
pub struct Options {
    pub password: Option<String>,
    pub frontend_origin: Option<String>,
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("frontend_origin", &self.frontend_origin)
            .finish()
    }
}

impl Options {
    /// Parse admin arguments from matches.
    ///
    /// A missing password is not an error here: the service still starts and
    /// answers every admin check with a configuration error.
    ///
    /// # Errors
    /// Returns an error if the frontend origin is present but blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let password = matches.get_one::<String>(ARG_ADMIN_PASSWORD).cloned();

        let frontend_origin = match matches.get_one::<String>(ARG_FRONTEND_ORIGIN) {
            Some(origin) if origin.trim().is_empty() => {
                return Err(anyhow::anyhow!(
                    "invalid argument: --{ARG_FRONTEND_ORIGIN} must not be empty"
                ));
            }
            origin => origin.map(|origin| origin.trim().to_string()),
        };

        Ok(Self {
            password,
            frontend_origin,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ADMIN_PASSWORD)
                .long(ARG_ADMIN_PASSWORD)
                .help("Administrator password checked by POST /api/admin/auth")
                .long_help(
                    "Administrator password checked by POST /api/admin/auth. Prefer the environment variable over the flag so the secret does not show up in process listings.",
                )
                .env("STOREFRONT_ADMIN_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_FRONTEND_ORIGIN)
                .long(ARG_FRONTEND_ORIGIN)
                .help("Storefront URL allowed to call the API cross-origin")
                .env("STOREFRONT_ADMIN_FRONTEND_ORIGIN"),
        )
}
