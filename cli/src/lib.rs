use clap::Parser;
use std::path::PathBuf;

pub mod command;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Authorization directory (defaults to `$UNBIND_AUTH_DIR`, then the
    /// platform config directory).
    #[arg(long, global = true)]
    pub auth_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub commands: command::Commands,
}

impl Cli {
    /// The authorization directory this invocation operates on.
    pub fn auth_dir(&self) -> PathBuf {
        self.auth_dir
            .clone()
            .or_else(|| std::env::var_os("UNBIND_AUTH_DIR").map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("unbind")
                    .join(".adobe")
            })
    }
}

/// A failure surfaced to the terminal, tagged with its exit code:
/// `1` for user-visible errors, `2` for internal ones.
#[derive(Debug)]
pub struct CliError {
    message: String,
    internal: bool,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            internal: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            internal: true,
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.internal { 2 } else { 1 }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

macro_rules! user_error {
    ($($error:ty),+ $(,)?) => {$(
        impl From<$error> for CliError {
            fn from(error: $error) -> Self {
                CliError::user(error.to_string())
            }
        }
    )+};
}

user_error!(
    unbind::adept::errors::AuthError,
    unbind::adept::errors::FulfillError,
    unbind::adept::errors::DrmError,
    unbind::adept::errors::StoreError,
    unbind::kobo::KoboError,
    unbind::workflow::WorkflowError,
);

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::internal(error.to_string())
    }
}
