use crate::{Cli, CliError};
use clap::Args;
use std::path::PathBuf;
use unbind::Workflow;
use unbind::adept::{self, AuthMethod, AuthType, HttpTransport, Registration, Store};

#[derive(Debug, Args)]
pub struct AuthorizeCommand {
    /// Adobe ID email; omit for an anonymous activation.
    #[arg(long)]
    email: Option<String>,

    /// Adobe ID password (required with --email).
    #[arg(long, requires = "email")]
    password: Option<String>,
}

impl AuthorizeCommand {
    pub fn run(&self, cli: &Cli) -> Result<(), CliError> {
        let store = Store::new(cli.auth_dir())?;
        if store.is_authorized() {
            println!("already authorized ({})", describe(store.auth_type()));
            return Ok(());
        }

        let method = match (&self.email, &self.password) {
            (Some(email), Some(password)) => AuthMethod::AdobeId {
                email: email.clone(),
                password: password.clone(),
            },
            (Some(_), None) => {
                return Err(CliError::user("--email requires --password"));
            }
            _ => AuthMethod::Anonymous,
        };

        let transport = HttpTransport::new();
        Registration::new(&store, &transport).activate(&method, true)?;
        println!("authorized ({})", describe(store.auth_type()));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub fn run(&self, cli: &Cli) -> Result<(), CliError> {
        let store = Store::new(cli.auth_dir())?;
        println!("authorization directory: {}", store.dir().display());
        println!("authorization: {}", describe(store.auth_type()));
        if let Ok(credentials) = store.credentials() {
            println!("user: {}", credentials.user_uuid);
            if !credentials.username.is_empty() {
                println!("account: {}", credentials.username);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ResetCommand {}

impl ResetCommand {
    pub fn run(&self, cli: &Cli) -> Result<(), CliError> {
        let store = Store::new(cli.auth_dir())?;
        store.reset()?;
        println!("authorization removed");
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct FulfillCommand {
    /// The `.acsm` voucher to redeem.
    acsm: PathBuf,

    /// Output directory for the decrypted book.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Keep the encrypted download next to the output.
    #[arg(long)]
    keep_encrypted: bool,
}

impl FulfillCommand {
    pub fn run(&self, cli: &Cli) -> Result<(), CliError> {
        let store = Store::new(cli.auth_dir())?;
        let transport = HttpTransport::new();

        let output = Workflow::new(&store, &transport)
            .keep_encrypted(self.keep_encrypted)
            .process_acsm(&self.acsm, &self.output)?;
        println!("{}", output.display());
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct StripCommand {
    /// The encrypted EPUB or PDF.
    input: PathBuf,

    /// Where to write the plaintext container.
    output: PathBuf,
}

impl StripCommand {
    pub fn run(&self, cli: &Cli) -> Result<(), CliError> {
        let store = Store::new(cli.auth_dir())?;
        let private_key = store.private_key()?;

        match adept::strip_drm(&self.input, &self.output, &private_key)? {
            adept::Outcome::Decrypted => println!("{}", self.output.display()),
            adept::Outcome::AlreadyPlaintext => {
                println!("{} (input had no DRM)", self.output.display());
            }
        }
        Ok(())
    }
}

fn describe(auth_type: AuthType) -> &'static str {
    match auth_type {
        AuthType::None => "none",
        AuthType::Anonymous => "anonymous",
        AuthType::AdobeId => "AdobeID",
        AuthType::Unknown => "unknown",
    }
}
