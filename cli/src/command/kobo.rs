use crate::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use unbind::kobo::{self, KoboLibrary};

#[derive(Debug, Subcommand)]
pub enum KoboCommand {
    /// List the books in the Kobo Desktop library.
    List(KoboArgs),

    /// Decrypt every DRM book in the library (or a single title).
    Decrypt(KoboDecryptArgs),
}

impl KoboCommand {
    pub fn run(&self) -> Result<(), CliError> {
        match self {
            KoboCommand::List(args) => list(args),
            KoboCommand::Decrypt(args) => decrypt(args),
        }
    }
}

#[derive(Debug, Args)]
pub struct KoboArgs {
    /// Kobo Desktop Edition directory (the one holding `Kobo.sqlite`).
    #[arg(long)]
    library: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct KoboDecryptArgs {
    #[command(flatten)]
    kobo: KoboArgs,

    /// Only decrypt the book with this exact title.
    #[arg(long)]
    title: Option<String>,

    /// Output directory for decrypted EPUBs.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn open_library(args: &KoboArgs) -> Result<KoboLibrary, CliError> {
    let dir = args
        .library
        .clone()
        .or_else(default_library_dir)
        .ok_or_else(|| {
            CliError::user("no Kobo Desktop directory found; pass one with --library")
        })?;
    Ok(KoboLibrary::open(dir)?)
}

/// Where Kobo Desktop keeps its library on this platform.
fn default_library_dir() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|home| {
            home.join("Library")
                .join("Application Support")
                .join("Kobo")
                .join("Kobo Desktop Edition")
        })
    } else {
        dirs::data_dir().map(|data| data.join("Kobo").join("Kobo Desktop Edition"))
    }
}

fn list(args: &KoboArgs) -> Result<(), CliError> {
    let library = open_library(args)?;

    for book in library.books()? {
        let drm = if book.has_drm { "DRM" } else { "free" };
        let author = book.author.as_deref().unwrap_or("unknown");
        println!("[{drm}] {} — {author}", book.title);
    }
    Ok(())
}

fn decrypt(args: &KoboDecryptArgs) -> Result<(), CliError> {
    let library = open_library(&args.kobo)?;
    let user_keys = library.user_keys()?;

    let mut failures = 0usize;
    for book in library.books()? {
        if args
            .title
            .as_deref()
            .is_some_and(|title| title != book.title)
        {
            continue;
        }

        // A batch keeps going past individual failures; each book is the
        // cancellation boundary.
        match kobo::decrypt_book(&book, &user_keys, &args.output) {
            Ok(output) => println!("{}", output.display()),
            Err(error) => {
                failures += 1;
                eprintln!("error: {error}");
            }
        }
    }

    if failures > 0 {
        Err(CliError::user(format!("{failures} book(s) failed")))
    } else {
        Ok(())
    }
}
