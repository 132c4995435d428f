use clap::Subcommand;

mod adobe;
mod kobo;

pub use adobe::{AuthorizeCommand, FulfillCommand, ResetCommand, StatusCommand, StripCommand};
pub use kobo::KoboCommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Activate this device with the Adobe Content Server.
    Authorize(AuthorizeCommand),

    /// Show the current authorization state.
    Status(StatusCommand),

    /// Delete the stored authorization (books already fulfilled to it
    /// become undecryptable).
    Reset(ResetCommand),

    /// Redeem an `.acsm` voucher: download the book and strip its DRM.
    Fulfill(FulfillCommand),

    /// Strip Adept DRM from an already-downloaded EPUB or PDF.
    Strip(StripCommand),

    /// Work with the local Kobo Desktop library.
    #[command(subcommand)]
    Kobo(KoboCommand),
}
