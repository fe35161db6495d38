use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use pix_brcode::{Amount, UNSPECIFIED_LABEL};

/// Build static Pix payment payloads ("copy and paste" strings) and render
/// them as QR codes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The sub command
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Build the checksummed payload string for a payment request
    Encode(RequestArgs),

    /// Build a payment request and render its payload as a QR code
    Qr(QrArgs),

    /// Check the trailing checksum of an existing payload
    Verify {
        /// The payload to check
        payload: String,
    },

    #[clap(hide = true)]
    GenerateCompletion { shell: Shell },
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// The receiving Pix key, sent verbatim (phone number, tax id, email or random key)
    #[arg(long)]
    pub key: String,

    /// Beneficiary name shown by the payer app, truncated to 25 characters
    #[arg(long)]
    pub name: String,

    /// Beneficiary city, truncated to 15 characters
    #[arg(long)]
    pub city: String,

    /// Amount in BRL with at most two decimals, e.g. 12.50; when omitted the payer types one
    #[arg(long)]
    pub amount: Option<Amount>,

    /// Reference label for reconciliation, truncated to 25 characters
    #[arg(long, default_value = UNSPECIFIED_LABEL)]
    pub txid: String,
}

#[derive(Debug, Args)]
pub struct QrArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Emit a base64 bmp data uri instead of the terminal rendering
    #[arg(long)]
    pub uri: bool,

    /// Pixels per QR module in the bmp rendering, adds a one module white border
    #[arg(long, requires = "uri")]
    pub pixel_per_module: Option<u8>,
}
