#![cfg_attr(not(test), deny(clippy::unwrap_used))]

//! Command line interface to build static Pix payment payloads and QR codes.

use anyhow::Context;
use clap::CommandFactory;
use pix_brcode::{payload_to_text_qr, payload_to_uri_qr, verify, PixCode};
use serde_json::Value;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

use crate::args::{CliCommand, RequestArgs};
pub use args::Cli;

mod args;

pub fn inner_main(args: Cli) -> anyhow::Result<Value> {
    let (appender, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(appender)
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => tracing::info!("logging initialized"),
        Err(_) => tracing::debug!("logging already initialized"),
    }

    tracing::info!("CLI initialized with args: {:?}", args);

    Ok(match args.command {
        CliCommand::Encode(a) => {
            let payload = build(&a)?;
            serde_json::json!({ "payload": payload })
        }
        CliCommand::Qr(a) => {
            let payload = build(&a.request)?;
            let qr = if a.uri {
                payload_to_uri_qr(&payload, a.pixel_per_module)?
            } else {
                payload_to_text_qr(&payload)?
            };
            serde_json::json!({ "payload": payload, "qr": qr })
        }
        CliCommand::Verify { payload } => {
            serde_json::json!({ "valid": verify(&payload) })
        }
        CliCommand::GenerateCompletion { shell } => {
            let mut result = vec![];
            clap_complete::generate(shell, &mut Cli::command(), "pix_cli", &mut result);
            Value::String(String::from_utf8(result)?)
        }
    })
}

fn build(args: &RequestArgs) -> anyhow::Result<String> {
    let mut code = PixCode::new(args.key.as_str(), args.name.as_str(), args.city.as_str())
        .with_reference_label(args.txid.as_str());
    if let Some(amount) = args.amount {
        code = code.with_amount(amount);
    }
    code.payload()
        .with_context(|| format!("cannot encode a payment request to key \"{}\"", args.key))
}
