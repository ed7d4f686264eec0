//! # DSL Status Listener
//!
//! Binds a UDP socket on the modem's broadcast port and decodes every
//! status datagram it receives. Datagrams are fed to the decode pipeline
//! one at a time, in arrival order; anything the pipeline rejects is logged
//! and skipped.
//!
//! ## Usage
//!
//! ```bash
//! dsl-status-listener aa:bb:cc:dd:ee:ff
//! dsl-status-listener aa:bb:cc:dd:ee:ff --json
//! RUST_LOG=debug dsl-status-listener aa:bb:cc:dd:ee:ff --verbose
//! ```
//!
//! The MAC address is the modem's own hardware address; it determines the
//! decryption key, so a wrong address makes every datagram fail the
//! discriminant check.

mod render;

use std::net::Ipv4Addr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use dsl_status_core::{decode_datagram, derive_key, DecodeError, HardwareAddress};

use crate::render::RenderOptions;

/// Default broadcast port used by the modems.
const DEFAULT_PORT: u16 = 4944;

/// Receive buffer size. Larger than a status datagram so oversized foreign
/// traffic is observed at its true length instead of truncated to 116.
const RECV_BUFFER_LEN: usize = 2048;

/// Listen for and decode DrayTek Vigor DSL status broadcasts.
#[derive(Debug, Parser)]
#[command(name = "dsl-status-listener", version)]
struct Args {
    /// MAC address of the modem, e.g. aa:bb:cc:dd:ee:ff
    mac: HardwareAddress,

    /// UDP port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Emit one JSON object per decoded record
    #[arg(long)]
    json: bool,

    /// Show technology-specific fields for both line types
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let key = derive_key(&args.mac);
    debug!(
        mac = %args.mac,
        key_iv = %hex::encode(key.as_bytes()),
        "Derived decryption key/IV"
    );

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, args.port))
        .await
        .with_context(|| format!("Failed to bind UDP port {}", args.port))?;
    info!(
        port = args.port,
        mac = %args.mac,
        "Listening for DSL status broadcasts. Press Ctrl+C to stop."
    );

    let options = RenderOptions {
        json: args.json,
        verbose: args.verbose,
    };

    let mut buffer = [0u8; RECV_BUFFER_LEN];
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                return Ok(());
            }
            received = socket.recv_from(&mut buffer) => {
                let (length, peer) = received.context("UDP receive failed")?;
                match decode_datagram(&key, &buffer[..length]) {
                    Ok((dsl_type, status)) => {
                        info!(%peer, %dsl_type, "Decoded DSL status broadcast");
                        println!("{}\n", render::render(dsl_type, &status, &options));
                    }
                    Err(DecodeError::BadLength { actual, .. }) => {
                        debug!(%peer, length = actual, "Ignoring datagram of wrong length");
                    }
                    Err(DecodeError::ProtocolMismatch) => {
                        debug!(%peer, "Ignoring datagram without protocol signature");
                    }
                    Err(error @ DecodeError::UnknownDslType(_)) => {
                        warn!(%peer, %error, "Discarding datagram");
                    }
                }
            }
        }
    }
}
