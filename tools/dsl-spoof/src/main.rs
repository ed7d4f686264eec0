//! # DSL Status Spoof Broadcaster
//!
//! Encrypts captured sample status bodies under a key derived from the
//! given MAC address and broadcasts them on the status port. Useful for
//! exercising listeners without a modem on the network.
//!
//! ## Usage
//!
//! ```bash
//! dsl-spoof aa:bb:cc:dd:ee:ff
//! dsl-spoof aa:bb:cc:dd:ee:ff --target 192.168.1.50:4944 --interval 2 --count 5
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::UdpSocket;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dsl_status_core::{derive_key, encode_datagram, wire, HardwareAddress, BODY_LEN};

/// Captured VDSL status bodies (112 bytes each, already decrypted), taken
/// from a Vigor 2862 in SHOWTIME state.
const SAMPLE_BODIES: [&str; 5] = [
    "0130d71004624c98000000006163ef60617667a0617667a00000000600000000000000030000000360430e8c0083\
     d60131322d332d322d332d302d3500ffffff6032c88831374100609400006093c5b0617867a0616453484f575449\
     4d450000617667a00022ea980000000761990000",
    "0130d71004624c98000000006163ef60617667a0617667a00000000600000000000000030000000360430e8c6163\
     1d6431322d332d322d332d302d3500ffffff6032c88831374100609400006093c5b0617867a0616453484f575449\
     4d450000617667a00022eaa20000000761990000",
    "0130d71004624c986152fa6000000001617667a0617667a00000000600000000000000030000000360430e8cffff\
     fffe31322d332d322d332d302d350000fc036032c92c31374100609400006093c5b0617867a0616453484f575449\
     4d450000617667a00022eaac0000000761990000",
    "0130d71004624c98000000006163ef60617667a0617667a000000006000000000000000300000003616800000000\
     000031322d332d322d332d302d35000000010000000531374100609c2800609c2800609c2800ffff53484f575449\
     4d4500006152fa60fffffffc0002000018800003",
    "0130d71004624c980008bab000000000617667a0617667a00000000600000000000000030000000360430e8c0083\
     d60131322d332d322d332d302d3500ffffff6032c88831374100609400006093c5b0617867a0616453484f575449\
     4d450000617667a00022eac00000000761990000",
];

/// Broadcast spoofed DrayTek Vigor DSL status datagrams.
#[derive(Debug, Parser)]
#[command(name = "dsl-spoof", version)]
struct Args {
    /// MAC address to derive the encryption key from, e.g. aa:bb:cc:dd:ee:ff
    mac: HardwareAddress,

    /// Destination address for the datagrams
    #[arg(long, default_value = "255.255.255.255:4944")]
    target: SocketAddr,

    /// Seconds to wait between datagrams
    #[arg(long, default_value_t = 10)]
    interval: u64,

    /// Number of datagrams to send (0 = repeat forever)
    #[arg(long, default_value_t = 0)]
    count: usize,
}

fn sample_body(hex_body: &str) -> Result<[u8; BODY_LEN]> {
    let bytes = hex::decode(hex_body).context("Sample body is not valid hex")?;
    let body: [u8; BODY_LEN] = bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("Sample body is {} bytes, not {BODY_LEN}", bytes.len()))?;
    Ok(body)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let key = derive_key(&args.mac);

    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .context("Failed to bind UDP socket")?;
    socket
        .set_broadcast(true)
        .context("Failed to enable broadcast")?;

    info!(
        mac = %args.mac,
        target = %args.target,
        "Sending spoofed DSL status broadcasts"
    );

    let mut sent = 0usize;
    'outer: loop {
        for hex_body in SAMPLE_BODIES {
            let status = wire::parse_body(&sample_body(hex_body)?);
            let datagram = encode_datagram(&key, &status);

            socket
                .send_to(&datagram, args.target)
                .await
                .context("Failed to send datagram")?;
            sent += 1;
            info!(
                sent,
                state = %status.state(),
                "Sent DSL status sample"
            );

            if args.count != 0 && sent >= args.count {
                break 'outer;
            }
            tokio::time::sleep(Duration::from_secs(args.interval)).await;
        }
    }

    Ok(())
}
