//! Rendering of decoded status records.
//!
//! ADSL and VDSL lines report through the same record but only some fields
//! are meaningful for each technology, so the text view shows the
//! ADSL-specific counters for ADSL lines and the SNR fields for VDSL lines.
//! Verbose mode shows everything. JSON mode emits every field plus the
//! trimmed text fields.

use dsl_status_core::{DslStatus, DslType};
use serde_json::json;

/// Rendering configuration, built once from the CLI flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Emit one JSON object per record instead of the text view.
    pub json: bool,
    /// Show technology-specific fields regardless of line type.
    pub verbose: bool,
}

/// Render one accepted record.
pub fn render(dsl_type: DslType, status: &DslStatus, options: &RenderOptions) -> String {
    if options.json {
        render_json(dsl_type, status)
    } else {
        render_text(dsl_type, status, options.verbose)
    }
}

fn render_text(dsl_type: DslType, status: &DslStatus, verbose: bool) -> String {
    let show_adsl = verbose || dsl_type == DslType::Adsl;
    let show_vdsl = verbose || dsl_type == DslType::Vdsl;

    let mut lines = Vec::new();
    lines.push(format!(
        " DSL Upload Speed: {} bps ({} Mbps)",
        status.dsl_upload_speed,
        status.dsl_upload_speed / 1_000_000
    ));
    lines.push(format!(
        " DSL Download Speed: {} bps ({} Mbps)",
        status.dsl_download_speed,
        status.dsl_download_speed / 1_000_000
    ));
    if show_adsl {
        lines.push(format!(" ADSL TX Cells: {}", status.adsl_tx_cells));
        lines.push(format!(" ADSL RX Cells: {}", status.adsl_rx_cells));
        lines.push(format!(" ADSL TX CRC Errors: {}", status.adsl_tx_crc_errors));
        lines.push(format!(" ADSL RX CRC Errors: {}", status.adsl_rx_crc_errors));
    }
    lines.push(format!(" DSL Type: {dsl_type}"));
    lines.push(format!(" Timestamp: {}", status.timestamp));
    if show_vdsl {
        lines.push(format!(" VDSL SNR Upload: {}", status.vdsl_snr_upload));
        lines.push(format!(" VDSL SNR Download: {}", status.vdsl_snr_download));
    }
    if show_adsl {
        lines.push(format!(" ADSL Loop Attenuation: {}", status.adsl_loop_att));
        lines.push(format!(" ADSL SNR Margin: {}", status.adsl_snr_margin));
    }
    lines.push(format!(
        " Modem Firmware Version: {}",
        status.firmware_version()
    ));
    lines.push(format!(" Running Mode: {}", status.running_mode()));
    lines.push(format!(" State: {}", status.state()));
    lines.join("\n")
}

fn render_json(dsl_type: DslType, status: &DslStatus) -> String {
    json!({
        "dsl_type": dsl_type.to_string(),
        "dsl_upload_speed": status.dsl_upload_speed,
        "dsl_download_speed": status.dsl_download_speed,
        "adsl_tx_cells": status.adsl_tx_cells,
        "adsl_rx_cells": status.adsl_rx_cells,
        "adsl_tx_crc_errors": status.adsl_tx_crc_errors,
        "adsl_rx_crc_errors": status.adsl_rx_crc_errors,
        "timestamp": status.timestamp,
        "vdsl_snr_upload": status.vdsl_snr_upload,
        "vdsl_snr_download": status.vdsl_snr_download,
        "adsl_loop_att": status.adsl_loop_att,
        "adsl_snr_margin": status.adsl_snr_margin,
        "modem_firmware_version": status.firmware_version(),
        "running_mode": status.running_mode(),
        "state": status.state(),
    })
    .to_string()
}
