//! Host UART receive task
//!
//! Splits incoming bytes into lines and decodes each one. Accepted
//! commands go to the control loop; rejections go straight back to the
//! host as an error line.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use dryer_protocol::{decode_command, LineParser, ProtocolError};

use crate::channels::{Outbound, COMMAND_CHANNEL, OUTBOUND};
use crate::config::DRYER_CONFIG;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut parser = LineParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                let mut bytes = &buf[..n];
                while !bytes.is_empty() {
                    let (result, used) = parser.feed_bytes(bytes);
                    bytes = &bytes[used..];
                    match result {
                        Ok(Some(line)) => handle_line(&line),
                        Ok(None) => {}
                        Err(e) => reject(e.into()),
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}, dropping {} buffered bytes", e, parser.pending());
                parser.reset();
            }
        }
    }
}

fn handle_line(line: &str) {
    match decode_command(line, &DRYER_CONFIG.limits) {
        Ok(ov) => {
            if COMMAND_CHANNEL.try_send(ov).is_err() {
                warn!("Command channel full, dropping command");
            }
        }
        Err(e) => reject(e),
    }
}

fn reject(error: ProtocolError) {
    warn!("Rejected host line: {}", error.kind());
    if OUTBOUND.try_send(Outbound::Error(error)).is_err() {
        warn!("Outbound channel full, dropping error");
    }
}
