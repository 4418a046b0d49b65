//! Host UART transmit task

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use dryer_protocol::{encode_error, encode_status, MAX_OUTBOUND_LEN};

use crate::channels::{Outbound, OUTBOUND};

#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    let mut buf = [0u8; MAX_OUTBOUND_LEN];

    loop {
        let message = OUTBOUND.receive().await;
        let encoded = match message {
            Outbound::Status(report) => encode_status(&report, &mut buf),
            Outbound::Error(error) => encode_error(error, &mut buf),
        };

        match encoded {
            Ok(len) => {
                if let Err(e) = tx.write_all(&buf[..len]).await {
                    warn!("Failed to send line: {:?}", e);
                }
            }
            Err(e) => warn!("Failed to encode line: {:?}", e),
        }
    }
}
