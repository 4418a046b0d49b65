//! Control loop task
//!
//! Ticks the loop at the input cadence, the fastest gate. Slower gates
//! open inside `DryerLoop::step`.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use crate::config::DRYER_CONFIG;
use crate::controller::DryerLoop;

#[embassy_executor::task]
pub async fn control_task(mut dryer: DryerLoop) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_millis(DRYER_CONFIG.cadence.input_ms as u64));

    loop {
        ticker.next().await;
        // Wraps after ~49 days; the gates use wrapping arithmetic
        let now_ms = Instant::now().as_millis() as u32;
        dryer.step(now_ms);
    }
}
