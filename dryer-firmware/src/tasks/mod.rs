//! Embassy async tasks
//!
//! The control loop runs in one task; the serial tasks feed it and drain
//! its output through channels.

pub mod control;
pub mod serial_rx;
pub mod serial_tx;

pub use control::control_task;
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
