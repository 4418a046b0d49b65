//! Inter-task communication channels
//!
//! The control loop owns the process. The serial tasks only talk to it
//! through these channels.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use dryer_core::control::StateOverride;
use dryer_protocol::{ProtocolError, StatusReport};

/// Channel capacity for decoded host commands
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Channel capacity for outbound lines
const OUTBOUND_CHANNEL_SIZE: usize = 4;

/// One line queued for the host
#[derive(Debug, Clone, Copy)]
pub enum Outbound {
    Status(StatusReport),
    Error(ProtocolError),
}

/// Validated host commands, drained by the control loop on the input gate
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, StateOverride, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Telemetry and rejection notices for the serial TX task
pub static OUTBOUND: Channel<CriticalSectionRawMutex, Outbound, OUTBOUND_CHANNEL_SIZE> =
    Channel::new();
