//! Host serial protocol
//!
//! This crate defines the line-delimited JSON protocol between the dryer
//! and a host (desktop GUI or script). Each message is one JSON object
//! terminated by `\n`.
//!
//! # Protocol Overview
//!
//! ```text
//! host  → dryer   {"preset":"PLA","status":"RUN"}\n
//! dryer → host    {"currentAirTemp":48.2,...,"status":"RUNNING",...}\n   (every second)
//! dryer → host    {"error":"bed_temp_out_of_range"}\n                   (on rejection)
//! ```
//!
//! Inbound keys are all optional. A present key overwrites the matching
//! process field; an absent key leaves it alone. A message that fails to
//! parse or validate is rejected whole.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod error;
pub mod line;
pub mod telemetry;

pub use command::{decode_command, normalize_literals, HostCommand};
pub use error::{DecodeError, EncodeError, LineError, ProtocolError, ValidationError};
pub use line::{Line, LineParser, MAX_LINE_LEN};
pub use telemetry::{encode_error, encode_status, ErrorReport, StatusReport, MAX_OUTBOUND_LEN};
