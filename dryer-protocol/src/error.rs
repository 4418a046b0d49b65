//! Protocol errors
//!
//! Every error has a stable snake_case `kind` that is sent back to the
//! host as `{"error":"<kind>"}`.

/// Line framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line longer than the buffer; discarded up to the next newline
    Overflow,
    /// Line is not valid UTF-8
    InvalidUtf8,
}

/// JSON decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Not a JSON object of the expected shape
    Malformed,
    /// `preset` is not a known preset name
    UnknownPreset,
    /// `status` is not a known status name
    UnknownStatus,
}

/// Bounds violations on safety-relevant fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    AirTempOutOfRange,
    BedTempOutOfRange,
    DryTimerOutOfRange,
    /// NaN or infinite temperature
    NotFinite,
}

/// Outbound encode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    BufferTooSmall,
}

/// Any inbound rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    Line(LineError),
    Decode(DecodeError),
    Validation(ValidationError),
}

impl ProtocolError {
    /// Wire name of the error
    pub const fn kind(&self) -> &'static str {
        match self {
            ProtocolError::Line(LineError::Overflow) => "overflow",
            ProtocolError::Line(LineError::InvalidUtf8) => "invalid_utf8",
            ProtocolError::Decode(DecodeError::Malformed) => "malformed",
            ProtocolError::Decode(DecodeError::UnknownPreset) => "unknown_preset",
            ProtocolError::Decode(DecodeError::UnknownStatus) => "unknown_status",
            ProtocolError::Validation(ValidationError::AirTempOutOfRange) => {
                "air_temp_out_of_range"
            }
            ProtocolError::Validation(ValidationError::BedTempOutOfRange) => {
                "bed_temp_out_of_range"
            }
            ProtocolError::Validation(ValidationError::DryTimerOutOfRange) => {
                "dry_timer_out_of_range"
            }
            ProtocolError::Validation(ValidationError::NotFinite) => "not_finite",
        }
    }
}

impl From<LineError> for ProtocolError {
    fn from(e: LineError) -> Self {
        ProtocolError::Line(e)
    }
}

impl From<DecodeError> for ProtocolError {
    fn from(e: DecodeError) -> Self {
        ProtocolError::Decode(e)
    }
}

impl From<ValidationError> for ProtocolError {
    fn from(e: ValidationError) -> Self {
        ProtocolError::Validation(e)
    }
}
