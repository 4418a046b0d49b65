//! Digital input traits

/// Trait for a momentary switch
///
/// Implementations hide the electrical polarity; `is_active` is true
/// while the button is held.
pub trait SwitchInput {
    fn is_active(&mut self) -> bool;
}
