//! Material presets
//!
//! A preset bundles the setpoints and drying duration for one filament
//! material. `Manual` has no table entry: it leaves targets as written by
//! the host.

/// Selected preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    /// Targets are set directly and never auto-applied
    #[default]
    Manual,
    /// Stop and clear everything
    Off,
    Pla,
    Petg,
    Tpu,
}

impl Preset {
    /// Wire name of the preset
    pub const fn as_str(self) -> &'static str {
        match self {
            Preset::Manual => "manual",
            Preset::Off => "OFF",
            Preset::Pla => "PLA",
            Preset::Petg => "PET",
            Preset::Tpu => "TPU",
        }
    }

    /// Parse a wire name, exact match
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "manual" => Some(Preset::Manual),
            "OFF" => Some(Preset::Off),
            "PLA" => Some(Preset::Pla),
            "PET" => Some(Preset::Petg),
            "TPU" => Some(Preset::Tpu),
            _ => None,
        }
    }

    /// Table entry for this preset, `None` for `Manual`
    pub fn definition(self) -> Option<&'static PresetDefinition> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == self)
            .map(|(_, def)| def)
    }
}

/// Setpoints applied when a preset starts
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetDefinition {
    pub target_air_temp_c: f32,
    pub target_bed_temp_c: f32,
    pub stepper_enabled: bool,
    pub fan2_enabled: bool,
    /// Dry timer loaded on start (seconds)
    pub dry_duration_s: u32,
}

const EIGHT_HOURS_S: u32 = 8 * 3600;

/// Compiled-in preset table
pub static PRESETS: [(Preset, PresetDefinition); 4] = [
    (
        Preset::Off,
        PresetDefinition {
            target_air_temp_c: 0.0,
            target_bed_temp_c: 0.0,
            stepper_enabled: false,
            fan2_enabled: false,
            dry_duration_s: 0,
        },
    ),
    (
        Preset::Pla,
        PresetDefinition {
            target_air_temp_c: 50.0,
            target_bed_temp_c: 100.0,
            stepper_enabled: true,
            fan2_enabled: true,
            dry_duration_s: EIGHT_HOURS_S,
        },
    ),
    (
        Preset::Petg,
        PresetDefinition {
            target_air_temp_c: 65.0,
            target_bed_temp_c: 110.0,
            stepper_enabled: true,
            fan2_enabled: true,
            dry_duration_s: EIGHT_HOURS_S,
        },
    ),
    (
        Preset::Tpu,
        PresetDefinition {
            target_air_temp_c: 55.0,
            target_bed_temp_c: 110.0,
            stepper_enabled: true,
            fan2_enabled: true,
            dry_duration_s: EIGHT_HOURS_S,
        },
    ),
];

/// Look up a preset by wire name
///
/// Returns `None` for unknown names and for `"manual"`, which has no
/// setpoints of its own.
pub fn resolve(name: &str) -> Option<PresetDefinition> {
    Preset::from_name(name)
        .and_then(Preset::definition)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pla() {
        let def = resolve("PLA").unwrap();
        assert_eq!(def.target_air_temp_c, 50.0);
        assert_eq!(def.target_bed_temp_c, 100.0);
        assert!(def.stepper_enabled);
        assert!(def.fan2_enabled);
        assert_eq!(def.dry_duration_s, 28800);
    }

    #[test]
    fn test_resolve_petg_uses_wire_name() {
        let def = resolve("PET").unwrap();
        assert_eq!(def.target_air_temp_c, 65.0);
        assert_eq!(def.target_bed_temp_c, 110.0);
        assert!(resolve("PETG").is_none());
    }

    #[test]
    fn test_resolve_off_is_all_zero() {
        let def = resolve("OFF").unwrap();
        assert_eq!(def.target_air_temp_c, 0.0);
        assert_eq!(def.target_bed_temp_c, 0.0);
        assert!(!def.stepper_enabled);
        assert!(!def.fan2_enabled);
        assert_eq!(def.dry_duration_s, 0);
    }

    #[test]
    fn test_manual_and_unknown_not_found() {
        assert!(resolve("manual").is_none());
        assert!(resolve("ABS").is_none());
        assert!(resolve("pla").is_none());
    }

    #[test]
    fn test_names_round_trip() {
        for preset in [Preset::Manual, Preset::Off, Preset::Pla, Preset::Petg, Preset::Tpu] {
            assert_eq!(Preset::from_name(preset.as_str()), Some(preset));
        }
    }
}
