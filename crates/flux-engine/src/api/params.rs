use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The eight force-field laws. Serialized as lowercase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceMode {
    Gravity,
    Repulsion,
    Vortex,
    Wave,
    #[default]
    Flow,
    Attractor,
    Chaos,
    Aurora,
}

impl ForceMode {
    pub const ALL: [ForceMode; 8] = [
        Self::Gravity, Self::Repulsion, Self::Vortex, Self::Wave,
        Self::Flow, Self::Attractor, Self::Chaos, Self::Aurora,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gravity => "gravity",
            Self::Repulsion => "repulsion",
            Self::Vortex => "vortex",
            Self::Wave => "wave",
            Self::Flow => "flow",
            Self::Attractor => "attractor",
            Self::Chaos => "chaos",
            Self::Aurora => "aurora",
        }
    }

    /// Position in [`ForceMode::ALL`].
    pub fn index(&self) -> u32 {
        *self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The mode after this one, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() as usize + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ForceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a mode name does not match any [`ForceMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown force mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for ForceMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == lower)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// A partial parameter update: camelCase keys mapped to their new values.
/// Keys that are absent keep their current value.
pub type ParamPatch = Map<String, Value>;

/// User-tunable simulation parameters.
///
/// Mutated by the host at any time; the driver reads them at the start of
/// each tick. Loaded from JSON with camelCase keys, any missing key falls
/// back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimParams {
    pub mode: ForceMode,
    pub particle_count: usize,
    /// Added to every particle hue, in degrees.
    pub color_shift: f32,
    /// Amplitude of the repulsion mode's per-tick noise.
    pub turbulence: f32,
    /// Reach of pointer-driven forces, in pixels.
    pub interaction_radius: f32,
    pub trails_enabled: bool,
    pub bloom_enabled: bool,
    pub stats_enabled: bool,
}

impl SimParams {
    pub const MIN_PARTICLES: usize = 100;
    pub const MAX_PARTICLES: usize = 2000;
    pub const MIN_INTERACTION_RADIUS: f32 = 1.0;
    pub const MAX_INTERACTION_RADIUS: f32 = 2000.0;
    pub const MAX_TURBULENCE: f32 = 10.0;

    /// Parse a parameter set from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a partial update. Anything but a JSON object is an error.
    pub fn patch_from_json(json: &str) -> Result<ParamPatch, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// These parameters with the keys of `patch` written over them.
    pub fn merged(&self, patch: &ParamPatch) -> Result<Self, serde_json::Error> {
        let mut fields = match serde_json::to_value(self)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(fields))
    }

    /// Clamp values into the ranges the controls allow. Non-finite floats
    /// fall back to their defaults.
    /// The engine itself never rejects parameters; hosts sanitize first.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.particle_count = self.particle_count.clamp(Self::MIN_PARTICLES, Self::MAX_PARTICLES);
        self.turbulence = finite_or(self.turbulence, defaults.turbulence).clamp(0.0, Self::MAX_TURBULENCE);
        self.interaction_radius = finite_or(self.interaction_radius, defaults.interaction_radius)
            .clamp(Self::MIN_INTERACTION_RADIUS, Self::MAX_INTERACTION_RADIUS);
        self.color_shift = finite_or(self.color_shift, defaults.color_shift);
        self
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            mode: ForceMode::Flow,
            particle_count: 500,
            color_shift: 0.0,
            turbulence: 0.5,
            interaction_radius: 150.0,
            trails_enabled: true,
            bloom_enabled: true,
            stats_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_index_round_trips_through_all() {
        for (i, mode) in ForceMode::ALL.iter().enumerate() {
            assert_eq!(mode.index() as usize, i);
            assert_eq!(ForceMode::from_index(i as u32), Some(*mode));
        }
        assert_eq!(ForceMode::from_index(8), None);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Vortex".parse::<ForceMode>(), Ok(ForceMode::Vortex));
        assert_eq!(" aurora ".parse::<ForceMode>(), Ok(ForceMode::Aurora));
        assert!("tornado".parse::<ForceMode>().is_err());
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(ForceMode::Gravity.next(), ForceMode::Repulsion);
        assert_eq!(ForceMode::Aurora.next(), ForceMode::Gravity);
    }

    #[test]
    fn parse_partial_params_uses_defaults() {
        let json = r#"{ "mode": "chaos", "particleCount": 1200, "trailsEnabled": false }"#;
        let params = SimParams::from_json(json).unwrap();
        assert_eq!(params.mode, ForceMode::Chaos);
        assert_eq!(params.particle_count, 1200);
        assert!(!params.trails_enabled);
        assert_eq!(params.interaction_radius, 150.0);
        assert!(params.bloom_enabled);
    }

    #[test]
    fn json_round_trip_preserves_params() {
        let params = SimParams {
            mode: ForceMode::Wave,
            color_shift: 45.0,
            ..SimParams::default()
        };
        let json = params.to_json().unwrap();
        assert!(json.contains("\"mode\":\"wave\""));
        assert!(json.contains("\"colorShift\":45"));
        assert_eq!(SimParams::from_json(&json).unwrap(), params);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(SimParams::from_json(r#"{ "mode": "tornado" }"#).is_err());
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let params = SimParams {
            particle_count: 0,
            turbulence: -3.0,
            interaction_radius: 0.0,
            color_shift: f32::NAN,
            ..SimParams::default()
        }
        .sanitized();
        assert_eq!(params.particle_count, SimParams::MIN_PARTICLES);
        assert_eq!(params.turbulence, 0.0);
        assert_eq!(params.interaction_radius, SimParams::MIN_INTERACTION_RADIUS);
        assert_eq!(params.color_shift, 0.0);

        let big = SimParams { particle_count: 10_000, ..SimParams::default() }.sanitized();
        assert_eq!(big.particle_count, SimParams::MAX_PARTICLES);
    }

    #[test]
    fn sanitized_replaces_non_finite_floats() {
        // 1e39 overflows f32 and parses as infinity
        let params = SimParams::from_json(r#"{ "turbulence": 1e39, "interactionRadius": 1e39 }"#)
            .unwrap()
            .sanitized();
        assert_eq!(params.turbulence, SimParams::default().turbulence);
        assert_eq!(params.interaction_radius, SimParams::default().interaction_radius);

        let nan = SimParams { turbulence: f32::NAN, interaction_radius: f32::NAN, ..SimParams::default() }.sanitized();
        assert_eq!(nan.turbulence, SimParams::default().turbulence);
        assert_eq!(nan.interaction_radius, SimParams::default().interaction_radius);

        let large = SimParams { turbulence: 1e30, interaction_radius: 1e30, ..SimParams::default() }.sanitized();
        assert_eq!(large.turbulence, SimParams::MAX_TURBULENCE);
        assert_eq!(large.interaction_radius, SimParams::MAX_INTERACTION_RADIUS);
    }

    #[test]
    fn merged_patch_keeps_unlisted_fields() {
        let current = SimParams {
            mode: ForceMode::Gravity,
            trails_enabled: false,
            turbulence: 2.0,
            ..SimParams::default()
        };
        let patch = SimParams::patch_from_json(r#"{ "colorShift": 90 }"#).unwrap();
        let next = current.merged(&patch).unwrap();
        assert_eq!(next.color_shift, 90.0);
        assert_eq!(next.mode, ForceMode::Gravity);
        assert!(!next.trails_enabled);
        assert_eq!(next.turbulence, 2.0);
    }

    #[test]
    fn merged_patch_rejects_bad_values() {
        let patch = SimParams::patch_from_json(r#"{ "mode": "tornado" }"#).unwrap();
        assert!(SimParams::default().merged(&patch).is_err());
        assert!(SimParams::patch_from_json("[1, 2]").is_err());
    }
}
