//! Named tolerance registry consulted by every geometric decision.
//!
//! A [`Tolerances`] value is built once by the host (from [`Default`] or a
//! JSON profile) and handed to the kernel by reference. Key names are a
//! stable contract shared with external tuning profiles and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::geometry::scalar;

/// Errors while reading or updating a tolerance profile.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToleranceError {
    #[error("failed to parse tolerance profile: {0}")]
    Parse(String),

    #[error("failed to serialize tolerance profile: {0}")]
    Serialize(String),

    #[error("unknown tolerance key: {0}")]
    UnknownKey(String),
}

macro_rules! tolerance_table {
    ($( $(#[$doc:meta])* $variant:ident => $field:ident, $name:literal, $default:expr; )*) => {
        /// The full table of named tolerances.
        ///
        /// Missing keys in a deserialized profile keep their defaults.
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Tolerances {
            $( $(#[$doc])* #[serde(rename = $name)] $field: f64, )*
        }

        impl Default for Tolerances {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }

        /// A key of the tolerance registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ToleranceKey {
            $( $variant, )*
        }

        impl ToleranceKey {
            pub const ALL: &'static [ToleranceKey] = &[ $( ToleranceKey::$variant, )* ];

            /// The profile name of this key.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( ToleranceKey::$variant => $name, )*
                }
            }
        }

        impl Tolerances {
            pub fn get(&self, key: ToleranceKey) -> f64 {
                match key {
                    $( ToleranceKey::$variant => self.$field, )*
                }
            }

            /// Overwrite a single value. No range checks are applied.
            pub fn set(&mut self, key: ToleranceKey, value: f64) {
                match key {
                    $( ToleranceKey::$variant => self.$field = value, )*
                }
            }
        }
    };
}

tolerance_table! {
    /// Size of the gcode debug arrow head.
    DebugArrow => debug_arrow, "debug_arrow", 0.25;
    /// Decimal places in generated gcode.
    GcodeDecimals => gcode_decimals, "gcode_decimals", 4.0;
    /// Gap healed between disjoint slice polygons.
    BridgeLineGapDistance => bridge_line_gap_distance, "bridgeLineGapDistance", 0.0001;
    /// Bounds margin and minimum offset distance.
    PrecisionOffset => precision_offset, "precision_offset", 0.05;
    PrecisionPolyArea => precision_poly_area, "precision_poly_area", 0.05;
    PrecisionPolyBounds => precision_poly_bounds, "precision_poly_bounds", 0.01;
    PrecisionPolyMerge => precision_poly_merge, "precision_poly_merge", 0.05;
    /// Default distance for [`Tolerances::is_close_to`].
    PrecisionMerge => precision_merge, "precision_merge", 0.005;
    PrecisionSliceZ => precision_slice_z, "precision_slice_z", 0.0001;
    /// Squared merge distance for point-in-polygon and merge tests.
    PrecisionMergeSq => precision_merge_sq, "precision_merge_sq", 0.005 * 0.005;
    /// Inflation applied to a potential parent when testing nesting.
    PrecisionBounds => precision_bounds, "precision_bounds", 0.0001;
    PrecisionSlope => precision_slope, "precision_slope", 0.02;
    PrecisionSlopeMerge => precision_slope_merge, "precision_slope_merge", 0.25;
    PrecisionFillMerge => precision_fill_merge, "precision_fill_merge", 0.001;
    PrecisionDecimate => precision_decimate, "precision_decimate", 0.05;
    /// Point count above which decimation is attempted.
    DecimateThreshold => decimate_threshold, "decimate_threshold", 500000.0;
    PrecisionPointOnLine => precision_point_on_line, "precision_point_on_line", 0.01;
    PrecisionCircularity => precision_circularity, "precision_circularity", 0.001;
    HintLenMin => hint_len_min, "hint_len_min", 3.0 * 3.0;
    HintLenMax => hint_len_max, "hint_len_max", 20.0 * 20.0;
    HintMinCirc => hint_min_circ, "hint_min_circ", 0.15;
    PrecisionMaskTolerance => precision_mask_tolerance, "precision_mask_tolerance", 0.001;
    PrecisionCloseToPolySq =>
        precision_close_to_poly_sq, "precision_close_to_poly_sq", 0.001 * 0.001;
    PrecisionMidpointCheckDist =>
        precision_midpoint_check_dist, "precision_midpoint_check_dist", 1.0;
    PrecisionNestedSq => precision_nested_sq, "precision_nested_sq", 0.01 * 0.01;
    /// Integer scale factor for the external polygon clipper.
    Clipper => clipper, "clipper", 100000.0;
    ClipperClean => clipper_clean, "clipperClean", 250.0;
}

impl fmt::Display for ToleranceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToleranceKey {
    type Err = ToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToleranceKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ToleranceError::UnknownKey(s.to_string()))
    }
}

impl Tolerances {
    /// Load a profile from JSON. Absent keys keep their defaults and keys
    /// outside the registry are ignored.
    #[instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, ToleranceError> {
        let tolerances: Tolerances =
            serde_json::from_str(json).map_err(|e| ToleranceError::Parse(e.to_string()))?;
        debug!(merge = tolerances.precision_merge, "loaded tolerance profile");
        Ok(tolerances)
    }

    /// Serialize to a pretty-printed profile.
    ///
    /// JSON has no NaN or infinity, so a non-finite value is an error rather
    /// than a `null` that [`Tolerances::from_json`] would refuse.
    pub fn to_json(&self) -> Result<String, ToleranceError> {
        if let Some(key) = ToleranceKey::ALL.iter().find(|k| !self.get(**k).is_finite()) {
            return Err(ToleranceError::Serialize(format!(
                "{key} is {}, which JSON cannot represent",
                self.get(*key)
            )));
        }
        serde_json::to_string_pretty(self).map_err(|e| ToleranceError::Serialize(e.to_string()))
    }

    /// Builder-style override of a single key.
    pub fn with(mut self, key: ToleranceKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn get_named(&self, name: &str) -> Result<f64, ToleranceError> {
        Ok(self.get(name.parse()?))
    }

    pub fn set_named(&mut self, name: &str, value: f64) -> Result<(), ToleranceError> {
        let key: ToleranceKey = name.parse()?;
        self.set(key, value);
        Ok(())
    }

    /// Apply a partial preset of `(name, value)` pairs.
    ///
    /// Stops at the first unknown name; earlier pairs stay applied.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<(), ToleranceError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (name, value) in overrides {
            self.set_named(name, value)?;
            debug!(key = name, value, "tolerance override");
        }
        Ok(())
    }

    pub fn merge(&self) -> f64 {
        self.precision_merge
    }

    pub fn merge_sq(&self) -> f64 {
        self.precision_merge_sq
    }

    pub fn offset(&self) -> f64 {
        self.precision_offset
    }

    pub fn slope(&self) -> f64 {
        self.precision_slope
    }

    pub fn slope_merge(&self) -> f64 {
        self.precision_slope_merge
    }

    pub fn slice_z(&self) -> f64 {
        self.precision_slice_z
    }

    pub fn fill_merge(&self) -> f64 {
        self.precision_fill_merge
    }

    pub fn decimate(&self) -> f64 {
        self.precision_decimate
    }

    pub fn decimate_threshold(&self) -> f64 {
        self.decimate_threshold
    }

    pub fn bounds(&self) -> f64 {
        self.precision_bounds
    }

    pub fn point_on_line(&self) -> f64 {
        self.precision_point_on_line
    }

    pub fn clipper_scale(&self) -> f64 {
        self.clipper
    }

    pub fn clipper_clean(&self) -> f64 {
        self.clipper_clean
    }

    /// `|a - b| <= precision_merge`.
    pub fn is_close_to(&self, a: f64, b: f64) -> bool {
        scalar::is_close_to(a, b, None, self)
    }

    pub fn in_close_range(&self, value: f64, min: f64, max: f64) -> bool {
        scalar::in_close_range(value, min, max, self)
    }

    /// Scale a model-space coordinate into clipper integer space.
    pub fn to_clipper(&self, value: f64) -> i64 {
        (value * self.clipper).round() as i64
    }

    pub fn from_clipper(&self, value: i64) -> f64 {
        value as f64 / self.clipper
    }
}
