//! Display and warning policy supplied by the caller

use crate::{AirspaceClass, AltitudeMode};

/// Per-class display and warning behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassPolicy {
    /// Considered by the path scan
    pub display: bool,
    /// Considered by the nearest-airspace search
    pub warning: bool,
    /// Overlap priority, higher wins
    pub severity: u8,
}

/// Lookup table of [`ClassPolicy`] indexed by [`AirspaceClass`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTable {
    policies: [ClassPolicy; AirspaceClass::COUNT],
}

impl ClassTable {
    pub fn get(&self, class: AirspaceClass) -> &ClassPolicy {
        &self.policies[class.index()]
    }

    pub fn get_mut(&mut self, class: AirspaceClass) -> &mut ClassPolicy {
        &mut self.policies[class.index()]
    }

    pub fn severity(&self, class: AirspaceClass) -> u8 {
        self.get(class).severity
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        // highest severity first
        const ORDER: [AirspaceClass; AirspaceClass::COUNT] = [
            AirspaceClass::Prohibited,
            AirspaceClass::Restricted,
            AirspaceClass::Danger,
            AirspaceClass::Ctr,
            AirspaceClass::ClassA,
            AirspaceClass::ClassB,
            AirspaceClass::ClassC,
            AirspaceClass::ClassD,
            AirspaceClass::NoGlider,
            AirspaceClass::ClassE,
            AirspaceClass::ClassF,
            AirspaceClass::ClassG,
            AirspaceClass::Wave,
            AirspaceClass::AatTask,
            AirspaceClass::Other,
        ];

        let mut policies = [ClassPolicy {
            display: true,
            warning: true,
            severity: 0,
        }; AirspaceClass::COUNT];

        for (rank, class) in ORDER.iter().enumerate() {
            policies[class.index()].severity = (AirspaceClass::COUNT - rank) as u8;
        }

        Self { policies }
    }
}

/// Altitude-based visibility policy
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AltitudeFilter {
    pub mode: AltitudeMode,
    /// Upper cut-off for [`AltitudeMode::Clip`], meters
    pub clip_altitude: f64,
    /// Vertical margin for [`AltitudeMode::Auto`] and [`AltitudeMode::AllBelow`], meters
    pub warning_margin: f64,
}

impl Default for AltitudeFilter {
    fn default() -> Self {
        Self {
            mode: AltitudeMode::AllOn,
            clip_altitude: 1600.0,
            warning_margin: 100.0,
        }
    }
}

/// Everything the queries need to know about the caller's preferences
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirspaceSettings {
    pub altitude: AltitudeFilter,
    pub classes: ClassTable,
}

impl AirspaceSettings {
    pub fn with_mode(mut self, mode: AltitudeMode) -> Self {
        self.altitude.mode = mode;
        self
    }

    pub fn with_clip_altitude(mut self, clip_altitude: f64) -> Self {
        self.altitude.clip_altitude = clip_altitude;
        self
    }

    pub fn with_warning_margin(mut self, warning_margin: f64) -> Self {
        self.altitude.warning_margin = warning_margin;
        self
    }

    /// Replace the policy of a single class
    pub fn with_class(mut self, class: AirspaceClass, policy: ClassPolicy) -> Self {
        *self.classes.get_mut(class) = policy;
        self
    }
}
