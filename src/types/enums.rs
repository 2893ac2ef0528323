/// Airspace category, used for display and alerting policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AirspaceClass {
    Other,
    Restricted,
    Prohibited,
    Danger,
    ClassA,
    ClassB,
    ClassC,
    ClassD,
    NoGlider,
    Ctr,
    Wave,
    AatTask,
    ClassE,
    ClassF,
    ClassG,
}

impl AirspaceClass {
    pub const COUNT: usize = 15;

    /// All classes in numeric code order
    pub const ALL: [AirspaceClass; Self::COUNT] = [
        AirspaceClass::Other,
        AirspaceClass::Restricted,
        AirspaceClass::Prohibited,
        AirspaceClass::Danger,
        AirspaceClass::ClassA,
        AirspaceClass::ClassB,
        AirspaceClass::ClassC,
        AirspaceClass::ClassD,
        AirspaceClass::NoGlider,
        AirspaceClass::Ctr,
        AirspaceClass::Wave,
        AirspaceClass::AatTask,
        AirspaceClass::ClassE,
        AirspaceClass::ClassF,
        AirspaceClass::ClassG,
    ];

    /// Parse from the classic numeric type code
    ///
    /// Unknown codes map to `Other`.
    pub fn from_index(value: u8) -> Self {
        Self::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(AirspaceClass::Other)
    }

    /// Position in [`AirspaceClass::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Altitude display policy, deciding which airspaces are proximity candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AltitudeMode {
    /// Every airspace is shown
    #[default]
    AllOn,
    /// Only airspaces with a base below the clip altitude
    Clip,
    /// Airspaces whose vertical extent, widened by the margin, holds the aircraft
    Auto,
    /// Airspaces whose base (minus margin) is below the aircraft
    AllBelow,
    /// Airspaces the aircraft is vertically inside of
    Inside,
    /// Nothing is shown
    AllOff,
}

impl AltitudeMode {
    /// Parse from a stored configuration value
    ///
    /// Unrecognized values fall back to `AllOn` so that a bad setting can
    /// never hide an airspace.
    pub fn from_index(value: u8) -> Self {
        match value {
            0 => AltitudeMode::AllOn,
            1 => AltitudeMode::Clip,
            2 => AltitudeMode::Auto,
            3 => AltitudeMode::AllBelow,
            4 => AltitudeMode::Inside,
            5 => AltitudeMode::AllOff,
            _ => AltitudeMode::AllOn,
        }
    }
}
