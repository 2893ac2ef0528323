#![doc = include_str!("../README.md")]

pub use crate::database::AirspaceDatabase;
pub use crate::error::{Error, RecordKind, Result, Warning};
pub use crate::nearest::{NearestAirspace, NearestHit, NearestQuery, SEARCH_RADIUS, merge_nearest};
pub use crate::scan::{SCAN_DISTANCE_BUCKETS, SCAN_HEIGHT_BUCKETS, ScanGrid};
pub use crate::settings::{AirspaceSettings, AltitudeFilter, ClassPolicy, ClassTable};
pub use crate::store::Airspaces;
pub use crate::types::*;
pub use crate::visibility::check_airspace_altitude;

mod database;
mod error;
pub mod geodesy;
mod nearest;
pub mod pressure;
mod scan;
mod settings;
mod store;
mod types;
mod visibility;
