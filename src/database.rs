//! Shared, lock-protected airspace database
//!
//! Queries run concurrently on a read guard; loading, QNH changes and
//! clearing take the write lock and are serialized against everything else.
//!
//! ```
//! use airspace_proximity::{
//!     AirspaceClass, AirspaceDatabase, AirspaceRecord, AirspaceSettings, AltitudeLimit, Circle,
//!     GeoPoint, NearestQuery,
//! };
//!
//! let db = AirspaceDatabase::new();
//! let record = AirspaceRecord::new(
//!     AirspaceClass::Restricted,
//!     AltitudeLimit::Fixed(0.0),
//!     AltitudeLimit::FlightLevel(95.0),
//! );
//! db.load(vec![Circle::new(record, GeoPoint::new(47.0, 8.0), 5000.0)], vec![])?;
//! db.set_qnh(1002.0);
//!
//! let query = NearestQuery::new(GeoPoint::new(47.1, 8.0), 1200.0, 400.0);
//! let nearest = db.read().find_nearest(&query, &AirspaceSettings::default());
//! assert_eq!(nearest.circle_index(), Some(0));
//! # Ok::<(), airspace_proximity::Error>(())
//! ```

use crate::error::{Error, Result, Warning};
use crate::store::Airspaces;
use crate::types::{Area, Circle};
use parking_lot::{RwLock, RwLockReadGuard};

/// Long-lived owner of the loaded airspace set
///
/// Wrap in an `Arc` to share between threads.
#[derive(Debug, Default)]
pub struct AirspaceDatabase {
    inner: RwLock<Airspaces>,
}

impl AirspaceDatabase {
    /// Create an empty database at standard pressure
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all records with a freshly validated set
    ///
    /// The current QNH is kept. On error the previous records stay loaded.
    pub fn load(&self, circles: Vec<Circle>, areas: Vec<Area>) -> Result<Vec<Warning>> {
        let (mut airspaces, warnings) = Airspaces::new(circles, areas)?;
        for warning in &warnings {
            log::warn!("Airspace load: {warning:?}");
        }

        let mut inner = self.inner.write();
        airspaces.set_qnh(inner.qnh());
        log::debug!(
            "Loaded {} circles and {} areas",
            airspaces.circles().len(),
            airspaces.areas().len()
        );
        *inner = airspaces;
        Ok(warnings)
    }

    /// Update the barometric reference used for flight-level limits
    ///
    /// Takes effect for every query started after this returns. Setting the
    /// same value again is a no-op.
    pub fn set_qnh(&self, qnh: f64) {
        let mut inner = self.inner.write();
        if inner.qnh() != qnh {
            log::debug!("QNH changed from {} to {qnh} hPa", inner.qnh());
            inner.set_qnh(qnh);
        }
    }

    /// Like [`AirspaceDatabase::set_qnh`] but rejects non-finite or
    /// non-positive pressures
    pub fn try_set_qnh(&self, qnh: f64) -> Result<()> {
        if !(qnh.is_finite() && qnh > 0.0) {
            return Err(Error::InvalidQnh(qnh));
        }
        self.set_qnh(qnh);
        Ok(())
    }

    pub fn qnh(&self) -> f64 {
        self.inner.read().qnh()
    }

    /// Drop every record and reset QNH to standard pressure
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        *inner = Airspaces::default();
        log::debug!("Airspace database cleared");
    }

    /// Read access for queries
    ///
    /// Holding the guard blocks writers, so keep it for one query batch.
    pub fn read(&self) -> RwLockReadGuard<'_, Airspaces> {
        self.inner.read()
    }
}
