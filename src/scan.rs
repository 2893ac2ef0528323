//! Airspace classification along a sampled flight path

use crate::settings::AirspaceSettings;
use crate::store::Airspaces;
use crate::types::{Airspace, AirspaceClass, GeoPoint};
use crate::visibility::check_airspace_altitude;

/// Number of altitude rows in a [`ScanGrid`]
pub const SCAN_HEIGHT_BUCKETS: usize = 16;

/// Number of path samples (columns) in a [`ScanGrid`]
pub const SCAN_DISTANCE_BUCKETS: usize = 16;

/// Vertical cross-section of the airspace along a path
///
/// Row `j` holds altitude level `levels[j]`, column `i` holds path sample
/// `i`. A cell is `None` when no airspace covers it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanGrid {
    levels: [f64; SCAN_HEIGHT_BUCKETS],
    cells: [[Option<AirspaceClass>; SCAN_DISTANCE_BUCKETS]; SCAN_HEIGHT_BUCKETS],
}

impl ScanGrid {
    /// Empty grid with explicit row altitudes (meters above mean sea level)
    pub fn new(levels: [f64; SCAN_HEIGHT_BUCKETS]) -> Self {
        Self {
            levels,
            cells: [[None; SCAN_DISTANCE_BUCKETS]; SCAN_HEIGHT_BUCKETS],
        }
    }

    /// Empty grid with rows evenly spaced from `bottom` to `top` inclusive
    pub fn linear(bottom: f64, top: f64) -> Self {
        let step = (top - bottom) / (SCAN_HEIGHT_BUCKETS - 1) as f64;
        Self::new(std::array::from_fn(|j| bottom + step * j as f64))
    }

    pub fn levels(&self) -> &[f64; SCAN_HEIGHT_BUCKETS] {
        &self.levels
    }

    /// Class at `(height_bucket, distance_bucket)`
    ///
    /// Returns `None` for empty or out-of-range cells.
    pub fn get(&self, height_bucket: usize, distance_bucket: usize) -> Option<AirspaceClass> {
        self.cells
            .get(height_bucket)
            .and_then(|row| row.get(distance_bucket))
            .copied()
            .flatten()
    }

    pub fn rows(&self) -> &[[Option<AirspaceClass>; SCAN_DISTANCE_BUCKETS]; SCAN_HEIGHT_BUCKETS] {
        &self.cells
    }

    /// Reset every cell to "no airspace"
    pub fn clear(&mut self) {
        self.cells = [[None; SCAN_DISTANCE_BUCKETS]; SCAN_HEIGHT_BUCKETS];
    }

    /// Write `class` unless the cell already holds something more severe
    fn mark(&mut self, j: usize, i: usize, class: AirspaceClass, settings: &AirspaceSettings) {
        let cell = &mut self.cells[j][i];
        let replace = match *cell {
            None => true,
            Some(current) => settings.classes.severity(class) > settings.classes.severity(current),
        };
        if replace {
            *cell = Some(class);
        }
    }
}

impl Airspaces {
    /// Classify the airspace covering each sample of a path
    ///
    /// `points[i]` is paired with `terrain[i]`, the terrain altitude used to
    /// resolve AGL limits there. Samples beyond the grid width, or without a
    /// terrain value, are ignored. Existing cells are only overwritten by a
    /// more severe class.
    pub fn scan_line(
        &self,
        points: &[GeoPoint],
        terrain: &[f64],
        settings: &AirspaceSettings,
        grid: &mut ScanGrid,
    ) {
        self.scan(self.circles(), points, terrain, settings, grid);
        self.scan(self.areas(), points, terrain, settings, grid);
    }

    fn scan<A: Airspace>(
        &self,
        airspaces: &[A],
        points: &[GeoPoint],
        terrain: &[f64],
        settings: &AirspaceSettings,
        grid: &mut ScanGrid,
    ) {
        let samples = points.iter().zip(terrain).take(SCAN_DISTANCE_BUCKETS);

        for (i, (point, &terrain_altitude)) in samples.enumerate() {
            for airspace in airspaces {
                let record = airspace.record();
                if !record.visible || !settings.classes.get(record.class).display {
                    continue;
                }
                if !airspace.contains(point) {
                    continue;
                }

                let (base, top) = self.resolve_limits(record, terrain_altitude);
                for j in 0..SCAN_HEIGHT_BUCKETS {
                    let level = grid.levels[j];
                    if level > base
                        && level < top
                        && check_airspace_altitude(base, top, level, &settings.altitude)
                    {
                        grid.mark(j, i, record.class, settings);
                    }
                }
            }
        }
    }
}
