//! Ground plane validation
//!
//! Decides whether a parsed geometry is usable as a ground plane for a
//! fixed-size square antenna footprint. Checks run in a fixed order, each
//! appending to the same report independently, so output ordering is
//! deterministic:
//!
//! 1. Emptiness (error)
//! 2. Minimum bounding-box size (error)
//! 3. Placement feasibility via grid search + point-in-polygon (error)
//! 4. Planarity (suggestion only)
//! 5. Boundary closure (warning only)
//! 6. Complexity heuristic (suggestion only)
//!
//! Overall validity depends solely on checks 1–3; the rest are advisory
//! and are never upgraded to errors.

use crate::bounds::BoundingBox;
use crate::model::Geometry;
use log::{debug, warn};
use nalgebra::Point2;
use serde::Serialize;
use std::collections::HashMap;

/// Z-axis spread beyond which 3D visualization is suggested, in mm
const PLANAR_Z_LIMIT: f64 = 5.0;

/// Edge count beyond which a manual self-intersection review is suggested
const COMPLEXITY_EDGE_LIMIT: usize = 100;

/// Tunables for the placement feasibility search
///
/// The defaults reproduce the production behavior: a 25 mm antenna tested
/// on a 5 mm grid. `max_probe_positions` bounds the sweep on pathological
/// inputs (huge bounding box relative to the step); hitting the cap fails
/// closed — the candidate is treated as "no fit found" instead of the
/// search running unbounded.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Side length of the square antenna footprint, in mm
    pub antenna_size: f64,
    /// Grid step between candidate center positions, in mm
    pub grid_step: f64,
    /// Upper bound on candidate positions probed by one search
    pub max_probe_positions: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            antenna_size: 25.0,
            grid_step: 5.0,
            max_probe_positions: 250_000,
        }
    }
}

/// Outcome of one validation run
///
/// Immutable after construction. `valid` is true iff `errors` is empty;
/// warnings and suggestions never affect validity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True iff no check produced an error
    pub valid: bool,
    /// Fatal messages, in check order
    pub errors: Vec<String>,
    /// Non-fatal observations, in check order
    pub warnings: Vec<String>,
    /// Advisory notes, in check order
    pub suggestions: Vec<String>,
}

/// Runs the validation checks against one geometry
pub struct Validator<'a> {
    geometry: &'a Geometry,
    config: ValidatorConfig,
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl<'a> Validator<'a> {
    /// Validator with production defaults
    pub fn new(geometry: &'a Geometry) -> Self {
        Self::with_config(geometry, ValidatorConfig::default())
    }

    /// Validator with explicit tunables
    pub fn with_config(geometry: &'a Geometry, config: ValidatorConfig) -> Self {
        Self {
            geometry,
            config,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Run all checks in order and produce the report
    pub fn report(mut self) -> ValidationReport {
        self.check_empty_geometry();
        self.check_minimum_size();
        self.check_planar_geometry();
        self.check_closed_boundaries();
        self.check_self_intersections();

        let valid = self.errors.is_empty();
        debug!(
            "validation finished: valid={valid}, {} errors, {} warnings, {} suggestions",
            self.errors.len(),
            self.warnings.len(),
            self.suggestions.len()
        );
        ValidationReport {
            valid,
            errors: self.errors,
            warnings: self.warnings,
            suggestions: self.suggestions,
        }
    }

    fn check_empty_geometry(&mut self) {
        if self.geometry.vertices.is_empty() {
            self.errors
                .push("Geometry is empty (no vertices found)".to_string());
        }
    }

    /// Checks 2 and 3: the bounding box must hold the antenna at all, and
    /// if it does, some contiguous area must actually fit it. The fit
    /// search is skipped when the box itself is too small, and when there
    /// are no edges to ray-cast against (cannot verify, assume acceptable).
    fn check_minimum_size(&mut self) {
        let Some(bounds) = BoundingBox::from_vertices(&self.geometry.vertices) else {
            return;
        };

        let antenna = self.config.antenna_size;
        if bounds.width < antenna || bounds.height < antenna {
            self.errors.push(format!(
                "Ground plane bounding box is too small (W: {:.1}mm, H: {:.1}mm). \
                 Minimum required: {antenna}mm × {antenna}mm to fit the antenna. \
                 Please redesign with larger dimensions.",
                bounds.width, bounds.height
            ));
            return;
        }

        if !self.geometry.edges.is_empty() && !self.antenna_fits(&bounds) {
            self.errors.push(format!(
                "Ground plane cannot accommodate the {antenna}mm × {antenna}mm antenna. \
                 Although the bounding box is {:.1}mm × {:.1}mm, there is no continuous \
                 area large enough for the antenna. Please redesign with a larger solid \
                 area (e.g. wider arms for plus/cross shapes).",
                bounds.width, bounds.height
            ));
        }
    }

    /// Grid search over candidate footprint centers, stepping `grid_step`
    /// along each axis across the bounding box inset by half the antenna
    /// side. A candidate passes when its center and all four corners lie
    /// inside the boundary.
    fn antenna_fits(&self, bounds: &BoundingBox) -> bool {
        let half = self.config.antenna_size / 2.0;
        let step = self.config.grid_step;
        let mut probes = 0usize;

        let mut y = bounds.min_y + half;
        while y <= bounds.max_y - half {
            let mut x = bounds.min_x + half;
            while x <= bounds.max_x - half {
                probes += 1;
                if probes > self.config.max_probe_positions {
                    warn!(
                        "placement search stopped after {} candidate positions; \
                         treating as no fit",
                        self.config.max_probe_positions
                    );
                    return false;
                }

                let candidates = [
                    Point2::new(x, y),
                    Point2::new(x - half, y - half),
                    Point2::new(x + half, y - half),
                    Point2::new(x - half, y + half),
                    Point2::new(x + half, y + half),
                ];
                if candidates.iter().all(|p| self.point_in_polygon(p)) {
                    debug!("antenna fits centered at ({x}, {y})");
                    return true;
                }

                x += step;
            }
            y += step;
        }

        false
    }

    /// Odd/even ray casting: a horizontal ray from the point to the right,
    /// counting crossings with every edge. Inside iff the count is odd.
    /// Edges with out-of-range indices are ignored rather than panicking.
    fn point_in_polygon(&self, point: &Point2<f64>) -> bool {
        if self.geometry.edges.is_empty() {
            return true;
        }

        let vertices = &self.geometry.vertices;
        let mut inside = false;
        for edge in &self.geometry.edges {
            let [start, end] = *edge;
            if start >= vertices.len() || end >= vertices.len() {
                continue;
            }
            let (x1, y1) = (vertices[start][0], vertices[start][1]);
            let (x2, y2) = (vertices[end][0], vertices[end][1]);

            if (y1 > point.y) != (y2 > point.y) {
                let intersect_x = x1 + (x2 - x1) * (point.y - y1) / (y2 - y1);
                if point.x < intersect_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn check_planar_geometry(&mut self) {
        if self.geometry.vertices.is_empty() {
            return;
        }

        let (min_z, max_z) = self
            .geometry
            .vertices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v[2]), hi.max(v[2]))
            });
        let z_variation = max_z - min_z;

        if z_variation > PLANAR_Z_LIMIT {
            self.suggestions.push(format!(
                "Geometry has significant Z-axis variation ({z_variation:.2}mm). \
                 Consider using 3D visualization mode."
            ));
        }
    }

    /// Vertices touched by an odd number of edges indicate an open
    /// boundary. A weak proxy — it can both under- and over-report on
    /// multi-loop or branching topologies — so it stays warning-only.
    fn check_closed_boundaries(&mut self) {
        if self.geometry.edges.is_empty() {
            if !self.geometry.faces.is_empty() {
                // Faces imply their own connectivity
                return;
            }
            self.warnings
                .push("No edges or faces defined in geometry".to_string());
            return;
        }

        let mut touch_count: HashMap<usize, usize> =
            HashMap::with_capacity(self.geometry.vertices.len());
        for edge in &self.geometry.edges {
            for &vertex_idx in edge {
                *touch_count.entry(vertex_idx).or_insert(0) += 1;
            }
        }

        let open_vertices = touch_count.values().filter(|&&count| count % 2 != 0).count();
        if open_vertices > 2 {
            self.warnings.push(format!(
                "Geometry has {open_vertices} open boundary vertices. \
                 Consider closing the boundaries for better HFSS simulation."
            ));
        }
    }

    /// No actual intersection computation is performed; for dense edge
    /// sets the user is pointed back at their CAD tool instead.
    fn check_self_intersections(&mut self) {
        if self.geometry.edges.len() > COMPLEXITY_EDGE_LIMIT {
            self.suggestions.push(
                "Complex geometry detected. Please verify no self-intersections \
                 exist in your CAD software."
                    .to_string(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A closed axis-aligned square boundary of the given side, lower-left
    /// corner at the origin
    fn square_boundary(side: f64) -> Geometry {
        let mut geometry = Geometry::new();
        geometry.vertices = vec![
            [0.0, 0.0, 0.0],
            [side, 0.0, 0.0],
            [side, side, 0.0],
            [0.0, side, 0.0],
        ];
        geometry.edges = vec![[0, 1], [1, 2], [2, 3], [3, 0]];
        geometry
    }

    /// A plus/cross outline: 50×50 bounding box, both arms only 10 wide
    fn plus_boundary() -> Geometry {
        let outline = [
            [20.0, 0.0],
            [30.0, 0.0],
            [30.0, 20.0],
            [50.0, 20.0],
            [50.0, 30.0],
            [30.0, 30.0],
            [30.0, 50.0],
            [20.0, 50.0],
            [20.0, 30.0],
            [0.0, 30.0],
            [0.0, 20.0],
            [20.0, 20.0],
        ];
        let mut geometry = Geometry::new();
        geometry.vertices = outline.iter().map(|&[x, y]| [x, y, 0.0]).collect();
        for i in 0..outline.len() {
            geometry.edges.push([i, (i + 1) % outline.len()]);
        }
        geometry
    }

    #[test]
    fn test_empty_geometry_is_an_error_without_panicking() {
        let report = Validator::new(&Geometry::new()).report();
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Geometry is empty (no vertices found)"]);
        // With neither edges nor faces the closure check still runs
        assert_eq!(report.warnings, vec!["No edges or faces defined in geometry"]);
    }

    #[test]
    fn test_square_smaller_than_antenna_is_rejected() {
        let report = Validator::new(&square_boundary(20.0)).report();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("too small"));
        assert!(report.errors[0].contains("W: 20.0mm"));
        assert!(report.errors[0].contains("25mm"));
    }

    #[test]
    fn test_square_large_enough_for_antenna_is_valid() {
        let report = Validator::new(&square_boundary(40.0)).report();
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_exact_antenna_sized_square_is_rejected() {
        // The box passes the size check, but the only candidate position
        // puts the footprint corners exactly on the boundary, and points on
        // the right/top boundary count as outside under the strict
        // ray-cast inequality
        let report = Validator::new(&square_boundary(25.0)).report();
        assert!(!report.valid);
        assert!(report.errors[0].contains("cannot accommodate"));
    }

    #[test]
    fn test_plus_shape_with_narrow_arms_fails_feasibility() {
        let report = Validator::new(&plus_boundary()).report();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("cannot accommodate"));
        assert!(report.errors[0].contains("no continuous area"));
    }

    #[test]
    fn test_faces_only_geometry_skips_fit_search_and_closure_check() {
        // A big triangle mesh patch with no edge list: ray casting has
        // nothing to work with, so feasibility is assumed acceptable
        let mut geometry = Geometry::new();
        geometry.vertices = vec![
            [0.0, 0.0, 0.0],
            [40.0, 0.0, 0.0],
            [40.0, 40.0, 0.0],
            [0.0, 40.0, 0.0],
        ];
        geometry.faces = vec![vec![0, 1, 2], vec![0, 2, 3]];

        let report = Validator::new(&geometry).report();
        assert!(report.valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_z_spread_adds_suggestion_only() {
        let mut geometry = square_boundary(40.0);
        geometry.vertices.push([10.0, 10.0, 12.0]);

        let report = Validator::new(&geometry).report();
        assert!(report.valid);
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].contains("Z-axis variation (12.00mm)"));
    }

    #[test]
    fn test_open_boundary_vertices_add_warning_only() {
        // Four disconnected segments: eight vertices each touched once
        let mut geometry = Geometry::new();
        for i in 0..4 {
            let offset = f64::from(i) * 10.0;
            let base = geometry.vertices.len();
            geometry.vertices.push([offset, 0.0, 0.0]);
            geometry.vertices.push([offset + 40.0, 40.0, 0.0]);
            geometry.edges.push([base, base + 1]);
        }

        let report = Validator::new(&geometry).report();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("8 open boundary vertices"));
    }

    #[test]
    fn test_two_open_vertices_do_not_warn() {
        // A single open polyline has exactly 2 odd-touched endpoints,
        // which is below the warning threshold
        let mut geometry = square_boundary(40.0);
        geometry.edges.pop();

        let report = Validator::new(&geometry).report();
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_dense_edge_set_adds_complexity_suggestion() {
        let mut geometry = square_boundary(40.0);
        // Pad with degenerate repeats of the closing edge to cross the limit
        while geometry.edges.len() <= COMPLEXITY_EDGE_LIMIT {
            geometry.edges.push([3, 0]);
        }

        let report = Validator::new(&geometry).report();
        assert!(
            report
                .suggestions
                .iter()
                .any(|s| s.contains("Complex geometry"))
        );
    }

    #[test]
    fn test_point_in_polygon_basics() {
        let geometry = square_boundary(40.0);
        let validator = Validator::new(&geometry);
        assert!(validator.point_in_polygon(&Point2::new(20.0, 20.0)));
        assert!(!validator.point_in_polygon(&Point2::new(50.0, 20.0)));
        assert!(!validator.point_in_polygon(&Point2::new(-1.0, 20.0)));
    }

    #[test]
    fn test_point_in_polygon_ignores_out_of_range_indices() {
        let mut geometry = square_boundary(40.0);
        geometry.edges.push([0, 99]);
        let validator = Validator::new(&geometry);
        assert!(validator.point_in_polygon(&Point2::new(20.0, 20.0)));
    }

    #[test]
    fn test_probe_cap_fails_closed() {
        let geometry = square_boundary(40.0);
        let config = ValidatorConfig {
            max_probe_positions: 0,
            ..ValidatorConfig::default()
        };
        let report = Validator::with_config(&geometry, config).report();
        assert!(!report.valid);
        assert!(report.errors[0].contains("cannot accommodate"));
    }

    #[test]
    fn test_report_is_deterministic_across_runs() {
        let mut geometry = plus_boundary();
        geometry.vertices.push([25.0, 25.0, 30.0]);

        let first = Validator::new(&geometry).report();
        let second = Validator::new(&geometry).report();
        assert_eq!(first, second);
    }
}
