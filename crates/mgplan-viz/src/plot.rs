//! Spatial scatter data for a siting solution.

use serde::Serialize;

use mgplan_core::{CandidateSite, GeoBounds, PowerPlant};

/// What a plotted point represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Plant,
    Site,
}

/// One point of the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub lat: f64,
    pub lon: f64,
    pub kind: PointKind,
    /// True for candidate sites chosen by the solver; always false for
    /// plants.
    pub selected: bool,
}

/// Plot-ready view of a siting result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotResult {
    pub points: Vec<PlotPoint>,
    /// Bounding box over all plotted points, for viewport fitting.
    pub bounds: Option<GeoBounds>,
}

/// Build scatter data for plants, candidate sites and a selection vector.
///
/// Sites beyond the length of `selection` (or all sites, when the solve
/// produced no selection) are plotted as unselected.
pub fn selection_plot(
    plants: &[PowerPlant],
    sites: &[CandidateSite],
    selection: &[bool],
) -> PlotResult {
    let mut points = Vec::with_capacity(plants.len() + sites.len());

    for plant in plants {
        points.push(PlotPoint {
            lat: plant.location.lat,
            lon: plant.location.lon,
            kind: PointKind::Plant,
            selected: false,
        });
    }
    for (i, site) in sites.iter().enumerate() {
        points.push(PlotPoint {
            lat: site.location.lat,
            lon: site.location.lon,
            kind: PointKind::Site,
            selected: selection.get(i).copied().unwrap_or(false),
        });
    }

    let bounds = GeoBounds::from_points(
        plants
            .iter()
            .map(|p| &p.location)
            .chain(sites.iter().map(|s| &s.location)),
    );

    PlotResult { points, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_marks_selected_sites() {
        let plants = vec![PowerPlant::new(13.6, 100.2, 1000.0)];
        let sites = vec![
            CandidateSite::new(13.8, 100.3),
            CandidateSite::new(14.0, 100.5),
        ];
        let plot = selection_plot(&plants, &sites, &[true, false]);

        assert_eq!(plot.points.len(), 3);
        assert_eq!(plot.points[0].kind, PointKind::Plant);
        assert!(!plot.points[0].selected);
        assert!(plot.points[1].selected);
        assert!(!plot.points[2].selected);

        let bounds = plot.bounds.unwrap();
        assert_eq!(bounds.lat_min, 13.6);
        assert_eq!(bounds.lat_max, 14.0);
    }

    #[test]
    fn test_missing_selection_plots_unselected() {
        let plants = vec![PowerPlant::new(13.6, 100.2, 1000.0)];
        let sites = vec![CandidateSite::new(13.8, 100.3)];
        let plot = selection_plot(&plants, &sites, &[]);
        assert!(plot.points.iter().all(|p| !p.selected));
    }

    #[test]
    fn test_empty_inputs() {
        let plot = selection_plot(&[], &[], &[]);
        assert!(plot.points.is_empty());
        assert!(plot.bounds.is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let plants = vec![PowerPlant::new(13.6, 100.2, 1000.0)];
        let sites = vec![CandidateSite::new(13.8, 100.3)];
        let plot = selection_plot(&plants, &sites, &[true]);
        let json = serde_json::to_string(&plot).unwrap();
        assert!(json.contains("\"kind\":\"site\""));
        assert!(json.contains("\"selected\":true"));
    }
}
