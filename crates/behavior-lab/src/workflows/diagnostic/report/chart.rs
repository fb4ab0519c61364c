use super::super::domain::Domain;
use super::views::DiagnosticReport;
use serde::Serialize;

/// Cartesian point for one radar-chart spoke, origin at the chart center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub domain: Domain,
    pub label: &'static str,
    pub angle: u16,
    pub x: f64,
    pub y: f64,
}

impl DiagnosticReport {
    /// Spoke positions scaled so a score of 100 lands on `radius`.
    ///
    /// Angle 0 points straight up and angles grow clockwise, matching the
    /// order the domains are listed in.
    pub fn radar_points(&self, radius: f64) -> Vec<RadarPoint> {
        self.domains
            .iter()
            .map(|entry| {
                let length = radius * f64::from(entry.score) / 100.0;
                let radians = f64::from(entry.angle).to_radians();
                RadarPoint {
                    domain: entry.domain,
                    label: entry.label,
                    angle: entry.angle,
                    x: round_to_hundredths(length * radians.sin()),
                    y: round_to_hundredths(-length * radians.cos()),
                }
            })
            .collect()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
