//! Pie chart rendering using Plotters

use crate::analysis::GenderCount;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;

/// Slice colours, reused in order when there are more categories
const SLICE_COLORS: [RGBColor; 2] = [
    RGBColor(135, 206, 235), // sky blue
    RGBColor(255, 192, 203), // pink
];

const CHART_TITLE: &str = "Distribution of Customers by Gender";
const CHART_SIZE: (u32, u32) = (1000, 600);
/// Angle in degrees where the first slice begins
const START_ANGLE: f64 = 140.0;
/// Outward offset of every slice, as a fraction of the radius
const EXPLODE: f64 = 0.1;
/// Distance of the category label from the centre, as a fraction of the radius
const LABEL_DISTANCE: f64 = 1.1;
/// Distance of the percentage label from the centre, as a fraction of the radius
const PCT_DISTANCE: f64 = 0.6;
/// Pie radius as a fraction of the smaller drawing dimension, leaving room
/// for the explode offset and the outer labels
const RADIUS_FRACTION: f64 = 0.35;
/// Degrees per polygon segment along a slice arc
const ARC_STEP: f64 = 1.0;

/// Geometry of one pie slice; angles in degrees, counterclockwise
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Percentage label, one decimal place
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

/// Lay out slices counterclockwise from [`START_ANGLE`], sized by count
pub fn pie_slices(counts: &[GenderCount]) -> Vec<PieSlice> {
    let total: u64 = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = START_ANGLE;
    counts
        .iter()
        .map(|entry| {
            let fraction = entry.count as f64 / total as f64;
            let start_angle = angle;
            angle += fraction * 360.0;
            PieSlice {
                label: entry.category.clone(),
                fraction,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Point at `distance` from `center` along `angle_deg`, in pixel coordinates
fn polar_point(center: (f64, f64), distance: f64, angle_deg: f64) -> (i32, i32) {
    let theta = angle_deg * PI / 180.0;
    (
        (center.0 + distance * theta.cos()).round() as i32,
        // Screen y grows downwards
        (center.1 - distance * theta.sin()).round() as i32,
    )
}

/// Outline of an exploded slice as a closed polygon
fn slice_outline(slice: &PieSlice, center: (f64, f64), radius: f64) -> Vec<(i32, i32)> {
    let offset_theta = slice.mid_angle() * PI / 180.0;
    let shifted = (
        center.0 + EXPLODE * radius * offset_theta.cos(),
        center.1 - EXPLODE * radius * offset_theta.sin(),
    );

    let mut points = vec![polar_point(shifted, 0.0, 0.0)];
    let mut angle = slice.start_angle;
    while angle < slice.end_angle {
        points.push(polar_point(shifted, radius, angle));
        angle += ARC_STEP;
    }
    points.push(polar_point(shifted, radius, slice.end_angle));
    points
}

/// Render the gender distribution as a PNG pie chart
///
/// # Arguments
/// * `counts` - Customers per gender code, in slice order
/// * `output_path` - Path to save the PNG chart
pub fn create_gender_pie_chart(counts: &[GenderCount], output_path: &str) -> crate::Result<()> {
    let slices = pie_slices(counts);
    if slices.is_empty() {
        anyhow::bail!("No gender data to plot");
    }

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(CHART_TITLE, ("sans-serif", 30))?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 * RADIUS_FRACTION;

    let centered = Pos::new(HPos::Center, VPos::Center);
    let label_style = TextStyle::from(("sans-serif", 20).into_font()).pos(centered);
    let pct_style = TextStyle::from(("sans-serif", 18).into_font()).pos(centered);

    for (i, slice) in slices.iter().enumerate() {
        let color = SLICE_COLORS[i % SLICE_COLORS.len()];
        let outline = slice_outline(slice, center, radius);
        root.draw(&Polygon::new(outline, color.filled()))?;

        let mid = slice.mid_angle();
        let explode = EXPLODE * radius;
        root.draw(&Text::new(
            slice.label.clone(),
            polar_point(center, radius * LABEL_DISTANCE + explode, mid),
            label_style.clone(),
        ))?;
        root.draw(&Text::new(
            slice.percent_label(),
            polar_point(center, radius * PCT_DISTANCE + explode, mid),
            pct_style.clone(),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[(&str, u64)]) -> Vec<GenderCount> {
        values
            .iter()
            .map(|(category, count)| GenderCount {
                category: category.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&counts(&[("M", 3), ("W", 1)]));

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start_angle, START_ANGLE);
        assert!((slices[0].end_angle - (START_ANGLE + 270.0)).abs() < 1e-9);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
        assert!((slices[1].end_angle - (START_ANGLE + 360.0)).abs() < 1e-9);
    }

    #[test]
    fn test_percent_labels() {
        let slices = pie_slices(&counts(&[("M", 2), ("W", 1)]));
        assert_eq!(slices[0].percent_label(), "66.7%");
        assert_eq!(slices[1].percent_label(), "33.3%");
    }

    #[test]
    fn test_pie_slices_empty() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&counts(&[("M", 0)])).is_empty());
    }

    #[test]
    fn test_slice_outline_is_pushed_outward() {
        let slice = PieSlice {
            label: "M".to_string(),
            fraction: 0.25,
            start_angle: 0.0,
            end_angle: 90.0,
        };
        let outline = slice_outline(&slice, (100.0, 100.0), 50.0);

        // Apex moves along the 45 degree bisector: right and up on screen
        let apex = outline[0];
        assert!(apex.0 > 100 && apex.1 < 100);
        assert_eq!(outline.len(), 2 + 90);
        assert_eq!(apex, (104, 96));
        assert_eq!(*outline.last().unwrap(), (104, 46));
    }

    #[test]
    fn test_create_gender_pie_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genders.png");

        let result = create_gender_pie_chart(&counts(&[("M", 2), ("W", 1)]), path.to_str().unwrap());
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_create_gender_pie_chart_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        assert!(create_gender_pie_chart(&[], path.to_str().unwrap()).is_err());
        assert!(!path.exists());
    }
}
