use depth_scale::{DepthScale, Rgb};
use egui::Color32;
use geofeed::Earthquake;

const FILL_OPACITY: f32 = 0.75;

/// How a single earthquake is drawn: a circle sized by magnitude and colored
/// by depth. Derived once per event when the dataset is adapted.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    /// Circle radius in screen pixels, magnitude x 2. Deliberately unclamped:
    /// a zero or negative magnitude passes straight through to the painter.
    pub radius: f32,
    pub color: Rgb,
    pub fill_opacity: f32,
}

impl MarkerDescriptor {
    pub fn adapt(quake: &Earthquake, scale: &DepthScale) -> Self {
        Self {
            radius: (quake.magnitude * 2.0) as f32,
            color: scale.classify(quake.depth_km),
            fill_opacity: FILL_OPACITY,
        }
    }

    pub fn stroke_color(&self) -> Color32 {
        to_color32(self.color)
    }

    pub fn fill_color(&self) -> Color32 {
        let Rgb(r, g, b) = self.color;
        Color32::from_rgba_unmultiplied(r, g, b, (self.fill_opacity * 255.0) as u8)
    }
}

pub fn to_color32(color: Rgb) -> Color32 {
    let Rgb(r, g, b) = color;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkers::Position;

    fn quake(magnitude: f64, depth_km: f64) -> Earthquake {
        Earthquake {
            title: format!("M {} - test event", magnitude),
            magnitude,
            depth_km,
            position: Position::from_lat_lon(38.2, 142.3),
            time_ms: None,
        }
    }

    #[test]
    fn test_radius_is_twice_the_magnitude() {
        let scale = DepthScale::default();
        let marker = MarkerDescriptor::adapt(&quake(5.0, 10.0), &scale);
        assert_eq!(marker.radius, 10.0);
        assert_eq!(marker.color, scale.classify(10.0));
        assert_eq!(marker.fill_opacity, 0.75);
    }

    #[test]
    fn test_non_positive_magnitude_is_not_clamped() {
        let scale = DepthScale::default();
        assert_eq!(MarkerDescriptor::adapt(&quake(0.0, 10.0), &scale).radius, 0.0);
        assert_eq!(MarkerDescriptor::adapt(&quake(-0.5, 10.0), &scale).radius, -1.0);
    }

    #[test]
    fn test_fill_color_keeps_opacity() {
        let scale = DepthScale::default();
        let marker = MarkerDescriptor::adapt(&quake(5.0, 10.0), &scale);
        let fill = marker.fill_color();
        assert_eq!(fill.a(), (0.75 * 255.0) as u8);
    }
}
