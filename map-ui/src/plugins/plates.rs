use egui::{Color32, Response, Stroke};
use walkers::{Plugin, Projector};

use geofeed::PlateBoundary;

const BOUNDARY_STROKE: Stroke = Stroke {
    width: 2.0,
    color: Color32::from_rgb(0x33, 0x88, 0xff),
};

pub struct PlateBoundaries<'a> {
    boundaries: &'a [PlateBoundary],
}

impl<'a> PlateBoundaries<'a> {
    pub fn new(boundaries: &'a [PlateBoundary]) -> Self {
        Self { boundaries }
    }
}

impl Plugin for PlateBoundaries<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let painter = ui.painter();
        for boundary in self.boundaries {
            for polyline in &boundary.polylines {
                let mut points = polyline
                    .iter()
                    .map(|position| projector.project(*position).to_pos2());

                if let Some(mut previous) = points.next() {
                    for point in points {
                        painter.line_segment([previous, point], BOUNDARY_STROKE);
                        previous = point;
                    }
                }
            }
        }
    }
}
