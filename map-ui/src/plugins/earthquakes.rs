use std::{cell::RefCell, rc::Rc};

use egui::{Rect, Response, Sense, Stroke, Vec2};
use walkers::{Plugin, Projector};

use geofeed::Earthquake;

use crate::state::SelectionState;
use crate::types::MarkerDescriptor;

pub struct Earthquakes<'a> {
    earthquakes: &'a [Earthquake],
    markers: &'a [MarkerDescriptor],
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Earthquakes<'a> {
    pub fn new(
        earthquakes: &'a [Earthquake],
        markers: &'a [MarkerDescriptor],
        selection_state: Rc<RefCell<SelectionState>>,
    ) -> Self {
        Self {
            earthquakes,
            markers,
            selection_state,
        }
    }
}

impl Plugin for Earthquakes<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for (quake, marker) in self.earthquakes.iter().zip(self.markers) {
            draw_marker(
                quake,
                marker,
                ui,
                projector,
                &mut self.selection_state.borrow_mut(),
            );
        }
    }
}

fn draw_marker(
    quake: &Earthquake,
    marker: &MarkerDescriptor,
    ui: &mut egui::Ui,
    projector: &Projector,
    selection_state: &mut SelectionState,
) {
    let center = projector.project(quake.position).to_pos2();

    // The marker radius is passed to the painter as-is; a non-positive
    // radius draws nothing and is not clickable.
    let clickable_area = Rect::from_center_size(center, Vec2::splat(marker.radius * 2.0));
    let response = ui.allocate_rect(clickable_area, Sense::click());

    let painter = ui.painter();
    painter.circle(
        center,
        marker.radius,
        marker.fill_color(),
        Stroke::new(1.0, marker.stroke_color()),
    );
    if response.hovered() {
        painter.circle_stroke(center, marker.radius + 2.0, Stroke::new(1.5, marker.stroke_color()));
    }

    if response.clicked() {
        selection_state.toggle_earthquake_selection(quake);
    }
}
