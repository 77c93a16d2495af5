use egui::{Align2, Context, RichText};

use crate::state::{Overlay, ViewState};
use crate::tiles::BaseLayer;

/// Always-visible layer control: one radio group for the base tiles and one
/// checkbox per overlay.
pub fn layer_panel(ctx: &Context, view_state: &mut ViewState) {
    egui::Area::new("layer_panel".into())
        .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style()).show(ui, |ui| {
                ui.label(RichText::new("Base map").strong());
                for layer in BaseLayer::ALL {
                    ui.radio_value(&mut view_state.base_layer, layer, layer.label());
                }

                ui.separator();

                ui.label(RichText::new("Overlays").strong());
                ui.checkbox(
                    &mut view_state.show_earthquakes,
                    Overlay::Earthquakes.label(),
                );
                ui.checkbox(
                    &mut view_state.show_plates,
                    Overlay::PlateBoundaries.label(),
                );
            });
        });
}
