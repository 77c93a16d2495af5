use depth_scale::DepthScale;
use egui::{Align2, Context, RichText, Sense, Vec2};

use crate::types::to_color32;

/// Static depth legend pinned to the bottom-right corner of the map.
pub fn legend(ctx: &Context, scale: &DepthScale) {
    egui::Area::new("depth_legend".into())
        .anchor(Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style()).show(ui, |ui| {
                ui.label(RichText::new("Depth (km)").strong());
                ui.separator();

                for entry in scale.legend() {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, to_color32(entry.color));
                        ui.label(entry.label);
                    });
                }
            });
        });
}
