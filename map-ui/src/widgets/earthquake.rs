use chrono::{TimeZone, Utc};
use egui::RichText;

use geofeed::Earthquake;

/// Detail window for the earthquake the user clicked: title, magnitude,
/// depth and event time.
pub struct WidgetEarthquake {
    pub selected_earthquake: Earthquake,
}

impl WidgetEarthquake {
    pub fn new(selected_earthquake: Earthquake) -> Self {
        Self {
            selected_earthquake,
        }
    }

    /// Shows the window; returns false once the user has closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let quake = &self.selected_earthquake;

        let title = if quake.title.is_empty() {
            "Earthquake"
        } else {
            quake.title.as_str()
        };

        egui::Window::new(title)
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.add_space(10.0);

                ui.label(RichText::new(format!("Magnitude: {}", quake.magnitude)).size(16.0));
                ui.label(RichText::new(format!("Depth: {} km", quake.depth_km)).size(16.0));

                if let Some(time_ms) = quake.time_ms {
                    if let Some(time) = Utc.timestamp_millis_opt(time_ms).single() {
                        ui.label(
                            RichText::new(format!(
                                "Time: {} UTC",
                                time.format("%Y-%m-%d %H:%M:%S")
                            ))
                            .size(16.0),
                        );
                    } else {
                        ui.label(format!("Time: invalid timestamp ({})", time_ms));
                    }
                }

                ui.add_space(10.0);
            });

        open
    }
}
