mod earthquake;
mod layer_panel;
mod legend;

pub use earthquake::WidgetEarthquake;
pub use layer_panel::layer_panel;
pub use legend::legend;
