use geofeed::DatasetBundle;

mod map;
mod plugins;
mod state;
mod tiles;
mod types;
mod widgets;
mod windows;

pub use state::{Overlay, SelectionState, ViewState};
pub use tiles::BaseLayer;
pub use types::MarkerDescriptor;

use map::QuakeMapApp;

/// Mounts the map window and runs it until the user closes it.
pub fn run(bundle: DatasetBundle) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Earthquake Map",
        Default::default(),
        Box::new(|cc| Ok(Box::new(QuakeMapApp::new(cc.egui_ctx.clone(), bundle)))),
    )
}
