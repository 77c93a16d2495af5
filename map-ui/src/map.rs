use std::{cell::RefCell, collections::HashMap, rc::Rc};

use egui::Context;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use depth_scale::DepthScale;
use geofeed::DatasetBundle;

use crate::{
    plugins,
    state::{SelectionState, ViewState},
    tiles::BaseLayer,
    widgets::{self, WidgetEarthquake},
    windows,
};

const INITIAL_LAT: f64 = 30.0;
const INITIAL_LON: f64 = 31.0;
const INITIAL_ZOOM: f64 = 3.0;

/// The main application struct: the slippy map with its base tile providers,
/// the adapted feed overlays, and the widgets layered on top.
pub struct QuakeMapApp {
    tiles: HashMap<BaseLayer, HttpTiles>,
    map_memory: MapMemory,
    scale: DepthScale,
    selection_state: Rc<RefCell<SelectionState>>,
    view_state: ViewState,
    earthquake_widget: Option<WidgetEarthquake>,
}

impl QuakeMapApp {
    /// Builds the app from the already-loaded dataset bundle. One tile client
    /// per base layer is created up front so switching providers keeps their
    /// caches.
    pub fn new(egui_ctx: Context, bundle: DatasetBundle) -> Self {
        let mut map_memory = MapMemory::default();
        map_memory.set_zoom(INITIAL_ZOOM).unwrap();

        let tiles = BaseLayer::ALL
            .into_iter()
            .map(|layer| {
                (
                    layer,
                    HttpTiles::with_options(layer, HttpOptions::default(), egui_ctx.to_owned()),
                )
            })
            .collect();

        let scale = DepthScale::default();
        let view_state = ViewState::from_bundle(bundle, &scale);

        Self {
            tiles,
            map_memory,
            scale,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            view_state,
            earthquake_widget: None,
        }
    }
}

impl eframe::App for QuakeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let center = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let tiles = self
                    .tiles
                    .get_mut(&self.view_state.base_layer)
                    .map(|tiles| tiles as &mut dyn Tiles);

                let mut map = Map::new(tiles, &mut self.map_memory, center);

                // Plate boundaries go under the earthquake markers.
                if self.view_state.show_plates {
                    map = map.with_plugin(plugins::PlateBoundaries::new(&self.view_state.plates));
                }
                if self.view_state.show_earthquakes {
                    map = map.with_plugin(plugins::Earthquakes::new(
                        &self.view_state.earthquakes,
                        &self.view_state.markers,
                        self.selection_state.clone(),
                    ));
                }

                ui.add(map);

                let selected = self.selection_state.borrow().earthquake.clone();
                if let Some(quake) = selected {
                    let stale = match &self.earthquake_widget {
                        Some(widget) => widget.selected_earthquake != quake,
                        None => true,
                    };
                    if stale {
                        self.earthquake_widget = Some(WidgetEarthquake::new(quake));
                    }
                    if let Some(widget) = &mut self.earthquake_widget {
                        if !widget.show(ctx) {
                            self.selection_state.borrow_mut().earthquake = None;
                            self.earthquake_widget = None;
                        }
                    }
                } else {
                    self.earthquake_widget = None;
                }

                widgets::layer_panel(ctx, &mut self.view_state);
                widgets::legend(ctx, &self.scale);
                windows::zoom(ui, &mut self.map_memory);
            });
    }
}
