use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// The four base tile providers. Exactly one is active at a time; switching
/// keeps each provider's tile cache alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseLayer {
    Street,
    Topographic,
    Satellite,
    Terrain,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 4] = [
        BaseLayer::Street,
        BaseLayer::Topographic,
        BaseLayer::Satellite,
        BaseLayer::Terrain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BaseLayer::Street => "Street Map",
            BaseLayer::Topographic => "Topographic Map",
            BaseLayer::Satellite => "Satellite",
            BaseLayer::Terrain => "Terrain",
        }
    }
}

impl TileSource for BaseLayer {
    fn tile_url(&self, tile_id: TileId) -> String {
        match self {
            BaseLayer::Street => format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                tile_id.zoom, tile_id.x, tile_id.y
            ),
            BaseLayer::Topographic => format!(
                "https://tile.opentopomap.org/{}/{}/{}.png",
                tile_id.zoom, tile_id.x, tile_id.y
            ),
            // The ArcGIS tile services address tiles as z/y/x.
            BaseLayer::Satellite => format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{}/{}/{}",
                tile_id.zoom, tile_id.y, tile_id.x
            ),
            BaseLayer::Terrain => format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Terrain_Base/MapServer/tile/{}/{}/{}",
                tile_id.zoom, tile_id.y, tile_id.x
            ),
        }
    }

    fn attribution(&self) -> Attribution {
        match self {
            BaseLayer::Street => Attribution {
                text: "© OpenStreetMap contributors",
                url: "https://www.openstreetmap.org/copyright",
                logo_light: None,
                logo_dark: None,
            },
            BaseLayer::Topographic => Attribution {
                text: "Map data: © OpenStreetMap contributors, SRTM | Map style: © OpenTopoMap (CC-BY-SA)",
                url: "https://opentopomap.org",
                logo_light: None,
                logo_dark: None,
            },
            BaseLayer::Satellite => Attribution {
                text: "Tiles © Esri | Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
                url: "https://www.esri.com",
                logo_light: None,
                logo_dark: None,
            },
            BaseLayer::Terrain => Attribution {
                text: "Tiles © Esri | Source: USGS, Esri, TANA, DeLorme, and NPS",
                url: "https://www.esri.com",
                logo_light: None,
                logo_dark: None,
            },
        }
    }

    fn max_zoom(&self) -> u8 {
        // The World Terrain Base service stops at zoom 13.
        match self {
            BaseLayer::Terrain => 13,
            _ => 19,
        }
    }
}
