mod earthquakes;
mod plates;

pub use earthquakes::Earthquakes;
pub use plates::PlateBoundaries;
