mod earthquake;
pub use earthquake::{depth_extent, Earthquake};

mod plate_boundary;
pub use plate_boundary::PlateBoundary;
