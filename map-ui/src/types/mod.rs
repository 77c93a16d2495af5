mod marker;
pub use marker::{to_color32, MarkerDescriptor};
