mod airspace;
mod altitude;
mod bounding_box;
mod enums;
mod point;

pub use airspace::*;
pub use altitude::*;
pub use bounding_box::*;
pub use enums::*;
pub use point::*;
