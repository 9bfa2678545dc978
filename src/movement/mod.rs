pub mod resources;
pub mod segment;

pub use resources::MovementResources;
pub use segment::{segment, PathSegment, SegmentClass, SegmentedPath, UsedResources};
