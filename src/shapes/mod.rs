pub mod dial;
pub mod hatch;
pub mod line_segment;
pub mod local_grid;
pub mod walls;

pub use dial::Dial;
pub use hatch::cross_hatch;
pub use line_segment::LineSegment;
pub use local_grid::LocalGrid;
pub use walls::{wall_pair, WallPair};
