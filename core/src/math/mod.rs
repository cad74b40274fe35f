pub mod geometry;
pub mod integrate;
pub mod stats;

pub use geometry::{find_overlaps, Rect};
pub use integrate::integrate_area;
pub use stats::StatsHelper;
