pub mod musing;
pub mod region;
pub mod section;

pub use musing::MusingEntry;
pub use region::{Region, RegionBounds, ScrollContext};
pub use section::{NavLink, SectionId};
