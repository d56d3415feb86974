pub mod group;
pub mod region;

pub use group::{Group, Systematic};
pub use region::{Region, RegionTotals, SubRegion};
