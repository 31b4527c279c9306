//! Rendering widgets for the birth screens

pub mod detail;
pub mod menu;

pub use detail::{ClassDetail, PointCostDetail, RaceDetail};
pub use menu::MenuColumn;
