pub mod portfolio;
pub mod theme;
