pub mod context;
pub mod driver;
pub mod params;
