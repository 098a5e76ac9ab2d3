pub mod hide;
pub mod unveil;
pub mod unveil_raw;
