pub mod header;
pub mod tile;
