pub mod pokemon;
pub mod seed;
