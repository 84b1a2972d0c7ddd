pub mod paths;
pub mod simulate;
