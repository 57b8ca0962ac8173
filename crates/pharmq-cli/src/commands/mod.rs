pub mod estimate;
pub mod info;
