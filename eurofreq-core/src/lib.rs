pub mod categories;
pub mod frequency;
pub mod generator;
pub mod models;
pub mod sampler;
