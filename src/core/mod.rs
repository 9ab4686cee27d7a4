pub mod pbrt;
pub mod geometry;
pub mod transform;
pub mod diagnostic;
pub mod paramset;
pub mod fileutil;
pub mod writer;
pub mod spectrum;
pub mod operator;
