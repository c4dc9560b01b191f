pub mod geo_utils;
mod geometry_error;

pub use geometry_error::GeometryError;
