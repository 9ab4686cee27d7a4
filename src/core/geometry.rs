use nalgebra::{Point3, Vector3};
use crate::core::pbrt::Float;

pub type Vector3f = Vector3<Float>;
pub type Point3f  = Point3<Float>;

pub fn vector3_from_slice(v: &[Float]) -> Vector3f {
    Vector3f::new(v[0], v[1], v[2])
}

pub fn point3_from_slice(v: &[Float]) -> Point3f {
    Point3f::new(v[0], v[1], v[2])
}
