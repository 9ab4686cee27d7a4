use nalgebra::Matrix4;
use std::ops::Mul;
use crate::core::pbrt::{Float, radians};
use crate::core::geometry::{Vector3f, Point3f};

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Transform {
    pub m       : Matrix4<Float>,
    pub m_inv   : Matrix4<Float>
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            m: Matrix4::identity(),
            m_inv: Matrix4::identity()
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a transform from an invertible matrix. Returns `None` for a
    /// singular matrix.
    pub fn from_matrix(m: &Matrix4<Float>) -> Option<Self> {
        let inv = m.try_inverse()?;

        Some(Self {
            m: *m,
            m_inv: inv
        })
    }

    /// Builds a transform from the 16 values of a scene file `Transform`
    /// or `ConcatTransform` directive. Those list the matrix column by
    /// column, so the values are transposed on the way in.
    pub fn from_column_major(values: &[Float]) -> Option<Self> {
        if values.len() != 16 { return None; }

        Self::from_matrix(&Matrix4::from_column_slice(values))
    }

    pub fn inverse(t: &Transform) -> Self {
        Self { m: t.m_inv, m_inv: t.m }
    }

    pub fn is_identity(&self) -> bool {
        self.m.is_identity(1e-6)
    }

    pub fn translate(delta: &Vector3f) -> Self {
        let m = Matrix4::from_row_slice(&[
            1.0, 0.0, 0.0, delta.x,
            0.0, 1.0, 0.0, delta.y,
            0.0, 0.0, 1.0, delta.z,
            0.0, 0.0, 0.0, 1.0
        ]);

        let m_inv = Matrix4::from_row_slice(&[
            1.0, 0.0, 0.0, -delta.x,
            0.0, 1.0, 0.0, -delta.y,
            0.0, 0.0, 1.0, -delta.z,
            0.0, 0.0, 0.0, 1.0
        ]);

        Self { m, m_inv }
    }

    /// Returns `None` when one of the factors is zero.
    pub fn scale(x: Float, y: Float, z: Float) -> Option<Self> {
        if x == 0.0 || y == 0.0 || z == 0.0 { return None; }

        let m = Matrix4::from_row_slice(&[
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0
        ]);

        let m_inv = Matrix4::from_row_slice(&[
            1.0/x, 0.0,   0.0,   0.0,
            0.0,   1.0/y, 0.0,   0.0,
            0.0,   0.0,   1.0/z, 0.0,
            0.0,   0.0,   0.0,   1.0
        ]);

        Some(Self { m, m_inv })
    }

    /// Rotation of `theta` degrees around `axis`. Returns `None` for a
    /// zero-length axis.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Option<Self> {
        if axis.norm() == 0.0 { return None; }

        let a = axis.normalize();
        let sin_theta = radians(theta).sin();
        let cos_theta = radians(theta).cos();
        let mut m: Matrix4<Float> = Matrix4::identity();

        m[(0, 0)] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m[(0, 1)] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m[(0, 2)] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;
        m[(0, 3)] = 0.0;

        m[(1, 0)] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m[(1, 1)] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m[(1, 2)] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;
        m[(1, 3)] = 0.0;

        m[(2, 0)] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m[(2, 1)] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m[(2, 2)] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        m[(2, 3)] = 0.0;

        Some(Self { m, m_inv: m.transpose() })
    }

    /// World-to-camera transform for an eye at `pos` looking at `look`.
    /// Returns `None` when `up` is parallel to the viewing direction.
    pub fn look_at(pos: &Point3f, look: &Point3f, up: &Vector3f) -> Option<Self> {
        let mut camera_to_world: Matrix4<Float> = Matrix4::identity();

        camera_to_world[(0, 3)] = pos.x;
        camera_to_world[(1, 3)] = pos.y;
        camera_to_world[(2, 3)] = pos.z;
        camera_to_world[(3, 3)] = 1.0;

        let to = *look - *pos;
        if to.norm() == 0.0 || up.norm() == 0.0 { return None; }

        let dir = to.normalize();

        if up.normalize().cross(&dir).norm() == 0.0 {
            return None;
        }

        let right = up.normalize().cross(&dir).normalize();
        let new_up = dir.cross(&right);

        camera_to_world[(0,0)] = right.x;
        camera_to_world[(1,0)] = right.y;
        camera_to_world[(2,0)] = right.z;
        camera_to_world[(3,0)] = 0.0;
        camera_to_world[(0,1)] = new_up.x;
        camera_to_world[(1,1)] = new_up.y;
        camera_to_world[(2,1)] = new_up.z;
        camera_to_world[(3,1)] = 0.0;
        camera_to_world[(0,2)] = dir.x;
        camera_to_world[(1,2)] = dir.y;
        camera_to_world[(2,2)] = dir.z;
        camera_to_world[(3,2)] = 0.0;

        let world_to_camera = camera_to_world.try_inverse()?;

        Some(Self { m: world_to_camera, m_inv: camera_to_world })
    }

    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x = p.x;
        let y = p.y;
        let z = p.z;

        let xp = x*self.m[(0, 0)] + y*self.m[(0, 1)] + z*self.m[(0, 2)] + self.m[(0, 3)];
        let yp = x*self.m[(1, 0)] + y*self.m[(1, 1)] + z*self.m[(1, 2)] + self.m[(1, 3)];
        let zp = x*self.m[(2, 0)] + y*self.m[(2, 1)] + z*self.m[(2, 2)] + self.m[(2, 3)];
        let wp = x*self.m[(3, 0)] + y*self.m[(3, 1)] + z*self.m[(3, 2)] + self.m[(3, 3)];

        if wp == 1.0 {
            Point3f::new(xp, yp, zp)
        } else {
            Point3f::new(xp / wp, yp / wp, zp / wp)
        }
    }

    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x = v.x;
        let y = v.y;
        let z = v.z;

        Vector3f::new(
            self.m[(0, 0)] * x + self.m[(0, 1)] * y + self.m[(0, 2)] * z,
            self.m[(1, 0)] * x + self.m[(1, 1)] * y + self.m[(1, 2)] * z,
            self.m[(2, 0)] * x + self.m[(2, 1)] * y + self.m[(2, 2)] * z)
    }

    /// The 16 matrix entries in row-major order.
    pub fn row_major(&self) -> [Float; 16] {
        let mut out = [0.0; 16];

        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = self.m[(r, c)];
            }
        }

        out
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, other: Self) -> Self::Output {
        Transform {
            m: self.m * other.m,
            m_inv: other.m_inv * self.m_inv
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_input_is_transposed() {
        let t = Transform::from_column_major(&[
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            4.0, 5.0, 6.0, 1.0
        ]).unwrap();

        assert_eq!(t.m[(0, 3)], 4.0);
        assert_eq!(t.m[(1, 3)], 5.0);
        assert_eq!(t.m[(2, 3)], 6.0);
        assert_eq!(t.m[(3, 0)], 0.0);
    }

    #[test]
    fn singular_inputs_are_rejected() {
        assert!(Transform::scale(1.0, 0.0, 1.0).is_none());
        assert!(Transform::rotate(45.0, &Vector3f::new(0.0, 0.0, 0.0)).is_none());
        assert!(Transform::from_column_major(&[0.0; 16]).is_none());
        assert!(Transform::from_column_major(&[1.0; 4]).is_none());
    }

    #[test]
    fn lookat_rejects_parallel_up() {
        let t = Transform::look_at(
            &Point3f::new(0.0, 0.0, 0.0),
            &Point3f::new(0.0, 1.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0));

        assert!(t.is_none());
    }
}
