use log::warn;
use crate::core::pbrt::{Float, radians};
use crate::core::transform::Transform;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::cameras::PendingCamera;

/// Width and height of the image plane at unit distance. The field of
/// view spans the shorter axis.
pub fn film_dimensions(fov: Float, aspect: Float) -> (Float, Float) {
    let short = 2.0 * (radians(fov) / 2.0).tan();

    if aspect >= 1.0 {
        (short * aspect, short)
    } else {
        (short, short / aspect)
    }
}

pub fn create_perspective_camera(camera_to_world: Transform, params: &ParamSet) -> Result<PendingCamera, Diagnostic> {
    let fov = params.find_one_float("fov", 90.0);

    if fov <= 0.0 || fov >= 180.0 {
        return Err(Diagnostic::semantic(format!("Invalid camera field of view {}", fov)));
    }

    let frame_aspect = params.get("frameaspectratio")
        .and_then(|e| e.scalar())
        .and_then(|v| v.as_float());

    if let Some(f) = frame_aspect {
        if f <= 0.0 {
            warn!("Ignoring invalid \"frameaspectratio\" {}", f);
        }
    }

    let lens_radius = params.get("lensradius").and_then(|e| e.scalar()).and_then(|v| v.as_float());
    let focal_distance = params.get("focaldistance").and_then(|e| e.scalar()).and_then(|v| v.as_float());

    Ok(PendingCamera {
        camera_to_world,
        fov,
        frame_aspect: frame_aspect.filter(|f| *f > 0.0),
        lens_radius,
        focal_distance
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fov_spans_the_short_axis() {
        let (w, h) = film_dimensions(90.0, 2.0);

        assert_relative_eq!(h, 2.0, epsilon = 1e-5);
        assert_relative_eq!(w, 4.0, epsilon = 1e-5);

        let (w, h) = film_dimensions(90.0, 0.5);

        assert_relative_eq!(w, 2.0, epsilon = 1e-5);
        assert_relative_eq!(h, 4.0, epsilon = 1e-5);
    }
}
