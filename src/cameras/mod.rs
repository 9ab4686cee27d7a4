use crate::core::pbrt::Float;
use crate::core::transform::Transform;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::writer::{Writer, fmt_float, fmt_list};
use crate::cameras::perspective::{create_perspective_camera, film_dimensions};

pub mod perspective;

/// Camera seen in the scene, written once the film aspect is known.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCamera {
    pub camera_to_world : Transform,
    pub fov             : Float,
    pub frame_aspect    : Option<Float>,
    pub lens_radius     : Option<Float>,
    pub focal_distance  : Option<Float>
}

pub fn make_camera(kind: &str, camera_to_world: Transform, params: &ParamSet) -> Result<PendingCamera, Diagnostic> {
    match kind {
        "perspective" => create_perspective_camera(camera_to_world, params),
        _             => Err(Diagnostic::unsupported(format!("Camera \"{}\" unknown.", kind)))
    }
}

pub fn write_camera(w: &mut Writer, cam: &PendingCamera, aspect: Float) {
    let (width, height) = film_dimensions(cam.fov, aspect);

    w.begin("camera");
    w.write(":name 'Camera'");
    w.write(":type 'standard'");
    w.write(format!(":width {}", fmt_float(width)));
    w.write(format!(":height {}", fmt_float(height)));

    if let Some(r) = cam.lens_radius {
        w.write(format!(":aperture_radius {}", fmt_float(r)));
    }

    if let Some(d) = cam.focal_distance {
        w.write(format!(":focal_length {}", fmt_float(d)));
    }

    w.write(format!(":transform {}", fmt_list(&cam.camera_to_world.row_major())));
    w.end();
}
