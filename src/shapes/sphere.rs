use crate::core::operator::{Operator, ShapeRecord};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;

pub fn create_sphere(ctx: &mut Operator, params: &ParamSet) -> Result<(), Diagnostic> {
    let radius = params.find_one_float("radius", 1.0);
    let zmin = params.find_one_float("zmin", -radius);
    let zmax = params.find_one_float("zmax", radius);
    let phi_max = params.find_one_float("phimax", 360.0);

    if radius <= 0.0 {
        return Err(Diagnostic::semantic(format!("Sphere radius {} must be positive", radius)));
    }

    if zmin > -radius || zmax < radius || phi_max < 360.0 {
        ctx.report(Diagnostic::unsupported("Partial spheres are written as full spheres"));
    }

    let binding = ctx.graphics_state().binding();
    ctx.add_shape(ShapeRecord::Sphere { radius, binding });

    Ok(())
}
