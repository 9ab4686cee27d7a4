use crate::core::operator::{Operator, Counter};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::geometry::{Point3f, point3_from_slice};
use crate::core::spectrum::{export_color_scaled, find_scale, SpectrumType};
use crate::core::writer::{fmt_vector, quote};

fn find_point(params: &ParamSet, name: &str, d: Point3f) -> Result<Point3f, Diagnostic> {
    match params.find_floats(name) {
        Some(ref v) if v.len() == 3 => Ok(point3_from_slice(v)),
        Some(_)                     => Err(Diagnostic::semantic(
            format!("\"{}\" of distant light needs three values", name))),
        None                        => Ok(d)
    }
}

pub fn create_distantlight(ctx: &mut Operator, params: &ParamSet) -> Result<(), Diagnostic> {
    let from = find_point(params, "from", Point3f::origin())?;
    let to = find_point(params, "to", Point3f::new(0.0, 0.0, 1.0))?;

    let dir = ctx.current_transform().transform_vector(&(to - from));

    if dir.norm() == 0.0 {
        return Err(Diagnostic::semantic("Distant light has no direction"));
    }

    let dir = dir.normalize();
    let sc = find_scale(params, "scale");
    let l = export_color_scaled(ctx, params, "L", [1.0; 3], sc, SpectrumType::Illuminant);
    let name = ctx.next_name(Counter::Light);
    let w = ctx.writer();

    w.begin("light");
    w.write(format!(":name {}", quote(&name)));
    w.write(":type 'distant'");
    w.write(format!(":direction {}", fmt_vector(dir.x, dir.y, dir.z)));
    w.write(format!(":irradiance {}", l));
    w.end();

    Ok(())
}
