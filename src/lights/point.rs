use crate::core::operator::{Operator, Counter};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::geometry::{Point3f, point3_from_slice};
use crate::core::spectrum::{export_color_scaled, find_scale, SpectrumType};
use crate::core::writer::{fmt_vector, quote};

pub fn create_pointlight(ctx: &mut Operator, params: &ParamSet) -> Result<(), Diagnostic> {
    let from = match params.find_floats("from") {
        Some(ref v) if v.len() == 3 => point3_from_slice(v),
        Some(_)                     => return Err(Diagnostic::semantic("\"from\" of point light needs three values")),
        None                        => Point3f::origin()
    };

    let sc = find_scale(params, "scale");
    let intensity = export_color_scaled(ctx, params, "I", [1.0; 3], sc, SpectrumType::Illuminant);

    let p = ctx.current_transform().transform_point(&from);
    let name = ctx.next_name(Counter::Light);
    let w = ctx.writer();

    w.begin("light");
    w.write(format!(":name {}", quote(&name)));
    w.write(":type 'point'");
    w.write(format!(":position {}", fmt_vector(p.x, p.y, p.z)));
    w.write(format!(":intensity {}", intensity));
    w.end();

    Ok(())
}
