use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color_scaled, find_scale, SpectrumType};
use crate::core::writer::quote;

pub fn create_diffuse_arealight(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    let sc = find_scale(params, "scale");
    let l = export_color_scaled(ctx, params, "L", [1.0; 3], sc, SpectrumType::Illuminant);
    let w = ctx.writer();

    w.begin("emission");
    w.write(format!(":name {}", quote(name)));
    w.write(":type 'diffuse'");
    w.write(format!(":radiance {}", l));
    w.end();

    Ok(())
}
