use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color, SpectrumType};
use crate::materials::{begin_material, finish_material};

pub fn create_matte_material(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    // Newer files call the diffuse color "reflectance"
    let key = if params.contains("reflectance") { "reflectance" } else { "Kd" };
    let kd = export_color(ctx, params, key, [0.5; 3], SpectrumType::Reflectance);

    begin_material(ctx, name, "diffuse");
    finish_material(ctx, vec![("albedo", kd)]);

    Ok(())
}
