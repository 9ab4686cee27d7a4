use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color, SpectrumType};
use crate::materials::{begin_material, finish_material};

pub fn create_mirror_material(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    let kr = export_color(ctx, params, "Kr", [0.9; 3], SpectrumType::Reflectance);

    begin_material(ctx, name, "mirror");
    finish_material(ctx, vec![("specular", kr)]);

    Ok(())
}
