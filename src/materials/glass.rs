use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color, export_scalar, SpectrumType};
use crate::materials::{begin_material, finish_material};

pub fn create_glass_material(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    let ks = export_color(ctx, params, "Ks", [1.0; 3], SpectrumType::Reflectance);
    let key = if params.contains("index") { "index" } else { "eta" };
    let index = export_scalar(ctx, params, key, 1.55);

    let mut entries = vec![("specular", ks), ("index", index)];

    if params.contains("Kt") {
        let kt = export_color(ctx, params, "Kt", [1.0; 3], SpectrumType::Reflectance);
        entries.push(("transmission", kt));
    }

    begin_material(ctx, name, "glass");
    finish_material(ctx, entries);

    Ok(())
}
