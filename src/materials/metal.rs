use crate::core::pbrt::Float;
use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color, export_scalar, SpectrumType};
use crate::materials::{begin_material, finish_material};

// Copper
const COPPER_ETA : [Float; 3] = [0.2004, 0.9240, 1.1022];
const COPPER_K   : [Float; 3] = [3.9129, 2.4528, 2.1421];

pub fn create_metal_material(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    let eta = export_color(ctx, params, "eta", COPPER_ETA, SpectrumType::Reflectance);
    let k = export_color(ctx, params, "k", COPPER_K, SpectrumType::Reflectance);

    let mut entries = vec![("eta", eta), ("k", k)];

    if params.contains("uroughness") || params.contains("vroughness") {
        let u = export_scalar(ctx, params, "uroughness", 0.01);
        let v = export_scalar(ctx, params, "vroughness", 0.01);
        entries.push(("roughness_x", u));
        entries.push(("roughness_y", v));
    } else {
        entries.push(("roughness", export_scalar(ctx, params, "roughness", 0.01)));
    }

    begin_material(ctx, name, "conductor");
    finish_material(ctx, entries);

    Ok(())
}
