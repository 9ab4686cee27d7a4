use crate::core::pbrt::{Float, clamp};
use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color, export_scalar, SpectrumType};
use crate::core::writer::fmt_float;
use crate::materials::{begin_material, finish_material};

/// Normal incidence reflectance of a dielectric with index `eta`.
pub fn specular_from_eta(eta: Float) -> Float {
    let r = (eta - 1.0) / (eta + 1.0);

    clamp(r * r, 0.0, 1.0)
}

pub fn create_disney_material(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    let color = export_color(ctx, params, "color", [0.5; 3], SpectrumType::Reflectance);

    if params.find_texture("eta").is_some() {
        ctx.report(Diagnostic::unsupported(
            format!("Textured \"eta\" on material \"{}\", using 1.5", name)));
    }

    let eta = params.find_one_float("eta", 1.5);

    let entries = vec![
        ("base", color),
        ("roughness", export_scalar(ctx, params, "roughness", 0.5)),
        ("specular", fmt_float(specular_from_eta(eta))),
        ("specular_tint", export_scalar(ctx, params, "speculartint", 0.0)),
        ("metallic", export_scalar(ctx, params, "metallic", 0.0)),
        ("clearcoat", export_scalar(ctx, params, "clearcoat", 0.0)),
        ("clearcoat_gloss", export_scalar(ctx, params, "clearcoatgloss", 1.0)),
        ("anisotropic", export_scalar(ctx, params, "anisotropic", 0.0)),
        ("sheen", export_scalar(ctx, params, "sheen", 0.0)),
        ("sheen_tint", export_scalar(ctx, params, "sheentint", 0.5))
    ];

    begin_material(ctx, name, "principled");
    finish_material(ctx, entries);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn specular_of_common_glass() {
        assert_relative_eq!(specular_from_eta(1.5), 0.04, epsilon = 1e-6);
        assert_relative_eq!(specular_from_eta(1.0), 0.0);
    }
}
