use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::export_scalar;
use crate::core::writer::quote;
use crate::materials::{begin_material, finish_material};

pub fn create_mix_material(ctx: &mut Operator, name: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    let materials = match params.find_strings("materials") {
        Some(m) => m,
        None    => vec![
            params.find_one_string("namedmaterial1", ""),
            params.find_one_string("namedmaterial2", "")
        ]
    };

    if materials.len() != 2 || materials.iter().any(|m| m.is_empty()) {
        return Err(Diagnostic::semantic(
            format!("Mix material \"{}\" needs two named materials", name)));
    }

    for m in materials.iter() {
        if !ctx.has_material(m) {
            return Err(Diagnostic::semantic(
                format!("Named material \"{}\" undefined. Cannot create mix material \"{}\"", m, name)));
        }
    }

    let amount = export_scalar(ctx, params, "amount", 0.5);

    begin_material(ctx, name, "blend");
    finish_material(ctx, vec![
        ("material1", quote(&materials[0])),
        ("material2", quote(&materials[1])),
        ("factor", amount)
    ]);

    Ok(())
}
