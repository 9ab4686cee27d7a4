use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::writer::quote;
use crate::materials::matte::create_matte_material;
use crate::materials::glass::create_glass_material;
use crate::materials::metal::create_metal_material;
use crate::materials::mirror::create_mirror_material;
use crate::materials::disney::create_disney_material;
use crate::materials::mix::create_mix_material;

pub mod matte;
pub mod glass;
pub mod metal;
pub mod mirror;
pub mod disney;
pub mod mix;

/// Writes the `(material ...)` fragment for a material of the given
/// scene-file kind.
pub fn make_material(ctx: &mut Operator, name: &str, kind: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    match kind {
        "matte" | "diffuse"     => create_matte_material(ctx, name, params),
        "glass" | "dielectric"  => create_glass_material(ctx, name, params),
        "metal" | "conductor"   => create_metal_material(ctx, name, params),
        "mirror"                => create_mirror_material(ctx, name, params),
        "disney"                => create_disney_material(ctx, name, params),
        "mix"                   => create_mix_material(ctx, name, params),
        _                       => Err(Diagnostic::unsupported(
            format!("Material \"{}\" unknown for \"{}\".", kind, name)))
    }
}

/// Opens a material fragment. Entries follow and the caller closes it.
pub(crate) fn begin_material(ctx: &mut Operator, name: &str, ty: &str) {
    let w = ctx.writer();
    w.begin("material");
    w.write(format!(":name {}", quote(name)));
    w.write(format!(":type {}", quote(ty)));
}

/// Writes `:key value` lines and closes the fragment.
pub(crate) fn finish_material(ctx: &mut Operator, entries: Vec<(&str, String)>) {
    let w = ctx.writer();

    for (k, v) in entries.into_iter() {
        w.write(format!(":{} {}", k, v));
    }

    w.end();
}
