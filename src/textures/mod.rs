use crate::core::pbrt::Float;
use crate::core::operator::{Operator, operand_str};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color, export_scalar, SpectrumType};
use crate::core::writer::quote;
use crate::pbrtparser::syntax::Operation;
use crate::textures::constant::create_constant_texture;
use crate::textures::scaled::create_scale_texture;
use crate::textures::mix::create_mix_texture;
use crate::textures::imagemap::create_image_texture;
use crate::textures::checkerboard::create_checkerboard_texture;

pub mod constant;
pub mod scaled;
pub mod mix;
pub mod imagemap;
pub mod checkerboard;

/// Value class of a texture declaration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureClass {
    Float,
    Spectrum
}

/// Finds the untyped class slot of a `Texture` directive, e.g.
/// `"spectrum" "imagemap"`, and returns (class, kind).
fn texture_kind(params: &ParamSet) -> Option<(String, String)> {
    params.items
        .iter()
        .find(|i| i.ty.is_none())
        .and_then(|i| {
            i.looked_up.set(true);
            i.scalar().and_then(|v| v.as_str()).map(|k| (i.name.clone(), k.to_owned()))
        })
}

pub fn make_texture(ctx: &mut Operator, op: &Operation) -> Result<(), Diagnostic> {
    let name = operand_str(op)?;
    let (class, kind) = texture_kind(&op.params)
        .ok_or_else(|| Diagnostic::syntactic(format!("Texture \"{}\" is missing its class and kind", name)))?;

    let class = match class.as_str() {
        "float"                      => TextureClass::Float,
        "spectrum" | "color" | "rgb" => TextureClass::Spectrum,
        _                            => return Err(Diagnostic::semantic(
            format!("Texture type \"{}\" unknown for \"{}\"", class, name)))
    };

    match kind.as_str() {
        "constant"     => create_constant_texture(ctx, &name, class, &op.params),
        "scale"        => create_scale_texture(ctx, &name, class, &op.params),
        "mix"          => create_mix_texture(ctx, &name, class, &op.params),
        "imagemap"     => create_image_texture(ctx, &name, class, &op.file, &op.params),
        "checkerboard" => create_checkerboard_texture(ctx, &name, class, &op.params),
        _              => return Err(Diagnostic::unsupported(
            format!("Texture \"{}\" unknown for \"{}\"", kind, name)))
    }?;

    ctx.declare_texture(&name);
    Ok(())
}

/// A texture input: scalar for float textures, color otherwise.
pub(crate) fn export_input(ctx: &mut Operator, params: &ParamSet, name: &str, default: Float, class: TextureClass) -> String {
    match class {
        TextureClass::Float    => export_scalar(ctx, params, name, default),
        TextureClass::Spectrum => export_color(ctx, params, name, [default; 3], SpectrumType::Reflectance)
    }
}

/// Writes a `(node ...)` fragment with positional arguments.
pub(crate) fn write_node(ctx: &mut Operator, name: &str, ty: &str, args: &[String]) {
    let w = ctx.writer();

    w.begin("node");
    w.write(format!(":name {}", quote(name)));
    w.write(format!(":type {}", quote(ty)));

    for a in args.iter() {
        w.write(a);
    }

    w.end();
}
