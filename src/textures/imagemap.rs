use std::path::Path;
use log::warn;
use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::fileutil::has_extension;
use crate::core::writer::{fmt_float, quote};
use crate::textures::{TextureClass, write_node};

/// Output wrap mode for a scene-file wrap mode.
pub fn wrap_mode(wrap: &str) -> Option<&'static str> {
    match wrap {
        "repeat" => Some("periodic"),
        "black"  => Some("black"),
        "clamp"  => Some("clamp"),
        _        => None
    }
}

pub fn create_image_texture(
    ctx: &mut Operator, name: &str, class: TextureClass,
    from: &Path, params: &ParamSet) -> Result<(), Diagnostic> {
    let filename = params.find_one_string("filename", "");

    if filename.is_empty() {
        return Err(Diagnostic::semantic(format!("Image texture \"{}\" has no filename", name)));
    }

    let file = ctx.resolve_filename(from, &filename);

    if !file.is_file() {
        warn!("Image \"{}\" of texture \"{}\" not found", file.display(), name);
    }

    let wrap = params.find_one_string("wrap", "repeat");
    let mode = wrap_mode(&wrap).unwrap_or_else(|| {
        warn!("Unknown wrap method \"{}\", using \"repeat\"", wrap);
        "periodic"
    });

    let scale = params.find_one_float("scale", 1.0);
    let ext = has_extension(&file, "tga") || has_extension(&file, "png");
    let gamma = params.find_one_bool("gamma", ext);

    let tex_name = if scale != 1.0 { format!("{}-tex", name) } else { name.to_owned() };

    let ty = match class {
        TextureClass::Float    => "grayscale",
        TextureClass::Spectrum => "color"
    };

    let w = ctx.writer();
    w.begin("texture");
    w.write(format!(":name {}", quote(&tex_name)));
    w.write(format!(":type {}", quote(ty)));
    w.write(format!(":file {}", quote(&file.to_string_lossy())));
    w.write(format!(":wrap {}", quote(mode)));

    if gamma {
        w.write(":gamma 'srgb'");
    }

    w.end();

    if scale != 1.0 {
        let smul = match class {
            TextureClass::Float    => "mul",
            TextureClass::Spectrum => "smul"
        };

        write_node(ctx, name, smul, &[fmt_float(scale), quote(&tex_name)]);
    }

    Ok(())
}
