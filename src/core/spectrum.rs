use log::warn;
use crate::core::pbrt::Float;
use crate::core::paramset::{ParamSet, ParamSetItem};
use crate::core::diagnostic::Diagnostic;
use crate::core::operator::{Operator, Counter};
use crate::core::writer::{fmt_float, fmt_list, quote};
use crate::pbrtparser::syntax::Value;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpectrumType {
    Reflectance,
    Illuminant
}

pub fn xyz_to_rgb(xyz: [Float; 3]) -> [Float; 3] {
    let mut rgb = [0 as Float; 3];

    rgb[0] = 3.240479 * xyz[0] - 1.537150 * xyz[1] - 0.498535 * xyz[2];
    rgb[1] = -0.969256 * xyz[0] + 1.875991 * xyz[1] + 0.041556 * xyz[2];
    rgb[2] = 0.055648 * xyz[0] - 0.204043 * xyz[1] + 1.057311 * xyz[2];

    rgb
}

/// `(refl r g b)` or `(illum r g b)`.
pub fn fmt_rgb(rgb: [Float; 3], ty: SpectrumType) -> String {
    let tag = match ty {
        SpectrumType::Reflectance => "refl",
        SpectrumType::Illuminant  => "illum"
    };

    format!("({} {} {} {})", tag, fmt_float(rgb[0]), fmt_float(rgb[1]), fmt_float(rgb[2]))
}

pub fn fmt_texture_ref(name: &str) -> String {
    format!("(texture {})", quote(name))
}

fn texture_ref(ctx: &mut Operator, name: &str) -> String {
    if !ctx.has_texture(name) {
        ctx.report(Diagnostic::semantic(format!("Texture \"{}\" is not declared", name)));
    }

    fmt_texture_ref(name)
}

fn rgb_of(v: &[Float]) -> Option<[Float; 3]> {
    match v.len() {
        1 => Some([v[0], v[0], v[0]]),
        n if n >= 3 => {
            if n > 3 { warn!("Using only the first of {} colors", n / 3); }
            Some([v[0], v[1], v[2]])
        }
        _ => None
    }
}

/// Writes a `(spectrum ...)` fragment for wavelength/value pairs and
/// returns its quoted name.
fn export_sampled(ctx: &mut Operator, values: &[Float]) -> String {
    let name = ctx.next_name(Counter::Spectrum);
    let wavelengths: Vec<Float> = values.iter().step_by(2).copied().collect();
    let samples: Vec<Float> = values.iter().skip(1).step_by(2).copied().collect();

    let w = ctx.writer();
    w.begin("spectrum");
    w.write(format!(":name {}", quote(&name)));
    w.write(format!(
        ":data (field :wavelengths {} :values {})",
        fmt_list(&wavelengths), fmt_list(&samples)));
    w.end();

    quote(&name)
}

fn scaled(rgb: [Float; 3], scale: [Float; 3]) -> [Float; 3] {
    [rgb[0] * scale[0], rgb[1] * scale[1], rgb[2] * scale[2]]
}

fn export_item(ctx: &mut Operator, item: &ParamSetItem, scale: [Float; 3], ty: SpectrumType) -> Result<String, Diagnostic> {
    let tag = item.ty.as_deref().unwrap_or("");
    let unit = scale == [1.0; 3];
    let bad_value = || Diagnostic::semantic(
        format!("Parameter \"{}\" has an invalid {} value", item.name, tag));

    match tag {
        _ if !unit && !matches!(tag, "rgb" | "color" | "float" | "xyz" | "") => {
            warn!("Ignoring scale of {} parameter \"{}\"", tag, item.name);
            export_item(ctx, item, [1.0; 3], ty)
        }
        "texture" => {
            let name = item.scalar().and_then(|v| v.as_str()).ok_or_else(bad_value)?.to_owned();
            Ok(texture_ref(ctx, &name))
        }
        "rgb" | "color" | "float" | "" => {
            if let Some(Value::Str(s)) = item.scalar() {
                if !unit { warn!("Ignoring scale of textured parameter \"{}\"", item.name); }
                return Ok(texture_ref(ctx, s));
            }

            let v = item.value.as_floats().ok_or_else(bad_value)?;
            let rgb = rgb_of(&v).ok_or_else(bad_value)?;

            Ok(fmt_rgb(scaled(rgb, scale), ty))
        }
        "xyz" => {
            let v = item.value.as_floats().ok_or_else(bad_value)?;
            let xyz = rgb_of(&v).ok_or_else(bad_value)?;

            Ok(fmt_rgb(scaled(xyz_to_rgb(xyz), scale), ty))
        }
        "blackbody" => {
            let v = item.value.as_floats().ok_or_else(bad_value)?;
            let t = v.first().copied().ok_or_else(bad_value)?;

            Ok(format!("(blackbody {})", fmt_float(t)))
        }
        "spectrum" => match item.scalar() {
            Some(Value::Str(s)) => Err(Diagnostic::unsupported(
                format!("Named spectrum \"{}\" for parameter \"{}\"", s, item.name))),
            _ => {
                let values = item.value.as_floats().ok_or_else(bad_value)?;

                if values.len() < 2 || values.len() % 2 != 0 {
                    return Err(bad_value());
                }

                Ok(export_sampled(ctx, &values))
            }
        },
        t => Err(Diagnostic::semantic(
            format!("Parameter \"{}\" of type {} is not a color", item.name, t)))
    }
}

/// Color of parameter `name` in output syntax. Falls back to `default`
/// when the parameter is missing or cannot be translated.
pub fn export_color(ctx: &mut Operator, params: &ParamSet, name: &str, default: [Float; 3], ty: SpectrumType) -> String {
    export_color_scaled(ctx, params, name, default, [1.0; 3], ty)
}

/// Like `export_color`, with RGB values multiplied by `scale`.
pub fn export_color_scaled(
    ctx: &mut Operator, params: &ParamSet, name: &str,
    default: [Float; 3], scale: [Float; 3], ty: SpectrumType) -> String {
    let item = match params.get(name) {
        Some(item) => item,
        None       => return fmt_rgb(scaled(default, scale), ty)
    };

    match export_item(ctx, item, scale, ty) {
        Ok(s)  => s,
        Err(d) => {
            ctx.report(d);
            fmt_rgb(scaled(default, scale), ty)
        }
    }
}

/// Value of a `scale` parameter given as one number or an RGB triple.
pub fn find_scale(params: &ParamSet, name: &str) -> [Float; 3] {
    params
        .find_floats(name)
        .and_then(|v| rgb_of(&v))
        .unwrap_or([1.0; 3])
}

/// Scalar of parameter `name`: a texture reference, a number, or the
/// average of a list.
pub fn export_scalar(ctx: &mut Operator, params: &ParamSet, name: &str, default: Float) -> String {
    let item = match params.get(name) {
        Some(item) => item,
        None       => return fmt_float(default)
    };

    match item.scalar() {
        Some(Value::Str(s)) => texture_ref(ctx, s),
        _                   => match item.value.as_floats() {
            Some(ref f) if f.len() == 1 => fmt_float(f[0]),
            Some(ref f) if !f.is_empty() => {
                warn!("Averaging {} values of parameter \"{}\"", f.len(), name);
                fmt_float(f.iter().sum::<Float>() / f.len() as Float)
            }
            _ => {
                ctx.report(Diagnostic::semantic(
                    format!("Parameter \"{}\" has no usable scalar value", name)));
                fmt_float(default)
            }
        }
    }
}
