use log::warn;
use crate::core::operator::{Operator, Counter};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::{export_color_scaled, find_scale, fmt_texture_ref, SpectrumType};
use crate::core::writer::{fmt_list, quote};

pub fn create_infinitelight(ctx: &mut Operator, params: &ParamSet) -> Result<(), Diagnostic> {
    let sc = find_scale(params, "scale");
    let texmap = params.find_one_string("mapname", "");
    let name = ctx.next_name(Counter::Light);

    let radiance = if texmap.is_empty() {
        export_color_scaled(ctx, params, "L", [1.0; 3], sc, SpectrumType::Illuminant)
    } else {
        if params.contains("L") {
            warn!("Infinite light \"{}\" has both \"L\" and \"mapname\". Using the map.", name);
        }

        let from = ctx.location_file();
        let file = ctx.resolve_filename(&from, &texmap);
        let tex = format!("{}_map", name);
        let w = ctx.writer();

        w.begin("texture");
        w.write(format!(":name {}", quote(&tex)));
        w.write(":type 'color'");
        w.write(format!(":file {}", quote(&file.to_string_lossy())));
        w.write(":wrap 'periodic'");
        w.end();

        fmt_texture_ref(&tex)
    };

    let transform = ctx.current_transform();
    let w = ctx.writer();

    w.begin("light");
    w.write(format!(":name {}", quote(&name)));
    w.write(":type 'env'");
    w.write(format!(":radiance {}", radiance));

    if !transform.is_identity() {
        w.write(format!(":transform {}", fmt_list(&transform.row_major())));
    }

    w.end();

    Ok(())
}
