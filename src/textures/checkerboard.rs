use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::export_scalar;
use crate::textures::{TextureClass, export_input, write_node};

pub fn create_checkerboard_texture(ctx: &mut Operator, name: &str, class: TextureClass, params: &ParamSet) -> Result<(), Diagnostic> {
    let dim = params.find_one_int("dimension", 2);

    if dim != 2 {
        return Err(Diagnostic::unsupported(
            format!("{} dimensional checkerboard texture not supported", dim)));
    }

    let tex1 = export_input(ctx, params, "tex1", 1.0, class);
    let tex2 = export_input(ctx, params, "tex2", 0.0, class);
    let mut args = vec![tex1, tex2];

    if params.contains("uscale") || params.contains("vscale") {
        args.push(export_scalar(ctx, params, "uscale", 1.0));
        args.push(export_scalar(ctx, params, "vscale", 1.0));
    }

    write_node(ctx, name, "checkerboard", &args);

    Ok(())
}
