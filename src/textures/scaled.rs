use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::textures::{TextureClass, export_input, write_node};

pub fn create_scale_texture(ctx: &mut Operator, name: &str, class: TextureClass, params: &ParamSet) -> Result<(), Diagnostic> {
    // "tex"/"scale" in newer files, "tex1"/"tex2" in older ones
    let (a, b) = if params.contains("tex") || params.contains("scale") {
        ("tex", "scale")
    } else {
        ("tex1", "tex2")
    };

    let tex1 = export_input(ctx, params, a, 1.0, class);
    let tex2 = export_input(ctx, params, b, 1.0, class);

    let ty = match class {
        TextureClass::Float    => "mul",
        TextureClass::Spectrum => "smul"
    };

    write_node(ctx, name, ty, &[tex1, tex2]);

    Ok(())
}
