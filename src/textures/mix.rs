use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::spectrum::export_scalar;
use crate::textures::{TextureClass, export_input, write_node};

pub fn create_mix_texture(ctx: &mut Operator, name: &str, class: TextureClass, params: &ParamSet) -> Result<(), Diagnostic> {
    let tex1 = export_input(ctx, params, "tex1", 0.0, class);
    let tex2 = export_input(ctx, params, "tex2", 1.0, class);
    let amount = export_scalar(ctx, params, "amount", 0.5);

    let ty = match class {
        TextureClass::Float    => "blend",
        TextureClass::Spectrum => "sblend"
    };

    write_node(ctx, name, ty, &[amount, tex1, tex2]);

    Ok(())
}
