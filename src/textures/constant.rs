use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::textures::{TextureClass, export_input, write_node};

pub fn create_constant_texture(ctx: &mut Operator, name: &str, class: TextureClass, params: &ParamSet) -> Result<(), Diagnostic> {
    let value = export_input(ctx, params, "value", 1.0, class);
    write_node(ctx, name, "constant", &[value]);

    Ok(())
}
