use crate::core::operator::{Operator, operand_str};
use crate::core::diagnostic::Diagnostic;
use crate::pbrtparser::syntax::Operation;
use crate::shapes::sphere::create_sphere;
use crate::shapes::triangle::create_trianglemesh;
use crate::shapes::plymesh::create_plymesh;

pub mod sphere;
pub mod triangle;
pub mod plymesh;

/// Translates a `Shape` directive. Returns `false` when the shape was
/// skipped on request.
pub fn make_shape(ctx: &mut Operator, op: &Operation) -> Result<bool, Diagnostic> {
    let name = operand_str(op)?;
    let opts = ctx.opts();

    let skipped = match name.as_str() {
        "sphere"                   => opts.skip_prim,
        "trianglemesh" | "plymesh" => opts.skip_mesh,
        "curve"                    => opts.skip_curve,
        _                          => false
    };

    if skipped { return Ok(false); }

    match name.as_str() {
        "sphere"       => create_sphere(ctx, &op.params)?,
        "trianglemesh" => create_trianglemesh(ctx, &op.params)?,
        "plymesh"      => create_plymesh(ctx, &op.file, &op.params)?,
        _              => return Err(Diagnostic::unsupported(format!("Shape \"{}\" unknown.", name)))
    }

    Ok(true)
}
