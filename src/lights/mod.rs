use crate::core::operator::Operator;
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::lights::point::create_pointlight;
use crate::lights::distant::create_distantlight;
use crate::lights::infinite::create_infinitelight;
use crate::lights::diffuse::create_diffuse_arealight;

pub mod point;
pub mod distant;
pub mod infinite;
pub mod diffuse;

pub fn make_light(ctx: &mut Operator, kind: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    match kind {
        "point"    => create_pointlight(ctx, params),
        "distant"  => create_distantlight(ctx, params),
        "infinite" => create_infinitelight(ctx, params),
        _          => Err(Diagnostic::unsupported(format!("Light \"{}\" unknown.", kind)))
    }
}

/// Writes the emission `name` for the current graphics state.
pub fn make_area_light(ctx: &mut Operator, name: &str, kind: &str, params: &ParamSet) -> Result<(), Diagnostic> {
    match kind {
        "diffuse" | "area" => create_diffuse_arealight(ctx, name, params),
        _                  => Err(Diagnostic::unsupported(format!("Area light \"{}\" unknown.", kind)))
    }
}
