use std::path::PathBuf;
use crate::core::writer::Indent;

pub type Float = f32;

pub const PI                : Float = 3.14159265358979323846;

/// Vertex count above which triangle meshes are exported to PLY files
/// instead of being written inline.
pub const DEFAULT_MESH_THRESHOLD: usize = 1000;

#[derive(Debug, Clone)]
pub struct Options {
    pub quiet                    : bool,
    pub verbose                  : bool,
    pub output_dir               : PathBuf,
    pub include_offset           : PathBuf,
    pub skip_mesh                : bool,
    pub skip_curve               : bool,
    pub skip_prim                : bool,
    pub skip_instance            : bool,
    pub skip_light               : bool,
    pub skip_mat                 : bool,
    pub skip_tex                 : bool,
    pub skip_camera              : bool,
    pub skip_world               : bool,
    pub skip_repetitive_includes : bool,
    pub single_file              : bool,
    pub mesh_threshold           : usize,
    pub collapse_all_lists       : bool,
    pub indent                   : Indent
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quiet                    : false,
            verbose                  : false,
            output_dir               : PathBuf::from("."),
            include_offset           : PathBuf::from("./"),
            skip_mesh                : false,
            skip_curve               : false,
            skip_prim                : false,
            skip_instance            : false,
            skip_light               : false,
            skip_mat                 : false,
            skip_tex                 : false,
            skip_camera              : false,
            skip_world               : false,
            skip_repetitive_includes : false,
            single_file              : false,
            mesh_threshold           : DEFAULT_MESH_THRESHOLD,
            collapse_all_lists       : true,
            indent                   : Indent::Tab
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
}

#[inline(always)]
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) as Float * deg
}

pub fn clamp<T>(val: T, low: T, high: T) -> T
where T: PartialOrd
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}
