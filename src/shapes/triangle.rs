use std::path::PathBuf;
use log::{info, warn};
use crate::core::pbrt::Float;
use crate::core::operator::{Operator, ShapeRecord, MeshExport, Counter};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::writer::{Writer, fmt_list, fmt_int_list, quote};

/// Vertex data of a `trianglemesh`, checked for consistency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions : Vec<Float>,
    pub normals   : Option<Vec<Float>>,
    pub uvs       : Option<Vec<Float>>,
    pub indices   : Vec<i64>
}

impl TriangleMesh {
    pub fn from_params(params: &ParamSet) -> Result<Self, Diagnostic> {
        let positions = params.find_floats("P")
            .ok_or_else(|| Diagnostic::semantic("Vertex positions \"P\" must be provided with triangle mesh."))?;

        if positions.len() % 3 != 0 || positions.is_empty() {
            return Err(Diagnostic::semantic(
                format!("Number of \"P\" values {} for triangle mesh is not a multiple of 3", positions.len())));
        }

        let nverts = positions.len() / 3;

        let indices = match params.find_ints("indices") {
            Some(i) => i,
            None if nverts == 3 => vec![0, 1, 2],
            None => return Err(Diagnostic::semantic(
                "Vertex indices \"indices\" must be provided with triangle mesh."))
        };

        if indices.len() % 3 != 0 {
            return Err(Diagnostic::semantic(
                format!("Number of vertex indices {} not a multiple of 3", indices.len())));
        }

        if let Some(i) = indices.iter().find(|i| **i < 0 || **i as usize >= nverts) {
            return Err(Diagnostic::semantic(
                format!("trianglemesh has out of-bounds vertex index {} ({} \"P\" values were given)", i, positions.len())));
        }

        let mut normals = params.find_floats("N");

        if let Some(ref n) = normals {
            if n.len() != positions.len() {
                warn!("Number of \"N\"s for triangle mesh must match \"P\"s. Discarding \"N\"s.");
                normals = None;
            }
        }

        let uv_key = if params.contains("uv") { "uv" } else { "st" };
        let mut uvs = params.find_floats(uv_key);

        if let Some(ref uv) = uvs {
            if uv.len() != nverts * 2 {
                warn!("Number of \"{}\"s for triangle mesh must match \"P\"s. Discarding \"{}\"s.", uv_key, uv_key);
                uvs = None;
            }
        }

        Ok(Self { positions, normals, uvs, indices })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

fn tuples(values: &[Float], n: usize) -> String {
    values
        .chunks(n)
        .map(fmt_list)
        .collect::<Vec<String>>()
        .join(", ")
}

/// Writes the mesh inline as attribute lists.
pub fn write_inline_mesh(w: &mut Writer, name: &str, mesh: &TriangleMesh) {
    w.begin("mesh");
    w.write(format!(":name {}", quote(name)));
    w.write(format!("(attribute 'p' {})", tuples(&mesh.positions, 3)));

    if let Some(ref n) = mesh.normals {
        w.write(format!("(attribute 'n' {})", tuples(n, 3)));
    }

    if let Some(ref uv) = mesh.uvs {
        w.write(format!("(attribute 'uv' {})", tuples(uv, 2)));
    }

    let faces = mesh.indices
        .chunks(3)
        .map(fmt_int_list)
        .collect::<Vec<String>>()
        .join(", ");

    w.write(format!("(faces {})", faces));
    w.end();
}

pub fn create_trianglemesh(ctx: &mut Operator, params: &ParamSet) -> Result<(), Diagnostic> {
    let mesh = TriangleMesh::from_params(params)?;
    let name = ctx.next_name(Counter::Mesh);

    if mesh.vertex_count() <= ctx.opts().mesh_threshold {
        write_inline_mesh(ctx.writer(), &name, &mesh);
    } else {
        let path = PathBuf::from("meshes").join(format!("{}.ply", name));
        info!("Exporting mesh with {} vertices to {}", mesh.vertex_count(), path.display());

        let w = ctx.writer();
        w.begin("mesh");
        w.write(format!(":name {}", quote(&name)));
        w.write(":type 'ply'");
        w.write(format!(":file {}", quote(&path.to_string_lossy())));
        w.end();

        ctx.add_mesh_export(MeshExport {
            path,
            positions : mesh.positions,
            normals   : mesh.normals,
            uvs       : mesh.uvs,
            indices   : mesh.indices
        });
    }

    let binding = ctx.graphics_state().binding();
    ctx.add_shape(ShapeRecord::Mesh { mesh: name, binding });

    Ok(())
}
