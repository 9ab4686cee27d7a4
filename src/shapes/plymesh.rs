use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use ply_rs::{parser, ply, writer};
use ply_rs::ply::Addable;
use log::{info, warn};
use crate::core::operator::{Operator, ShapeRecord, MeshExport, Counter};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::fileutil::has_extension;
use crate::core::writer::quote;

/// Element counts and vertex attributes found in a PLY header.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PlyInfo {
    pub vertices    : usize,
    pub faces       : usize,
    pub has_normals : bool,
    pub has_uvs     : bool
}

pub fn read_ply_info(path: &Path) -> Result<PlyInfo> {
    let f = File::open(path)
        .with_context(|| format!("Couldn't open PLY file \"{}\"", path.display()))?;
    let mut reader = BufReader::new(f);

    let header = parser::Parser::<ply::DefaultElement>::new()
        .read_header(&mut reader)
        .with_context(|| format!("Couldn't read PLY header of \"{}\"", path.display()))?;

    let mut info = PlyInfo::default();

    for (k, e) in &header.elements {
        if k == "vertex" {
            if !e.properties.contains_key("x") ||
               !e.properties.contains_key("y") ||
               !e.properties.contains_key("z") {
                return Err(anyhow!("PLY file \"{}\": Vertex coordinate property not found", path.display()));
            }

            info.vertices = e.count;
            info.has_normals = e.properties.contains_key("nx") &&
                               e.properties.contains_key("ny") &&
                               e.properties.contains_key("nz");
            info.has_uvs = (e.properties.contains_key("u") && e.properties.contains_key("v")) ||
                           (e.properties.contains_key("s") && e.properties.contains_key("t")) ||
                           (e.properties.contains_key("texture_u") && e.properties.contains_key("texture_v")) ||
                           (e.properties.contains_key("texture_s") && e.properties.contains_key("texture_t"));
        } else if k == "face" {
            info.faces = e.count;
        }
    }

    if info.vertices == 0 || info.faces == 0 {
        return Err(anyhow!("PLY file \"{}\" is invalid! No face/vertex elements found", path.display()));
    }

    Ok(info)
}

fn float_property(name: &str) -> ply::PropertyDef {
    ply::PropertyDef::new(name.to_owned(), ply::PropertyType::Scalar(ply::ScalarType::Float))
}

/// Builds the in-memory PLY document of an exported mesh.
pub fn build_ply(mesh: &MeshExport) -> Result<ply::Ply<ply::DefaultElement>> {
    let mut ply = ply::Ply::<ply::DefaultElement>::new();
    ply.header.encoding = ply::Encoding::BinaryLittleEndian;
    ply.header.comments.push("Exported by pbrt2prc".to_owned());

    let mut vertex = ply::ElementDef::new("vertex".to_owned());
    for p in ["x", "y", "z"].iter() { vertex.properties.add(float_property(p)); }

    if mesh.normals.is_some() {
        for p in ["nx", "ny", "nz"].iter() { vertex.properties.add(float_property(p)); }
    }

    if mesh.uvs.is_some() {
        for p in ["u", "v"].iter() { vertex.properties.add(float_property(p)); }
    }

    ply.header.elements.add(vertex);

    let mut face = ply::ElementDef::new("face".to_owned());
    face.properties.add(ply::PropertyDef::new(
        "vertex_indices".to_owned(),
        ply::PropertyType::List(ply::ScalarType::UChar, ply::ScalarType::Int)));
    ply.header.elements.add(face);

    let nverts = mesh.positions.len() / 3;
    let mut vertices = Vec::with_capacity(nverts);

    for i in 0..nverts {
        let mut v = ply::DefaultElement::new();
        v.insert("x".to_owned(), ply::Property::Float(mesh.positions[3 * i]));
        v.insert("y".to_owned(), ply::Property::Float(mesh.positions[3 * i + 1]));
        v.insert("z".to_owned(), ply::Property::Float(mesh.positions[3 * i + 2]));

        if let Some(ref n) = mesh.normals {
            v.insert("nx".to_owned(), ply::Property::Float(n[3 * i]));
            v.insert("ny".to_owned(), ply::Property::Float(n[3 * i + 1]));
            v.insert("nz".to_owned(), ply::Property::Float(n[3 * i + 2]));
        }

        if let Some(ref uv) = mesh.uvs {
            v.insert("u".to_owned(), ply::Property::Float(uv[2 * i]));
            v.insert("v".to_owned(), ply::Property::Float(uv[2 * i + 1]));
        }

        vertices.push(v);
    }

    let mut faces = Vec::with_capacity(mesh.indices.len() / 3);

    for tri in mesh.indices.chunks(3) {
        let mut f = ply::DefaultElement::new();
        let idx = tri.iter().map(|i| *i as i32).collect();
        f.insert("vertex_indices".to_owned(), ply::Property::ListInt(idx));
        faces.push(f);
    }

    ply.payload.insert("vertex".to_owned(), vertices);
    ply.payload.insert("face".to_owned(), faces);

    ply.make_consistent().map_err(|e| anyhow!("Inconsistent PLY data: {:?}", e))?;

    Ok(ply)
}

/// Writes an exported mesh as a binary little endian PLY file.
pub fn write_ply(mesh: &MeshExport, path: &Path) -> Result<()> {
    let mut ply = build_ply(mesh)?;
    let f = File::create(path)
        .with_context(|| format!("Failed to create PLY file \"{}\"", path.display()))?;
    let mut out = BufWriter::new(f);

    writer::Writer::new()
        .write_ply(&mut out, &mut ply)
        .with_context(|| format!("Failed to write PLY file \"{}\"", path.display()))?;

    info!("Wrote {} with {} vertices", path.display(), mesh.positions.len() / 3);
    Ok(())
}

/// References an existing PLY file. The file is checked but not copied.
pub fn create_plymesh(ctx: &mut Operator, from: &Path, params: &ParamSet) -> Result<(), Diagnostic> {
    let filename = params.find_one_string("filename", "");

    if filename.is_empty() {
        return Err(Diagnostic::semantic("plymesh requires a \"filename\" parameter"));
    }

    let path = ctx.resolve_filename(from, &filename);

    if !has_extension(&path, "ply") {
        warn!("plymesh file \"{}\" does not have a .ply extension", path.display());
    }

    let info = read_ply_info(&path)
        .map_err(|e| Diagnostic::io(format!("{:#}", e)))?;

    info!(
        "Referencing PLY file with {} vertices and {} faces",
        info.vertices, info.faces);

    let name = ctx.next_name(Counter::Mesh);
    let w = ctx.writer();

    w.begin("mesh");
    w.write(format!(":name {}", quote(&name)));
    w.write(":type 'ply'");
    w.write(format!(":file {}", quote(&path.to_string_lossy())));
    w.end();

    let binding = ctx.graphics_state().binding();
    ctx.add_shape(ShapeRecord::Mesh { mesh: name, binding });

    Ok(())
}
