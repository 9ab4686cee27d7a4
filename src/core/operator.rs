use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, info, warn};
use crate::core::pbrt::{Float, Options};
use crate::core::transform::Transform;
use crate::core::geometry::{vector3_from_slice, point3_from_slice, Vector3f};
use crate::core::diagnostic::Diagnostic;
use crate::core::writer::{Writer, fmt_float, fmt_list, quote};
use crate::core::fileutil::{absolute_path, directory_containing, resolve_include, resolve_filename, include_output_path, with_suffix};
use crate::pbrtparser::pbrtparser::Parser;
use crate::pbrtparser::syntax::{Action, Operation};
use crate::cameras::{self, PendingCamera};
use crate::materials::make_material;
use crate::lights::{make_light, make_area_light};
use crate::textures::make_texture;
use crate::shapes::make_shape;
use crate::shapes::plymesh::write_ply;

/// Kinds of synthesized names. Each kind counts independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Counter {
    Material,
    Texture,
    Spectrum,
    Shape,
    Light,
    Emission,
    Mesh
}

impl Counter {
    fn prefix(self) -> &'static str {
        match self {
            Counter::Material => "material",
            Counter::Texture  => "texture",
            Counter::Spectrum => "spectrum",
            Counter::Shape    => "shape",
            Counter::Light    => "light",
            Counter::Emission => "emission",
            Counter::Mesh     => "mesh"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    pub transform           : Transform,
    pub material            : Option<String>,
    pub area_light          : Option<String>,
    pub reverse_orientation : bool
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            transform           : Transform::new(),
            material            : None,
            area_light          : None,
            reverse_orientation : false
        }
    }
}

/// What a shape is bound to when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBinding {
    pub material     : Option<String>,
    pub area_light   : Option<String>,
    pub flip_normals : bool,
    pub transform    : Transform
}

impl GraphicsState {
    pub fn binding(&self) -> ShapeBinding {
        ShapeBinding {
            material     : self.material.clone(),
            area_light   : self.area_light.clone(),
            flip_normals : self.reverse_orientation,
            transform    : self.transform
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRecord {
    Mesh   { mesh: String, binding: ShapeBinding },
    Sphere { radius: Float, binding: ShapeBinding }
}

impl ShapeRecord {
    pub fn binding(&self) -> &ShapeBinding {
        match self {
            ShapeRecord::Mesh { binding, .. }   => binding,
            ShapeRecord::Sphere { binding, .. } => binding
        }
    }
}

/// Triangle mesh too large to be written inline.
#[derive(Debug, Clone, Default)]
pub struct MeshExport {
    pub path      : PathBuf,
    pub positions : Vec<Float>,
    pub normals   : Option<Vec<Float>>,
    pub uvs       : Option<Vec<Float>>,
    pub indices   : Vec<i64>
}

#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Relative to the output directory.
    pub path     : PathBuf,
    pub contents : String
}

/// Result of a run: the main file first, then one file per translated
/// include.
#[derive(Debug)]
pub struct Translation {
    pub files       : Vec<OutputFile>,
    pub meshes      : Vec<MeshExport>,
    pub diagnostics : Vec<Diagnostic>
}

impl Translation {
    pub fn main(&self) -> &str {
        self.files.first().map(|f| f.contents.as_str()).unwrap_or("")
    }

    pub fn file<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path.as_ref())
            .map(|f| f.contents.as_str())
    }

    /// Writes every output below `dir`. Failing to write the main file is
    /// an error. Include and mesh files that cannot be written are logged
    /// and returned as diagnostics.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<Diagnostic>> {
        let dir = dir.as_ref();
        let mut failed = Vec::new();

        for (i, f) in self.files.iter().enumerate() {
            let path = dir.join(&f.path);

            match write_output(&path, &f.contents) {
                Ok(())           => info!("Wrote {}", path.display()),
                Err(e) if i == 0 => return Err(e),
                Err(e)           => failed.push(e)
            }
        }

        for m in self.meshes.iter() {
            let path = dir.join(&m.path);

            if let Err(e) = create_parent(&path).and_then(|_| write_ply(m, &path)) {
                failed.push(e);
            }
        }

        Ok(failed
            .into_iter()
            .map(|e| {
                let d = Diagnostic::io(format!("{:#}", e));
                d.log();
                d
            })
            .collect())
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory \"{}\"", parent.display()))?;
    }

    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    create_parent(path)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write \"{}\"", path.display()))
}

fn operand_floats(op: &Operation, n: usize) -> Result<Vec<Float>, Diagnostic> {
    let v = op.operand
        .as_ref()
        .and_then(|v| v.as_floats())
        .ok_or_else(|| Diagnostic::semantic(format!("{} expects {} numbers", op.action, n)))?;

    if v.len() != n {
        return Err(Diagnostic::semantic(
            format!("{} expects {} numbers but got {}", op.action, n, v.len())));
    }

    Ok(v)
}

pub fn operand_str(op: &Operation) -> Result<String, Diagnostic> {
    op.operand
        .as_ref()
        .and_then(|v| v.as_str())
        .map(|s| s.to_owned())
        .ok_or_else(|| Diagnostic::semantic(format!("{} expects a string operand", op.action)))
}

/// Applies operations in order, keeping the graphics state and writing
/// the translated scene.
pub struct Operator {
    opts                    : Options,
    include_root            : PathBuf,
    input_dir               : PathBuf,
    main_output             : PathBuf,
    graphics_state          : GraphicsState,
    pushed_graphics_states  : Vec<GraphicsState>,
    named_coordinate_system : HashMap<String, Transform>,
    instances               : HashMap<String, Vec<ShapeRecord>>,
    current_instance        : Option<String>,
    instance_base           : Transform,
    named_materials         : HashSet<String>,
    textures                : HashSet<String>,
    counters                : HashMap<Counter, usize>,
    camera                  : Option<PendingCamera>,
    film_aspect             : Option<Float>,
    writer                  : Writer,
    pushed_writers          : Vec<Writer>,
    files                   : Vec<OutputFile>,
    include_stack           : Vec<PathBuf>,
    included                : HashMap<PathBuf, Option<PathBuf>>,
    output_names            : HashMap<PathBuf, usize>,
    meshes                  : Vec<MeshExport>,
    diagnostics             : Vec<Diagnostic>,
    location                : (PathBuf, usize)
}

impl Operator {
    pub fn new<P: AsRef<Path>>(opts: Options, input: P, include_root: PathBuf) -> Self {
        let input = input.as_ref();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scene".to_owned());

        let mut writer = Writer::new(opts.indent);
        if !opts.skip_world { writer.begin("scene"); }

        Self {
            include_root,
            input_dir               : directory_containing(input),
            main_output             : PathBuf::from(format!("{}.prc", stem)),
            graphics_state          : GraphicsState::default(),
            pushed_graphics_states  : Vec::new(),
            named_coordinate_system : HashMap::new(),
            instances               : HashMap::new(),
            current_instance        : None,
            instance_base           : Transform::new(),
            named_materials         : HashSet::new(),
            textures                : HashSet::new(),
            counters                : HashMap::new(),
            camera                  : None,
            film_aspect             : None,
            writer,
            pushed_writers          : Vec::new(),
            files                   : Vec::new(),
            include_stack           : vec![absolute_path(input)],
            included                : HashMap::new(),
            output_names            : HashMap::new(),
            meshes                  : Vec::new(),
            diagnostics             : Vec::new(),
            location                : (input.to_owned(), 0),
            opts
        }
    }

    pub fn opts(&self) -> &Options {
        &self.opts
    }

    pub fn writer(&mut self) -> &mut Writer {
        &mut self.writer
    }

    pub fn graphics_state(&self) -> &GraphicsState {
        &self.graphics_state
    }

    pub fn current_transform(&self) -> Transform {
        self.graphics_state.transform
    }

    /// Number of graphics states, including the base one.
    pub fn stack_depth(&self) -> usize {
        self.pushed_graphics_states.len() + 1
    }

    pub fn instance(&self, name: &str) -> Option<&[ShapeRecord]> {
        self.instances.get(name).map(|v| v.as_slice())
    }

    pub fn coordinate_system(&self, name: &str) -> Option<&Transform> {
        self.named_coordinate_system.get(name)
    }

    /// File of the operation being applied.
    pub fn location_file(&self) -> PathBuf {
        self.location.0.clone()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn next_name(&mut self, counter: Counter) -> String {
        let n = self.counters.entry(counter).or_insert(0);
        let name = format!("{}_{}", counter.prefix(), n);
        *n += 1;

        name
    }

    /// Records a diagnostic at the location of the operation being applied
    /// unless it already carries one.
    pub fn report(&mut self, d: Diagnostic) {
        let d = d.located(&self.location.0, self.location.1);
        d.log();
        self.diagnostics.push(d);
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.contains(name)
    }

    pub fn declare_texture(&mut self, name: &str) {
        if !self.textures.insert(name.to_owned()) {
            warn!("Texture \"{}\" redefined", name);
        }
    }

    pub fn has_material(&self, name: &str) -> bool {
        self.named_materials.contains(name)
    }

    pub fn resolve_filename(&self, from: &Path, name: &str) -> PathBuf {
        resolve_filename(from, name, &self.include_root)
    }

    pub fn add_mesh_export(&mut self, mesh: MeshExport) {
        self.meshes.push(mesh);
    }

    /// Writes a shape entity, or records it while an object is being
    /// defined. Recorded shapes keep their transform relative to the one
    /// active at `ObjectBegin`.
    pub fn add_shape(&mut self, mut record: ShapeRecord) {
        if let Some(ref name) = self.current_instance {
            let base = Transform::inverse(&self.instance_base);

            match record {
                ShapeRecord::Mesh { ref mut binding, .. } |
                ShapeRecord::Sphere { ref mut binding, .. } => binding.transform = base * binding.transform
            }

            self.instances.entry(name.clone()).or_default().push(record);
            return;
        }

        let t = record.binding().transform;
        self.write_entity(&record, &t);
    }

    fn write_entity(&mut self, record: &ShapeRecord, transform: &Transform) {
        let name = self.next_name(Counter::Shape);
        let w = &mut self.writer;

        w.begin("entity");
        w.write(format!(":name {}", quote(&name)));

        match record {
            ShapeRecord::Sphere { radius, .. } => {
                w.write(":type 'sphere'");
                w.write(format!(":radius {}", fmt_float(*radius)));
            }
            ShapeRecord::Mesh { mesh, .. } => {
                w.write(":type 'mesh'");
                w.write(format!(":mesh {}", quote(mesh)));
            }
        }

        let binding = record.binding();

        if let Some(ref m) = binding.material {
            w.write(format!(":material {}", quote(m)));
        }

        if let Some(ref e) = binding.area_light {
            w.write(format!(":emission {}", quote(e)));
        }

        if binding.flip_normals {
            w.write(":flip_normals true");
        }

        w.write(format!(":transform {}", fmt_list(&transform.row_major())));
        w.end();
    }

    pub fn translate_source(&mut self, path: &Path, text: &str) {
        let mut parser = Parser::new(path, text, &self.opts);

        while let Some(op) = parser.next() {
            for d in parser.take_diagnostics() {
                self.report(d);
            }

            self.apply(&op);
        }

        for d in parser.take_diagnostics() {
            self.report(d);
        }
    }

    pub fn apply(&mut self, op: &Operation) {
        self.location = (op.file.clone(), op.line);

        let res = match Action::from(op.action.as_str()) {
            Action::Identity           => self.identity(),
            Action::Translate          => self.translate(op),
            Action::Rotate             => self.rotate(op),
            Action::Scale              => self.scale(op),
            Action::LookAt             => self.lookat(op),
            Action::Transform          => self.transform(op),
            Action::ConcatTransform    => self.concat_transform(op),
            Action::CoordinateSystem   => self.coordinate_system_begin(op),
            Action::CoordSysTransform  => self.coord_sys_transform(op),
            Action::Camera             => self.camera(op),
            Action::Film               => self.film(op),
            Action::Sampler            => self.sampler(op),
            Action::Integrator         => self.integrator(op),
            Action::WorldBegin         => self.world_begin(),
            Action::WorldEnd           => self.world_end(),
            Action::AttributeBegin     |
            Action::TransformBegin     => self.attribute_begin(),
            Action::AttributeEnd       |
            Action::TransformEnd       => self.attribute_end(&op.action),
            Action::ObjectBegin        => self.object_begin(op),
            Action::ObjectEnd          => self.object_end(),
            Action::ObjectInstance     => self.object_instance(op),
            Action::Material           => self.material(op),
            Action::MakeNamedMaterial  => self.make_named_material(op),
            Action::NamedMaterial      => self.named_material(op),
            Action::Texture            => self.texture(op),
            Action::LightSource        => self.light_source(op),
            Action::AreaLightSource    => self.area_light_source(op),
            Action::Shape              => self.shape(op),
            Action::ReverseOrientation => self.reverse_orientation(),
            Action::Include            => self.include(op),
            Action::Unsupported(name)  => Err(Diagnostic::unsupported(format!("{} is not supported", name))),
            Action::Ignored(name)      => {
                debug!("Ignoring {}", name);
                Ok(())
            }
            Action::Unknown(name)      => Err(Diagnostic::semantic(format!("Unknown directive \"{}\"", name)))
        };

        if let Err(d) = res {
            self.report(d);
        }
    }

    fn concat(&mut self, t: Transform) {
        self.graphics_state.transform = self.graphics_state.transform * t;
    }

    fn identity(&mut self) -> Result<(), Diagnostic> {
        self.graphics_state.transform = Transform::new();
        Ok(())
    }

    fn translate(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let v = operand_floats(op, 3)?;
        self.concat(Transform::translate(&vector3_from_slice(&v)));
        Ok(())
    }

    fn rotate(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let v = operand_floats(op, 4)?;
        let t = Transform::rotate(v[0], &Vector3f::new(v[1], v[2], v[3]))
            .ok_or_else(|| Diagnostic::semantic("Rotate around a zero-length axis"))?;

        self.concat(t);
        Ok(())
    }

    fn scale(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let v = operand_floats(op, 3)?;
        let t = Transform::scale(v[0], v[1], v[2])
            .ok_or_else(|| Diagnostic::semantic("Scale by zero is not invertible"))?;

        self.concat(t);
        Ok(())
    }

    fn lookat(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let v = operand_floats(op, 9)?;
        let t = Transform::look_at(
            &point3_from_slice(&v[0..3]),
            &point3_from_slice(&v[3..6]),
            &vector3_from_slice(&v[6..9]))
            .ok_or_else(|| Diagnostic::semantic(
                "\"up\" vector and viewing direction passed to LookAt are pointing in the same direction"))?;

        self.concat(t);
        Ok(())
    }

    fn transform(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let v = operand_floats(op, 16)?;
        let t = Transform::from_column_major(&v)
            .ok_or_else(|| Diagnostic::semantic("Transform matrix is singular"))?;

        self.graphics_state.transform = t;
        Ok(())
    }

    fn concat_transform(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let v = operand_floats(op, 16)?;
        let t = Transform::from_column_major(&v)
            .ok_or_else(|| Diagnostic::semantic("ConcatTransform matrix is singular"))?;

        self.concat(t);
        Ok(())
    }

    fn coordinate_system_begin(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;
        self.named_coordinate_system.insert(name, self.graphics_state.transform);
        Ok(())
    }

    fn coord_sys_transform(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;

        match self.named_coordinate_system.get(&name) {
            Some(t) => {
                self.graphics_state.transform = *t;
                Ok(())
            }
            None => Err(Diagnostic::semantic(format!("Couldn't find named coordinate system \"{}\"", name)))
        }
    }

    fn camera(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let kind = operand_str(op)?;
        let camera_to_world = Transform::inverse(&self.graphics_state.transform);
        self.named_coordinate_system.insert("camera".to_owned(), camera_to_world);

        if self.opts.skip_camera { return Ok(()); }

        let cam = cameras::make_camera(&kind, camera_to_world, &op.params)?;
        op.params.report_unused();

        if self.camera.is_some() {
            warn!("Only one camera is supported. Replacing the previous one.");
        }

        self.camera = Some(cam);
        Ok(())
    }

    fn film(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let xres = op.params.find_one_int("xresolution", 1280);
        let yres = op.params.find_one_int("yresolution", 720);

        if xres <= 0 || yres <= 0 {
            return Err(Diagnostic::semantic(format!("Invalid film resolution {}x{}", xres, yres)));
        }

        self.film_aspect = Some(xres as Float / yres as Float);

        if !self.opts.skip_world {
            self.writer.write(format!("(registry '/renderer/film/width' {})", xres));
            self.writer.write(format!("(registry '/renderer/film/height' {})", yres));
        }

        Ok(())
    }

    fn sampler(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let spp = op.params.find_one_int("pixelsamples", 16);

        if !self.opts.skip_world {
            self.writer.write(format!("(registry '/renderer/common/sampler/aa/count' {})", spp));
        }

        Ok(())
    }

    fn integrator(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let depth = op.params.find_one_int("maxdepth", 5);

        if !self.opts.skip_world {
            self.writer.write(format!("(registry '/renderer/common/max_ray_depth' {})", depth));
        }

        Ok(())
    }

    fn world_begin(&mut self) -> Result<(), Diagnostic> {
        self.graphics_state.transform = Transform::new();
        self.named_coordinate_system.insert("world".to_owned(), Transform::new());
        Ok(())
    }

    fn world_end(&mut self) -> Result<(), Diagnostic> {
        while let Some(state) = self.pushed_graphics_states.pop() {
            warn!("Missing end to AttributeBegin");
            self.graphics_state = state;
        }

        if let Some(name) = self.current_instance.take() {
            return Err(Diagnostic::semantic(format!("Object \"{}\" is missing ObjectEnd", name)));
        }

        Ok(())
    }

    fn attribute_begin(&mut self) -> Result<(), Diagnostic> {
        self.pushed_graphics_states.push(self.graphics_state.clone());
        Ok(())
    }

    fn attribute_end(&mut self, action: &str) -> Result<(), Diagnostic> {
        match self.pushed_graphics_states.pop() {
            Some(state) => {
                self.graphics_state = state;
                Ok(())
            }
            None => Err(Diagnostic::stack(format!("Unmatched {} encountered. Ignoring it.", action)))
        }
    }

    fn object_begin(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;
        self.attribute_begin()?;

        let nested = self.current_instance.is_some();

        if self.instances.insert(name.clone(), Vec::new()).is_some() {
            warn!("Object \"{}\" redefined", name);
        }

        self.current_instance = Some(name);
        self.instance_base = self.graphics_state.transform;

        if nested {
            return Err(Diagnostic::semantic("ObjectBegin called inside of instance definition"));
        }

        Ok(())
    }

    fn object_end(&mut self) -> Result<(), Diagnostic> {
        if self.current_instance.take().is_none() {
            self.report(Diagnostic::semantic("ObjectEnd called outside of instance definition"));
        }

        self.attribute_end("ObjectEnd")
    }

    fn object_instance(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;

        if self.opts.skip_instance { return Ok(()); }

        if self.current_instance.is_some() {
            return Err(Diagnostic::semantic("ObjectInstance can't be called inside instance definition"));
        }

        let records = self.instances
            .get(&name)
            .cloned()
            .ok_or_else(|| Diagnostic::semantic(format!("Unable to find instance named \"{}\"", name)))?;

        let ctm = self.graphics_state.transform;

        for r in records.iter() {
            let t = ctm * r.binding().transform;
            self.write_entity(r, &t);
        }

        Ok(())
    }

    fn material(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let kind = operand_str(op)?;

        if self.opts.skip_mat { return Ok(()); }

        if kind.is_empty() || kind == "none" || kind == "interface" {
            self.graphics_state.material = None;
            return Ok(());
        }

        // An unknown kind still binds, leaving a dangling reference.
        let name = self.next_name(Counter::Material);
        self.graphics_state.material = Some(name.clone());

        make_material(self, &name, &kind, &op.params)?;
        op.params.report_unused();

        self.named_materials.insert(name);
        Ok(())
    }

    fn make_named_material(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;

        if self.opts.skip_mat { return Ok(()); }

        let kind = op.params.find_one_string("type", "");

        if kind.is_empty() {
            return Err(Diagnostic::semantic(format!("No parameter string \"type\" found in MakeNamedMaterial \"{}\"", name)));
        }

        if self.named_materials.contains(&name) {
            warn!("Named material \"{}\" redefined", name);
        }

        make_material(self, &name, &kind, &op.params)?;
        op.params.report_unused();

        self.named_materials.insert(name);
        Ok(())
    }

    fn named_material(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;

        if self.opts.skip_mat { return Ok(()); }

        if !self.named_materials.contains(&name) {
            return Err(Diagnostic::semantic(format!("NamedMaterial \"{}\" unknown", name)));
        }

        self.graphics_state.material = Some(name);
        Ok(())
    }

    fn texture(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        if self.opts.skip_tex { return Ok(()); }

        make_texture(self, op)?;
        op.params.report_unused();
        Ok(())
    }

    fn light_source(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let kind = operand_str(op)?;

        if self.opts.skip_light { return Ok(()); }

        make_light(self, &kind, &op.params)?;
        op.params.report_unused();
        Ok(())
    }

    fn area_light_source(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let kind = operand_str(op)?;

        if self.opts.skip_light { return Ok(()); }

        let name = self.next_name(Counter::Emission);
        self.graphics_state.area_light = Some(name.clone());

        make_area_light(self, &name, &kind, &op.params)?;
        op.params.report_unused();

        Ok(())
    }

    fn shape(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        if make_shape(self, op)? {
            op.params.report_unused();
        }

        Ok(())
    }

    fn reverse_orientation(&mut self) -> Result<(), Diagnostic> {
        self.graphics_state.reverse_orientation = !self.graphics_state.reverse_orientation;
        Ok(())
    }

    fn include_output(&mut self, resolved: &Path) -> PathBuf {
        let base = include_output_path(resolved, &self.input_dir);
        let n = self.output_names.entry(base.clone()).or_insert(0);
        *n += 1;

        if *n == 1 {
            base
        } else {
            with_suffix(&base, *n - 1)
        }
    }

    fn include(&mut self, op: &Operation) -> Result<(), Diagnostic> {
        let name = operand_str(op)?;
        let path = resolve_include(&op.file, &name, &self.include_root)
            .ok_or_else(|| Diagnostic::io(format!("Unable to find include file \"{}\"", name)))?;
        let key = absolute_path(&path);

        if self.include_stack.contains(&key) {
            return Err(Diagnostic::io(format!("Recursive include of \"{}\"", path.display())));
        }

        if self.opts.skip_repetitive_includes {
            if let Some(prev) = self.included.get(&key) {
                debug!("Skipping repeated include of {}", path.display());

                if let Some(out) = prev.clone() {
                    self.writer.write(format!("(include {})", quote(&out.to_string_lossy())));
                }

                return Ok(());
            }
        }

        let text = fs::read_to_string(&path)
            .map_err(|e| Diagnostic::io(format!("Failed to read include file \"{}\": {}", path.display(), e)))?;

        info!("Including {}", path.display());

        let output = if self.opts.single_file {
            None
        } else {
            let out = self.include_output(&key);
            let parent = std::mem::replace(&mut self.writer, Writer::new(self.opts.indent));
            self.pushed_writers.push(parent);

            Some(out)
        };

        let location = self.location.clone();
        self.include_stack.push(key.clone());
        self.translate_source(&path, &text);
        self.include_stack.pop();
        self.location = location;

        if let Some(ref out) = output {
            if let Some(parent) = self.pushed_writers.pop() {
                let child = std::mem::replace(&mut self.writer, parent);
                self.files.push(OutputFile { path: out.clone(), contents: child.into_string() });
            }

            self.writer.write(format!("(include {})", quote(&out.to_string_lossy())));
        }

        self.included.insert(key, output);
        Ok(())
    }

    /// Emits the deferred camera, closes the scene and hands back every
    /// generated file.
    pub fn finish(mut self) -> Translation {
        if let Some(name) = self.current_instance.take() {
            self.report(Diagnostic::semantic(format!("Object \"{}\" is missing ObjectEnd", name)));
        }

        if let Some(cam) = self.camera.take() {
            let aspect = cam.frame_aspect.or(self.film_aspect).unwrap_or(1.0);
            self.writer.write(":camera 'Camera'");
            cameras::write_camera(&mut self.writer, &cam, aspect);
        }

        if !self.opts.skip_world {
            self.writer.end();
        }

        let mut files = vec![OutputFile { path: self.main_output, contents: self.writer.into_string() }];
        files.extend(self.files);

        Translation {
            files,
            meshes: self.meshes,
            diagnostics: self.diagnostics
        }
    }
}
