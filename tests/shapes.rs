
#[cfg(test)]
mod shapes {
    use std::fs;
    use pretty_assertions::assert_eq;
    use pbrt2prc::core::pbrt::Options;
    use pbrt2prc::core::diagnostic::DiagnosticKind;
    use pbrt2prc::pbrtparser::pbrtparser::{pbrt_parse, pbrt_parse_str};
    use pbrt2prc::shapes::plymesh::read_ply_info;

    const QUAD: &str = r#"Shape "trianglemesh"
    "point P" [0 0 0  1 0 0  0 1 0  1 1 0]
    "float uv" [0 0  1 0  0 1  1 1]
    "integer indices" [0 1 2  2 1 3]
"#;

    #[test]
    fn small_meshes_are_inline() {
        let t = pbrt_parse_str(QUAD, &Options::default());

        assert!(t.diagnostics.is_empty());
        assert!(t.meshes.is_empty());
        assert_eq!(t.main(), "(scene
\t(mesh
\t\t:name 'mesh_0'
\t\t(attribute 'p' [0.0,0.0,0.0], [1.0,0.0,0.0], [0.0,1.0,0.0], [1.0,1.0,0.0])
\t\t(attribute 'uv' [0.0,0.0], [1.0,0.0], [0.0,1.0], [1.0,1.0])
\t\t(faces [0,1,2], [2,1,3])
\t)
\t(entity
\t\t:name 'shape_0'
\t\t:type 'mesh'
\t\t:mesh 'mesh_0'
\t\t:transform [1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]
\t)
)
");
    }

    #[test]
    fn large_meshes_become_ply_files() {
        let mut opts = Options::default();
        opts.mesh_threshold = 3;

        let t = pbrt_parse_str(QUAD, &opts);

        assert_eq!(t.meshes.len(), 1);
        assert_eq!(t.meshes[0].path.to_str(), Some("meshes/mesh_0.ply"));
        assert!(t.main().contains("\t\t:type 'ply'\n\t\t:file 'meshes/mesh_0.ply'\n"));

        let out = tempfile::tempdir().unwrap();
        t.write_to(out.path()).unwrap();

        let info = read_ply_info(&out.path().join("meshes/mesh_0.ply")).unwrap();

        assert_eq!(info.vertices, 4);
        assert_eq!(info.faces, 2);
        assert!(info.has_uvs);
        assert!(!info.has_normals);
    }

    #[test]
    fn unwritable_mesh_is_a_diagnostic() {
        let mut opts = Options::default();
        opts.mesh_threshold = 3;

        let t = pbrt_parse_str(QUAD, &opts);

        let out = tempfile::tempdir().unwrap();
        fs::create_dir_all(out.path().join("meshes/mesh_0.ply")).unwrap();

        let failed = t.write_to(out.path()).unwrap();

        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].kind, DiagnosticKind::Io);
        assert!(failed[0].message.contains("mesh_0.ply"));
        assert_eq!(fs::read_to_string(out.path().join(&t.files[0].path)).unwrap(), t.main());
    }

    #[test]
    fn plymesh_references_the_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut opts = Options::default();
        opts.mesh_threshold = 0;
        pbrt_parse_str(QUAD, &opts).write_to(dir.path()).unwrap();

        let main = dir.path().join("main.pbrt");
        fs::write(&main, "Shape \"plymesh\" \"string filename\" \"meshes/mesh_0.ply\"\n").unwrap();

        let t = pbrt_parse(&main, &Options::default()).unwrap();
        let out = t.main();

        assert!(t.diagnostics.is_empty());
        assert!(out.contains("\t\t:name 'mesh_0'\n\t\t:type 'ply'\n"));
        assert!(out.contains("mesh_0.ply'\n"));
        assert!(out.contains(":mesh 'mesh_0'"));
    }

    #[test]
    fn missing_plymesh_is_an_io_error() {
        let t = pbrt_parse_str("Shape \"plymesh\" \"string filename\" \"nowhere.ply\"", &Options::default());

        assert_eq!(t.diagnostics.len(), 1);
        assert_eq!(t.diagnostics[0].kind, DiagnosticKind::Io);
        assert!(!t.main().contains("(entity"));
    }

    #[test]
    fn broken_meshes_are_skipped() {
        let t = pbrt_parse_str(r#"
Shape "trianglemesh" "point P" [0 0 0 1 0 0]
Shape "trianglemesh" "point P" [0 0 0 1 0 0 0 1 0 1 1 1] "integer indices" [0 1 4]
Shape "trianglemesh" "integer indices" [0 1 2]
"#, &Options::default());

        assert_eq!(t.diagnostics.len(), 3);
        assert!(t.diagnostics.iter().all(|d| d.kind == DiagnosticKind::Semantic));
        assert_eq!(t.main(), "(scene\n)\n");
    }

    #[test]
    fn partial_sphere_is_written_whole() {
        let t = pbrt_parse_str("Shape \"sphere\" \"float radius\" 2 \"float phimax\" 180", &Options::default());

        assert_eq!(t.diagnostics.len(), 1);
        assert_eq!(t.diagnostics[0].kind, DiagnosticKind::Unsupported);
        assert!(t.main().contains(":radius 2.0"));
    }

    #[test]
    fn unknown_shapes_are_unsupported() {
        let t = pbrt_parse_str("Shape \"disk\"\nShape \"cylinder\"", &Options::default());

        assert_eq!(t.diagnostics.len(), 2);
        assert!(t.diagnostics.iter().all(|d| d.kind == DiagnosticKind::Unsupported));
    }
}
