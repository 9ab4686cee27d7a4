
#[cfg(test)]
mod scenes {
    use pretty_assertions::assert_eq;
    use approx::assert_relative_eq;
    use pbrt2prc::core::pbrt::{Float, Options};
    use pbrt2prc::core::diagnostic::DiagnosticKind;
    use pbrt2prc::pbrtparser::pbrtparser::pbrt_parse_str;

    fn translate(text: &str) -> pbrt2prc::core::operator::Translation {
        pbrt_parse_str(text, &Options::default())
    }

    /// Value following `key` on its line, e.g. `:width 1.5`.
    fn field(out: &str, key: &str) -> Float {
        out.lines()
            .map(|l| l.trim())
            .find(|l| l.starts_with(key))
            .and_then(|l| l[key.len()..].trim().parse::<Float>().ok())
            .unwrap()
    }

    #[test]
    fn translated_sphere() {
        let t = translate("Translate 1 0 0\nShape \"sphere\" \"float radius\" 2.0");

        assert!(t.diagnostics.is_empty());
        assert_eq!(t.main(), "(scene
\t(entity
\t\t:name 'shape_0'
\t\t:type 'sphere'
\t\t:radius 2.0
\t\t:transform [1.0,0.0,0.0,1.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]
\t)
)
");
    }

    #[test]
    fn missing_include_changes_nothing_else() {
        let body = "WorldBegin\nShape \"sphere\"\n";
        let with = translate(&format!("{}Include \"does/not/exist.pbrt\"\nShape \"sphere\" \"float radius\" 3\n", body));
        let without = translate(&format!("{}Shape \"sphere\" \"float radius\" 3\n", body));

        assert_eq!(with.diagnostics.len(), 1);
        assert_eq!(with.diagnostics[0].kind, DiagnosticKind::Io);
        assert_eq!(with.diagnostics[0].line, Some(3));
        assert_eq!(with.main(), without.main());
        assert_eq!(with.files.len(), 1);
    }

    #[test]
    fn extra_attribute_end_keeps_going() {
        let t = translate(r#"
AttributeBegin
AttributeEnd
AttributeBegin
AttributeEnd
AttributeEnd
AttributeBegin
Translate 0 2 0
Shape "sphere"
"#);

        let stack: Vec<_> = t.diagnostics.iter().filter(|d| d.kind == DiagnosticKind::Stack).collect();

        assert_eq!(stack.len(), 1);
        assert_eq!(t.diagnostics.len(), 1);
        assert!(t.main().contains(":transform [1.0,0.0,0.0,0.0,0.0,1.0,0.0,2.0,"));
    }

    fn camera_aspect(text: &str) -> Float {
        let t = translate(text);
        let out = t.main();

        assert!(out.contains(":camera 'Camera'"));
        field(out, ":width") / field(out, ":height")
    }

    #[test]
    fn camera_aspect_follows_film_in_any_order() {
        let film = "Film \"image\" \"integer xresolution\" 800 \"integer yresolution\" 600\n";
        let camera = "Camera \"perspective\" \"float fov\" 60\n";

        let before = camera_aspect(&format!("{}{}WorldBegin\n", film, camera));
        let after = camera_aspect(&format!("{}{}WorldBegin\n", camera, film));

        assert_relative_eq!(before, 800.0 / 600.0, epsilon = 1e-5);
        assert_relative_eq!(after, 800.0 / 600.0, epsilon = 1e-5);
    }

    #[test]
    fn bracketed_scalars_translate_the_same_in_both_modes() {
        let text = r#"
Camera "perspective" "float fov" [45] "float frameaspectratio" [2]
WorldBegin
Texture "checks" "spectrum" "checkerboard" "rgb tex1" [1 0 0] "float uscale" [4] "float vscale" [4]
Material "matte" "texture Kd" ["checks"]
Shape "sphere" "float radius" [2]
"#;

        let collapsed = pbrt_parse_str(text, &Options::default());

        let mut opts = Options::default();
        opts.collapse_all_lists = false;
        let kept = pbrt_parse_str(text, &opts);

        assert!(collapsed.diagnostics.is_empty());
        assert!(kept.diagnostics.is_empty());
        assert_eq!(kept.main(), collapsed.main());

        let out = kept.main();

        assert!(out.contains(":albedo (texture 'checks')"));
        assert!(out.contains(":radius 2.0"));
        assert_relative_eq!(field(out, ":width") / field(out, ":height"), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn frame_aspect_ratio_wins_over_film() {
        let aspect = camera_aspect(r#"
Film "image" "integer xresolution" 800 "integer yresolution" 600
Camera "perspective" "float fov" 45 "float frameaspectratio" 2
"#);

        assert_relative_eq!(aspect, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn camera_without_film_is_square() {
        assert_relative_eq!(camera_aspect("Camera \"perspective\""), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn render_settings_become_registry_entries() {
        let t = translate(r#"
Sampler "halton" "integer pixelsamples" 64
Integrator "path" "integer maxdepth" 8
Film "image" "integer xresolution" 320 "integer yresolution" 240
"#);

        assert_eq!(t.main(), "(scene
\t(registry '/renderer/common/sampler/aa/count' 64)
\t(registry '/renderer/common/max_ray_depth' 8)
\t(registry '/renderer/film/width' 320)
\t(registry '/renderer/film/height' 240)
)
");
    }

    #[test]
    fn skip_world_drops_the_scene_block() {
        let mut opts = Options::default();
        opts.skip_world = true;

        let t = pbrt_parse_str("Film \"image\"\nShape \"sphere\"", &opts);

        assert!(t.main().starts_with("(entity"));
        assert!(!t.main().contains("registry"));
    }

    #[test]
    fn instances_use_invocation_transform() {
        let t = translate(r#"
WorldBegin
Translate 5 0 0
ObjectBegin "ball"
    Shape "sphere"
ObjectEnd
Identity
Translate 0 3 0
ObjectInstance "ball"
ObjectInstance "ball"
ObjectInstance "missing"
"#);

        let out = t.main();
        let placed = ":transform [1.0,0.0,0.0,0.0,0.0,1.0,0.0,3.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]";

        assert_eq!(out.matches("(entity").count(), 2);
        assert_eq!(out.matches(placed).count(), 2);
        assert!(out.contains("'shape_1'"));
        assert_eq!(t.diagnostics.len(), 1);
    }

    #[test]
    fn skip_switches() {
        let scene = r#"
Material "matte"
LightSource "point"
Shape "sphere"
Shape "trianglemesh" "point P" [0 0 0 1 0 0 0 1 0]
Shape "curve" "point P" [0 0 0 1 1 1 2 2 2 3 3 3]
"#;

        let mut opts = Options::default();
        opts.skip_mat = true;
        opts.skip_light = true;
        opts.skip_prim = true;
        opts.skip_mesh = true;
        opts.skip_curve = true;

        let t = pbrt_parse_str(scene, &opts);

        assert_eq!(t.main(), "(scene\n)\n");
        assert!(t.diagnostics.is_empty());

        let t = translate(scene);

        assert_eq!(t.diagnostics.len(), 1);
        assert_eq!(t.diagnostics[0].kind, DiagnosticKind::Unsupported);
        assert_eq!(t.main().matches("(entity").count(), 2);
    }

    #[test]
    fn reverse_orientation_flips_normals() {
        let t = translate("ReverseOrientation\nShape \"sphere\"");

        assert!(t.main().contains(":flip_normals true"));
    }
}
