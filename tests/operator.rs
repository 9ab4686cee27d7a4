
#[cfg(test)]
mod operator {
    use std::path::{Path, PathBuf};
    use approx::assert_relative_eq;
    use pbrt2prc::core::pbrt::{Float, Options};
    use pbrt2prc::core::operator::{Operator, ShapeRecord};
    use pbrt2prc::core::diagnostic::DiagnosticKind;

    fn run(text: &str) -> Operator {
        let mut op = Operator::new(Options::default(), "test.pbrt", PathBuf::from("."));
        op.translate_source(Path::new("test.pbrt"), text);
        op
    }

    #[test]
    fn attribute_scopes_restore_the_transform() {
        let op = run(r#"
            Translate 1 2 3
            AttributeBegin
                Rotate 30 0 1 0
                AttributeBegin
                    Scale 2 2 2
                AttributeEnd
                TransformBegin
                    Translate 0 0 9
                TransformEnd
            AttributeEnd
        "#);

        let t = op.current_transform();

        assert_eq!(op.stack_depth(), 1);
        assert_eq!(t.m[(0, 3)], 1.0);
        assert_eq!(t.m[(1, 3)], 2.0);
        assert_eq!(t.m[(2, 3)], 3.0);
        assert!(op.diagnostics().is_empty());
    }

    #[test]
    fn scopes_restore_material_and_orientation() {
        let op = run(r#"
            Material "matte"
            AttributeBegin
                Material "mirror"
                ReverseOrientation
            AttributeEnd
        "#);

        assert_eq!(op.graphics_state().material.as_deref(), Some("material_0"));
        assert!(!op.graphics_state().reverse_orientation);
    }

    #[test]
    fn translation_round_trip() {
        let op = run("Translate 1.5 -2 3.25\nTranslate -1.5 2 -3.25");

        assert!(op.current_transform().is_identity());
    }

    #[test]
    fn rotation_round_trip() {
        let op = run("Rotate 37 1 1 0\nRotate -37 1 1 0");
        let m = op.current_transform().m;

        for r in 0..4 {
            for c in 0..4 {
                let expected: Float = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(m[(r, c)], expected, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn extra_end_is_a_single_stack_error() {
        let op = run("AttributeBegin\nAttributeEnd\nAttributeEnd\nTranslate 1 0 0");
        let diags = op.diagnostics();

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Stack);
        assert_eq!(diags[0].line, Some(3));
        assert_eq!(op.stack_depth(), 1);
        assert_eq!(op.current_transform().m[(0, 3)], 1.0);
    }

    #[test]
    fn named_coordinate_systems() {
        let op = run(r#"
            Translate 4 0 0
            CoordinateSystem "lamp"
            Identity
            CoordSysTransform "lamp"
            CoordSysTransform "nowhere"
        "#);

        assert_eq!(op.current_transform().m[(0, 3)], 4.0);
        assert!(op.coordinate_system("lamp").is_some());
        assert_eq!(op.diagnostics().len(), 1);
        assert_eq!(op.diagnostics()[0].kind, DiagnosticKind::Semantic);
    }

    #[test]
    fn camera_defines_camera_space() {
        let op = run("Translate 0 0 -5\nCamera \"perspective\"");
        let cam = op.coordinate_system("camera").unwrap();

        assert_eq!(cam.m[(2, 3)], 5.0);
    }

    #[test]
    fn degenerate_transforms_are_rejected() {
        let op = run("Scale 1 0 1\nRotate 10 0 0 0\nTranslate 1 2\nLookAt 0 0 0  0 1 0  0 1 0");

        assert_eq!(op.diagnostics().len(), 4);
        assert!(op.diagnostics().iter().all(|d| d.kind == DiagnosticKind::Semantic));
        assert!(op.current_transform().is_identity());
    }

    #[test]
    fn nested_objects_record_nothing() {
        let op = run(r#"
            ObjectBegin "outer"
                ObjectBegin "inner"
                ObjectEnd
            ObjectEnd
        "#);

        assert_eq!(op.instance("outer").map(|r| r.len()), Some(0));
        assert_eq!(op.instance("inner").map(|r| r.len()), Some(0));
        assert_eq!(op.stack_depth(), 1);
        assert_eq!(op.diagnostics().len(), 2);
        assert!(op.diagnostics().iter().all(|d| d.kind == DiagnosticKind::Semantic));

        let t = op.finish();

        assert!(!t.main().contains("(entity"));
    }

    #[test]
    fn stray_object_end_still_pops() {
        let op = run(r#"
            AttributeBegin
                Translate 1 0 0
                ObjectEnd
            Translate 0 2 0
        "#);

        assert_eq!(op.stack_depth(), 1);
        assert_eq!(op.diagnostics().len(), 1);
        assert_eq!(op.current_transform().m[(1, 3)], 2.0);
        assert_eq!(op.current_transform().m[(0, 3)], 0.0);
    }

    #[test]
    fn object_shapes_are_recorded_not_written() {
        let op = run(r#"
            Translate 5 0 0
            ObjectBegin "ball"
                Translate 0 0 1
                Shape "sphere" "float radius" 0.5
            ObjectEnd
        "#);

        let records = op.instance("ball").unwrap();

        match &records[0] {
            ShapeRecord::Sphere { radius, binding } => {
                assert_eq!(*radius, 0.5);
                assert_eq!(binding.transform.m[(0, 3)], 0.0);
                assert_eq!(binding.transform.m[(2, 3)], 1.0);
            }
            r => panic!("unexpected record {:?}", r)
        }

        assert!(!op.finish().main().contains("(entity"));
    }

    #[test]
    fn unknown_directives_are_reported() {
        let op = run("Frobnicate 1 2 3\nMakeNamedMedium \"fog\" \"string type\" \"homogeneous\"\nPixelFilter \"box\"");
        let kinds: Vec<DiagnosticKind> = op.diagnostics().iter().map(|d| d.kind).collect();

        assert_eq!(kinds, vec![DiagnosticKind::Semantic, DiagnosticKind::Unsupported]);
    }
}
