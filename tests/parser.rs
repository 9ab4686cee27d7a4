
#[cfg(test)]
mod parser {
    use pbrt2prc::core::pbrt::Options;
    use pbrt2prc::core::diagnostic::DiagnosticKind;
    use pbrt2prc::pbrtparser::pbrtparser::parse_str;
    use pbrt2prc::pbrtparser::syntax::{Action, Value};

    fn options(collapse: bool) -> Options {
        let mut opts = Options::default();
        opts.collapse_all_lists = collapse;
        opts
    }

    #[test]
    fn test_parser() {
        let input = r#"
Integrator "path" "integer maxdepth" [4]
Sampler "halton" "integer pixelsamples" [512]
PixelFilter "gaussian"
Film "image" "integer xresolution" [720] "integer yresolution" [720]
    "string filename" "ganesha.exr"

Scale -1 1 1
LookAt 328.0 40.282 245.0 328.0 10.0 0.0 -0.00212272 0.998201 -0.0599264
Camera "perspective" "float fov" [30.0]

WorldBegin
AttributeBegin
    AreaLightSource "area" "color L" [15.25 12.08 9.58]
    ReverseOrientation
    Shape "trianglemesh" "point P" [0 0 0 1 0 0 0 1 0] "integer indices" [0 1 2]
AttributeEnd
WorldEnd
"#;

        let (ops, diags) = parse_str("test.pbrt", input, &Options::default());
        let actions: Vec<Action> = ops.iter().map(|o| Action::from(o.action.as_str())).collect();

        assert!(diags.is_empty());
        assert_eq!(ops.len(), 14);
        assert_eq!(actions[2], Action::Ignored("PixelFilter".to_owned()));
        assert_eq!(actions[5], Action::LookAt);
        assert_eq!(ops[3].params.find_one_string("filename", ""), "ganesha.exr");
        assert_eq!(ops[4].operand, Some(Value::List(vec![Value::Int(-1), Value::Int(1), Value::Int(1)])));
        assert_eq!(ops[6].params.find_one_float("fov", 90.0), 30.0);
        assert_eq!(ops[11].params.find_ints("indices"), Some(vec![0, 1, 2]));
        assert_eq!(ops[13].line, 18);
    }

    #[test]
    fn single_element_operand_collapses() {
        for collapse in [true, false].iter() {
            let (ops, _) = parse_str("test.pbrt", "Foo [ 5 ]", &options(*collapse));

            assert_eq!(ops[0].operand, Some(Value::Int(5)));
        }
    }

    #[test]
    fn parameter_lists_collapse_when_enabled() {
        let (ops, _) = parse_str("test.pbrt", "Shape \"sphere\" \"float radius\" [ 2 ]", &options(true));

        assert_eq!(ops[0].params.get("radius").map(|p| p.value.clone()), Some(Value::Int(2)));
    }

    #[test]
    fn parameter_lists_stay_lists_when_disabled() {
        let (ops, _) = parse_str("test.pbrt", "Shape \"sphere\" \"float radius\" [ 2 ]", &options(false));
        let params = &ops[0].params;

        assert_eq!(params.get("radius").map(|p| p.value.clone()), Some(Value::List(vec![Value::Int(2)])));
        assert_eq!(params.find_one_float("radius", 1.0), 2.0);
    }

    #[test]
    fn unterminated_string_does_not_stop_parsing() {
        let (ops, diags) = parse_str("test.pbrt", "Shape \"sphere\n WorldBegin", &Options::default());

        assert_eq!(ops.last().map(|o| o.action.as_str()), Some("WorldBegin"));
        assert_eq!(diags[0].kind, DiagnosticKind::Lexical);
        assert_eq!(diags[0].line, Some(1));
    }
}
