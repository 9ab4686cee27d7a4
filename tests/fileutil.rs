
#[cfg(test)]
mod fileutil {
    use std::fs;
    use std::path::PathBuf;
    use pbrt2prc::core::fileutil::{has_extension, resolve_include, resolve_filename, include_root};

    #[test]
    fn has_extention() {
        assert!(has_extension("foo.ply", "ply"));
        assert!(has_extension("dir/foo.pbrt", "pbrt"));
        assert!(!has_extension("foo", "ply"));
    }

    #[test]
    fn includes_prefer_the_referring_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(dir.path().join("scene")).unwrap();
        fs::create_dir_all(&root).unwrap();

        let main = dir.path().join("scene/main.pbrt");
        fs::write(&main, "").unwrap();
        fs::write(dir.path().join("scene/a.pbrt"), "").unwrap();
        fs::write(root.join("a.pbrt"), "").unwrap();
        fs::write(root.join("b.pbrt"), "").unwrap();

        let a = resolve_include(&main, "a.pbrt", &root).unwrap();
        let b = resolve_include(&main, "b.pbrt", &root).unwrap();

        assert_eq!(a.file_name(), Some(std::ffi::OsStr::new("a.pbrt")));
        assert!(a.parent().unwrap().ends_with("scene"));
        assert!(b.parent().unwrap().ends_with("root"));
        assert!(resolve_include(&main, "c.pbrt", &root).is_none());
    }

    #[test]
    fn unresolved_filenames_sit_next_to_the_scene() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("main.pbrt");
        fs::write(&main, "").unwrap();

        let p = resolve_filename(&main, "textures/sky.exr", &PathBuf::from("/nonexistent"));

        assert!(p.ends_with("textures/sky.exr"));
        assert!(p.is_absolute());
    }

    #[test]
    fn include_root_applies_offset() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("main.pbrt");
        fs::write(&main, "").unwrap();

        let root = include_root(&main, &PathBuf::from("../shared"));

        assert!(root.ends_with("shared"));
        assert_eq!(root.parent(), dir.path().canonicalize().unwrap().parent());
    }
}
