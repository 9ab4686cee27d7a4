use std::path::{Component, Path, PathBuf};
use log::debug;

/// Absolute form of `path`. Falls back to joining with the current
/// directory when the file does not exist.
pub fn absolute_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();

    if let Ok(p) = path.canonicalize() {
        return p;
    }

    if path.is_absolute() {
        normalize(path)
    } else {
        std::env::current_dir()
            .map(|d| normalize(&d.join(path)))
            .unwrap_or_else(|_| normalize(path))
    }
}

pub fn directory_containing<P: AsRef<Path>>(path: P) -> PathBuf {
    absolute_path(path)
        .parent()
        .map(|p| p.to_owned())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Removes `.` and resolves `..` without touching the file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for c in path.components() {
        match c {
            Component::CurDir    => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    _                          => false
                };

                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            c                    => out.push(c.as_os_str())
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Directory fallback for includes: the input's directory joined with the
/// configured offset.
pub fn include_root<P: AsRef<Path>>(input: P, offset: &Path) -> PathBuf {
    let root = normalize(&directory_containing(input).join(offset));
    debug!("Set include root to {}", root.display());

    root
}

/// Finds a file named by a scene directive. Absolute names are taken as
/// they are; relative ones are tried next to the referring file, then
/// below the include root.
pub fn resolve_include(from_file: &Path, name: &str, include_root: &Path) -> Option<PathBuf> {
    let p = Path::new(name);

    if p.is_absolute() {
        return if p.is_file() { Some(p.to_owned()) } else { None };
    }

    let local = directory_containing(from_file).join(p);
    if local.is_file() {
        return Some(normalize(&local));
    }

    let rooted = include_root.join(p);
    if rooted.is_file() {
        return Some(normalize(&rooted));
    }

    None
}

/// Like `resolve_include` but never fails: an unresolved name is placed
/// next to the referring file.
pub fn resolve_filename(from_file: &Path, name: &str, include_root: &Path) -> PathBuf {
    resolve_include(from_file, name, include_root)
        .unwrap_or_else(|| {
            let p = Path::new(name);

            if p.is_absolute() {
                p.to_owned()
            } else {
                normalize(&directory_containing(from_file).join(p))
            }
        })
}

pub fn has_extension<P: AsRef<Path>>(name: P, ext: &str) -> bool {
    name
        .as_ref()
        .extension()
        .map(|x| x == ext)
        .unwrap_or(false)
}

/// Output file for an included scene file, relative to the output
/// directory. Mirrors the path of `resolved` below `base` (the main
/// input's directory) with a `.prc` extension. Files outside `base` keep
/// only their file name.
pub fn include_output_path(resolved: &Path, base: &Path) -> PathBuf {
    let mut out: PathBuf = match resolved.strip_prefix(base) {
        Ok(rel) => rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s),
                _                    => None
            })
            .collect(),
        Err(_)  => resolved.file_name().map(PathBuf::from).unwrap_or_default()
    };

    if out.as_os_str().is_empty() {
        out = PathBuf::from("include");
    }

    out.set_extension("prc");
    out
}

/// Inserts `_n` before the extension: `a/b.prc` becomes `a/b_2.prc`.
pub fn with_suffix(path: &Path, n: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{}_{}", stem, n);

    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    path.with_file_name(name)
}
