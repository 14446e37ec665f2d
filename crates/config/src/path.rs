use relative_path::{Component, RelativePath};

/// Check that `path` names a location inside the project.
///
/// Returns a description of the first problem found.
pub fn check_rel_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path must not be empty".to_owned());
    }
    if let Some(c) = path.chars().find(|c| c.is_control()) {
        return Err(format!("path contains disallowed character {c:?}"));
    }
    if path.starts_with('/') || path.starts_with('\\') || std::path::Path::new(path).is_absolute()
    {
        return Err(format!("`{path}` must be relative to the project root"));
    }

    let mut depth = 0_usize;
    for component in RelativePath::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| format!("`{path}` escapes the project root"))?;
            }
            Component::Normal(_) => depth += 1,
        }
    }

    Ok(())
}

/// Whether `path` resolves to the project root itself (`.`, `./`, `a/..`).
pub fn is_project_root(path: &str) -> bool {
    RelativePath::new(path).normalize().as_str().is_empty()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_rel_path_plain() {
        assert_eq!(check_rel_path("static/"), Ok(()));
        assert_eq!(check_rel_path("rss/index.xml"), Ok(()));
    }

    #[test]
    fn check_rel_path_leading_cur_dir() {
        assert_eq!(
            check_rel_path("./images/2016/12/header-background.jpg"),
            Ok(())
        );
    }

    #[test]
    fn check_rel_path_empty() {
        assert!(check_rel_path("").is_err());
    }

    #[test]
    fn check_rel_path_absolute() {
        let actual = check_rel_path("/var/www").unwrap_err();
        assert!(actual.contains("relative"), "{actual}");
    }

    #[test]
    fn check_rel_path_control_char() {
        assert!(check_rel_path("out\0put").is_err());
        assert!(check_rel_path("out\nput").is_err());
    }

    #[test]
    fn check_rel_path_parent_inside() {
        assert_eq!(check_rel_path("output/../static"), Ok(()));
    }

    #[test]
    fn check_rel_path_escapes() {
        let actual = check_rel_path("../static").unwrap_err();
        assert!(actual.contains("escapes"), "{actual}");
    }

    #[test]
    fn is_project_root_variants() {
        assert!(is_project_root("."));
        assert!(is_project_root("./"));
        assert!(is_project_root("output/.."));
        assert!(!is_project_root("output/"));
    }
}
