//! Lexical path handling for resource rewriting.
//!
//! When a file is transcluded, resources it references by relative path
//! (images, code-include targets) must stay resolvable from the top-level
//! document's working directory. These helpers rebase such paths onto the
//! included file's directory without touching the filesystem, so rewriting
//! works for resources that do not exist yet (generated figures, build
//! outputs).

use std::path::{Component, Path, PathBuf};
use url::Url;

/// True when the target is a URL with an explicit scheme (`https://...`,
/// `data:`), which must never be treated as a filesystem path.
pub fn is_remote(target: &str) -> bool {
    Url::parse(target).is_ok()
}

/// True when the target is a relative filesystem path subject to rebasing.
pub fn is_relative(target: &str) -> bool {
    !is_remote(target) && Path::new(target).is_relative()
}

/// Normalize a path lexically: drop `.` components and fold `..` into the
/// preceding component where one exists. Leading `..` components (escaping
/// the base) are kept as-is.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

/// Join a relative target onto a base directory and normalize the result.
/// Remote and absolute targets are returned unchanged.
pub fn rebase(base_dir: &Path, target: &str) -> String {
    if !is_relative(target) {
        return target.to_string();
    }
    normalize(&base_dir.join(target))
        .to_string_lossy()
        .into_owned()
}
