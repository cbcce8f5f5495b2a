use crate::foundation::error::{TrivistaError, TrivistaResult};

/// Normalize a project-relative path: forward slashes, no `.` segments, no `..`, not absolute.
pub fn normalize_rel_path(source: &str) -> TrivistaResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(TrivistaError::validation("paths must be relative"));
    }
    if s.is_empty() {
        return Err(TrivistaError::validation("path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(TrivistaError::validation("paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(TrivistaError::validation("path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Express `target` (project-relative) as seen from the directory holding `document`.
///
/// `relative_to_document("svg/texmap/a.png", "docs/scene.svg") == "../svg/texmap/a.png"`.
pub fn relative_to_document(target: &str, document: &str) -> TrivistaResult<String> {
    let target = normalize_rel_path(target)?;
    let document = normalize_rel_path(document)?;

    let target_parts: Vec<&str> = target.split('/').collect();
    let doc_parts: Vec<&str> = document.split('/').collect();
    let target_dirs = &target_parts[..target_parts.len() - 1];
    let doc_dirs = &doc_parts[..doc_parts.len() - 1];

    let common = target_dirs
        .iter()
        .zip(doc_dirs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<&str> = vec![".."; doc_dirs.len() - common];
    out.extend_from_slice(&target_parts[common..]);
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/paths.rs"]
mod tests;
