//! Pure path math for server-side POSIX paths.
//!
//! Remote paths are opaque strings owned by the server; these helpers do
//! string-level joins and offsets only and never touch the local filesystem.

/// Join `name` onto `base` unless `name` is already absolute.
pub fn join(base: &str, name: &str) -> String {
    if name.starts_with('/') || base.is_empty() {
        return name.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), name)
}

/// Resolve `.` and `..` components logically.
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let joined = parts(path).join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// The offset that reaches `target` when walked from `start`.
///
/// Both paths are server-absolute; the result is relative and may climb
/// with `..` components.
pub fn relative_to(target: &str, start: &str) -> String {
    let target_parts = parts(target);
    let start_parts = parts(start);
    let common = target_parts
        .iter()
        .zip(&start_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut pieces: Vec<String> = vec!["..".to_string(); start_parts.len() - common];
    pieces.extend(target_parts.into_iter().skip(common));
    if pieces.is_empty() {
        ".".to_string()
    } else {
        pieces.join("/")
    }
}

/// Split into components, resolving `.` and `..` along the way.
/// An absolute path cannot climb above the root.
fn parts(path: &str) -> Vec<String> {
    let absolute = path.starts_with('/');
    let mut parts: Vec<String> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..".to_string());
                }
            }
            other => parts.push(other.to_string()),
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn join_appends_relative_names() {
        assert_eq!(join("/srv/objects", "widget"), "/srv/objects/widget");
    }

    #[test]
    fn join_keeps_absolute_names() {
        assert_eq!(join("/srv/objects", "/etc/motd"), "/etc/motd");
    }

    #[test]
    fn join_trims_trailing_separator() {
        assert_eq!(join("/srv/objects/", "widget"), "/srv/objects/widget");
    }

    #[test]
    fn relative_to_climbs_to_sibling_trees() {
        assert_eq!(relative_to("/srv/objects/widget", "/srv/links"), "../objects/widget");
    }

    #[test]
    fn relative_to_descends_within_start() {
        assert_eq!(relative_to("/srv/links/widget", "/srv/links"), "widget");
    }

    #[test]
    fn relative_to_same_path_is_dot() {
        assert_eq!(relative_to("/srv/links", "/srv/links"), ".");
    }

    #[test]
    fn normalize_resolves_dot_and_dotdot() {
        assert_eq!(normalize("/srv/links/../objects/./widget"), "/srv/objects/widget");
    }

    #[test]
    fn normalize_cannot_climb_above_root() {
        assert_eq!(normalize("/../../srv"), "/srv");
    }

    proptest! {
        // The offset handed to the transport must land back on the target
        // when walked from the link directory.
        #[test]
        fn offset_recomposes_onto_target(
            base in proptest::collection::vec("[a-z]{1,8}", 1..4),
            link in proptest::collection::vec("[a-z]{1,8}", 1..4),
            name in "[a-z]{1,8}",
        ) {
            let base_dir = format!("/{}", base.join("/"));
            let link_dir = format!("/{}", link.join("/"));
            let target = join(&base_dir, &name);
            let offset = relative_to(&target, &link_dir);
            prop_assert_eq!(normalize(&join(&link_dir, &offset)), normalize(&target));
        }
    }
}
