//! Path template helpers.

/// Extracts parameter names from a path template.
///
/// ## Examples
///
/// ```
/// use catalog_define::path::extract_path_params;
///
/// let params = extract_path_params("/catalogs/{catalog_identifier}/offerings/{offering_id}");
/// assert_eq!(params, vec!["catalog_identifier", "offering_id"]);
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut pos = 0;

    for (idx, c) in path.char_indices() {
        if c == '{' {
            pos = idx + 1;
        } else if c == '}' && pos > 0 {
            let param = &path[pos..idx];
            if !param.is_empty() {
                params.push(param);
            }
            pos = 0;
        }
    }

    params
}

/// Substitutes path parameters with their values.
///
/// The template is scanned once, left to right. Values are inserted
/// verbatim and never scanned again, so a value that looks like a
/// placeholder stays literal. Percent-encoding is the caller's job.
///
/// ## Examples
///
/// ```
/// use catalog_define::path::substitute_path_params;
///
/// let path = substitute_path_params("/catalogs/{catalog_identifier}", &[("catalog_identifier", "abc")]);
/// assert_eq!(path, "/catalogs/abc");
/// ```
pub fn substitute_path_params(path: &str, params: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|idx| open + idx) else {
            break;
        };
        let name = &rest[open + 1..close];
        result.push_str(&rest[..open]);
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[open..=close]),
        }
        rest = &rest[close + 1..];
    }

    result.push_str(rest);
    result
}

/// Returns `true` when every `{` has a matching `}` and nothing nests.
pub fn is_balanced(path: &str) -> bool {
    let mut open = false;
    for c in path.chars() {
        match c {
            '{' if open => return false,
            '{' => open = true,
            '}' if !open => return false,
            '}' => open = false,
            _ => {}
        }
    }
    !open
}

/// Returns `true` if the path still contains a `{placeholder}`.
pub fn has_placeholders(path: &str) -> bool {
    !extract_path_params(path).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_none() {
        assert!(extract_path_params("/catalogs").is_empty());
    }

    #[test]
    fn extract_ordered() {
        let params = extract_path_params(
            "/catalogs/{catalog_identifier}/offerings/{offering_id}/publish/{approval_type}/{approved}",
        );
        assert_eq!(
            params,
            vec!["catalog_identifier", "offering_id", "approval_type", "approved"]
        );
    }

    #[test]
    fn substitute_multiple() {
        let path = substitute_path_params(
            "/catalogs/{catalog_identifier}/objects/{object_identifier}",
            &[("catalog_identifier", "c1"), ("object_identifier", "o1")],
        );
        assert_eq!(path, "/catalogs/c1/objects/o1");
    }

    #[test]
    fn substitute_leaves_unknown_placeholders() {
        let path = substitute_path_params("/repo/{type}/charts", &[("other", "x")]);
        assert_eq!(path, "/repo/{type}/charts");
        assert!(has_placeholders(&path));
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let path = substitute_path_params(
            "/catalogs/{catalog_identifier}/offerings/{offering_id}",
            &[("catalog_identifier", "{offering_id}"), ("offering_id", "o1")],
        );
        assert_eq!(path, "/catalogs/{offering_id}/offerings/o1");
    }

    #[test]
    fn balanced_templates() {
        assert!(is_balanced("/versions/{version_loc_id}/install"));
        assert!(!is_balanced("/versions/{version_loc_id/install"));
        assert!(!is_balanced("/versions/version_loc_id}/install"));
        assert!(!is_balanced("/versions/{{version_loc_id}}"));
    }
}
