//! Route composer: base path × sub-path → normalized absolute routes.

use routemap_core::types::{HttpMethod, RouteRecord};

use super::types::PathSet;

/// Join a base path and a sub-path into a normalized absolute path.
///
/// The result starts with `/` and, unless it is exactly `/`, does not end
/// with one. Doubled slashes from the join are collapsed in a single
/// non-overlapping pass.
pub fn join_paths(base: &str, sub: &str) -> String {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        sub.trim_start_matches('/')
    );
    let mut path = joined.replace("//", "/");
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// One record per (base fragment × sub fragment), base-major.
pub fn compose_routes(
    base_paths: &PathSet,
    method: HttpMethod,
    sub_paths: &PathSet,
    source: &str,
) -> Vec<RouteRecord> {
    let mut routes = Vec::with_capacity(base_paths.len() * sub_paths.len());
    for base in base_paths.iter() {
        for sub in sub_paths.iter() {
            routes.push(RouteRecord {
                method,
                path: join_paths(base, sub),
                source: source.to_string(),
            });
        }
    }
    routes
}
