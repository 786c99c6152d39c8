//! Spring MVC endpoint extractor (annotation-based).

use routemap_core::config::PathPolicy;
use routemap_core::types::RouteRecord;

use super::annotations::extract_annotations;
use super::compose::compose_routes;
use super::path_args::parse_paths;
use super::types::PathSet;

/// Extracts routes from one controller's source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringExtractor {
    policy: PathPolicy,
}

impl SpringExtractor {
    pub fn new(policy: PathPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PathPolicy {
        self.policy
    }

    /// Every route declared in `content`, in declaration order.
    ///
    /// `source` is recorded verbatim on each route.
    pub fn extract(&self, content: &str, source: &str) -> Vec<RouteRecord> {
        let annotations = extract_annotations(content);

        let base_paths = annotations
            .base
            .as_ref()
            .map(|base| parse_paths(&base.args, self.policy))
            .unwrap_or_else(PathSet::root);

        let mut routes = Vec::new();
        for found in &annotations.methods {
            let Some(method) = found.kind.http_method() else {
                continue;
            };
            let sub_paths = parse_paths(&found.args, self.policy);
            routes.extend(compose_routes(&base_paths, method, &sub_paths, source));
        }
        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routemap_core::types::HttpMethod;

    fn paths(routes: &[RouteRecord]) -> Vec<String> {
        routes
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    #[test]
    fn test_widget_controller() {
        let src = r#"
@RestController
@RequestMapping("/widgets")
public class WidgetController {
    @GetMapping("/{id}")
    public Widget get(@PathVariable long id) { return null; }
}
"#;
        let routes = SpringExtractor::default().extract(src, "backend/WidgetController.java");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, HttpMethod::Get);
        assert_eq!(routes[0].path, "/widgets/{id}");
        assert_eq!(routes[0].source, "backend/WidgetController.java");
    }

    #[test]
    fn test_no_base_and_no_args_is_root() {
        let src = "public class RootController {\n    @PostMapping\n    public void post() {}\n}";
        let routes = SpringExtractor::default().extract(src, "RootController.java");
        assert_eq!(paths(&routes), vec!["POST /"]);
    }

    #[test]
    fn test_multiple_base_literals_all_policy() {
        let src = r#"@RequestMapping({"/a","/b"})
class AliasController {
    @GetMapping("/x") void x() {}
}"#;
        let routes = SpringExtractor::new(PathPolicy::AllLiterals).extract(src, "A.java");
        assert_eq!(paths(&routes), vec!["GET /a/x", "GET /b/x"]);
    }

    #[test]
    fn test_multiple_base_literals_first_policy() {
        let src = r#"@RequestMapping({"/a","/b"})
class AliasController {
    @GetMapping({"/x", "/y"}) void x() {}
}"#;
        let routes = SpringExtractor::new(PathPolicy::FirstLiteral).extract(src, "A.java");
        assert_eq!(paths(&routes), vec!["GET /a/x"]);
    }

    #[test]
    fn test_all_verbs_in_order() {
        let src = r#"
@RequestMapping(value = "/api/files/")
class FileController {
    @GetMapping("") void list() {}
    @PostMapping(path = "/upload", consumes = "multipart/form-data") void upload() {}
    @PutMapping("/{id}/") void put() {}
    @DeleteMapping(value = {"/{id}", "/by-name/{name}"}) void delete() {}
    @PatchMapping
    void patch() {}
}
"#;
        let routes = SpringExtractor::default().extract(src, "FileController.java");
        assert_eq!(
            paths(&routes),
            vec![
                "GET /api/files",
                "POST /api/files/upload",
                "PUT /api/files/{id}",
                "DELETE /api/files/{id}",
                "DELETE /api/files/by-name/{name}",
                "PATCH /api/files",
            ]
        );
    }

    #[test]
    fn test_escaped_quote_in_path() {
        let src = r#"@GetMapping("/items/\"special\"") void f() {}"#;
        let routes = SpringExtractor::default().extract(src, "I.java");
        assert_eq!(routes[0].path, "/items/\"special\"");
    }

    #[test]
    fn test_base_only_contributes_nothing() {
        let src = r#"@RequestMapping("/api") class EmptyController {}"#;
        assert!(SpringExtractor::default().extract(src, "E.java").is_empty());
    }
}
