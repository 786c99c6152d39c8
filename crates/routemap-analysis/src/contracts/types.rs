//! Types produced by the annotation extractor and path parser.

use routemap_core::types::HttpMethod;

/// Mapping annotations recognized in controller source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// Class-level base path.
    RequestMapping,
    GetMapping,
    PostMapping,
    PutMapping,
    DeleteMapping,
    PatchMapping,
}

impl AnnotationKind {
    /// Resolve an annotation name (without `@`).
    pub fn from_name(name: &str) -> Option<AnnotationKind> {
        match name {
            "RequestMapping" => Some(AnnotationKind::RequestMapping),
            "GetMapping" => Some(AnnotationKind::GetMapping),
            "PostMapping" => Some(AnnotationKind::PostMapping),
            "PutMapping" => Some(AnnotationKind::PutMapping),
            "DeleteMapping" => Some(AnnotationKind::DeleteMapping),
            "PatchMapping" => Some(AnnotationKind::PatchMapping),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnnotationKind::RequestMapping => "RequestMapping",
            AnnotationKind::GetMapping => "GetMapping",
            AnnotationKind::PostMapping => "PostMapping",
            AnnotationKind::PutMapping => "PutMapping",
            AnnotationKind::DeleteMapping => "DeleteMapping",
            AnnotationKind::PatchMapping => "PatchMapping",
        }
    }

    /// HTTP verb of a method-level annotation; `None` for the base-path kind.
    pub fn http_method(&self) -> Option<HttpMethod> {
        match self {
            AnnotationKind::RequestMapping => None,
            AnnotationKind::GetMapping => Some(HttpMethod::Get),
            AnnotationKind::PostMapping => Some(HttpMethod::Post),
            AnnotationKind::PutMapping => Some(HttpMethod::Put),
            AnnotationKind::DeleteMapping => Some(HttpMethod::Delete),
            AnnotationKind::PatchMapping => Some(HttpMethod::Patch),
        }
    }
}

/// One located annotation invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMatch {
    pub kind: AnnotationKind,
    /// Raw text between the parentheses; empty when there were none.
    pub args: String,
    /// 1-based line of the `@`.
    pub line: u32,
}

/// All mapping annotations of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAnnotations {
    /// First `@RequestMapping` in the file, if any.
    pub base: Option<AnnotationMatch>,
    /// Verb annotations in textual order.
    pub methods: Vec<AnnotationMatch>,
}

/// Ordered path fragments parsed from one annotation.
///
/// Never empty: an annotation without literals yields `[""]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet(Vec<String>);

impl PathSet {
    /// The "no path given" sentinel.
    pub fn root() -> Self {
        PathSet(vec![String::new()])
    }

    /// Build from parsed literals; no literals means [`PathSet::root`].
    pub fn from_fragments(fragments: Vec<String>) -> Self {
        if fragments.is_empty() {
            Self::root()
        } else {
            PathSet(fragments)
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PathSet {
    fn default() -> Self {
        Self::root()
    }
}
