//! Named page templates, loaded once from a directory and rendered
//! with Tera.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use serde::Serialize;
use tera::Tera;

use crate::easy_fs::{easy_filepaths_in_dir, FileKind};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template directory {0:?} does not exist")]
    MissingDir(PathBuf),
    #[error("reading templates from {dir:?}: {cause:#}")]
    Read {
        dir: PathBuf,
        cause: anyhow::Error,
    },
    #[error("loading templates from {dir:?}: {source}")]
    Load {
        dir: PathBuf,
        source: tera::Error,
    },
    #[error("template {name:?} not found")]
    NotFound { name: String },
    #[error("rendering template {name:?}: {source}")]
    Render {
        name: String,
        source: tera::Error,
    },
}

/// The values a page template is rendered with. Neither is escaped;
/// `body` is expected to be ready-made HTML.
#[derive(Debug, Clone, Serialize)]
pub struct Bindings<'t> {
    pub title: &'t str,
    pub body: &'t str,
}

/// Read-only after construction; clones share the loaded templates.
///
/// Like Jinja2, a single trailing newline is removed from each
/// template source. Unlike Jinja2, a template using a variable other
/// than those in `Bindings` fails to render (`TemplateError::Render`)
/// instead of rendering it as empty.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    tera: Arc<Tera>,
}

fn strip_trailing_newline(source: &str) -> &str {
    source.strip_suffix("\r\n")
        .or_else(|| source.strip_suffix('\n'))
        .or_else(|| source.strip_suffix('\r'))
        .unwrap_or(source)
}

/// Collect (name, source) of the `*.html` files below `dir`, names
/// prefixed with `name_prefix`.
fn collect_templates(
    dir: &Path,
    name_prefix: &str,
    out: &mut Vec<(String, String)>,
) -> anyhow::Result<()> {
    for entry in easy_filepaths_in_dir(dir.to_path_buf())? {
        let (path, kind) = entry?;
        let filename = path.file_name().and_then(|f| f.to_str()).ok_or_else(
            || anyhow!("file name is not unicode: {:?}", path))?;
        let name = format!("{name_prefix}{filename}");
        match kind {
            FileKind::Dir => collect_templates(&path, &format!("{name}/"), out)?,
            FileKind::File if filename.ends_with(".html") => {
                let source = fs::read_to_string(&path).with_context(
                    || anyhow!("reading template {:?}", path))?;
                out.push((name, source));
            }
            _ => ()
        }
    }
    Ok(())
}

impl TemplateStore {
    /// Load all `*.html` files below `dir`, named by their path
    /// relative to it (e.g. `base.html`).
    pub fn open(dir: impl AsRef<Path>) -> Result<TemplateStore, TemplateError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(TemplateError::MissingDir(dir.into()))
        }
        let mut templates = Vec::new();
        collect_templates(dir, "", &mut templates).map_err(
            |cause| TemplateError::Read { dir: dir.into(), cause })?;
        TemplateStore::build(
            templates.iter().map(|(name, source)| (name.as_str(), source.as_str())),
            dir)
    }

    /// Build from templates given as (name, source) pairs.
    pub fn from_raw<'s>(
        templates: impl IntoIterator<Item = (&'s str, &'s str)>
    ) -> Result<TemplateStore, TemplateError> {
        TemplateStore::build(templates, Path::new(""))
    }

    fn build<'s>(
        templates: impl IntoIterator<Item = (&'s str, &'s str)>,
        dir: &Path,
    ) -> Result<TemplateStore, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            templates.into_iter()
                .map(|(name, source)| (name, strip_trailing_newline(source))))
            .map_err(|source| TemplateError::Load { dir: dir.into(), source })?;
        Ok(TemplateStore::from_tera(tera))
    }

    fn from_tera(mut tera: Tera) -> TemplateStore {
        // Bindings are inserted raw, `body` carries markup.
        tera.autoescape_on(vec![]);
        TemplateStore { tera: Arc::new(tera) }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }

    pub fn get_template<'s>(&'s self, name: &str) -> Result<Template<'s>, TemplateError> {
        if self.names().any(|n| n == name) {
            Ok(Template { store: self, name: name.into() })
        } else {
            Err(TemplateError::NotFound { name: name.into() })
        }
    }
}

/// A template known to exist in its store.
#[derive(Debug)]
pub struct Template<'s> {
    store: &'s TemplateStore,
    name: String,
}

impl<'s> Template<'s> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        let context = tera::Context::from_serialize(bindings).map_err(
            |source| TemplateError::Render { name: self.name.clone(), source })?;
        self.store.tera.render(&self.name, &context).map_err(
            |source| TemplateError::Render { name: self.name.clone(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TemplateStore {
        TemplateStore::from_raw([
            ("base.html", "<title>{{ title }}</title><body>{{ body }}</body>"),
        ]).expect("valid template")
    }

    #[test]
    fn t_render_raw() {
        let store = store();
        let template = store.get_template("base.html").expect("present");
        assert_eq!(template.name(), "base.html");
        assert_eq!(template.render(&Bindings { title: "A & B", body: "<p>x</p>" })
                   .expect("renders"),
                   "<title>A & B</title><body><p>x</p></body>");
    }

    #[test]
    fn t_not_found() {
        let store = store();
        match store.get_template("missing.html") {
            Err(TemplateError::NotFound { name }) => assert_eq!(name, "missing.html"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn t_syntax_error() {
        assert!(matches!(TemplateStore::from_raw([("bad.html", "{{ title")]),
                         Err(TemplateError::Load { .. })));
    }

    #[test]
    fn t_one_trailing_newline_dropped() {
        let store = TemplateStore::from_raw([
            ("a.html", "{{ title }}\n"),
            ("b.html", "{{ title }}\n\n"),
            ("c.html", "{{ title }}\r\n"),
        ]).expect("valid templates");
        let render = |name| store.get_template(name).expect("present")
            .render(&Bindings { title: "T", body: "" }).expect("renders");
        assert_eq!(render("a.html"), "T");
        assert_eq!(render("b.html"), "T\n");
        assert_eq!(render("c.html"), "T");
    }

    #[test]
    fn t_undefined_variable_fails() {
        let store = TemplateStore::from_raw([("a.html", "{{ extra }}")])
            .expect("valid template");
        let template = store.get_template("a.html").expect("present");
        assert!(matches!(template.render(&Bindings { title: "T", body: "" }),
                         Err(TemplateError::Render { .. })));
    }

    #[test]
    fn t_open_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        let store = TemplateStore::open(&dir).expect("templates dir loads");
        assert!(store.names().any(|n| n == "base.html"));
        let page = store.get_template("base.html").expect("present")
            .render(&Bindings { title: "T", body: "" }).expect("renders");
        assert!(page.ends_with("</html>"));
        assert!(matches!(TemplateStore::open(dir.join("nonexistent")),
                         Err(TemplateError::MissingDir(_))));
    }
}
