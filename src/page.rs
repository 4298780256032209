//! A full document made from already rendered components.

use crate::component::Component;
use crate::template_store::{Bindings, TemplateError, TemplateStore};

pub const DEFAULT_TEMPLATE: &str = "base.html";

#[derive(Debug, Clone)]
pub struct Page {
    html: String,
}

impl Page {
    /// Concatenate the HTML of `components` in order (no separator)
    /// and render it as `body`, together with `title`, through the
    /// template `template_name`.
    pub fn render(
        templates: &TemplateStore,
        template_name: &str,
        title: &str,
        components: &[&dyn Component],
    ) -> Result<Page, TemplateError> {
        let body: String = components.iter().map(|c| c.html()).collect();
        let template = templates.get_template(template_name)?;
        Ok(Page {
            html: template.render(&Bindings { title, body: &body })?
        })
    }

    /// Render through `DEFAULT_TEMPLATE`.
    pub fn with_default_template(
        templates: &TemplateStore,
        title: &str,
        components: &[&dyn Component],
    ) -> Result<Page, TemplateError> {
        Page::render(templates, DEFAULT_TEMPLATE, title, components)
    }
}

impl Component for Page {
    fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Classes;
    use crate::components::{button::Button, heading::Heading};

    fn templates() -> TemplateStore {
        TemplateStore::from_raw([
            ("base.html", "[{{ title }}]{{ body }}[end]"),
        ]).expect("valid template")
    }

    #[test]
    fn t_body_is_concatenation() {
        let heading = Heading::new("Hi", 3, &Classes::custom("h"));
        let button = Button::new("Go", &Classes::custom("b"));
        let page = Page::render(&templates(), "base.html", "T",
                                &[&heading, &button]).expect("renders");
        assert_eq!(page.html(),
                   format!("[T]{}{}[end]", heading.html(), button.html()));
        assert_eq!(page.html(),
                   "[T]<h3 class='h'>Hi</h3><button class='b'>Go</button>[end]");
    }

    #[test]
    fn t_empty_components() {
        let page = Page::with_default_template(&templates(), "Empty", &[])
            .expect("renders");
        assert_eq!(page.html(), "[Empty][end]");
    }

    #[test]
    fn t_missing_template() {
        assert!(matches!(Page::render(&templates(), "nope.html", "T", &[]),
                         Err(TemplateError::NotFound { .. })));
    }

    #[test]
    fn t_pages_nest() {
        let inner = Page::with_default_template(&templates(), "in", &[])
            .expect("renders");
        let outer = Page::with_default_template(&templates(), "out", &[&inner])
            .expect("renders");
        assert_eq!(outer.html(), "[out][in][end][end]");
    }
}
