use crate::component::{Component, Classes};

pub const TEXT_CLASSES: &str = "text-base text-lg";

/// A paragraph.
#[derive(Debug, Clone)]
pub struct Text {
    html: String,
}

impl Text {
    pub fn new(text: &str, classes: &Classes) -> Text {
        let classes = classes.resolve(TEXT_CLASSES);
        Text {
            html: format!("<p class='{classes}'>{text}</p>")
        }
    }
}

impl Component for Text {
    fn html(&self) -> &str {
        &self.html
    }
}
