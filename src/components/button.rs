use crate::component::{Component, Classes};

pub const BUTTON_CLASSES: &str =
    "bg-slate-500 hover:bg-slate-700 text-white font-bold py-2 px-3 rounded";

#[derive(Debug, Clone)]
pub struct Button {
    html: String,
}

impl Button {
    pub fn new(text: &str, classes: &Classes) -> Button {
        let classes = classes.resolve(BUTTON_CLASSES);
        Button {
            html: format!("<button class='{classes}'>{text}</button>")
        }
    }
}

impl Component for Button {
    fn html(&self) -> &str {
        &self.html
    }
}
