use kstring::KString;

use crate::component::{Component, Classes, label_html};

pub const DROPDOWN_CLASSES: &str =
    "bg-white border border-slate-300 text-slate-800 px-3 py-2 rounded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: KString,
    pub label: KString,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> SelectOption {
        SelectOption {
            value: KString::from_ref(value),
            label: KString::from_ref(label),
        }
    }
}

/// A `<select>`, preceded by a `<label>` if `label` is non-empty.
#[derive(Debug, Clone)]
pub struct Dropdown {
    html: String,
}

impl Dropdown {
    pub fn new(
        name: &str,
        options: &[SelectOption],
        label: &str,
        classes: &Classes,
    ) -> Dropdown {
        let classes = classes.resolve(DROPDOWN_CLASSES);
        let options_html: String = options.iter().map(|SelectOption { value, label }| {
            format!("<option value='{value}'>{label}</option>")
        }).collect();
        let label_html = label_html(label, "text-slate-800");
        Dropdown {
            html: format!("
            <div class='dropdown-component'>
                {label_html}
                <select name='{name}' class='{classes}'>
                    {options_html}
                </select>
            </div>
        ")
        }
    }
}

impl Component for Dropdown {
    fn html(&self) -> &str {
        &self.html
    }
}
