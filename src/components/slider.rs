use kstring::KString;

use crate::component::{Component, Classes, label_html};

pub const SLIDER_CLASSES: &str = "slider bg-slate-200 appearance-none rounded h-2";

/// The fields of a `Slider`. Numbers are written out as given, no
/// check is made that `value` is within `min_value..=max_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderParams {
    pub name: KString,
    pub min_value: f64,
    pub max_value: f64,
    pub step: f64,
    pub value: f64,
    pub label: KString,
}

impl Default for SliderParams {
    fn default() -> Self {
        SliderParams {
            name: KString::default(),
            min_value: 0.,
            max_value: 100.,
            step: 1.,
            value: 50.,
            label: KString::default(),
        }
    }
}

impl SliderParams {
    pub fn named(name: &str) -> Self {
        SliderParams {
            name: KString::from_ref(name),
            ..Default::default()
        }
    }
}

/// A range input next to a display of its current value, updated in
/// the browser on every input event.
#[derive(Debug, Clone)]
pub struct Slider {
    html: String,
}

impl Slider {
    pub fn new(params: &SliderParams, classes: &Classes) -> Slider {
        let SliderParams { name, min_value, max_value, step, value, label } = params;
        let classes = classes.resolve(SLIDER_CLASSES);
        let label_html = label_html(label, "text-slate-700");
        let slider_id = slider_id(name);
        let value_display_id = value_display_id(name);
        Slider {
            html: format!(r#"
            <div class='slider-component'>
                {label_html}
                <input type='range' id='{slider_id}' name='{name}' min='{min_value}' max='{max_value}' step='{step}' value='{value}' class='{classes}' oninput="document.getElementById('{value_display_id}').innerText = this.value">
                <span id='{value_display_id}' class='ml-2'>{value}</span>
            </div>
        "#)
        }
    }
}

pub fn slider_id(name: &str) -> String {
    format!("slider_{name}")
}

pub fn value_display_id(name: &str) -> String {
    format!("value_display_{name}")
}

impl Component for Slider {
    fn html(&self) -> &str {
        &self.html
    }
}
