//! The page served at `/`, showing each of the components.

use kstring::KString;

use crate::component::Classes;
use crate::components::{button::Button,
                        dropdown::{Dropdown, SelectOption},
                        heading::Heading,
                        navbar::{NavBar, NavItem},
                        slider::{Slider, SliderParams},
                        text::Text};
use crate::page::{Page, DEFAULT_TEMPLATE};
use crate::template_store::{TemplateError, TemplateStore};

pub const DEMO_TITLE: &str = "Components";

pub fn demo_page(templates: &TemplateStore) -> Result<Page, TemplateError> {
    let navbar = NavBar::new(
        DEMO_TITLE,
        &[
            NavItem::new("/", "Home"),
            NavItem::new("/css/main.css", "Stylesheet"),
        ],
        &Classes::default());
    let heading = Heading::new("Server-rendered components", 1,
                               &Classes::additional("mt-6 mb-4"));
    let text = Text::new("Each component below was rendered once, on the server.",
                         &Classes::default());
    let dropdown = Dropdown::new(
        "size",
        &[
            SelectOption::new("s", "Small"),
            SelectOption::new("m", "Medium"),
            SelectOption::new("l", "Large"),
        ],
        "Size",
        &Classes::default());
    let slider = Slider::new(
        &SliderParams {
            label: KString::from_ref("Volume"),
            ..SliderParams::named("volume")
        },
        &Classes::default());
    let button = Button::new("Apply", &Classes::additional("mt-4"));
    Page::render(templates, DEFAULT_TEMPLATE, DEMO_TITLE,
                 &[&navbar, &heading, &text, &dropdown, &slider, &button])
}
