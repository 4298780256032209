//! Server-rendered HTML components, composed into pages via
//! templates and served with rouille.

pub mod warn;
pub mod component;
pub mod components {
    pub mod heading;
    pub mod button;
    pub mod text;
    pub mod navbar;
    pub mod dropdown;
    pub mod slider;
}
pub mod template_store;
pub mod page;
pub mod http_request_method;
pub mod http_response_status_codes;
pub mod webutils;
pub mod handler;
pub mod router;
pub mod apachelog;
pub mod easy_fs;
pub mod util;
pub mod config;
pub mod demo;
pub mod server;

pub use component::{Component, Classes, resolve_classes};
pub use components::{heading::Heading,
                     button::Button,
                     text::Text,
                     navbar::{NavBar, NavItem},
                     dropdown::{Dropdown, SelectOption},
                     slider::{Slider, SliderParams}};
pub use page::Page;
pub use template_store::{TemplateStore, Template, Bindings, TemplateError};
pub use webutils::component_response;
