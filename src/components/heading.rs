use crate::component::{Component, Classes};

pub const HEADING_CLASSES: &str = "text-2xl font-bold";

/// `<h{level}>`; `level` is not checked to be within 1..=6.
#[derive(Debug, Clone)]
pub struct Heading {
    html: String,
}

impl Heading {
    pub fn new(text: &str, level: u32, classes: &Classes) -> Heading {
        let classes = classes.resolve(HEADING_CLASSES);
        Heading {
            html: format!("<h{level} class='{classes}'>{text}</h{level}>")
        }
    }

    /// A level 1 heading with the default classes.
    pub fn h1(text: &str) -> Heading {
        Heading::new(text, 1, &Classes::default())
    }
}

impl Component for Heading {
    fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_heading() {
        assert_eq!(Heading::h1("Title").html(),
                   "<h1 class='text-2xl font-bold'>Title</h1>");
        assert_eq!(Heading::new("Hi", 3, &Classes::default()).html(),
                   "<h3 class='text-2xl font-bold'>Hi</h3>");
    }

    #[test]
    fn t_heading_classes() {
        assert_eq!(Heading::new("Hi", 2, &Classes::additional("mb-4")).html(),
                   "<h2 class='text-2xl font-bold mb-4'>Hi</h2>");
        assert_eq!(Heading::new("Hi", 2, &Classes::custom("title")).html(),
                   "<h2 class='title'>Hi</h2>");
    }

    #[test]
    fn t_level_not_validated() {
        assert_eq!(Heading::new("x", 9, &Classes::custom("c")).html(),
                   "<h9 class='c'>x</h9>");
    }
}
