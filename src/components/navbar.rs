use kstring::KString;

use crate::component::{Component, Classes};

pub const NAVBAR_CLASSES: &str = "bg-white p-4 border-b border-slate-300";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: KString,
    pub text: KString,
}

impl NavItem {
    pub fn new(href: &str, text: &str) -> NavItem {
        NavItem {
            href: KString::from_ref(href),
            text: KString::from_ref(text),
        }
    }
}

/// A navigation bar with the site title linking to `/`, followed by
/// one link per item, in the given order.
#[derive(Debug, Clone)]
pub struct NavBar {
    html: String,
}

impl NavBar {
    pub fn new(title: &str, items: &[NavItem], classes: &Classes) -> NavBar {
        let classes = classes.resolve(NAVBAR_CLASSES);
        let items_html: String = items.iter().map(|NavItem { href, text }| {
            format!("<li class='mr-6'><a class='text-slate-800 hover:text-slate-500' \
                     href='{href}'>{text}</a></li>")
        }).collect();
        NavBar {
            html: format!("
            <nav class='{classes}'>
                <div class='flex items-center'>
                    <a class='text-2xl font-semibold mr-6 text-slate-800' href='/'>{title}</a>
                    <ul class='flex'>{items_html}</ul>
                </div>
            </nav>
        ")
        }
    }
}

impl Component for NavBar {
    fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_navbar_items_in_order() {
        let nav = NavBar::new("Site",
                              &[NavItem::new("/a", "A"), NavItem::new("/b", "B")],
                              &Classes::default());
        let html = nav.html();
        assert!(html.contains("<nav class='bg-white p-4 border-b border-slate-300'>"));
        assert_eq!(html.matches("<li ").count(), 2);
        let a = html.find("<li class='mr-6'><a class='text-slate-800 hover:text-slate-500' \
                           href='/a'>A</a></li>").expect("item a");
        let b = html.find("<li class='mr-6'><a class='text-slate-800 hover:text-slate-500' \
                           href='/b'>B</a></li>").expect("item b");
        assert!(a < b);
        assert!(html.contains("href='/'>Site</a>"));
    }

    #[test]
    fn t_navbar_exact_markup() {
        let nav = NavBar::new("Site", &[NavItem::new("/a", "A")], &Classes::custom("nav"));
        assert_eq!(nav.html(), concat!(
            "\n",
            "            <nav class='nav'>\n",
            "                <div class='flex items-center'>\n",
            "                    <a class='text-2xl font-semibold mr-6 text-slate-800' \
             href='/'>Site</a>\n",
            "                    <ul class='flex'><li class='mr-6'><a class='text-slate-800 \
             hover:text-slate-500' href='/a'>A</a></li></ul>\n",
            "                </div>\n",
            "            </nav>\n",
            "        "));
    }

    #[test]
    fn t_navbar_empty() {
        let nav = NavBar::new("Site", &[], &Classes::custom("nav"));
        assert!(nav.html().contains("<ul class='flex'></ul>\n"));
    }

    #[test]
    fn t_navbar_additional_classes() {
        let nav = NavBar::new("Site", &[], &Classes::additional("sticky top-0"));
        assert!(nav.html().contains(
            "<nav class='bg-white p-4 border-b border-slate-300 sticky top-0'>"));
    }
}
