//! The contract shared by all components, and the class resolution
//! they build on.

use std::fmt::Debug;

use kstring::KString;

/// A unit producing an HTML fragment from typed inputs. The HTML is
/// rendered once, by the constructor of the implementing type, and
/// never changes afterwards.
///
/// None of the components escape the text or attribute values they
/// are given; callers must not pass untrusted input.
pub trait Component: Debug + Send + Sync {
    fn html(&self) -> &str;
}

/// Compute the value of a component's `class` attribute.
///
/// A non-empty `custom_classes` replaces everything else. Otherwise
/// `additional_classes` is appended to the component's defaults.
pub fn resolve_classes(
    default_classes: &str,
    additional_classes: &str,
    custom_classes: &str,
) -> String {
    if !custom_classes.is_empty() {
        return custom_classes.into()
    }
    format!("{default_classes} {additional_classes}").trim().into()
}

/// Caller supplied style classes, accepted by every component
/// constructor. `Classes::default()` leaves the defaults in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
    /// Appended to the component's default classes.
    pub additional: KString,
    /// When non-empty, used instead of the computed classes.
    pub custom: KString,
}

impl Classes {
    pub fn additional(classes: &str) -> Self {
        Classes {
            additional: KString::from_ref(classes),
            custom: KString::default(),
        }
    }

    pub fn custom(classes: &str) -> Self {
        Classes {
            additional: KString::default(),
            custom: KString::from_ref(classes),
        }
    }

    pub fn resolve(&self, default_classes: &str) -> String {
        resolve_classes(default_classes, &self.additional, &self.custom)
    }
}

/// The optional `<label>` block preceding form controls.
pub(crate) fn label_html(label: &str, text_color: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!("<label class='block text-lg font-semibold {text_color} mb-2'>{label}</label>")
    }
}
