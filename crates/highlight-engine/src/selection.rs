// Detail-card selection state. At most one annotation is open at a time;
// tapping a highlight replaces whatever was open before it.

use shared_types::Annotation;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// No detail card is showing.
    #[default]
    Closed,
    /// The detail card for this annotation is showing.
    Open(Annotation),
}

impl Selection {
    /// Open the detail card for an annotation, replacing any previous one.
    pub fn select(&mut self, annotation: Annotation) {
        *self = Selection::Open(annotation);
    }

    /// Close the detail card. Safe to call when nothing is open.
    pub fn dismiss(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// The annotation currently showing, if any.
    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            Selection::Closed => None,
            Selection::Open(annotation) => Some(annotation),
        }
    }
}
