use crate::layout::Element;
use crate::layout::ElementKind;

/// A group of elements, rendered as a `div`.
#[derive(Debug, Default)]
pub struct Section {
    id: Option<String>,
    class: Option<&'static str>,
    elements: Vec<ElementKind>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Section {
        Self::default()
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: String) -> Section {
        self.id = Some(id);
        self
    }

    /// Sets the CSS class.
    pub fn with_class(mut self, class: &'static str) -> Section {
        self.class = Some(class);
        self
    }

    /// Appends an element, builder style.
    pub fn add(mut self, element: ElementKind) -> Section {
        self.elements.push(element);
        self
    }

    /// Appends an element.
    pub fn push(&mut self, element: ElementKind) {
        self.elements.push(element);
    }

    /// The CSS class, if any.
    pub fn class(&self) -> Option<&str> {
        self.class
    }

    /// The child elements in order.
    pub fn elements(&self) -> &[ElementKind] {
        &self.elements
    }
}

impl Element for Section {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
