use crate::layout::ElementKind;

/// The root of the page.
#[derive(Debug, Default)]
pub struct View {
    elements: Vec<ElementKind>,
}

impl View {
    /// Creates an empty page.
    pub fn new() -> View {
        View {
            elements: Vec::new(),
        }
    }

    /// Appends an element, builder style.
    pub fn add(mut self, element: ElementKind) -> View {
        self.elements.push(element);
        self
    }

    /// Appends an element.
    pub fn push(&mut self, element: ElementKind) {
        self.elements.push(element);
    }

    /// The top-level elements in page order.
    pub fn elements(&self) -> &[ElementKind] {
        &self.elements
    }
}
