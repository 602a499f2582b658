//! The structure of the visualization page.
//!
//! A page is a [View] holding a tree of elements. The tree is built while
//! the benchmark runs are processed and is rendered once all runs are in.

mod canvas;
mod section;
mod view;

pub use crate::layout::canvas::Canvas;
pub use crate::layout::section::Section;
pub use crate::layout::view::View;

/// An element that can be addressed by its id.
pub trait Element {
    /// The id of the element, if it has one.
    fn id(&self) -> Option<&str>;
}

/// The elements a page is made of.
#[derive(Debug)]
pub enum ElementKind {
    /// A container of other elements.
    Section(Section),
    /// A section heading.
    Heading(String),
    /// The drawing surface of a chart.
    Canvas(Canvas),
    /// A block of plain text.
    Text(String),
    /// A horizontal rule.
    Divider,
    /// A line break.
    LineBreak,
}

impl Element for ElementKind {
    fn id(&self) -> Option<&str> {
        match self {
            ElementKind::Section(s) => s.id(),
            ElementKind::Canvas(c) => c.id(),
            ElementKind::Heading(_)
            | ElementKind::Text(_)
            | ElementKind::Divider
            | ElementKind::LineBreak => None,
        }
    }
}
