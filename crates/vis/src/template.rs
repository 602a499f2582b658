//! The HTML document wrapping the page layout.

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;
use crate::layout::View;
use crate::render::OutputStream;
use crate::render::Render;

const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");
const STYLE: &str = include_str!("./template/style.css");

// Chart configurations are serialized in the Chart.js 2.x format.
const CHART_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/chart.js@2.9.4/dist/Chart.bundle.min.js";

/// A complete HTML document wrapping a [View].
pub struct Page<'a> {
    title: &'a str,
    view: &'a View,
}

impl<'a> Page<'a> {
    /// Creates a page showing `view` under `title`.
    pub fn new(title: &'a str, view: &'a View) -> Page<'a> {
        Self { title, view }
    }
}

impl Render for Page<'_> {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let mut body = String::new();
        self.view.render(&mut body)?;

        let mut template = TinyTemplate::new();
        template.add_template("index", INDEX_TEMPLATE)?;

        let context = Context {
            title: self.title,
            chart_script: CHART_SCRIPT,
            style: STYLE,
            body: &body,
        };
        let text = template.render("index", &context)?;

        output.write(&text)
    }
}

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    chart_script: &'static str,
    style: &'static str,
    body: &'a str,
}
