use crate::error::Result;
use crate::layout::Canvas;
use crate::layout::Element;
use crate::layout::ElementKind;
use crate::layout::Section;
use crate::layout::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::escape_html;
use crate::render::script_json;

impl Render for ElementKind {
    fn render<R>(&self, output: &mut R) -> Result<()>
    where
        R: OutputStream,
    {
        match self {
            ElementKind::Section(s) => s.render(output),
            ElementKind::Canvas(c) => c.render(output),
            ElementKind::Heading(text) => {
                output.write(&format!("<h3>{}</h3>\n", escape_html(text)))
            }
            ElementKind::Text(text) => {
                output.write(&format!("<div>{}</div>\n", escape_html(text)))
            }
            ElementKind::Divider => output.write("<hr>\n"),
            ElementKind::LineBreak => output.write("<br>\n"),
        }
    }
}

impl Render for View {
    fn render<R>(&self, output: &mut R) -> Result<()>
    where
        R: OutputStream,
    {
        for element in self.elements() {
            element.render(output)?;
        }

        Ok(())
    }
}

impl Render for Section {
    fn render<R>(&self, output: &mut R) -> Result<()>
    where
        R: OutputStream,
    {
        output.write("<div")?;

        if let Some(id) = self.id() {
            output.write(&format!(r#" id="{}""#, escape_html(id)))?;
        }

        if let Some(class) = self.class() {
            output.write(&format!(r#" class="{}""#, escape_html(class)))?;
        }

        output.write(">\n")?;

        for element in self.elements() {
            element.render(output)?;
        }

        output.write("</div>\n")
    }
}

impl Render for Canvas {
    fn render<R>(&self, output: &mut R) -> Result<()>
    where
        R: OutputStream,
    {
        let id = self.id().unwrap_or_default();
        let id_attr = escape_html(id);
        let id_literal = script_json(id)?;
        let config = script_json(self.chart())?;

        output.write(&format!(
            r#"<canvas id="{id_attr}"></canvas>
<script>
  new Chart(document.getElementById({id_literal}).getContext("2d"), {config});
</script>
"#,
        ))
    }
}
