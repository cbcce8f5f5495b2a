use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    foundation::core::{Point, Uv},
    foundation::error::{TrivistaError, TrivistaResult},
    scene::model::{Layer, Scene, Shape, TextureRef},
    serialize::paths::relative_to_document,
};

#[derive(Clone, Debug)]
/// Serializer options.
pub struct SvgOptions {
    /// Emit an XML comment before each layer.
    pub layer_comments: bool,
    /// Project-relative path of the output document. When set, texture paths are rewritten
    /// relative to its directory; otherwise they are emitted as stored.
    pub document_path: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            layer_comments: true,
            document_path: None,
        }
    }
}

/// A [`Scene`] with texture references resolved, ready to stream as SVG markup with
/// `<texture>`/`<textri>` extensions.
pub struct SvgWriter<'a> {
    scene: &'a Scene,
    hrefs: Vec<String>,
    layer_comments: bool,
}

impl<'a> SvgWriter<'a> {
    /// Resolve texture hrefs against `opts.document_path`. Path errors surface here, before any
    /// output is produced.
    pub fn new(scene: &'a Scene, opts: &SvgOptions) -> TrivistaResult<Self> {
        let hrefs = scene
            .textures
            .iter()
            .map(|tex| match &opts.document_path {
                Some(doc) => relative_to_document(&tex.path, doc),
                None => Ok(tex.path.clone()),
            })
            .collect::<TrivistaResult<Vec<_>>>()?;
        Ok(Self {
            scene,
            hrefs,
            layer_comments: opts.layer_comments,
        })
    }

    /// Href emitted for each texture, in declaration order.
    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }

    pub fn write_to<W: Write>(&self, out: W) -> std::io::Result<W> {
        SvgStream { out }.scene(self)
    }
}

struct SvgStream<W: Write> {
    out: W,
}

impl<W: Write> SvgStream<W> {
    fn scene(mut self, doc: &SvgWriter<'_>) -> std::io::Result<W> {
        let scene = doc.scene;
        self.header(scene)?;
        for (tex, href) in scene.textures.iter().zip(&doc.hrefs) {
            self.texture(tex, href)?;
        }
        writeln!(self.out)?;

        let mut current: Option<Layer> = None;
        for prim in &scene.primitives {
            if current != Some(prim.layer) {
                if current.is_some() {
                    writeln!(self.out)?;
                }
                if doc.layer_comments {
                    writeln!(self.out, "  <!-- {} -->", prim.layer.caption())?;
                }
                current = Some(prim.layer);
            }
            self.shape(&prim.shape)?;
        }
        if current.is_some() {
            writeln!(self.out)?;
        }

        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn header(&mut self, scene: &Scene) -> std::io::Result<()> {
        let (w, h) = (scene.canvas.width, scene.canvas.height);
        writeln!(self.out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
        writeln!(
            self.out,
            r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#
        )?;
        writeln!(
            self.out,
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#
        )?;
        writeln!(
            self.out,
            r#"     width="{w}px" height="{h}px" viewBox="0 0 {w} {h}" xml:space="preserve">"#
        )?;
        writeln!(self.out)
    }

    fn texture(&mut self, tex: &TextureRef, href: &str) -> std::io::Result<()> {
        writeln!(
            self.out,
            r#"  <texture filename="{}" texid="{}"/>"#,
            escape_attr(href),
            escape_attr(&tex.id)
        )
    }

    fn shape(&mut self, shape: &Shape) -> std::io::Result<()> {
        match shape {
            Shape::Triangle(t) => self.polygon(&t.fill.to_string(), &t.points),
            Shape::Polygon(p) => self.polygon(&p.fill.to_string(), &p.points),
            Shape::Textured(t) => writeln!(
                self.out,
                r#"  <textri texid="{}" uvs="{}" points="{}"/>"#,
                escape_attr(&t.texture),
                fmt_uvs(&t.uvs),
                fmt_points_spaced(&t.points)
            ),
        }
    }

    fn polygon(&mut self, fill: &str, points: &[Point]) -> std::io::Result<()> {
        writeln!(
            self.out,
            r#"  <polygon fill="{fill}" points="{}"/>"#,
            fmt_points(points)
        )
    }
}

/// `x,y x,y ...` at 4 decimals.
pub fn fmt_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.4},{:.4}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `x y x y ...` at 4 decimals.
pub fn fmt_points_spaced(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.4} {:.4}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `u v u v ...` at 6 decimals.
pub fn fmt_uvs(uvs: &[Uv]) -> String {
    uvs.iter()
        .map(|uv| format!("{:.6} {:.6}", uv.u, uv.v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `scene` to a markup string.
pub fn to_svg_string(scene: &Scene, opts: &SvgOptions) -> TrivistaResult<String> {
    let buf = SvgWriter::new(scene, opts)?
        .write_to(Vec::new())
        .map_err(|e| TrivistaError::serde(format!("render svg: {e}")))?;
    String::from_utf8(buf).map_err(|e| TrivistaError::serde(format!("render svg: {e}")))
}

/// Write `scene` to `out_path`, creating parent directories.
pub fn write_svg(scene: &Scene, out_path: &Path, opts: &SvgOptions) -> TrivistaResult<()> {
    let doc = SvgWriter::new(scene, opts)?;
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TrivistaError::io(parent, e))?;
        }
    }

    let f = File::create(out_path).map_err(|e| TrivistaError::io(out_path, e))?;
    doc.write_to(BufWriter::new(f))
        .map_err(|e| TrivistaError::io(out_path, e))?;

    tracing::info!(
        path = %out_path.display(),
        primitives = scene.primitives.len(),
        "wrote svg"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/svg.rs"]
mod tests;
