//! SVG rendering of decoded levels.
//!
//! Solid polygons are drawn as a single even-odd path so that nested
//! polygons cut holes into their parents. Objects are drawn on top as
//! coloured circles.

pub mod viewport;

pub use viewport::Viewport;

use std::fmt;

use crate::level::{Level, ObjectKind, Picture, PictureKind, Polygon};

/// Default polygon fill
pub const GROUND_FILL: &str = "#f1f1f1";

/// Object marker radius; also the margin kept around every object
pub const OBJECT_RADIUS: f64 = 0.4;

/// Side of the square drawn for each picture placement
const PICTURE_SIZE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub fill: String,
    pub object_radius: f64,
    /// Draw an outlined placeholder square per picture
    pub pictures: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fill: GROUND_FILL.to_string(),
            object_radius: OBJECT_RADIUS,
            pictures: false,
        }
    }
}

pub fn object_color(kind: &ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Apple { .. } => "#af3030",
        ObjectKind::Flower => "#f7b314",
        ObjectKind::Start => "#159cd0",
        _ => "#000",
    }
}

/// Render `level` with default options
pub fn render_svg(level: &Level) -> String {
    Svg::new(level, &RenderOptions::default()).to_string()
}

/// A level ready to be written out as an SVG document
pub struct Svg<'a> {
    level: &'a Level,
    options: &'a RenderOptions,
    viewport: Viewport,
}

impl<'a> Svg<'a> {
    pub fn new(level: &'a Level, options: &'a RenderOptions) -> Self {
        let pictures = level
            .pictures
            .iter()
            .filter(|_| options.pictures)
            .map(|p| Viewport::square(p.position(), PICTURE_SIZE));
        let viewport = Viewport::bounds(level, options.object_radius)
            .into_iter()
            .chain(pictures)
            .reduce(Viewport::union)
            .unwrap_or_default();
        Self { level, options, viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn write_path(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<g><path d=\"")?;
        for (i, polygon) in self.level.solid_polygons().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_subpath(f, polygon)?;
        }
        write!(
            f,
            "\" style=\"fill: {}; fill-rule: evenodd\"/></g>",
            Escaped(&self.options.fill)
        )
    }

    fn write_pictures(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Farther pictures first so nearer ones stack on top
        let mut pictures: Vec<&Picture> = self.level.pictures.iter().collect();
        pictures.sort_by_key(|p| std::cmp::Reverse(p.distance));
        for picture in pictures {
            let label = match &picture.kind {
                PictureKind::Named { name } => name.as_str(),
                PictureKind::Textured { texture, .. } => texture.as_str(),
            };
            write!(
                f,
                "<rect x=\"{}\" y=\"{}\" width=\"{PICTURE_SIZE}\" height=\"{PICTURE_SIZE}\" \
                 fill=\"none\" stroke=\"#7a7a7a\" stroke-width=\"0.05\"><title>{}</title></rect>",
                picture.x,
                picture.y,
                Escaped(label)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vp = &self.viewport;
        write!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:svg=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" viewBox=\"{} {} {} {}\">",
            vp.min_x,
            vp.min_y,
            vp.width(),
            vp.height()
        )?;
        self.write_path(f)?;
        if self.options.pictures {
            self.write_pictures(f)?;
        }
        for object in &self.level.objects {
            write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                object.x,
                object.y,
                self.options.object_radius,
                object_color(&object.kind)
            )?;
        }
        f.write_str("</svg>")
    }
}

/// `M x,y x,y ... z`
fn write_subpath(f: &mut fmt::Formatter<'_>, polygon: &Polygon) -> fmt::Result {
    f.write_str("M")?;
    for v in &polygon.vertices {
        write!(f, " {},{}", v.x, v.y)?;
    }
    f.write_str(" z")
}

/// XML text/attribute escaping
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
