use crate::config::{ConfigMap, ConfigValue};
use crate::coords::{Coord, Offset};

/// A single drawable dot.
///
/// A point's position is its own coordinate; it has no extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pos: Coord,
    pub config: ConfigMap,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Coord::new(x, y),
            config: ConfigMap::new(),
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x()
    }

    pub fn y(&self) -> f64 {
        self.pos.y()
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// A line segment between two endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub p1: Coord,
    pub p2: Coord,
    pub config: ConfigMap,
}

impl Line {
    pub fn new(p1: Coord, p2: Coord) -> Self {
        Self {
            p1,
            p2,
            config: ConfigMap::new(),
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// An axis-aligned rectangle given by two opposite corners.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub p1: Coord,
    pub p2: Coord,
    pub config: ConfigMap,
}

impl Rect {
    pub fn new(p1: Coord, p2: Coord) -> Self {
        Self {
            p1,
            p2,
            config: ConfigMap::new(),
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// An ellipse inscribed in the box spanned by two opposite corners.
///
/// Drawable but not serializable: no codec is registered for ovals.
#[derive(Clone, Debug, PartialEq)]
pub struct Oval {
    pub p1: Coord,
    pub p2: Coord,
    pub config: ConfigMap,
}

impl Oval {
    pub fn new(p1: Coord, p2: Coord) -> Self {
        Self {
            p1,
            p2,
            config: ConfigMap::new(),
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// A circle around a center point.
///
/// Drawable but not serializable: no codec is registered for circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Coord,
    pub radius: f64,
    pub config: ConfigMap,
}

impl Circle {
    pub fn new(center: Coord, radius: f64) -> Self {
        Self {
            center,
            radius,
            config: ConfigMap::new(),
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// A closed polygon over an ordered list of vertices.
///
/// Vertex order is meaningful and preserved through serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Coord>,
    pub config: ConfigMap,
}

impl Polygon {
    pub fn new(vertices: Vec<Coord>) -> Self {
        Self {
            vertices,
            config: ConfigMap::new(),
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// A text label anchored at a point.
///
/// Only the anchor and config are serialized; the displayed content is
/// supplied by the caller after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub anchor: Coord,
    pub content: String,
    pub config: ConfigMap,
}

impl Text {
    pub fn new(anchor: Coord, content: impl Into<String>) -> Self {
        Self {
            anchor,
            content: content.into(),
            config: ConfigMap::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// Enum wrapper over every shape kind the toolkit knows about.
///
/// This is a closed set: adding a kind means adding a variant here and
/// handling it wherever the compiler then insists. Circle and Oval can be
/// drawn and measured but have no registered codec, so encoding them is an
/// error rather than a silent fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Rect(Rect),
    Oval(Oval),
    Circle(Circle),
    Polygon(Polygon),
    Text(Text),
}

impl Shape {
    /// Kind name as it appears in files and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Point(_) => "Point",
            Shape::Line(_) => "Line",
            Shape::Rect(_) => "Rectangle",
            Shape::Oval(_) => "Oval",
            Shape::Circle(_) => "Circle",
            Shape::Polygon(_) => "Polygon",
            Shape::Text(_) => "Text",
        }
    }

    pub fn config(&self) -> &ConfigMap {
        match self {
            Shape::Point(p) => &p.config,
            Shape::Line(l) => &l.config,
            Shape::Rect(r) => &r.config,
            Shape::Oval(o) => &o.config,
            Shape::Circle(c) => &c.config,
            Shape::Polygon(p) => &p.config,
            Shape::Text(t) => &t.config,
        }
    }

    pub fn config_mut(&mut self) -> &mut ConfigMap {
        match self {
            Shape::Point(p) => &mut p.config,
            Shape::Line(l) => &mut l.config,
            Shape::Rect(r) => &mut r.config,
            Shape::Oval(o) => &mut o.config,
            Shape::Circle(c) => &mut c.config,
            Shape::Polygon(p) => &mut p.config,
            Shape::Text(t) => &mut t.config,
        }
    }

    /// Move the shape by an offset.
    pub fn translate(&mut self, offset: Offset) {
        match self {
            Shape::Point(p) => p.pos = p.pos + offset,
            Shape::Line(l) => {
                l.p1 = l.p1 + offset;
                l.p2 = l.p2 + offset;
            }
            Shape::Rect(r) => {
                r.p1 = r.p1 + offset;
                r.p2 = r.p2 + offset;
            }
            Shape::Oval(o) => {
                o.p1 = o.p1 + offset;
                o.p2 = o.p2 + offset;
            }
            Shape::Circle(c) => c.center = c.center + offset,
            Shape::Polygon(p) => {
                for v in &mut p.vertices {
                    *v = *v + offset;
                }
            }
            Shape::Text(t) => t.anchor = t.anchor + offset,
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}

impl From<Oval> for Shape {
    fn from(o: Oval) -> Self {
        Shape::Oval(o)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Text> for Shape {
    fn from(t: Text) -> Self {
        Shape::Text(t)
    }
}
