//! Canonical XML export for content value types.
//!
//! Every value type appends itself to a parent element with a fixed tag,
//! attribute set, and child order; attribute values are plain decimal
//! renderings except colors, which use the `#AARRGGBB` form. Trees are
//! written with a UTF-8 declaration; indented output is an explicit option,
//! not a correctness requirement.
//!
//! A given element tree is single-writer: callers serialize concurrent
//! appends to the same parent themselves.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::math::{
    BoundingBox, BoundingFrustum, BoundingSphere, Color, Matrix, Plane, Point, Quaternion, Ray,
    Rectangle, Vector2, Vector3, Vector4,
};

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML write error: {0}")]
    Write(#[from] xmltree::Error),
}

/// Types with a canonical XML element form
pub trait XmlExport {
    /// Append a new child element describing `self` to `parent` and return
    /// a mutable reference to the appended child
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element;
}

/// Append an empty child element to `parent` and hand it back
pub fn child<'a>(parent: &'a mut Element, tag: &str) -> &'a mut Element {
    parent.children.push(XMLNode::Element(Element::new(tag)));
    match parent.children.last_mut() {
        Some(XMLNode::Element(el)) => el,
        _ => unreachable!(),
    }
}

/// Emit one cell element per scalar, in iteration order, under a fresh
/// container element. The cell carries the rendered value as its text;
/// callers choose the container and cell tags.
pub fn scalar_cells<'a, I>(
    parent: &'a mut Element,
    tag: &str,
    cell_tag: &str,
    values: I,
) -> &'a mut Element
where
    I: IntoIterator<Item = f32>,
{
    let list = child(parent, tag);
    for v in values {
        let cell = child(list, cell_tag);
        cell.children.push(XMLNode::Text(v.to_string()));
    }
    list
}

fn set_attr<T: ToString>(el: &mut Element, name: &str, value: T) {
    el.attributes.insert(name.to_string(), value.to_string());
}

/// Write `root` to `path`, declaring UTF-8. `pretty` selects an indenting
/// emitter; the compact form is byte-equivalent in content.
pub fn write_xml(root: &Element, path: &Path, pretty: bool) -> Result<(), XmlError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = BufWriter::new(File::create(path)?);
    let config = EmitterConfig::new().perform_indent(pretty);
    root.write_with_config(file, config)?;
    Ok(())
}

impl XmlExport for Color {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Color");
        set_attr(root, "c", self.hex_string());
        root
    }
}

impl XmlExport for Rectangle {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Rectangle");
        set_attr(root, "x", self.x);
        set_attr(root, "y", self.y);
        set_attr(root, "w", self.w);
        set_attr(root, "h", self.h);
        root
    }
}

impl XmlExport for Quaternion {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Quaternion");
        set_attr(root, "x", self.x);
        set_attr(root, "y", self.y);
        set_attr(root, "z", self.z);
        set_attr(root, "w", self.w);
        root
    }
}

impl XmlExport for Vector2 {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Vector2");
        set_attr(root, "x", self.x);
        set_attr(root, "y", self.y);
        root
    }
}

impl XmlExport for Vector3 {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Vector3");
        set_attr(root, "x", self.x);
        set_attr(root, "y", self.y);
        set_attr(root, "z", self.z);
        root
    }
}

impl XmlExport for Vector4 {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Vector4");
        set_attr(root, "x", self.x);
        set_attr(root, "y", self.y);
        set_attr(root, "z", self.z);
        set_attr(root, "w", self.w);
        root
    }
}

impl XmlExport for Point {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Point");
        set_attr(root, "x", self.x);
        set_attr(root, "y", self.y);
        root
    }
}

impl XmlExport for Plane {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Plane");
        set_attr(root, "d", self.d);
        self.normal.to_xml_element(root);
        root
    }
}

impl XmlExport for BoundingBox {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "BoundingBox");
        self.min.to_xml_element(root);
        self.max.to_xml_element(root);
        root
    }
}

impl XmlExport for BoundingSphere {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "BoundingSphere");
        set_attr(root, "radius", self.radius);
        self.center.to_xml_element(root);
        root
    }
}

impl XmlExport for Ray {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "Ray");
        self.pos.to_xml_element(root);
        self.dir.to_xml_element(root);
        root
    }
}

impl XmlExport for Matrix {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        scalar_cells(parent, "Matrix", "Cell", self.values().iter().copied())
    }
}

impl XmlExport for BoundingFrustum {
    fn to_xml_element<'a>(&self, parent: &'a mut Element) -> &'a mut Element {
        let root = child(parent, "BoundingFrustum");
        self.v.to_xml_element(root);
        root
    }
}
