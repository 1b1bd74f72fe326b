//! Design elements: the positioned, typed units a design is made of.
//!
//! Every element shares an [`ElementBase`] (identity, position, size, rotation,
//! opacity). Variants add their own styling on top. The JSON shape matches what
//! the web editor stores: camelCase fields and an inline `type` tag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields common to every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBase {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees. The transforms keep this in [0, 360).
    pub rotation: f64,
    /// 0.0 = fully transparent, 1.0 = fully opaque.
    pub opacity: f64,
}

impl ElementBase {
    /// Unrotated, fully opaque element frame.
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    /// Same as [`ElementBase::new`] with a freshly generated id.
    pub fn with_random_id(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Uuid::new_v4().to_string(), x, y, width, height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: String,
    pub font_style: String,
    pub text_decoration: String,
    pub text_align: String,
    pub fill: String,
}

impl TextElement {
    /// Plain left-aligned black text.
    pub fn new(base: ElementBase, text: impl Into<String>) -> Self {
        Self {
            base,
            text: text.into(),
            font_family: "Arial".into(),
            font_size: 32.0,
            font_weight: "normal".into(),
            font_style: "normal".into(),
            text_decoration: String::new(),
            text_align: "left".into(),
            fill: "#000000".into(),
        }
    }
}

/// Geometry of a shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
    Triangle,
    Ellipse,
    Polygon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub shape_type: ShapeType,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl ShapeElement {
    /// Filled shape without an outline.
    pub fn new(base: ElementBase, shape_type: ShapeType, fill: impl Into<String>) -> Self {
        Self {
            base,
            shape_type,
            fill: fill.into(),
            stroke: "transparent".into(),
            stroke_width: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    #[serde(flatten)]
    pub base: ElementBase,
    pub src: String,
    /// Names of the filters applied to the image, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<String>>,
}

impl ImageElement {
    pub fn new(base: ElementBase, src: impl Into<String>) -> Self {
        Self {
            base,
            src: src.into(),
            filters: None,
        }
    }
}

/// Any element that can live in a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DesignElement {
    Text(TextElement),
    Shape(ShapeElement),
    Image(ImageElement),
}

impl DesignElement {
    /// The `type` tag as it appears in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            DesignElement::Text(_) => "text",
            DesignElement::Shape(_) => "shape",
            DesignElement::Image(_) => "image",
        }
    }

    pub fn id(&self) -> &str {
        &self.base_fields().id
    }

    /// Shared fields regardless of variant.
    pub fn base_fields(&self) -> &ElementBase {
        match self {
            DesignElement::Text(e) => &e.base,
            DesignElement::Shape(e) => &e.base,
            DesignElement::Image(e) => &e.base,
        }
    }

    pub(crate) fn base_fields_mut(&mut self) -> &mut ElementBase {
        match self {
            DesignElement::Text(e) => &mut e.base,
            DesignElement::Shape(e) => &mut e.base,
            DesignElement::Image(e) => &mut e.base,
        }
    }
}

impl From<TextElement> for DesignElement {
    fn from(e: TextElement) -> Self {
        DesignElement::Text(e)
    }
}

impl From<ShapeElement> for DesignElement {
    fn from(e: ShapeElement) -> Self {
        DesignElement::Shape(e)
    }
}

impl From<ImageElement> for DesignElement {
    fn from(e: ImageElement) -> Self {
        DesignElement::Image(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_json_shape() {
        let element: DesignElement =
            TextElement::new(ElementBase::new("t1", 10.0, 20.0, 200.0, 40.0), "Hello").into();

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["id"], "t1");
        assert_eq!(value["fontFamily"], "Arial");
        assert_eq!(value["textAlign"], "left");
        assert_eq!(value["opacity"], 1.0);
    }

    #[test]
    fn test_shape_element_from_editor_json() {
        let json = r##"{
            "type": "shape",
            "id": "s1",
            "x": 0, "y": 0, "width": 50, "height": 50,
            "rotation": 45, "opacity": 0.5,
            "shapeType": "circle",
            "fill": "#ff0000",
            "stroke": "#000000",
            "strokeWidth": 2
        }"##;

        let element: DesignElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.kind(), "shape");
        assert_eq!(element.id(), "s1");
        match element {
            DesignElement::Shape(shape) => {
                assert_eq!(shape.shape_type, ShapeType::Circle);
                assert_eq!(shape.base.rotation, 45.0);
                assert_eq!(shape.stroke_width, 2.0);
            }
            other => panic!("expected a shape, got {:?}", other),
        }
    }

    #[test]
    fn test_image_filters_are_optional() {
        let image = ImageElement::new(ElementBase::new("i1", 0.0, 0.0, 10.0, 10.0), "cat.png");
        let value = serde_json::to_value(DesignElement::from(image)).unwrap();
        assert!(value.get("filters").is_none());

        let json = r#"{"type":"image","id":"i2","x":0,"y":0,"width":1,"height":1,
            "rotation":0,"opacity":1,"src":"dog.png","filters":["grayscale"]}"#;
        let parsed: DesignElement = serde_json::from_str(json).unwrap();
        match parsed {
            DesignElement::Image(image) => {
                assert_eq!(image.filters, Some(vec!["grayscale".to_string()]))
            }
            other => panic!("expected an image, got {:?}", other),
        }
    }

    #[test]
    fn test_random_ids_differ() {
        let a = ElementBase::with_random_id(0.0, 0.0, 1.0, 1.0);
        let b = ElementBase::with_random_id(0.0, 0.0, 1.0, 1.0);
        assert_ne!(a.id, b.id);
    }
}
