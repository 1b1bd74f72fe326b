//! easel-model: value types for EASEL designs.
//!
//! Design rules:
//! - Elements are values. Transforms return edited copies and never touch their input.
//! - Rotate and flip produce angles in [0, 360); opacity edits land in [0, 1].
//! - Everything is serde-serializable; a design's JSON is the editor's canvas snapshot.
//! - No rendering or I/O here; export and project types only describe requests.

pub mod design;
pub mod element;
pub mod export;
pub mod project;
pub mod transform;

pub use design::{now_millis, Design};
pub use element::{DesignElement, ElementBase, ImageElement, ShapeElement, ShapeType, TextElement};
pub use export::{ExportError, ExportFormat, ExportRequest};
pub use project::{NewProject, ProjectError, DEFAULT_PROJECT_NAME};
pub use transform::{
    change_opacity, flip_element_horizontally, move_element, normalize_degrees, rotate_element,
    scale_element, Transformable,
};
