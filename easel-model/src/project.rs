//! Project creation for EASEL.
//!
//! A project starts life as a [`NewProject`] request (name + canvas size), which
//! is validated and turned into an empty [`Design`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Design;

/// Name used when the user does not pick one.
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Design";

/// Default canvas size (Full HD, landscape).
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Request to create a new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Default for NewProject {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl NewProject {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// 16:9 slide.
    pub fn presentation(name: impl Into<String>) -> Self {
        Self::new(name, 1920, 1080)
    }

    /// Square social post.
    pub fn instagram_post(name: impl Into<String>) -> Self {
        Self::new(name, 1080, 1080)
    }

    /// A4 page at 300 dpi.
    pub fn a4_portrait(name: impl Into<String>) -> Self {
        Self::new(name, 2480, 3508)
    }

    /// Name must not be blank; both dimensions must be at least 1px.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.name.trim().is_empty() {
            tracing::error!("project name is empty");
            return Err(ProjectError::EmptyName);
        }

        if self.width == 0 || self.height == 0 {
            tracing::error!(
                width = self.width,
                height = self.height,
                "project dimensions must be at least 1px"
            );
            return Err(ProjectError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Validate and build the empty design for this project.
    pub fn into_design(self) -> Result<Design, ProjectError> {
        self.validate()?;
        tracing::info!(
            name = %self.name,
            width = self.width,
            height = self.height,
            "creating project"
        );
        Ok(Design::new(self.name.trim(), self.width, self.height))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("project name must not be empty")]
    EmptyName,

    #[error("invalid project dimensions {width}x{height}: both must be at least 1px")]
    InvalidDimensions { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let p = NewProject::default();
        assert_eq!(p.name, "Untitled Design");
        assert_eq!((p.width, p.height), (1920, 1080));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let p = NewProject::new("   ", 100, 100);
        assert_eq!(p.validate(), Err(ProjectError::EmptyName));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let p = NewProject::new("Flyer", 0, 100);
        assert_eq!(
            p.into_design().unwrap_err(),
            ProjectError::InvalidDimensions {
                width: 0,
                height: 100
            }
        );
    }

    #[test]
    fn test_into_design() {
        let design = NewProject::instagram_post("  Launch post ").into_design().unwrap();
        assert_eq!(design.name, "Launch post");
        assert_eq!((design.width, design.height), (1080, 1080));
        assert!(design.elements.is_empty());
    }

    #[test]
    fn test_presets() {
        let a4 = NewProject::a4_portrait("Menu");
        assert!(a4.height > a4.width);
        assert_eq!(NewProject::presentation("Deck").width, DEFAULT_WIDTH);
    }
}
