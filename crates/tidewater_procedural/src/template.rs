//! # Object Containers and Templates
//!
//! An [`ObjectContainer`] describes one placeable object type: its team,
//! keep-clear radius and optional extras. A [`Template`] is a fixed group of
//! containers placed together; the first entry is the primary and decides
//! where the group goes, the rest follow at their template offsets.
//!
//! Containers are immutable once built. Builder methods consume and return
//! `Self`:
//!
//! ```rust,ignore
//! let tower = ObjectContainer::new("AlienTower", Team::Enemy, 2.0)
//!     .with_attachment("WallLaser");
//! ```

use serde::{Deserialize, Serialize};
use tidewater_shared::{Team, Vec3};

use crate::error::{PlacementError, PlacementResult};

/// Static description of one placeable object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectContainer {
    /// Object type name.
    pub object_type: String,
    /// Owning team.
    #[serde(default)]
    pub team: Team,
    /// Keep-clear radius in grid cells.
    pub radius: f64,
    /// Added to the terrain height.
    #[serde(default)]
    pub y_offset: f64,
    /// Attached object type, if any.
    #[serde(default)]
    pub attachment: Option<String>,
    /// Offset from the template primary; unused for stand-alone objects.
    #[serde(default)]
    pub template_offset: Vec3,
}

impl ObjectContainer {
    /// Creates a container with no offset and no attachment.
    #[must_use]
    pub fn new(object_type: impl Into<String>, team: Team, radius: f64) -> Self {
        Self {
            object_type: object_type.into(),
            team,
            radius,
            y_offset: 0.0,
            attachment: None,
            template_offset: Vec3::ZERO,
        }
    }

    /// Sets the vertical offset.
    #[must_use]
    pub fn with_y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Sets the attached object type.
    #[must_use]
    pub fn with_attachment(mut self, attachment: impl Into<String>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    /// Sets the offset from the template primary.
    #[must_use]
    pub fn with_template_offset(mut self, offset: Vec3) -> Self {
        self.template_offset = offset;
        self
    }

    /// Checks that the radius is a positive finite number.
    ///
    /// # Errors
    ///
    /// `PlacementError::InvalidRadius` otherwise.
    pub fn validate(&self) -> PlacementResult<()> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(PlacementError::InvalidRadius { radius: self.radius })
        }
    }
}

/// An ordered, non-empty group of containers; index 0 is the primary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ObjectContainer>", into = "Vec<ObjectContainer>")]
pub struct Template {
    parts: Vec<ObjectContainer>,
}

impl Template {
    /// Creates a template holding only its primary.
    #[must_use]
    pub fn new(primary: ObjectContainer) -> Self {
        Self { parts: vec![primary] }
    }

    /// Creates a template from a list whose first entry is the primary.
    ///
    /// # Errors
    ///
    /// `PlacementError::EmptyTemplate` if `parts` is empty.
    pub fn from_entries(parts: Vec<ObjectContainer>) -> PlacementResult<Self> {
        if parts.is_empty() {
            return Err(PlacementError::EmptyTemplate);
        }
        Ok(Self { parts })
    }

    /// Appends a secondary part.
    #[must_use]
    pub fn with_part(mut self, part: ObjectContainer) -> Self {
        self.parts.push(part);
        self
    }

    /// The primary container.
    #[must_use]
    pub fn primary(&self) -> &ObjectContainer {
        &self.parts[0]
    }

    /// Every part, primary first.
    #[must_use]
    pub fn parts(&self) -> &[ObjectContainer] {
        &self.parts
    }

    /// Parts after the primary.
    #[must_use]
    pub fn secondaries(&self) -> &[ObjectContainer] {
        &self.parts[1..]
    }
}

impl TryFrom<Vec<ObjectContainer>> for Template {
    type Error = PlacementError;

    fn try_from(parts: Vec<ObjectContainer>) -> PlacementResult<Self> {
        Self::from_entries(parts)
    }
}

impl From<Template> for Vec<ObjectContainer> {
    fn from(template: Template) -> Self {
        template.parts
    }
}

/// Anything a weighted catalog can hand to the placer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeable {
    /// A single object.
    Object(ObjectContainer),
    /// A group placed together.
    Template(Template),
}

impl Placeable {
    /// The container that decides where this goes.
    #[must_use]
    pub fn primary(&self) -> &ObjectContainer {
        match self {
            Self::Object(container) => container,
            Self::Template(template) => template.primary(),
        }
    }
}

impl From<ObjectContainer> for Placeable {
    fn from(container: ObjectContainer) -> Self {
        Self::Object(container)
    }
}

impl From<Template> for Placeable {
    fn from(template: Template) -> Self {
        Self::Template(template)
    }
}
