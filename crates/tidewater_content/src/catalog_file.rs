//! # Catalog Files
//!
//! Custom weighted catalogs loaded from TOML. Each entry has a weight and a
//! list of parts; one part is a plain object, more parts form a template whose
//! first part is the primary.
//!
//! ```toml
//! name = "harbour_scrap"
//!
//! [[entries]]
//! weight = 3
//! parts = [{ object_type = "Tankwreck", team = "neutral", radius = 1.0 }]
//!
//! [[entries]]
//! weight = 1
//! [[entries.parts]]
//! object_type = "Alienspybase"
//! team = "enemy"
//! radius = 2.0
//! [[entries.parts]]
//! object_type = "Alienackackgun"
//! team = "enemy"
//! radius = 2.0
//! offset = [0.0, 18.07, 0.46]
//! ```

use std::path::Path;

use serde::Deserialize;
use tidewater_procedural::{Catalog, ObjectContainer, Placeable, Template};
use tidewater_shared::{Team, Vec3};

use crate::error::{ContentError, ContentResult};

#[derive(Debug, Deserialize)]
struct RawCatalog {
    name: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    weight: i64,
    parts: Vec<RawPart>,
}

#[derive(Debug, Deserialize)]
struct RawPart {
    object_type: String,
    #[serde(default = "default_team")]
    team: String,
    radius: f64,
    #[serde(default)]
    y_offset: f64,
    #[serde(default)]
    attachment: Option<String>,
    #[serde(default)]
    offset: Option<[f64; 3]>,
}

fn default_team() -> String {
    "neutral".to_string()
}

impl RawPart {
    fn into_container(self) -> ContentResult<ObjectContainer> {
        let team = Team::from_name(&self.team).ok_or(ContentError::UnknownTeam(self.team))?;
        let mut container = ObjectContainer::new(self.object_type, team, self.radius).with_y_offset(self.y_offset);
        if let Some(attachment) = self.attachment {
            container = container.with_attachment(attachment);
        }
        if let Some([x, y, z]) = self.offset {
            container = container.with_template_offset(Vec3::new(x, y, z));
        }
        container.validate()?;
        Ok(container)
    }
}

/// A named weighted catalog read from a file.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogFile {
    /// Catalog name.
    pub name: String,
    /// The validated catalog.
    pub catalog: Catalog<Placeable>,
}

impl CatalogFile {
    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Malformed TOML, unknown team names, empty entries, invalid radii or
    /// weights, or a file without entries.
    pub fn from_toml_str(text: &str) -> ContentResult<Self> {
        let raw: RawCatalog = toml::from_str(text)?;

        let mut builder = Catalog::builder();
        for (index, entry) in raw.entries.into_iter().enumerate() {
            let mut parts = entry
                .parts
                .into_iter()
                .map(RawPart::into_container)
                .collect::<ContentResult<Vec<_>>>()?;

            let item = match parts.len() {
                0 => return Err(ContentError::EmptyEntry { index }),
                1 => Placeable::Object(parts.remove(0)),
                _ => Placeable::Template(Template::from_entries(parts)?),
            };
            builder = builder.add(item, entry.weight);
        }

        let catalog = builder.build()?;
        tracing::info!("Loaded catalog '{}' with {} entries", raw.name, catalog.len());
        Ok(Self { name: raw.name, catalog })
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// I/O failures plus everything [`CatalogFile::from_toml_str`] rejects.
    pub fn load(path: impl AsRef<Path>) -> ContentResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_procedural::PlacementError;

    const HARBOUR: &str = r#"
        name = "harbour_scrap"

        [[entries]]
        weight = 3
        parts = [{ object_type = "Tankwreck", team = "neutral", radius = 1.0 }]

        [[entries]]
        weight = 1
        [[entries.parts]]
        object_type = "Alienspybase"
        team = "enemy"
        radius = 2.0
        [[entries.parts]]
        object_type = "Alienackackgun"
        team = "enemy"
        radius = 2.0
        offset = [0.0, 18.0, 0.5]
    "#;

    #[test]
    fn test_parse_objects_and_templates() {
        let file = CatalogFile::from_toml_str(HARBOUR).unwrap();

        assert_eq!(file.name, "harbour_scrap");
        assert_eq!(file.catalog.total_weight(), 4);

        let entries = file.catalog.entries();
        assert!(matches!(entries[0].item, Placeable::Object(_)));
        match &entries[1].item {
            Placeable::Template(template) => {
                assert_eq!(template.parts().len(), 2);
                assert_eq!(template.secondaries()[0].template_offset, Vec3::new(0.0, 18.0, 0.5));
            }
            Placeable::Object(_) => panic!("two parts must form a template"),
        }
    }

    #[test]
    fn test_team_defaults_to_neutral() {
        let text = r#"
            name = "rocks"
            [[entries]]
            weight = 1
            parts = [{ object_type = "troprockcd", radius = 2.0 }]
        "#;
        let file = CatalogFile::from_toml_str(text).unwrap();

        assert_eq!(file.catalog.entries()[0].item.primary().team, Team::Neutral);
    }

    #[test]
    fn test_unknown_team() {
        let text = r#"
            name = "bad"
            [[entries]]
            weight = 1
            parts = [{ object_type = "x", team = "pirates", radius = 1.0 }]
        "#;

        assert!(matches!(
            CatalogFile::from_toml_str(text),
            Err(ContentError::UnknownTeam(team)) if team == "pirates"
        ));
    }

    #[test]
    fn test_zero_weight() {
        let text = r#"
            name = "bad"
            [[entries]]
            weight = 0
            parts = [{ object_type = "x", radius = 1.0 }]
        "#;

        assert!(matches!(
            CatalogFile::from_toml_str(text),
            Err(ContentError::Placement(PlacementError::InvalidWeight { weight: 0 }))
        ));
    }

    #[test]
    fn test_no_entries() {
        assert!(matches!(
            CatalogFile::from_toml_str("name = \"empty\""),
            Err(ContentError::Placement(PlacementError::EmptyCatalog))
        ));
    }

    #[test]
    fn test_entry_without_parts() {
        let text = r#"
            name = "bad"
            [[entries]]
            weight = 1
            parts = []
        "#;

        assert!(matches!(
            CatalogFile::from_toml_str(text),
            Err(ContentError::EmptyEntry { index: 0 })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(CatalogFile::from_toml_str("name = "), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CatalogFile::load("/definitely/not/here.toml"),
            Err(ContentError::Io(_))
        ));
    }
}
