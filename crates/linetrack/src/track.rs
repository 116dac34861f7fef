use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The kind of a placed track element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Start,
    End,
    Straight,
    Curve,
    Fork,
    ForbiddenPath,
    Loop,
    ColorZone,
    Obstacle,
    Path,
    AreaMarker,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Straight => "straight",
            Self::Curve => "curve",
            Self::Fork => "fork",
            Self::ForbiddenPath => "forbidden_path",
            Self::Loop => "loop",
            Self::ColorZone => "color_zone",
            Self::Obstacle => "obstacle",
            Self::Path => "path",
            Self::AreaMarker => "area_marker",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A point on the track canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One placed unit of a track layout.
///
/// `connections` lists the ids of the elements this one leads into; each
/// entry becomes a directed graph edge. References to unknown ids are
/// tolerated and simply produce no edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackElement {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ElementType,

    pub position: Point,

    #[serde(default)]
    pub rotation: f64,

    #[serde(default = "default_element_width")]
    pub width: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default)]
    pub connections: Vec<String>,

    /// Freeform geometry for hand-drawn `path` elements (SVG path data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,

    /// Polyline points for `area_marker` elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A user-authored track layout.
///
/// Element order is irrelevant to the graph semantics, except that the
/// first start-typed and first end-typed elements anchor path resolution.
/// Element ids are expected to be unique; duplicates are not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,

    pub elements: Vec<TrackElement>,

    #[serde(default = "default_canvas_width")]
    pub width: u32,

    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Raw SVG markup this track was imported from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_svg: Option<String>,
}

fn default_element_width() -> f64 {
    50.0
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

impl Track {
    /// Load a track from a file. JSON by default, YAML for `.yaml`/`.yml`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read track file {}", path.display()))?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Invalid track YAML in {}", path.display()))
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Invalid track JSON in {}", path.display()))
        }
    }
}
