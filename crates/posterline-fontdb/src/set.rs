// this_file: crates/posterline-fontdb/src/set.rs

//! Ordered font sets.
//!
//! A [`FontSet`] is built once per weight and is read-only afterwards, so a
//! single set can be shared by reference between concurrent poster renders.
//! Loading never fails as a whole: every family that cannot be read or parsed
//! is logged and left out, and the set is returned with whatever loaded.

use crate::emoji::find_emoji_font;
use crate::face::TtfFace;
use crate::families::{family_path, DEFAULT_FONT_DIR, FONT_FAMILIES};
use anyhow::Context;
use log::{debug, info, warn};
use posterline_core::{Face, FontId, Weight};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the optional emoji font comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiSource {
    /// Search the platform candidate paths
    #[default]
    Auto,
    /// Use this file
    Path(PathBuf),
    /// Never load an emoji font
    Disabled,
}

/// Options for loading a font set from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSetOptions {
    pub font_dir: PathBuf,
    /// Family names in priority order
    pub families: Vec<String>,
    pub emoji: EmojiSource,
}

impl Default for FontSetOptions {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
            families: FONT_FAMILIES.iter().map(|family| family.to_string()).collect(),
            emoji: EmojiSource::Auto,
        }
    }
}

/// Role of a resource inside its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Text,
    Emoji,
}

/// One loaded font of a set.
#[derive(Clone)]
pub struct FontResource {
    id: FontId,
    family: String,
    weight: Weight,
    path: Option<PathBuf>,
    kind: ResourceKind,
    face: Arc<dyn Face>,
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish()
    }
}

impl FontResource {
    pub fn id(&self) -> FontId {
        self.id
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn is_emoji(&self) -> bool {
        self.kind == ResourceKind::Emoji
    }

    pub fn face(&self) -> &dyn Face {
        self.face.as_ref()
    }

    /// Whether this resource has a glyph for `ch`.
    pub fn covers(&self, ch: char) -> bool {
        self.face.covers(ch)
    }
}

/// Font resources of one weight, in routing priority order.
#[derive(Debug, Clone)]
pub struct FontSet {
    weight: Weight,
    resources: Vec<FontResource>,
    emoji: Option<FontId>,
}

impl FontSet {
    /// Load the bundled families for `weight` from `assets/fonts`.
    pub fn load(weight: Weight) -> Self {
        Self::load_with(weight, &FontSetOptions::default())
    }

    /// Load the bundled families for `weight` from another directory.
    pub fn load_from(weight: Weight, font_dir: impl Into<PathBuf>) -> Self {
        let options = FontSetOptions {
            font_dir: font_dir.into(),
            ..FontSetOptions::default()
        };
        Self::load_with(weight, &options)
    }

    pub fn load_with(weight: Weight, options: &FontSetOptions) -> Self {
        let mut builder = FontSet::builder(weight);

        for family in &options.families {
            let path = family_path(&options.font_dir, family, weight);
            match read_face(&path, family, weight) {
                Ok(face) => {
                    debug!(target: "posterline::fontdb", "Loaded {family} {weight} from {}", path.display());
                    builder.push_loaded(family, Some(path), Arc::new(face), ResourceKind::Text);
                }
                Err(err) => warn!(target: "posterline::fontdb", "Skipping font: {err:#}"),
            }
        }

        let emoji_path = match &options.emoji {
            EmojiSource::Auto => find_emoji_font().map(Path::to_path_buf),
            EmojiSource::Path(path) => Some(path.clone()),
            EmojiSource::Disabled => None,
        };
        if let Some(path) = emoji_path {
            match read_face(&path, "emoji", weight) {
                Ok(face) => {
                    builder.push_loaded("emoji", Some(path), Arc::new(face), ResourceKind::Emoji);
                }
                Err(err) => warn!(target: "posterline::fontdb", "Skipping emoji font: {err:#}"),
            }
        } else if options.emoji == EmojiSource::Auto {
            debug!(target: "posterline::fontdb", "No emoji font found; emoji fall back to text fonts");
        }

        let set = builder.build();
        info!(
            target: "posterline::fontdb",
            "Font set {weight}: {} of {} families loaded, emoji={}",
            set.text_fonts().count(),
            options.families.len(),
            set.emoji.is_some()
        );
        set
    }

    /// Start an empty set, for faces that do not come from the bundled layout.
    pub fn builder(weight: Weight) -> FontSetBuilder {
        FontSetBuilder {
            weight,
            text: Vec::new(),
            emoji: None,
        }
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: FontId) -> Option<&FontResource> {
        self.resources.get(id.index())
    }

    /// Highest-priority resource; the router's initial "last used" font.
    pub fn default_font(&self) -> Option<FontId> {
        self.resources.first().map(FontResource::id)
    }

    pub fn emoji_font(&self) -> Option<FontId> {
        self.emoji
    }

    /// All resources in priority order (emoji last).
    pub fn iter(&self) -> impl Iterator<Item = &FontResource> {
        self.resources.iter()
    }

    pub fn text_fonts(&self) -> impl Iterator<Item = &FontResource> {
        self.resources.iter().filter(|resource| !resource.is_emoji())
    }

    /// First resource in priority order with a glyph for `ch`.
    pub fn first_covering(&self, ch: char) -> Option<FontId> {
        self.resources
            .iter()
            .find(|resource| resource.covers(ch))
            .map(FontResource::id)
    }
}

/// Assembles a [`FontSet`]; ids follow push order with the emoji font last.
pub struct FontSetBuilder {
    weight: Weight,
    text: Vec<(String, Option<PathBuf>, Arc<dyn Face>)>,
    emoji: Option<(String, Option<PathBuf>, Arc<dyn Face>)>,
}

impl FontSetBuilder {
    /// Append a text face at the lowest priority so far.
    pub fn face(mut self, family: impl Into<String>, face: Arc<dyn Face>) -> Self {
        self.text.push((family.into(), None, face));
        self
    }

    /// Set the emoji face (replacing any previous one).
    pub fn emoji_face(mut self, family: impl Into<String>, face: Arc<dyn Face>) -> Self {
        self.emoji = Some((family.into(), None, face));
        self
    }

    /// Append the face at `path`, logging and skipping it when it cannot load.
    pub fn path(mut self, family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let family = family.into();
        let path = path.into();
        match read_face(&path, &family, self.weight) {
            Ok(face) => self.push_loaded(&family, Some(path), Arc::new(face), ResourceKind::Text),
            Err(err) => warn!(target: "posterline::fontdb", "Skipping font: {err:#}"),
        }
        self
    }

    fn push_loaded(
        &mut self,
        family: &str,
        path: Option<PathBuf>,
        face: Arc<dyn Face>,
        kind: ResourceKind,
    ) {
        let entry = (family.to_string(), path, face);
        match kind {
            ResourceKind::Text => self.text.push(entry),
            ResourceKind::Emoji => self.emoji = Some(entry),
        }
    }

    pub fn build(self) -> FontSet {
        let weight = self.weight;
        let mut resources: Vec<FontResource> = self
            .text
            .into_iter()
            .enumerate()
            .map(|(index, (family, path, face))| FontResource {
                id: FontId(index),
                family,
                weight,
                path,
                kind: ResourceKind::Text,
                face,
            })
            .collect();

        let emoji = self.emoji.map(|(family, path, face)| {
            let id = FontId(resources.len());
            resources.push(FontResource {
                id,
                family,
                weight,
                path,
                kind: ResourceKind::Emoji,
                face,
            });
            id
        });

        FontSet {
            weight,
            resources,
            emoji,
        }
    }
}

fn read_face(path: &Path, family: &str, weight: Weight) -> anyhow::Result<TtfFace> {
    TtfFace::from_path(path).with_context(|| format!("{family} {weight} unavailable"))
}
