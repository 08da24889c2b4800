use std::{collections::BTreeSet, path::Path};

use crate::{
    foundation::error::{BurstError, BurstResult},
    optimize::markup::{declared_entities, element_ids, strip_prolog},
};

/// The fixed image every generated document is layered on.
///
/// Loaded once per run and shared read-only by every iteration. The stored
/// markup starts at the root `<svg>` element so it can be nested as a layer.
#[derive(Clone, Debug)]
pub struct BaseImage {
    markup: String,
    ids: BTreeSet<String>,
}

impl BaseImage {
    pub fn load(path: &Path) -> BurstResult<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| {
            BurstError::base_image(format!("read '{}': {e}", path.display()))
        })?;
        Self::from_markup(&src)
    }

    /// Validate `src` as SVG and keep it without its XML prolog.
    ///
    /// Documents whose doctype declares entities are rejected: the doctype
    /// does not survive embedding, so their references would dangle.
    pub fn from_markup(src: &str) -> BurstResult<Self> {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        let opts = usvg::Options::default();
        usvg::Tree::from_str(src, &opts)
            .map_err(|e| BurstError::base_image(format!("parse svg: {e}")))?;

        let entities = declared_entities(src)
            .map_err(|e| BurstError::base_image(format!("scan doctype: {e}")))?;
        if !entities.is_empty() {
            return Err(BurstError::base_image(format!(
                "doctype declares entities ({}); expand them before using the file as a base",
                entities.join(", ")
            )));
        }

        let markup = strip_prolog(src)
            .map_err(|e| BurstError::base_image(format!("strip prolog: {e}")))?;
        if !markup.starts_with("<svg") {
            return Err(BurstError::base_image("root element must be <svg>"));
        }
        let ids = element_ids(&markup)
            .map_err(|e| BurstError::base_image(format!("collect ids: {e}")))?
            .into_iter()
            .map(str::to_owned)
            .collect();
        Ok(Self { markup, ids })
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// `id` attribute values used inside the base image.
    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/base.rs"]
mod tests;
