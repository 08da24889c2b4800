use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use svg::Document;
use svg::Node as _;
use svg::node::Blob;
use svg::node::element::Element as SvgElement;

use crate::{
    compose::base::BaseImage,
    foundation::core::{Size, fmt_num},
    foundation::error::{BurstError, BurstResult},
    paint::fill::{DefId, FillDef},
    shapes::element::Element,
};

/// Namespace of the ids one canvas generates.
///
/// Scope 0 writes bare ids (`fill1`, `shape2`); scope `n` prefixes them with
/// `b{n}-` so they cannot clash with ids already used by the base image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdScope(pub u16);

impl IdScope {
    /// First scope none of whose generated ids appear in `taken`.
    pub fn first_free(taken: &BTreeSet<String>) -> Self {
        (0..=u16::MAX)
            .map(Self)
            .find(|scope| !taken.iter().any(|id| scope.generates(id)))
            .unwrap_or(Self(u16::MAX))
    }

    /// Whether `id` has the shape of an id this scope hands out.
    fn generates(self, id: &str) -> bool {
        let prefix = self.to_string();
        id.strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix("fill").or_else(|| rest.strip_prefix("shape")))
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl fmt::Display for IdScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => Ok(()),
            n => write!(f, "b{n}-"),
        }
    }
}

/// Id of a shape pushed onto one [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId {
    pub scope: IdScope,
    pub index: u32,
}

impl ElementId {
    pub fn new(scope: IdScope, index: u32) -> Self {
        Self { scope, index }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}shape{}", self.scope, self.index)
    }
}

/// Document builder for a single output.
///
/// Owns the embedded base layer, the `<defs>` table and the shapes in paint
/// order. A canvas is built by one composition call and consumed when it is
/// serialized; definitions never leave the canvas that registered them.
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    scope: IdScope,
    base: Option<String>,
    defs: BTreeMap<DefId, FillDef>,
    elements: Vec<(ElementId, Element)>,
    next_id: u32,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            scope: IdScope::default(),
            base: None,
            defs: BTreeMap::new(),
            elements: Vec::new(),
            next_id: 1,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Canvas layered over `base`, with ids scoped away from the base's own.
    pub fn with_base(size: Size, base: &BaseImage) -> Self {
        Self {
            scope: IdScope::first_free(base.ids()),
            base: Some(base.markup().to_owned()),
            ..Self::new(size)
        }
    }

    pub fn scope(&self) -> IdScope {
        self.scope
    }

    pub fn base_markup(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn register_def(&mut self, def: FillDef) -> DefId {
        let id = DefId::new(self.scope, self.alloc_id());
        self.defs.insert(id, def);
        id
    }

    pub fn def(&self, id: DefId) -> Option<&FillDef> {
        self.defs.get(&id)
    }

    pub fn defs(&self) -> impl Iterator<Item = (DefId, &FillDef)> {
        self.defs.iter().map(|(id, def)| (*id, def))
    }

    /// Append a shape on top of everything drawn so far.
    ///
    /// Fails when the element's fill references a definition this canvas does
    /// not own.
    pub fn push(&mut self, element: Element) -> BurstResult<ElementId> {
        if let Some(def) = element.fill.and_then(|f| f.def_id()) {
            if !self.defs.contains_key(&def) {
                return Err(BurstError::compose(format!(
                    "{} references '{def}' which is not defined on this canvas",
                    element.kind
                )));
            }
        }
        let id = ElementId::new(self.scope, self.alloc_id());
        self.elements.push((id, element));
        Ok(id)
    }

    pub fn elements(&self) -> &[(ElementId, Element)] {
        &self.elements
    }

    pub fn shape_count(&self) -> usize {
        self.elements.len()
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn to_document(&self) -> Document {
        let w = fmt_num(self.size.width);
        let h = fmt_num(self.size.height);

        let mut doc = Document::new();
        doc.assign("xmlns", "http://www.w3.org/2000/svg");
        doc.assign("xmlns:xlink", "http://www.w3.org/1999/xlink");
        doc.assign("version", "1.1");
        doc.assign("width", w.clone());
        doc.assign("height", h.clone());
        doc.assign("viewBox", format!("0 0 {w} {h}"));

        if let Some(base) = &self.base {
            doc.append(Blob::new(base.clone()));
        }

        if !self.defs.is_empty() {
            let mut defs = SvgElement::new("defs");
            for (id, def) in &self.defs {
                defs.append(def.to_node(*id));
            }
            doc.append(defs);
        }

        for (id, element) in &self.elements {
            doc.append(element.to_node(*id));
        }
        doc
    }

    /// Serialize and drop the canvas.
    pub fn into_markup(self) -> String {
        self.to_document().to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
