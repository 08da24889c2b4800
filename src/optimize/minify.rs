use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::BurstResult,
    optimize::Optimizer,
    optimize::markup::{TagParts, Token, tokenize},
};

/// Upper bound on multipass iterations.
const MAX_PASSES: usize = 10;

/// Elements whose whitespace-only text is significant.
const TEXT_BEARING: [&str; 8] = [
    "text",
    "tspan",
    "textPath",
    "style",
    "script",
    "title",
    "desc",
    "foreignObject",
];

/// One cleanup pass. Names follow the svgo plugins they mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pass {
    RemoveDoctype,
    #[serde(rename = "removeXMLProcInst")]
    RemoveXmlDeclaration,
    /// Keeps `<!--! ... -->` comments.
    RemoveComments,
    /// Collapse whitespace inside attribute values and between attributes.
    CleanupAttrs,
    /// Drop whitespace-only text outside text-bearing elements.
    TrimWhitespace,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinifyConfig {
    /// Repeat the passes until the output stops shrinking.
    pub multipass: bool,
    pub passes: Vec<Pass>,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            multipass: true,
            passes: vec![
                Pass::RemoveDoctype,
                Pass::RemoveComments,
                Pass::CleanupAttrs,
                Pass::TrimWhitespace,
            ],
        }
    }
}

impl MinifyConfig {
    pub fn validate(&self) -> BurstResult<()> {
        // Every pass list is valid; an empty one is the identity.
        Ok(())
    }

    fn has(&self, pass: Pass) -> bool {
        self.passes.contains(&pass)
    }
}

/// Lexical SVG minifier.
///
/// Never grows its input and reaches a fixed point: minifying already
/// minified markup returns it unchanged.
#[derive(Clone, Debug, Default)]
pub struct Minifier {
    config: MinifyConfig,
}

impl Minifier {
    pub fn new(config: MinifyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinifyConfig {
        &self.config
    }

    fn run_once(&self, src: &str) -> BurstResult<String> {
        let cfg = &self.config;
        let tokens = tokenize(src)?;
        let mut out = String::with_capacity(src.len());
        // Open text-bearing elements; whitespace inside them is kept.
        let mut text_depth = 0usize;

        for token in tokens {
            match token {
                Token::Doctype(_) if cfg.has(Pass::RemoveDoctype) => {}
                Token::Instruction(s)
                    if cfg.has(Pass::RemoveXmlDeclaration) && is_xml_declaration(s) => {}
                Token::Comment(s) if cfg.has(Pass::RemoveComments) && !s.starts_with("<!--!") => {}
                Token::Text(s)
                    if cfg.has(Pass::TrimWhitespace)
                        && text_depth == 0
                        && s.trim().is_empty() => {}
                Token::Tag(tag) => {
                    let track = cfg.has(Pass::TrimWhitespace);
                    if track && TEXT_BEARING.contains(&tag.local) && !tag.self_closing {
                        if tag.closing {
                            text_depth = text_depth.saturating_sub(1);
                        } else {
                            text_depth += 1;
                        }
                    }
                    if cfg.has(Pass::CleanupAttrs) {
                        write_clean_tag(&mut out, &tag);
                    } else {
                        out.push_str(tag.source);
                    }
                }
                other => out.push_str(other.source()),
            }
        }
        Ok(out)
    }
}

impl Optimizer for Minifier {
    fn optimize(&self, svg: &str) -> BurstResult<String> {
        let mut out = self.run_once(svg)?;
        if self.config.multipass {
            for _ in 1..MAX_PASSES {
                let next = self.run_once(&out)?;
                if next.len() >= out.len() {
                    break;
                }
                out = next;
            }
        }
        if out.len() > svg.len() {
            out = svg.to_owned();
        }
        tracing::debug!(
            original = svg.len(),
            optimized = out.len(),
            "minified svg"
        );
        Ok(out)
    }
}

fn is_xml_declaration(pi: &str) -> bool {
    pi.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("<?xml"))
        && pi[5..].starts_with(|c: char| c.is_ascii_whitespace() || c == '?')
}

fn write_clean_tag(out: &mut String, tag: &TagParts<'_>) {
    out.push('<');
    if tag.closing {
        out.push('/');
    }
    out.push_str(tag.name);
    for (key, quote, value) in &tag.attrs {
        out.push(' ');
        out.push_str(key);
        out.push('=');
        out.push(*quote);
        let mut first = true;
        for word in value.split_ascii_whitespace() {
            if !first {
                out.push(' ');
            }
            out.push_str(word);
            first = false;
        }
        out.push(*quote);
    }
    if tag.self_closing {
        out.push('/');
    }
    out.push('>');
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/minify.rs"]
mod tests;
