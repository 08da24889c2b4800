//! Lexical view of SVG markup.
//!
//! The size-reduction passes only need to drop or rewrite whole tokens, so the
//! `xmlparser` token stream is regrouped into tokens that keep their exact
//! source text; anything not touched by a pass is emitted byte for byte.

use std::collections::BTreeSet;

use xmlparser::{ElementEnd, StrSpan, Token as XmlToken, Tokenizer};

use crate::foundation::error::{BurstError, BurstResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Character data, or whitespace between prolog items.
    Text(&'a str),
    /// `<!-- ... -->`
    Comment(&'a str),
    /// `<!DOCTYPE ...>`, internal subset included.
    Doctype(&'a str),
    /// `<![CDATA[ ... ]]>`
    Cdata(&'a str),
    /// `<? ... ?>`, the XML declaration included.
    Instruction(&'a str),
    /// Start, end or empty-element tag.
    Tag(TagParts<'a>),
}

impl<'a> Token<'a> {
    pub(crate) fn source(&self) -> &'a str {
        match self {
            Self::Text(s)
            | Self::Comment(s)
            | Self::Doctype(s)
            | Self::Cdata(s)
            | Self::Instruction(s) => s,
            Self::Tag(t) => t.source,
        }
    }
}

/// A start/end tag split into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TagParts<'a> {
    pub(crate) source: &'a str,
    /// Qualified name as written.
    pub(crate) name: &'a str,
    /// Name without a namespace prefix.
    pub(crate) local: &'a str,
    pub(crate) closing: bool,
    pub(crate) self_closing: bool,
    /// `(name, quote, value)` in source order.
    pub(crate) attrs: Vec<(&'a str, char, &'a str)>,
}

fn malformed(e: xmlparser::Error) -> BurstError {
    BurstError::optimize(format!("malformed markup: {e}"))
}

fn unterminated(what: &str, at: usize) -> BurstError {
    BurstError::optimize(format!("unterminated {what} at byte {at}"))
}

fn qname<'a>(src: &'a str, prefix: StrSpan<'a>, local: StrSpan<'a>) -> &'a str {
    if prefix.as_str().is_empty() {
        local.as_str()
    } else {
        &src[prefix.start()..local.end()]
    }
}

/// Whitespace the tokenizer skips (prolog, after the root) becomes text.
fn push_gap<'a>(out: &mut Vec<Token<'a>>, src: &'a str, cursor: usize, start: usize) {
    if start > cursor {
        out.push(Token::Text(&src[cursor..start]));
    }
}

pub(crate) fn tokenize(src: &str) -> BurstResult<Vec<Token<'_>>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    // Start tag waiting for its attributes and closing `>`.
    let mut open: Option<(usize, TagParts<'_>)> = None;
    let mut dtd_start: Option<usize> = None;

    for token in Tokenizer::from(src) {
        let token = token.map_err(malformed)?;
        if dtd_start.is_some() && !matches!(token, XmlToken::DtdEnd { .. }) {
            continue;
        }
        let (item, span) = match token {
            XmlToken::ElementStart { prefix, local, span } => {
                push_gap(&mut out, src, cursor, span.start());
                let tag = TagParts {
                    source: "",
                    name: qname(src, prefix, local),
                    local: local.as_str(),
                    closing: false,
                    self_closing: false,
                    attrs: Vec::new(),
                };
                open = Some((span.start(), tag));
                continue;
            }
            XmlToken::Attribute {
                prefix,
                local,
                value,
                span,
            } => {
                let (_, tag) = open
                    .as_mut()
                    .ok_or_else(|| unterminated("tag", span.start()))?;
                let quote = src[..value.start()].chars().next_back().unwrap_or('"');
                tag.attrs.push((qname(src, prefix, local), quote, value.as_str()));
                continue;
            }
            XmlToken::ElementEnd { end, span } => match end {
                ElementEnd::Open | ElementEnd::Empty => {
                    let (start, mut tag) = open
                        .take()
                        .ok_or_else(|| unterminated("tag", span.start()))?;
                    tag.self_closing = matches!(end, ElementEnd::Empty);
                    tag.source = &src[start..span.end()];
                    cursor = span.end();
                    out.push(Token::Tag(tag));
                    continue;
                }
                ElementEnd::Close(prefix, local) => {
                    let tag = TagParts {
                        source: span.as_str(),
                        name: qname(src, prefix, local),
                        local: local.as_str(),
                        closing: true,
                        self_closing: false,
                        attrs: Vec::new(),
                    };
                    (Token::Tag(tag), span)
                }
            },
            XmlToken::DtdStart { span, .. } => {
                push_gap(&mut out, src, cursor, span.start());
                dtd_start = Some(span.start());
                continue;
            }
            XmlToken::DtdEnd { span } => {
                let start = dtd_start
                    .take()
                    .ok_or_else(|| unterminated("doctype", span.start()))?;
                cursor = span.end();
                out.push(Token::Doctype(&src[start..span.end()]));
                continue;
            }
            XmlToken::EntityDeclaration { span, .. } => (Token::Doctype(span.as_str()), span),
            XmlToken::EmptyDtd { span, .. } => (Token::Doctype(span.as_str()), span),
            XmlToken::Declaration { span, .. } | XmlToken::ProcessingInstruction { span, .. } => {
                (Token::Instruction(span.as_str()), span)
            }
            XmlToken::Comment { span, .. } => (Token::Comment(span.as_str()), span),
            XmlToken::Cdata { span, .. } => (Token::Cdata(span.as_str()), span),
            XmlToken::Text { text } => (Token::Text(text.as_str()), text),
        };
        push_gap(&mut out, src, cursor, span.start());
        cursor = span.end();
        out.push(item);
    }

    if let Some((start, _)) = open {
        return Err(unterminated("tag", start));
    }
    if let Some(start) = dtd_start {
        return Err(unterminated("doctype", start));
    }
    push_gap(&mut out, src, cursor, src.len());
    Ok(out)
}

/// Names of the general entities declared in the doctype's internal subset.
pub(crate) fn declared_entities(src: &str) -> BurstResult<Vec<&str>> {
    let mut names = Vec::new();
    for token in Tokenizer::from(src) {
        if let XmlToken::EntityDeclaration { name, .. } = token.map_err(malformed)? {
            names.push(name.as_str());
        }
    }
    Ok(names)
}

/// Every unprefixed `id` attribute value in the document.
pub(crate) fn element_ids(src: &str) -> BurstResult<BTreeSet<&str>> {
    let mut ids = BTreeSet::new();
    for token in Tokenizer::from(src) {
        if let XmlToken::Attribute {
            prefix,
            local,
            value,
            ..
        } = token.map_err(malformed)?
        {
            if prefix.as_str().is_empty() && local.as_str() == "id" {
                ids.insert(value.as_str());
            }
        }
    }
    Ok(ids)
}

/// Drop everything before the root element (byte order mark, XML
/// declaration, doctype, comments, whitespace) and trailing whitespace.
pub fn strip_prolog(src: &str) -> BurstResult<String> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let tokens = tokenize(src)?;
    let start = tokens
        .iter()
        .position(|t| match t {
            Token::Instruction(_) | Token::Doctype(_) | Token::Comment(_) => false,
            Token::Text(s) => !s.trim().is_empty(),
            Token::Cdata(_) | Token::Tag(_) => true,
        })
        .unwrap_or(tokens.len());

    let mut out = String::with_capacity(src.len());
    for t in &tokens[start..] {
        out.push_str(t.source());
    }
    out.truncate(out.trim_end().len());
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/optimize/markup.rs"]
mod tests;
