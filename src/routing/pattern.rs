//! Route pattern compilation.
//!
//! # Responsibilities
//! - Scan `@name[:regex]` tokens out of a route pattern
//! - Synthesize the anchored regex used to test a path
//! - Record where a trailing `*` wildcard starts in the path
//!
//! # Design Decisions
//! - Literal text is passed through as regex syntax (`/news/[0-9]+` is a valid pattern)
//! - Every `)` closes an optional group
//! - Compilation is a pure function of (pattern, case flag)

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::routing::params::{decode_segment, Params};

/// Default capture for a token without an explicit sub-pattern.
const DEFAULT_CAPTURE: &str = "[^/?]+";

/// Replacement for a literal `/*`: bare slash, or slash followed by anything.
const WILDCARD_GROUP: &str = "(/?|/.*?)";

/// Error produced when a pattern cannot be turned into a regex.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern `{pattern}` does not compile: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A named capture token found in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'p> {
    /// Capture name (`id` in `@id:[0-9]+`).
    pub name: &'p str,
    /// Explicit sub-pattern, if any.
    pub constraint: Option<&'p str>,
    /// Byte span of the whole token in the pattern.
    pub span: Range<usize>,
}

fn token_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        Regex::new(r"@([A-Za-z0-9_]+)(?::([^/()]*))?").expect("token grammar is a valid regex")
    })
}

/// Iterate the named tokens of `pattern` in order of appearance.
pub fn tokens(pattern: &str) -> impl Iterator<Item = Token<'_>> {
    token_grammar().captures_iter(pattern).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some(Token {
            name: name.as_str(),
            constraint: caps.get(2).map(|c| c.as_str()),
            span: whole.range(),
        })
    })
}

/// Build the unanchored regex source for `pattern`.
pub fn synthesize(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2);
    let mut cursor = 0;

    for token in tokens(pattern) {
        push_literal(&mut regex, &pattern[cursor..token.span.start]);
        regex.push_str("(?P<");
        regex.push_str(token.name);
        regex.push('>');
        regex.push_str(token.constraint.unwrap_or(DEFAULT_CAPTURE));
        regex.push(')');
        cursor = token.span.end;
    }
    push_literal(&mut regex, &pattern[cursor..]);

    if pattern.ends_with('/') {
        regex.push('?');
    } else {
        regex.push_str("/?");
    }
    regex
}

fn push_literal(regex: &mut String, literal: &str) {
    let grouped = literal.replace(')', ")?");
    regex.push_str(&grouped.replace("/*", WILDCARD_GROUP));
}

/// Byte offset in `path` where the wildcard remainder begins.
///
/// The remainder starts after the `separators`-th `/` of the path. A path
/// with fewer separators has an empty remainder.
fn splat_start(path: &str, separators: usize) -> Option<usize> {
    let mut seen = 0;
    for (i, b) in path.bytes().enumerate() {
        if b == b'/' {
            seen += 1;
        }
        if seen == separators {
            return Some(i + 1);
        }
    }
    None
}

/// A route pattern compiled into a matching procedure.
#[derive(Debug)]
pub struct CompiledPattern {
    source: String,
    case_sensitive: bool,
    regex: Regex,
    names: Vec<String>,
    splat_separators: Option<usize>,
}

impl CompiledPattern {
    /// Compile `pattern`; matching ignores ASCII/Unicode case unless `case_sensitive`.
    pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Self, PatternError> {
        let anchored = format!(r"^{}(?:\?.*)?$", synthesize(pattern));
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| PatternError::Regex {
                pattern: pattern.to_string(),
                source,
            })?;

        let names = tokens(pattern).map(|t| t.name.to_string()).collect();

        let splat_separators = pattern
            .ends_with('*')
            .then(|| pattern.bytes().filter(|b| *b == b'/').count());

        Ok(Self {
            source: pattern.to_string(),
            case_sensitive,
            regex,
            names,
            splat_separators,
        })
    }

    /// The pattern this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Named tokens in first-appearance order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn has_splat(&self) -> bool {
        self.splat_separators.is_some()
    }

    /// The synthesized, anchored regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Test `path` and extract its params on success.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;

        let named = self
            .names
            .iter()
            .map(|name| {
                let value = caps.name(name).map(|m| decode_segment(m.as_str()));
                (name.clone(), value)
            })
            .collect();

        let splat = self
            .splat_separators
            .and_then(|separators| splat_start(path, separators))
            .and_then(|start| path.get(start..))
            .filter(|rest| !rest.is_empty())
            .map(str::to_string);

        Some(Params::new(named, splat))
    }
}
