// ============================================================================
// Delimiter Resolver
// Extracts `//...\n` declarations and builds the effective delimiter set
// ============================================================================

use crate::domain::{BareDelimiterPolicy, CalculatorConfig, CustomDelimiterMode, DelimiterSet};
use crate::errors::{CalculatorError, CalculatorResult};
use std::borrow::Cow;
use tracing::debug;

/// Prefix announcing a delimiter declaration
pub const DECLARATION_MARKER: &str = "//";

/// Input split into the delimiters in effect and the text to tokenize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput<'a> {
    /// Text after the declaration line (or the whole input)
    pub payload: &'a str,

    /// Effective delimiters, in substitution order
    pub delimiters: DelimiterSet,

    /// Delimiters named by the declaration, in declaration order
    pub declared: Vec<String>,
}

/// Resolves the delimiter declaration of one input line.
///
/// Declaration grammar, checked in this order:
///
/// ```text
/// //[*][!!][r9r]\n11r9r22*hh*33!!44     bracketed: one or more [delim] groups
/// //;\n1;2                              bare: the whole line is one delimiter
/// 1,2\n3                                no marker: default delimiters only
/// ```
///
/// A marker without a following newline is not a declaration; the input is
/// returned untouched.
#[derive(Debug, Clone)]
pub struct DelimiterResolver {
    defaults: DelimiterSet,
    bare_policy: BareDelimiterPolicy,
    mode: CustomDelimiterMode,
}

impl DelimiterResolver {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            defaults: config.default_delimiters.iter().cloned().collect(),
            bare_policy: config.bare_delimiter_policy,
            mode: config.custom_delimiter_mode,
        }
    }

    /// Delimiters used when the input declares none
    pub fn default_delimiters(&self) -> &DelimiterSet {
        &self.defaults
    }

    /// Resolve the declaration (if any) at the start of `input`.
    ///
    /// # Errors
    /// - `DelimiterFormat` when a bracket group is not closed, or text
    ///   between groups does not start a new group
    /// - `InvalidDelimiter` when a bare declaration is not one character
    ///   under [`BareDelimiterPolicy::SingleCharacter`]
    pub fn resolve<'a>(&self, input: &'a str) -> CalculatorResult<ResolvedInput<'a>> {
        let Some(rest) = input.strip_prefix(DECLARATION_MARKER) else {
            return Ok(self.passthrough(input));
        };

        let Some((declaration, payload)) = rest.split_once('\n') else {
            debug!("Declaration marker without newline, using default delimiters");
            return Ok(self.passthrough(input));
        };

        let declared = if declaration.starts_with('[') {
            parse_bracketed(declaration)?
        } else {
            self.parse_bare(declaration)?
        };

        debug!(?declared, "Custom delimiters declared");

        Ok(ResolvedInput {
            payload,
            delimiters: self.effective_set(&declared),
            declared,
        })
    }

    fn passthrough<'a>(&self, input: &'a str) -> ResolvedInput<'a> {
        ResolvedInput {
            payload: input,
            delimiters: self.defaults.clone(),
            declared: Vec::new(),
        }
    }

    fn parse_bare(&self, declaration: &str) -> CalculatorResult<Vec<String>> {
        match self.bare_policy {
            BareDelimiterPolicy::SingleCharacter if declaration.chars().count() != 1 => {
                Err(CalculatorError::InvalidDelimiter {
                    delimiter: declaration.to_string(),
                })
            }
            _ if declaration.is_empty() => Ok(Vec::new()),
            _ => Ok(vec![declaration.to_string()]),
        }
    }

    fn effective_set(&self, declared: &[String]) -> DelimiterSet {
        match self.mode {
            CustomDelimiterMode::Replace if !declared.is_empty() => {
                declared.iter().cloned().collect()
            }
            _ => {
                let mut delimiters = self.defaults.clone();
                for delimiter in declared {
                    delimiters.insert(delimiter.as_str());
                }
                delimiters
            }
        }
    }
}

/// Scan `[a][bb][]...` left to right. Empty groups declare nothing.
fn parse_bracketed(declaration: &str) -> CalculatorResult<Vec<String>> {
    let mut declared = Vec::new();
    let mut rest = declaration;

    while !rest.is_empty() {
        let Some(group) = rest.strip_prefix('[') else {
            return Err(CalculatorError::DelimiterFormat {
                declaration: declaration.to_string(),
                reason: format!("unexpected {rest:?} after closing bracket"),
            });
        };

        let Some(end) = group.find(']') else {
            return Err(CalculatorError::missing_closing_bracket(declaration));
        };

        let delimiter = &group[..end];
        if !delimiter.is_empty() {
            declared.push(delimiter.to_string());
        }
        rest = &group[end + 1..];
    }

    Ok(declared)
}

/// Translate literal `\n` sequences (backslash, `n`) into newlines.
///
/// Line-oriented sources cannot carry a real newline inside one line, so the
/// command-line driver accepts the escaped form.
pub fn unescape_newlines(input: &str) -> Cow<'_, str> {
    if input.contains("\\n") {
        Cow::Owned(input.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(input)
    }
}
