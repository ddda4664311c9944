//! `modcore::predicates` submodule implements [`NameCondition`] - predicate over jar names that
//! is used to recognize mods.
//!
//! Conditions are always tested against lower-cased jar name without extension, so patterns
//! should be written in lower case.
//!
//! [`ConditionSpec`] is a serializable description of a condition, which can be embedded in
//! configuration and compiled into [`NameCondition`] later.
//!

use regex::Regex;
use regex_syntax::{
    hir::{Hir, Look},
    Parser,
};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, sync::Arc};

/// [`ConditionError`] enum lists all errors that could occur during condition construction.
///
#[derive(Clone, Debug)]
pub enum ConditionError {
    /// Regular expression could not be compiled.
    ///
    InvalidPattern {
        /// Pattern that was given.
        ///
        pattern: String,
        /// Underlying `regex` error.
        ///
        source: regex::Error,
    },
}
impl fmt::Display for ConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionError::InvalidPattern { pattern, source } => {
                write!(f, "invalid name pattern `{pattern}`: {source}")
            }
        }
    }
}
impl Error for ConditionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConditionError::InvalidPattern { source, .. } => Some(source),
        }
    }
}

/// [`NameCondition`] enum represents predicate that decides whether jar name belongs to a mod.
///
/// # Example
/// ```rust
/// # use modkit::modcore::predicates::{contains, matches, starts_with};
/// assert!(starts_with("optifine").test("optifine_1.7.10_hd_u_e7"));
/// assert!(contains("gregtech").test("gt5u-gregtech-5.09"));
///
/// let condition = matches(r"industrialcraft-2-2\.2\.\d+-experimental").expect("Pattern should be correct");
/// assert!(condition.test("industrialcraft-2-2.2.827-experimental"));
/// assert!(!condition.test("industrialcraft-2-2.2.827-experimental-dev"));
/// ```
///
#[derive(Clone)]
pub enum NameCondition {
    /// Name starts with given prefix.
    ///
    StartsWith(String),
    /// Name contains given substring.
    ///
    Contains(String),
    /// Whole name matches given regular expression.
    ///
    /// Use [`matches`] to construct this variant.
    ///
    Matches(NameRegex),
    /// Name satisfies arbitrary predicate.
    ///
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}
impl NameCondition {
    /// Tests name against the condition.
    ///
    pub fn test(&self, name: &str) -> bool {
        match self {
            NameCondition::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            NameCondition::Contains(substring) => name.contains(substring.as_str()),
            NameCondition::Matches(regex) => regex.is_full_match(name),
            NameCondition::Custom(predicate) => predicate(name),
        }
    }
}
impl fmt::Debug for NameCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameCondition::StartsWith(prefix) => f.debug_tuple("StartsWith").field(prefix).finish(),
            NameCondition::Contains(substring) => {
                f.debug_tuple("Contains").field(substring).finish()
            }
            NameCondition::Matches(regex) => {
                f.debug_tuple("Matches").field(&regex.as_str()).finish()
            }
            NameCondition::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Constructs condition that holds for names starting with `prefix`.
///
pub fn starts_with(prefix: impl Into<String>) -> NameCondition {
    NameCondition::StartsWith(prefix.into())
}
/// Constructs condition that holds for names containing `substring`.
///
pub fn contains(substring: impl Into<String>) -> NameCondition {
    NameCondition::Contains(substring.into())
}
/// [`NameRegex`] struct is a regular expression that only accepts whole names.
///
/// It can only be obtained through [`matches`], so every [`NameCondition::Matches`] is
/// anchored on both ends:
///
/// ```rust,compile_fail
/// # use modkit::modcore::predicates::{NameCondition, NameRegex};
/// let condition = NameCondition::Matches(NameRegex(regex::Regex::new("ic2").unwrap()));
/// ```
///
#[derive(Clone, Debug)]
pub struct NameRegex {
    /// Pattern as it was given.
    ///
    pattern: String,
    /// Compiled expression anchored at the start and the end of the text.
    ///
    regex: Regex,
}
impl NameRegex {
    /// Compiles pattern and anchors it on both ends.
    ///
    /// Anchors are added to the parsed expression, not to its text,
    /// so flags and comments of the pattern cannot affect them.
    ///
    fn new(pattern: &str) -> Result<Self, regex::Error> {
        let parsed: Hir = Parser::new()
            .parse(pattern)
            .map_err(|error| regex::Error::Syntax(error.to_string()))?;
        let anchored: Hir = Hir::concat(vec![
            Hir::look(Look::Start),
            parsed,
            Hir::look(Look::End),
        ]);
        Ok(NameRegex {
            pattern: pattern.to_string(),
            regex: Regex::new(&anchored.to_string())?,
        })
    }

    /// Returns pattern as it was given to [`matches`].
    ///
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
    /// Tests whether the whole name matches the expression.
    ///
    pub fn is_full_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Constructs condition that holds for names that fully match regular expression.
///
/// Partial matches do not count: `matches("opti")` does not hold for `"optifine"`.
///
/// This function fails if `pattern` is not a valid regular expression.
///
/// # Example
/// ```rust
/// # use modkit::modcore::predicates::matches;
/// let condition = matches("(?x) optifine _ .*  # any version").expect("Pattern should be correct");
/// assert!(condition.test("optifine_1.7.10_hd_u_e7"));
/// assert!(!condition.test("better-optifine_1.7.10"));
/// ```
///
pub fn matches(pattern: &str) -> Result<NameCondition, ConditionError> {
    NameRegex::new(pattern)
        .map(NameCondition::Matches)
        .map_err(|source| ConditionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
/// Constructs condition from arbitrary predicate.
///
/// # Example
/// ```rust
/// # use modkit::modcore::predicates::custom;
/// let condition = custom(|name| name.len() > 3 && name.ends_with("-dev"));
/// assert!(condition.test("thaumcraft-dev"));
/// ```
///
pub fn custom(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> NameCondition {
    NameCondition::Custom(Arc::new(predicate))
}

/// [`ConditionKind`] lists conditions that can be described by data.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Corresponds to [`starts_with`].
    ///
    StartsWith,
    /// Corresponds to [`contains`].
    ///
    Contains,
    /// Corresponds to [`matches`].
    ///
    Matches,
}
/// [`ConditionSpec`] struct describes [`NameCondition`] as plain data.
///
/// # Example
/// ```rust
/// # use modkit::modcore::predicates::{ConditionKind, ConditionSpec, NameCondition};
/// let spec: ConditionSpec = ConditionSpec {
///     kind: ConditionKind::Contains,
///     pattern: String::from("buildcraft"),
/// };
/// let condition: NameCondition = spec.compile().expect("Spec should be correct");
/// assert!(condition.test("buildcraft-7.1.23"));
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConditionSpec {
    /// Kind of condition.
    ///
    pub kind: ConditionKind,
    /// Prefix, substring or regular expression, depending on `kind`.
    ///
    pub pattern: String,
}
impl ConditionSpec {
    /// Compiles description into [`NameCondition`].
    ///
    /// This function fails only for [`ConditionKind::Matches`] with invalid pattern.
    ///
    pub fn compile(&self) -> Result<NameCondition, ConditionError> {
        match self.kind {
            ConditionKind::StartsWith => Ok(starts_with(self.pattern.as_str())),
            ConditionKind::Contains => Ok(contains(self.pattern.as_str())),
            ConditionKind::Matches => matches(&self.pattern),
        }
    }
}
impl TryFrom<ConditionSpec> for NameCondition {
    type Error = ConditionError;

    fn try_from(spec: ConditionSpec) -> Result<Self, Self::Error> {
        spec.compile()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        contains, custom, matches, starts_with, ConditionError, ConditionKind, ConditionSpec,
        NameCondition,
    };
    use regex::Regex;
    use std::error::Error;

    #[test]
    fn prefix_and_substring() {
        let prefix = starts_with("optifine");
        assert!(prefix.test("optifine"));
        assert!(prefix.test("optifine_1.7.10_hd_u_e7"));
        assert!(!prefix.test("better-optifine"));

        let substring = contains("tinker");
        assert!(substring.test("tinkersconstruct-1.7.10"));
        assert!(substring.test("mantle-tinker"));
        assert!(!substring.test("tconstruct"));

        assert!(starts_with("").test(""));
        assert!(contains("").test("anything"));
    }

    #[test]
    fn regex() {
        let condition = matches("(gt5u|gregtech)-.*").expect("Pattern should be correct");
        assert!(condition.test("gregtech-5.09.41"));
        assert!(condition.test("gt5u-5.09.41"));
        assert!(!condition.test("new-gregtech-5.09.41"));

        // whole name is required to match
        let partial = matches("ic2").expect("Pattern should be correct");
        assert!(partial.test("ic2"));
        assert!(!partial.test("ic2-experimental"));

        // alternation must not escape the anchors
        let alternation = matches("ic2|tc").expect("Pattern should be correct");
        assert!(alternation.test("tc"));
        assert!(!alternation.test("ic2-experimental"));
        assert!(!alternation.test("old-tc"));

        let error = matches("broken(").expect_err("Pattern should be incorrect");
        let ConditionError::InvalidPattern { ref pattern, .. } = error;
        assert_eq!(pattern, "broken(");
        assert!(error.source().is_some());
        assert!(error.to_string().contains("broken("));
    }

    #[test]
    fn regex_is_always_anchored() {
        // unanchored expression accepts partial matches
        assert!(Regex::new("ic2")
            .expect("Pattern should be correct")
            .is_match("ic2-experimental"));

        let condition = matches("ic2").expect("Pattern should be correct");
        let NameCondition::Matches(ref regex) = condition else {
            panic!("`matches` should construct `NameCondition::Matches`");
        };
        assert_eq!(regex.as_str(), "ic2");
        assert!(regex.is_full_match("ic2"));
        assert!(!regex.is_full_match("ic2-experimental"));
        assert!(!regex.is_full_match("old-ic2"));

        let cloned = condition.clone();
        assert!(!cloned.test("ic2-experimental"));
    }

    #[test]
    fn regex_flags_and_comments() {
        let verbose = matches("(?x)optifine # c").expect("Pattern should be correct");
        assert!(verbose.test("optifine"));
        assert!(!verbose.test("optifine_hd"));
        assert!(!verbose.test("optifine # c"));

        let case_insensitive = matches("(?i)OptiFine_.*").expect("Pattern should be correct");
        assert!(case_insensitive.test("optifine_1.7.10"));
        assert!(!case_insensitive.test("no-optifine_1.7.10"));

        let multiline = matches("(?m)^ic2$").expect("Pattern should be correct");
        assert!(multiline.test("ic2"));
        assert!(!multiline.test("ic2\nextra"));
    }

    #[test]
    fn custom_condition() {
        let condition = custom(|name| name.split('-').count() == 3);
        assert!(condition.test("a-b-c"));
        assert!(!condition.test("a-b"));

        let cloned = condition.clone();
        assert!(cloned.test("x-y-z"));
        assert_eq!(format!("{cloned:?}"), "Custom(..)");
    }

    #[test]
    fn condition_spec() {
        let spec = ConditionSpec {
            kind: ConditionKind::Matches,
            pattern: String::from(r"journeymap-1\.7\.10-5\..*"),
        };
        let condition = NameCondition::try_from(spec.clone()).expect("Spec should be correct");
        assert!(condition.test("journeymap-1.7.10-5.1.4p2-unlimited"));
        assert_eq!(format!("{condition:?}"), r#"Matches("journeymap-1\\.7\\.10-5\\..*")"#);

        let bytes = serde_cbor::to_vec(&spec).expect("`ConditionSpec` should be serializable");
        let restored: ConditionSpec =
            serde_cbor::from_slice(&bytes).expect("`ConditionSpec` should be deserializable");
        assert_eq!(restored, spec);

        let invalid = ConditionSpec {
            kind: ConditionKind::Matches,
            pattern: String::from("["),
        };
        assert!(invalid.compile().is_err());

        let not_regex = ConditionSpec {
            kind: ConditionKind::StartsWith,
            pattern: String::from("["),
        };
        assert!(not_regex
            .compile()
            .expect("Prefix is never compiled")
            .test("[bracket"));
    }
}
