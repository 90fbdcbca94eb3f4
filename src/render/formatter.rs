//! Parameter substitution for input-file templates.
//!
//! Rendering never aborts a batch because one file references an undefined
//! placeholder; science-model templates frequently contain optional slots.
//! The contract is best-effort substitution with diagnosable gaps: every
//! unresolved name is reported in the [`Rendered`] result, and unresolved
//! occurrences substitute to the empty string.

use crate::render::interpolation::{parse_template, Segment};
use serde_json::Value;
use std::collections::HashMap;

/// Outcome of rendering one template.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Template text with every resolvable placeholder substituted.
    pub text: String,

    /// Placeholder names with no supplied value, once per distinct name,
    /// in first-reference order.
    pub missing: Vec<String>,
}

/// Substitutes parameter values into template text.
///
/// Constructed once per component with the component's default-value
/// mapping; each [`format`] call may layer caller-supplied overrides on
/// top. Overrides win over defaults.
///
/// [`format`]: TemplateFormatter::format
#[derive(Debug, Clone)]
pub struct TemplateFormatter {
    defaults: HashMap<String, String>,
}

impl TemplateFormatter {
    /// Create a formatter over a fixed default-value mapping.
    ///
    /// JSON string defaults substitute verbatim; any other JSON value
    /// substitutes as its JSON rendering.
    pub fn new(defaults: &HashMap<String, Value>) -> Self {
        Self {
            defaults: defaults
                .iter()
                .map(|(key, value)| (key.clone(), value_to_string(value)))
                .collect(),
        }
    }

    /// Render one template, resolving placeholders against `overrides`
    /// first and the formatter's defaults second.
    ///
    /// The scan is two-pass: the first pass resolves every reference and
    /// collects the unresolved names, the second substitutes, emitting the
    /// empty string for unresolved references.
    pub fn format(&self, template: &str, overrides: &HashMap<String, String>) -> Rendered {
        let segments = parse_template(template);

        let mut missing = Vec::new();
        for segment in &segments {
            if let Segment::Variable(name) = segment {
                if self.resolve(name, overrides).is_none() && !missing.contains(name) {
                    missing.push(name.clone());
                }
            }
        }

        let mut text = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(literal) => text.push_str(&literal),
                Segment::Variable(name) => {
                    if let Some(value) = self.resolve(&name, overrides) {
                        text.push_str(value);
                    }
                }
            }
        }

        Rendered { text, missing }
    }

    fn resolve<'a>(&'a self, name: &str, overrides: &'a HashMap<String, String>) -> Option<&'a str> {
        overrides
            .get(name)
            .or_else(|| self.defaults.get(name))
            .map(String::as_str)
    }
}

/// Render a JSON default for substitution into plain text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format_substitutes_default() {
        let formatter = TemplateFormatter::new(&defaults(&[("x", json!("world"))]));
        let rendered = formatter.format("Hello ${x}", &HashMap::new());
        assert_eq!(rendered.text, "Hello world");
        assert!(rendered.missing.is_empty());
    }

    #[test]
    fn format_reports_missing_name_once() {
        let formatter = TemplateFormatter::new(&HashMap::new());
        let rendered = formatter.format("Hello ${x} ${x}", &HashMap::new());
        assert_eq!(rendered.text, "Hello  ");
        assert_eq!(rendered.missing, vec!["x".to_string()]);
    }

    #[test]
    fn missing_names_keep_first_reference_order() {
        let formatter = TemplateFormatter::new(&HashMap::new());
        let rendered = formatter.format("${b} ${a} ${b}", &HashMap::new());
        assert_eq!(rendered.missing, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let formatter = TemplateFormatter::new(&defaults(&[("mode", json!("batch"))]));
        let rendered = formatter.format("mode = ${mode}", &overrides(&[("mode", "interactive")]));
        assert_eq!(rendered.text, "mode = interactive");
    }

    #[test]
    fn overrides_can_supply_names_without_defaults() {
        let formatter = TemplateFormatter::new(&HashMap::new());
        let rendered = formatter.format("${extra}", &overrides(&[("extra", "42")]));
        assert_eq!(rendered.text, "42");
        assert!(rendered.missing.is_empty());
    }

    #[test]
    fn numeric_defaults_substitute_as_plain_text() {
        let formatter = TemplateFormatter::new(&defaults(&[
            ("n_steps", json!(3600)),
            ("dt", json!(0.25)),
            ("verbose", json!(true)),
        ]));
        let rendered = formatter.format("${n_steps} ${dt} ${verbose}", &HashMap::new());
        assert_eq!(rendered.text, "3600 0.25 true");
    }

    #[test]
    fn independent_format_calls_do_not_share_missing_state() {
        let formatter = TemplateFormatter::new(&HashMap::new());
        let first = formatter.format("${y}", &HashMap::new());
        let second = formatter.format("clean text", &HashMap::new());
        assert_eq!(first.missing, vec!["y".to_string()]);
        assert!(second.missing.is_empty());
    }

    #[test]
    fn escaped_dollar_passes_through() {
        let formatter = TemplateFormatter::new(&HashMap::new());
        let rendered = formatter.format("$$PATH", &HashMap::new());
        assert_eq!(rendered.text, "$PATH");
        assert!(rendered.missing.is_empty());
    }
}
