//! Placeholder scanning for input-file templates.
//!
//! Template text references parameters with `${name}` or `$name` syntax;
//! `$$` produces a literal `$` in the output.
//!
//! # Syntax
//!
//! - `${run_duration}` - braced reference, name runs to the closing brace
//! - `$run_duration` - bare reference, name is an ASCII identifier
//! - `$$` - literal `$`
//! - `$` followed by anything else is literal text
//!
//! An unterminated `${` is treated as literal text rather than an error;
//! input templates are rendered best-effort.

/// A segment of scanned template text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Parameter reference: ${name} or $name
    Variable(String),
}

/// Scan template text into literal and variable segments.
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                literal.push('$');
            }
            Some('{') => {
                chars.next();

                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }

                if closed {
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Variable(name));
                } else {
                    literal.push_str("${");
                    literal.push_str(&name);
                }
            }
            Some(&c) if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }

                flush(&mut literal, &mut segments);
                segments.push(Segment::Variable(name));
            }
            _ => {
                literal.push('$');
            }
        }
    }

    flush(&mut literal, &mut segments);
    segments
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literal_only() {
        let result = parse_template("grain size in mm");
        assert_eq!(result, vec![Segment::Literal("grain size in mm".to_string())]);
    }

    #[test]
    fn parse_braced_variable() {
        let result = parse_template("${run_duration}");
        assert_eq!(result, vec![Segment::Variable("run_duration".to_string())]);
    }

    #[test]
    fn parse_bare_variable() {
        let result = parse_template("dt = $dt s");
        assert_eq!(
            result,
            vec![
                Segment::Literal("dt = ".to_string()),
                Segment::Variable("dt".to_string()),
                Segment::Literal(" s".to_string()),
            ]
        );
    }

    #[test]
    fn bare_variable_stops_at_non_identifier() {
        let result = parse_template("$a.b");
        assert_eq!(
            result,
            vec![
                Segment::Variable("a".to_string()),
                Segment::Literal(".b".to_string()),
            ]
        );
    }

    #[test]
    fn parse_multiple_variables() {
        let result = parse_template("${a} and ${b}");
        assert_eq!(
            result,
            vec![
                Segment::Variable("a".to_string()),
                Segment::Literal(" and ".to_string()),
                Segment::Variable("b".to_string()),
            ]
        );
    }

    #[test]
    fn parse_adjacent_variables() {
        let result = parse_template("${a}${b}");
        assert_eq!(
            result,
            vec![
                Segment::Variable("a".to_string()),
                Segment::Variable("b".to_string()),
            ]
        );
    }

    #[test]
    fn double_dollar_escapes() {
        let result = parse_template("cost is $$5");
        assert_eq!(result, vec![Segment::Literal("cost is $5".to_string())]);
    }

    #[test]
    fn escaped_brace_reference_stays_literal() {
        let result = parse_template("$${HOME}");
        assert_eq!(result, vec![Segment::Literal("${HOME}".to_string())]);
    }

    #[test]
    fn dollar_before_digit_is_literal() {
        let result = parse_template("price is $100");
        assert_eq!(result, vec![Segment::Literal("price is $100".to_string())]);
    }

    #[test]
    fn trailing_dollar_is_literal() {
        let result = parse_template("total: $");
        assert_eq!(result, vec![Segment::Literal("total: $".to_string())]);
    }

    #[test]
    fn unterminated_brace_is_literal() {
        let result = parse_template("broken ${name");
        assert_eq!(result, vec![Segment::Literal("broken ${name".to_string())]);
    }

    #[test]
    fn parse_empty_string() {
        assert!(parse_template("").is_empty());
    }

    #[test]
    fn parse_variable_with_underscore_and_digits() {
        let result = parse_template("${sea_level_rise_2100}");
        assert_eq!(
            result,
            vec![Segment::Variable("sea_level_rise_2100".to_string())]
        );
    }
}
