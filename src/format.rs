//! Human-readable rendering of documents.
//!
//! The output is for people and debug logs; it is not stable and nothing
//! parses it back.

use std::fmt;
use std::fmt::Write;

use crate::value::{Document, Value};

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        format_document(&mut output, self, 0);
        f.write_str(&output)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        format_value(&mut output, self, 0);
        f.write_str(&output)
    }
}

fn format_document(output: &mut String, doc: &Document, indent: usize) {
    let indent_str = "  ".repeat(indent);

    output.push('{');
    if doc.is_empty() {
        output.push('}');
    } else {
        output.push('\n');
        for elem in doc {
            output.push_str(&indent_str);
            output.push_str("  ");
            format_string_literal(output, &elem.name);
            output.push_str(": ");
            format_value(output, &elem.value, indent + 1);
            output.push_str(",\n");
        }
        output.push_str(&indent_str);
        output.push('}');
    }
}

fn format_value(output: &mut String, value: &Value, indent: usize) {
    let indent_str = "  ".repeat(indent);

    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Int32(n) => write!(output, "{}i32", n).unwrap(),
        Value::Int64(n) => write!(output, "{}i64", n).unwrap(),
        Value::Int(n) => write!(output, "{}", n).unwrap(),
        Value::String(s) => format_string_literal(output, s),
        Value::DateTime(dt) => write!(output, "datetime({})", dt).unwrap(),

        Value::ObjectId(id) => {
            output.push_str("objectid(");
            for byte in id {
                write!(output, "{:02x}", byte).unwrap();
            }
            output.push(')');
        }

        Value::Binary { subtype, data } => {
            write!(output, "binary<{:#04x}>(", subtype.0).unwrap();
            for byte in data {
                write!(output, "{:02x}", byte).unwrap();
            }
            output.push(')');
        }

        Value::Document(doc) => format_document(output, doc, indent),

        Value::Array(values) => {
            output.push('[');
            if values.is_empty() {
                output.push(']');
            } else {
                output.push('\n');
                for value in values {
                    output.push_str(&indent_str);
                    output.push_str("  ");
                    format_value(output, value, indent + 1);
                    output.push_str(",\n");
                }
                output.push_str(&indent_str);
                output.push(']');
            }
        }
    }
}

fn format_string_literal(output: &mut String, s: &str) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\t' => output.push_str("\\t"),
            '\r' => output.push_str("\\r"),
            c if c.is_control() => {
                write!(output, "\\u{{{:04x}}}", c as u32).unwrap();
            }
            c => output.push(c),
        }
    }
    output.push('"');
}
