//! Single-pass extraction of `#define GLFW_*` constants from `glfw3.h`.
//!
//! The scan is deliberately order sensitive: an alias only resolves against
//! macro names already seen earlier in the header, and output keeps first
//! occurrence order so two runs over the same header are byte identical.

use std::collections::HashSet;

const MACRO_PREFIX: &str = "GLFW_";

/// How a constant's value is expressed in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A decimal or hexadecimal literal, preserved exactly as written.
    Literal(String),
    /// The native macro name of an earlier direct constant.
    Alias(String),
}

/// One extracted header constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// The macro name as it appears in the header, prefix included.
    pub native_name: String,
    /// The host identifier after prefix stripping and case conversion.
    pub renamed: String,
    pub value: Value,
}

/// Scans header text for numeric `#define GLFW_*` lines.
///
/// Value tokens are classified in order: a base-10 integer or a `0x`
/// literal is recorded directly and its macro name becomes resolvable; a
/// token exactly matching an already-seen direct macro name becomes an
/// alias of it; anything else (string values, expressions, valueless
/// defines) is silently skipped. A forward reference is skipped too, since
/// its target is not yet known to the scan.
pub fn extract_constants(header: &str) -> Vec<Constant> {
    let mut known = HashSet::new();
    let mut constants = Vec::new();

    for line in header.lines() {
        let line = normalize_whitespace(line);
        if !line.starts_with("#define GLFW_") {
            continue;
        }

        let parts: Vec<&str> = line.split(' ').collect();
        if parts.len() < 3 {
            continue;
        }
        let (name, value) = (parts[1], parts[2]);

        if value.parse::<i64>().is_ok() || value.starts_with("0x") {
            known.insert(name.to_owned());
            constants.push(Constant {
                native_name: name.to_owned(),
                renamed: rename_constant(name),
                value: Value::Literal(value.to_owned()),
            });
        } else if known.contains(value) {
            constants.push(Constant {
                native_name: name.to_owned(),
                renamed: rename_constant(name),
                value: Value::Alias(value.to_owned()),
            });
        }
    }

    constants
}

fn normalize_whitespace(line: &str) -> String {
    let mut line = line.trim().replace('\t', " ");
    loop {
        let collapsed = line.replace("  ", " ");
        if collapsed == line {
            return line;
        }
        line = collapsed;
    }
}

/// Renders a macro name in the host naming convention: the prefix goes,
/// SHOUTING_SNAKE_CASE becomes UpperCamelCase, the OpenGL abbreviation is
/// recased, and the truncated forward-compat hint gets its long form.
fn rename_constant(native_name: &str) -> String {
    let stripped = native_name.strip_prefix(MACRO_PREFIX).unwrap_or(native_name);
    let name = upper_camel_case(stripped).replace("Opengl", "OpenGL");
    if name == "OpenGLForwardCompat" {
        return "OpenGLForwardCompatible".to_owned();
    }
    name
}

fn upper_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split('_').filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    out
}

const BANNER: &str = "// Generated by glfw-generator from GLFW/glfw3.h. Do not edit by hand.\n";

/// Renders the raw constants module for the `glfw-sys` crate. Aliases
/// reference their target constant so they track the native definition.
pub fn render_sys_constants(constants: &[Constant]) -> String {
    let mut out = String::from(BANNER);
    out.push_str("\nuse libc::c_int;\n\n");
    for constant in constants {
        let value = match &constant.value {
            Value::Literal(literal) => literal.clone(),
            Value::Alias(target) => target.clone(),
        };
        out.push_str(&format!("pub const {}: c_int = {};\n", constant.native_name, value));
    }
    out
}

/// Renders the renamed constants module for the binding crate. Direct
/// constants carry the header literal exactly; aliases are re-expressed in
/// terms of the native symbol in `glfw-sys` rather than a copied value.
pub fn render_binding_constants(constants: &[Constant]) -> String {
    let mut out = String::from(BANNER);
    out.push_str("\n#![allow(non_upper_case_globals)]\n\nuse libc::c_int;\n\n");
    for constant in constants {
        let value = match &constant.value {
            Value::Literal(literal) => literal.clone(),
            Value::Alias(target) => format!("glfw_sys::{target}"),
        };
        out.push_str(&format!("pub const {}: c_int = {};\n", constant.renamed, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(native_name: &str, renamed: &str, value: &str) -> Constant {
        Constant {
            native_name: native_name.to_owned(),
            renamed: renamed.to_owned(),
            value: Value::Literal(value.to_owned()),
        }
    }

    #[test]
    fn extracts_decimal_and_hex_literals() {
        let header = "#define GLFW_TRUE 1\n#define GLFW_RESIZABLE 0x00020003\n";
        assert_eq!(
            extract_constants(header),
            vec![
                literal("GLFW_TRUE", "True", "1"),
                literal("GLFW_RESIZABLE", "Resizable", "0x00020003"),
            ]
        );
    }

    #[test]
    fn preserves_negative_values() {
        let header = "#define GLFW_DONT_CARE -1\n";
        assert_eq!(extract_constants(header), vec![literal("GLFW_DONT_CARE", "DontCare", "-1")]);
    }

    #[test]
    fn normalizes_tabs_and_repeated_spaces() {
        let header = "#define GLFW_KEY_SPACE\t\t 32\n#define   GLFW_KEY_COMMA    44\n";
        assert_eq!(
            extract_constants(header),
            vec![
                literal("GLFW_KEY_SPACE", "KeySpace", "32"),
                literal("GLFW_KEY_COMMA", "KeyComma", "44"),
            ]
        );
    }

    #[test]
    fn ignores_defines_without_the_prefix() {
        let header = "#define APIENTRY 1\n#define EGL_TRUE 1\n";
        assert!(extract_constants(header).is_empty());
    }

    #[test]
    fn resolves_an_alias_to_an_earlier_macro() {
        let header = "#define GLFW_KEY_MENU 348\n#define GLFW_KEY_LAST GLFW_KEY_MENU\n";
        let constants = extract_constants(header);
        assert_eq!(constants.len(), 2);
        assert_eq!(constants[1].native_name, "GLFW_KEY_LAST");
        assert_eq!(constants[1].renamed, "KeyLast");
        assert_eq!(constants[1].value, Value::Alias("GLFW_KEY_MENU".to_owned()));
    }

    #[test]
    fn drops_a_forward_reference_alias() {
        let header = "#define GLFW_KEY_LAST GLFW_KEY_MENU\n#define GLFW_KEY_MENU 348\n";
        let constants = extract_constants(header);
        assert_eq!(constants.len(), 1);
        assert_eq!(constants[0].native_name, "GLFW_KEY_MENU");
    }

    #[test]
    fn an_alias_never_becomes_an_alias_target() {
        // Only direct constants enter the known set, so a chain stops
        // after one level.
        let header = "#define GLFW_A 5\n#define GLFW_B GLFW_A\n#define GLFW_C GLFW_B\n";
        let constants = extract_constants(header);
        assert_eq!(constants.len(), 2);
        assert_eq!(constants[1].value, Value::Alias("GLFW_A".to_owned()));
    }

    #[test]
    fn skips_unrecognized_definitions_without_aborting() {
        let header = concat!(
            "#define GLFW_VERSION \"3.3\"\n",
            "#define GLFW_APIENTRY_DEFINED\n",
            "#define GLFW_HAT_RIGHT_UP (GLFW_HAT_RIGHT | GLFW_HAT_UP)\n",
            "#define GLFW_VISIBLE 0x00020004\n",
        );
        assert_eq!(
            extract_constants(header),
            vec![literal("GLFW_VISIBLE", "Visible", "0x00020004")]
        );
    }

    #[test]
    fn renames_follow_the_host_convention() {
        let header = concat!(
            "#define GLFW_OPENGL_FORWARD_COMPAT 0x00022006\n",
            "#define GLFW_OPENGL_CORE_PROFILE 0x00032001\n",
            "#define GLFW_KEY_KP_1 321\n",
            "#define GLFW_X11_CLASS_NAME 0x00024001\n",
        );
        let constants = extract_constants(header);
        let renamed: Vec<&str> = constants.iter().map(|c| c.renamed.as_str()).collect();
        assert_eq!(
            renamed,
            vec!["OpenGLForwardCompatible", "OpenGLCoreProfile", "KeyKp1", "X11ClassName"]
        );
    }

    #[test]
    fn emits_constants_in_header_order() {
        let header = "#define GLFW_RESIZABLE 0x00020003\n#define GLFW_VISIBLE 0x00020004\n";
        let constants = extract_constants(header);
        let names: Vec<&str> = constants.iter().map(|c| c.renamed.as_str()).collect();
        assert_eq!(names, vec!["Resizable", "Visible"]);
    }

    #[test]
    fn sys_rendering_keeps_native_names_and_alias_targets() {
        let header = "#define GLFW_KEY_MENU 348\n#define GLFW_KEY_LAST GLFW_KEY_MENU\n";
        let rendered = render_sys_constants(&extract_constants(header));
        assert!(rendered.contains("pub const GLFW_KEY_MENU: c_int = 348;\n"));
        assert!(rendered.contains("pub const GLFW_KEY_LAST: c_int = GLFW_KEY_MENU;\n"));
    }

    #[test]
    fn binding_rendering_references_native_symbols_for_aliases() {
        let header = "#define GLFW_KEY_MENU 348\n#define GLFW_KEY_LAST GLFW_KEY_MENU\n";
        let rendered = render_binding_constants(&extract_constants(header));
        assert!(rendered.contains("pub const KeyMenu: c_int = 348;\n"));
        assert!(rendered.contains("pub const KeyLast: c_int = glfw_sys::GLFW_KEY_MENU;\n"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let header = concat!(
            "#define GLFW_TRUE 1\n",
            "#define GLFW_KEY_MENU 348\n",
            "#define GLFW_KEY_LAST GLFW_KEY_MENU\n",
        );
        let first = extract_constants(header);
        let second = extract_constants(header);
        assert_eq!(first, second);
        assert_eq!(render_sys_constants(&first), render_sys_constants(&second));
        assert_eq!(render_binding_constants(&first), render_binding_constants(&second));
    }
}
