//! Declaration printer.
//!
//! Prints a [`FunctionDeclaration`] back to source text in the layout a
//! TypeScript printer produces for synthesized nodes: type literals are
//! multi-line with one `;`-terminated member per line, binding patterns stay
//! on one line, and an empty body prints as `{ }`.

use crate::declaration::{
    BindingName, FunctionDeclaration, ParameterDeclaration, PropertySignature, TypeNode,
};

#[derive(Clone, Debug)]
pub struct DeclarationPrinter {
    indent_unit: String,
}

impl Default for DeclarationPrinter {
    fn default() -> Self {
        Self::new(4, true)
    }
}

impl DeclarationPrinter {
    /// A printer indenting by `indent_size` spaces, or by one tab when
    /// `convert_tabs_to_spaces` is off.
    pub fn new(indent_size: u32, convert_tabs_to_spaces: bool) -> Self {
        let indent_unit = if convert_tabs_to_spaces {
            " ".repeat(indent_size as usize)
        } else {
            "\t".to_string()
        };
        Self { indent_unit }
    }

    pub fn print_function_declaration(&self, decl: &FunctionDeclaration) -> String {
        let mut out = String::new();
        for modifier in &decl.modifiers {
            out.push_str(modifier);
            out.push(' ');
        }
        out.push_str("function");
        if decl.asterisk_token {
            out.push('*');
        }
        out.push(' ');
        out.push_str(&decl.name);
        if let Some(type_parameters) = &decl.type_parameters {
            out.push('<');
            out.push_str(type_parameters);
            out.push('>');
        }

        out.push('(');
        let parameters: Vec<String> = decl
            .parameters
            .iter()
            .map(|param| self.print_parameter(param))
            .collect();
        out.push_str(&parameters.join(", "));
        out.push(')');

        if let Some(return_type) = &decl.return_type {
            out.push_str(": ");
            out.push_str(&self.print_type(return_type, 0));
        }

        match &decl.body {
            None => out.push(';'),
            Some(statements) if statements.is_empty() => out.push_str(" { }"),
            Some(statements) => {
                out.push_str(" {");
                for statement in statements {
                    out.push('\n');
                    out.push_str(&self.indent_unit);
                    out.push_str(statement);
                }
                out.push_str("\n}");
            }
        }
        out
    }

    pub fn print_parameter(&self, param: &ParameterDeclaration) -> String {
        let mut out = String::new();
        if param.dot_dot_dot_token {
            out.push_str("...");
        }
        out.push_str(&print_binding_name(&param.name));
        if param.question_token {
            out.push('?');
        }
        if let Some(type_annotation) = &param.type_annotation {
            out.push_str(": ");
            out.push_str(&self.print_type(type_annotation, 0));
        }
        if let Some(initializer) = &param.initializer {
            out.push_str(" = ");
            out.push_str(initializer);
        }
        out
    }

    /// Print a type at nesting `level` (the indentation of the line the type
    /// starts on).
    pub fn print_type(&self, ty: &TypeNode, level: usize) -> String {
        match ty {
            TypeNode::Text(text) => text.clone(),
            TypeNode::TypeLiteral(members) if members.is_empty() => "{}".to_string(),
            TypeNode::TypeLiteral(members) => {
                let mut out = String::from("{\n");
                for member in members {
                    out.push_str(&self.indent_unit.repeat(level + 1));
                    out.push_str(&self.print_property_signature(member, level + 1));
                    out.push_str(";\n");
                }
                out.push_str(&self.indent_unit.repeat(level));
                out.push('}');
                out
            }
        }
    }

    fn print_property_signature(&self, member: &PropertySignature, level: usize) -> String {
        let mut out = member.name.clone();
        if member.question_token {
            out.push('?');
        }
        if let Some(type_node) = &member.type_node {
            out.push_str(": ");
            out.push_str(&self.print_type(type_node, level));
        }
        out
    }
}

fn print_binding_name(name: &BindingName) -> String {
    match name {
        BindingName::Identifier(name) | BindingName::Pattern(name) => name.clone(),
        BindingName::ObjectBindingPattern(elements) if elements.is_empty() => "{}".to_string(),
        BindingName::ObjectBindingPattern(elements) => {
            let elements: Vec<String> = elements
                .iter()
                .map(|element| match &element.property_name {
                    Some(property_name) => format!("{}: {}", property_name, element.name),
                    None => element.name.clone(),
                })
                .collect();
            format!("{{ {} }}", elements.join(", "))
        }
    }
}
