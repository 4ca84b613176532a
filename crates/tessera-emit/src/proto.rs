//! # Wire IDL Emitter
//!
//! Renders a message layout as proto3 source text: header, message blocks
//! in layout order, then the service block. A conforming proto3 parser must
//! accept the output without modification.

use tessera_schema::layout::{FieldRef, MessageLayout};
use tessera_schema::typemap;

/// Comment line prepended to every generated artifact.
pub const GENERATED_HEADER: &str = "// Generated by tessera. Do not edit.";

/// Render a layout as proto3 source.
pub fn render_proto(layout: &MessageLayout) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(GENERATED_HEADER.to_string());
    lines.push("syntax = \"proto3\";".to_string());
    if let Some(package) = &layout.package {
        lines.push(format!("package {package};"));
    }
    if layout.uses_any() {
        lines.push("import \"google/protobuf/any.proto\";".to_string());
    }

    for message in &layout.messages {
        lines.push(String::new());
        if message.fields.is_empty() {
            lines.push(format!("message {} {{}}", message.name));
            continue;
        }
        lines.push(format!("message {} {{", message.name));
        for field in &message.fields {
            let repeated = if field.repeated { "repeated " } else { "" };
            lines.push(format!(
                "  {repeated}{} {} = {};",
                type_name(&field.ty),
                field.name,
                field.tag
            ));
        }
        lines.push("}".to_string());
    }

    lines.push(String::new());
    lines.push(format!("service {} {{", layout.service.name));
    for rpc in &layout.service.rpcs {
        lines.push(format!(
            "  rpc {} ({}) returns ({});",
            rpc.name, rpc.request, rpc.response
        ));
    }
    lines.push("}".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn type_name(ty: &FieldRef) -> &str {
    match ty {
        FieldRef::Tag(tag) => typemap::wire_type(tag),
        FieldRef::Message(name) => name,
    }
}
