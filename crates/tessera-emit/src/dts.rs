//! # Typed-Declaration Emitter
//!
//! Renders a message layout as TypeScript declaration text: a namespace
//! exporting one type alias per primary-message field, the list-wrapper
//! interface when present, and the eight CRUD request/response interfaces.
//!
//! The concrete record type for the entity is produced by a separate
//! entity-generation layer; this file only publishes the field-type
//! vocabulary and the CRUD shapes, mirroring the layout exactly.

use tessera_schema::layout::{FieldRef, Message, MessageLayout};
use tessera_schema::typemap;

use crate::proto::GENERATED_HEADER;

/// Render a layout as TypeScript declaration source.
pub fn render_dts(layout: &MessageLayout) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(GENERATED_HEADER.to_string());
    lines.push(String::new());

    // Namespace: one alias per primary field, name-based lookup, no tags.
    let primary = layout.primary();
    lines.push(format!("export namespace {} {{", primary.name));
    for field in &primary.fields {
        lines.push(format!(
            "  export type {} = {};",
            field.name,
            type_name(&field.ty, field.repeated)
        ));
    }
    lines.push("}".to_string());

    for message in layout.messages.iter().skip(1) {
        lines.push(String::new());
        render_interface(&mut lines, message);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_interface(lines: &mut Vec<String>, message: &Message) {
    if message.fields.is_empty() {
        lines.push(format!("export interface {} {{}}", message.name));
        return;
    }
    lines.push(format!("export interface {} {{", message.name));
    for field in &message.fields {
        lines.push(format!(
            "  {}: {};",
            field.name,
            type_name(&field.ty, field.repeated)
        ));
    }
    lines.push("}".to_string());
}

fn type_name(ty: &FieldRef, repeated: bool) -> String {
    let base = match ty {
        FieldRef::Tag(tag) => typemap::declaration_type(tag),
        FieldRef::Message(name) => name,
    };
    if repeated {
        format!("{base}[]")
    } else {
        base.to_string()
    }
}
