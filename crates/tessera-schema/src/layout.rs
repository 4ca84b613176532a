//! # Message Layout Engine
//!
//! Derives the full message/service layout for one contract: the primary
//! entity message, the optional list-wrapper message, eight synthesized CRUD
//! request/response messages, and the CRUD service declaration.
//!
//! ## Tag Invariants
//!
//! - The primary message carries a synthesized `id` field (int32) at tag 1;
//!   contract fields occupy tags 2..N+1 in declaration order. Appending a
//!   field therefore never disturbs an existing tag — tags are persisted in
//!   IDL files that peers already depend on.
//! - Each CRUD message is an independent tag namespace; its tags restart
//!   at 1.
//! - Layout construction is pure: the same contract always yields a
//!   structurally identical layout, which is what makes every rendered
//!   artifact byte-for-byte reproducible.

use tessera_core::{Contract, FieldType};

use crate::typemap;

/// Name of the synthesized primary-key field.
pub const ID_FIELD: &str = "id";

/// The CRUD verbs, in the fixed order their messages and RPCs are laid out.
pub const CRUD_VERBS: [&str; 4] = ["Add", "Update", "Delete", "GetAll"];

/// Reference to a field's type within a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    /// A neutral type tag, resolved through the mapping tables per target.
    Tag(FieldType),
    /// A reference to another message in the same layout, by name.
    Message(String),
}

/// A single field within a derived message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageField {
    /// Field name.
    pub name: String,
    /// Field type reference.
    pub ty: FieldRef,
    /// Wire tag, unique within the containing message.
    pub tag: u32,
    /// Whether the field is a repeated sequence.
    pub repeated: bool,
}

impl MessageField {
    fn tagged(name: &str, ty: FieldRef, tag: u32) -> Self {
        Self {
            name: name.to_string(),
            ty,
            tag,
            repeated: false,
        }
    }
}

/// A derived message definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Message name, unique within the contract's namespace.
    pub name: String,
    /// Ordered fields with assigned tags.
    pub fields: Vec<MessageField>,
}

impl Message {
    /// The field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// One RPC operation of the CRUD service.
#[derive(Debug, Clone, PartialEq)]
pub struct Rpc {
    /// Operation name, `<Verb><ContractName>`.
    pub name: String,
    /// Request message name.
    pub request: String,
    /// Response message name.
    pub response: String,
}

/// The CRUD service declaration for a contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    /// Service name, `<ContractName>Service`.
    pub name: String,
    /// The four CRUD operations, in fixed verb order.
    pub rpcs: Vec<Rpc>,
}

/// The derived, tag-assigned structural description of one contract.
///
/// All emitters are pure renderers of this structure; none of them may
/// consult the contract again or re-derive tags.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageLayout {
    /// The source contract's name.
    pub contract_name: String,
    /// Optional wire package.
    pub package: Option<String>,
    /// External namespaces consumed verbatim.
    pub imports: Vec<String>,
    /// Whether the contract suppressed the list wrapper.
    pub direct_message: bool,
    /// All messages in emission order: primary, wrapper (if any), CRUD.
    pub messages: Vec<Message>,
    /// The CRUD service.
    pub service: Service,
}

impl MessageLayout {
    /// Derive the layout for one contract.
    pub fn build(contract: &Contract) -> Self {
        let name = contract.name.as_str();
        let list_name = format!("{name}List");
        let mut messages = Vec::with_capacity(10);

        // Primary entity message: synthesized id at tag 1, fields at 2..N+1.
        let mut fields = Vec::with_capacity(contract.fields.len() + 1);
        fields.push(MessageField::tagged(
            ID_FIELD,
            FieldRef::Tag(FieldType::Int32),
            1,
        ));
        for (i, field) in contract.fields.iter().enumerate() {
            if field.proto_type.is_custom() {
                tracing::warn!(
                    contract = %name,
                    field = %field.property_key,
                    tag = %field.proto_type,
                    "unknown field type tag, applying fallback mapping"
                );
            }
            fields.push(MessageField {
                name: field.property_key.clone(),
                ty: FieldRef::Tag(field.proto_type.clone()),
                tag: i as u32 + 2,
                repeated: field.repeated,
            });
        }
        messages.push(Message {
            name: name.to_string(),
            fields,
        });

        if !contract.direct_message {
            messages.push(Message {
                name: list_name.clone(),
                fields: vec![MessageField {
                    name: "items".to_string(),
                    ty: FieldRef::Message(name.to_string()),
                    tag: 1,
                    repeated: true,
                }],
            });
        }

        let entity = || FieldRef::Message(name.to_string());
        let string_id = || FieldRef::Tag(FieldType::String);

        messages.push(Message {
            name: format!("Add{name}Request"),
            fields: vec![MessageField::tagged("item", entity(), 1)],
        });
        messages.push(Message {
            name: format!("Add{name}Response"),
            fields: vec![
                MessageField::tagged(ID_FIELD, string_id(), 1),
                MessageField::tagged("item", entity(), 2),
            ],
        });
        messages.push(Message {
            name: format!("Update{name}Request"),
            fields: vec![
                MessageField::tagged(ID_FIELD, string_id(), 1),
                MessageField::tagged("item", entity(), 2),
            ],
        });
        messages.push(Message {
            name: format!("Update{name}Response"),
            fields: vec![
                MessageField::tagged(ID_FIELD, string_id(), 1),
                MessageField::tagged("item", entity(), 2),
            ],
        });
        messages.push(Message {
            name: format!("Delete{name}Request"),
            fields: vec![MessageField::tagged(ID_FIELD, string_id(), 1)],
        });
        messages.push(Message {
            name: format!("Delete{name}Response"),
            fields: vec![
                MessageField::tagged("success", FieldRef::Tag(FieldType::Bool), 1),
                MessageField::tagged(ID_FIELD, string_id(), 2),
            ],
        });
        messages.push(Message {
            name: format!("GetAll{name}Request"),
            fields: Vec::new(),
        });
        messages.push(Message {
            name: format!("GetAll{name}Response"),
            fields: vec![if contract.direct_message {
                MessageField {
                    name: "items".to_string(),
                    ty: entity(),
                    tag: 1,
                    repeated: true,
                }
            } else {
                MessageField::tagged("items", FieldRef::Message(list_name), 1)
            }],
        });

        let service = Service {
            name: format!("{name}Service"),
            rpcs: CRUD_VERBS
                .iter()
                .map(|verb| Rpc {
                    name: format!("{verb}{name}"),
                    request: format!("{verb}{name}Request"),
                    response: format!("{verb}{name}Response"),
                })
                .collect(),
        };

        Self {
            contract_name: name.to_string(),
            package: contract.package_name.clone(),
            imports: contract.imports.clone(),
            direct_message: contract.direct_message,
            messages,
            service,
        }
    }

    /// The primary entity message.
    pub fn primary(&self) -> &Message {
        // Construction always pushes the primary message first.
        &self.messages[0]
    }

    /// The list-wrapper message, if the contract is not direct.
    pub fn list_wrapper(&self) -> Option<&Message> {
        if self.direct_message {
            None
        } else {
            self.messages.get(1)
        }
    }

    /// Whether any field resolves to the well-known Any wire type.
    pub fn uses_any(&self) -> bool {
        self.messages.iter().any(|m| {
            m.fields
                .iter()
                .any(|f| matches!(&f.ty, FieldRef::Tag(t) if typemap::wire_type(t) == typemap::WIRE_ANY))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Field;

    fn task() -> Contract {
        Contract::new(
            "Task",
            vec![
                Field::new("label", FieldType::String),
                Field::new("checked", FieldType::Bool),
                Field::new("removed", FieldType::Bool),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_primary_message_tags() {
        let layout = MessageLayout::build(&task());
        let primary = layout.primary();
        assert_eq!(primary.name, "Task");
        let tags: Vec<(&str, u32)> = primary
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.tag))
            .collect();
        assert_eq!(
            tags,
            vec![("id", 1), ("label", 2), ("checked", 3), ("removed", 4)]
        );
        assert_eq!(primary.field_names(), vec!["id", "label", "checked", "removed"]);
        assert_eq!(
            primary.fields[0].ty,
            FieldRef::Tag(FieldType::Int32),
            "synthesized id is int32"
        );
    }

    #[test]
    fn test_crud_completeness() {
        let layout = MessageLayout::build(&task());
        // primary + wrapper + 8 CRUD messages
        assert_eq!(layout.messages.len(), 10);
        assert_eq!(layout.service.name, "TaskService");
        assert_eq!(layout.service.rpcs.len(), 4);
        let rpc_names: Vec<&str> = layout.service.rpcs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(rpc_names, vec!["AddTask", "UpdateTask", "DeleteTask", "GetAllTask"]);
        for rpc in &layout.service.rpcs {
            assert!(layout.messages.iter().any(|m| m.name == rpc.request));
            assert!(layout.messages.iter().any(|m| m.name == rpc.response));
        }
    }

    #[test]
    fn test_crud_tags_restart_at_one() {
        let layout = MessageLayout::build(&task());
        for message in layout.messages.iter().skip(1) {
            for (i, field) in message.fields.iter().enumerate() {
                assert_eq!(
                    field.tag,
                    i as u32 + 1,
                    "tags in {} restart at 1",
                    message.name
                );
            }
        }
    }

    #[test]
    fn test_list_wrapper_present_by_default() {
        let layout = MessageLayout::build(&task());
        let wrapper = layout.list_wrapper().expect("wrapper expected");
        assert_eq!(wrapper.name, "TaskList");
        assert_eq!(wrapper.fields.len(), 1);
        assert!(wrapper.fields[0].repeated);
        assert_eq!(wrapper.fields[0].ty, FieldRef::Message("Task".to_string()));

        let getall = layout
            .messages
            .iter()
            .find(|m| m.name == "GetAllTaskResponse")
            .unwrap();
        assert_eq!(
            getall.fields[0].ty,
            FieldRef::Message("TaskList".to_string())
        );
        assert!(!getall.fields[0].repeated);
    }

    #[test]
    fn test_direct_message_suppresses_wrapper() {
        let layout = MessageLayout::build(&task().with_direct_message(true));
        assert!(layout.list_wrapper().is_none());
        assert_eq!(layout.messages.len(), 9);
        assert!(!layout.messages.iter().any(|m| m.name == "TaskList"));

        let getall = layout
            .messages
            .iter()
            .find(|m| m.name == "GetAllTaskResponse")
            .unwrap();
        assert_eq!(getall.fields[0].ty, FieldRef::Message("Task".to_string()));
        assert!(getall.fields[0].repeated, "direct GetAll wraps a repeated primary");
    }

    #[test]
    fn test_getall_request_is_empty() {
        let layout = MessageLayout::build(&task());
        let request = layout
            .messages
            .iter()
            .find(|m| m.name == "GetAllTaskRequest")
            .unwrap();
        assert!(request.fields.is_empty());
    }

    #[test]
    fn test_append_preserves_existing_tags() {
        let base = task();
        let layout_before = MessageLayout::build(&base);

        let mut extended = base.clone();
        extended.fields.push(Field::new("due", FieldType::Timestamp));
        let layout_after = MessageLayout::build(&extended);

        let before = &layout_before.primary().fields;
        let after = &layout_after.primary().fields;
        assert_eq!(after.len(), before.len() + 1);
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.name, a.name);
            assert_eq!(b.tag, a.tag);
        }
        assert_eq!(after.last().unwrap().tag, 5);
    }

    #[test]
    fn test_build_is_deterministic() {
        let contract = task().with_package("task");
        assert_eq!(
            MessageLayout::build(&contract),
            MessageLayout::build(&contract)
        );
    }

    #[test]
    fn test_repeated_flag_carried_through() {
        let contract = Contract::new(
            "Album",
            vec![Field::new("tags", FieldType::String).repeated()],
        )
        .unwrap();
        let layout = MessageLayout::build(&contract);
        assert!(layout.primary().fields[1].repeated);
    }

    #[test]
    fn test_uses_any_detection() {
        let plain = MessageLayout::build(&task());
        assert!(!plain.uses_any());

        let with_any = Contract::new("Env", vec![Field::new("payload", FieldType::Any)]).unwrap();
        assert!(MessageLayout::build(&with_any).uses_any());
    }

    #[test]
    fn test_custom_tag_survives_layout() {
        let contract =
            Contract::new("Odd", vec![Field::new("blob", FieldType::parse("mystery"))]).unwrap();
        let layout = MessageLayout::build(&contract);
        assert_eq!(
            layout.primary().fields[1].ty,
            FieldRef::Tag(FieldType::Custom("mystery".to_string()))
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use tessera_core::Field;

    const KNOWN_TAGS: [&str; 10] = [
        "string", "bool", "int32", "int64", "double", "bytes", "uuid", "timestamp", "bigint",
        "any",
    ];

    fn arb_fields() -> impl Strategy<Value = Vec<Field>> {
        proptest::collection::btree_set("[a-z]{1,8}", 1..12).prop_flat_map(|keys| {
            // "id" is reserved for the synthesized primary key.
            let keys: Vec<String> = keys.into_iter().filter(|k| k != "id").collect();
            let keys = if keys.is_empty() {
                vec!["only".to_string()]
            } else {
                keys
            };
            let len = keys.len();
            proptest::collection::vec((0..KNOWN_TAGS.len(), any::<bool>()), len).prop_map(
                move |choices| {
                    keys.iter()
                        .zip(choices)
                        .map(|(key, (ti, repeated))| {
                            let mut f = Field::new(key.clone(), FieldType::parse(KNOWN_TAGS[ti]));
                            if repeated {
                                f = f.repeated();
                            }
                            f
                        })
                        .collect()
                },
            )
        })
    }

    proptest! {
        /// Layout derivation is deterministic for any contract.
        #[test]
        fn layout_deterministic(fields in arb_fields(), direct in any::<bool>()) {
            let contract = Contract::new("Prop", fields)
                .unwrap()
                .with_direct_message(direct);
            prop_assert_eq!(MessageLayout::build(&contract), MessageLayout::build(&contract));
        }

        /// Primary tags are always 1..N+1 with id first.
        #[test]
        fn primary_tags_sequential(fields in arb_fields()) {
            let contract = Contract::new("Prop", fields).unwrap();
            let layout = MessageLayout::build(&contract);
            let primary = layout.primary();
            prop_assert_eq!(primary.fields[0].name.as_str(), ID_FIELD);
            for (i, field) in primary.fields.iter().enumerate() {
                prop_assert_eq!(field.tag, i as u32 + 1);
            }
        }

        /// Appending a field never disturbs existing tags.
        #[test]
        fn append_is_tag_stable(fields in arb_fields()) {
            let contract = Contract::new("Prop", fields).unwrap();
            let before = MessageLayout::build(&contract);

            let mut extended = contract.clone();
            extended.fields.push(Field::new("zzz_appended", FieldType::Int64));
            let after = MessageLayout::build(&extended);

            for (b, a) in before.primary().fields.iter().zip(after.primary().fields.iter()) {
                prop_assert_eq!(&b.name, &a.name);
                prop_assert_eq!(b.tag, a.tag);
            }
        }
    }
}
