use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Error;

/// One JSON:API resource object, before typed mapping.
///
/// Immutable once constructed from a response. Decode into a typed model
/// with [`Resource::decode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource identifier. The API occasionally sends numeric ids; they
    /// are normalized to strings.
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,

    /// Type discriminator, e.g. `"server"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw attribute map, decoded per-type by [`Resource::decode`].
    #[serde(default)]
    pub attributes: Value,

    /// Named relationships to other resources.
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,

    /// Resource-level metadata.
    #[serde(default)]
    pub meta: Value,
}

impl Resource {
    /// Decode into the typed model `T`, enforcing the type discriminator.
    ///
    /// A resource whose `type` does not match `T::TYPE`, or whose
    /// attributes do not fit the schema, is a
    /// [`MalformedResponse`](Error::MalformedResponse) error carrying the
    /// offending attributes.
    pub fn decode<T: TypedResource>(self) -> Result<T, Error> {
        if self.kind != T::TYPE {
            return Err(Error::malformed(
                format!("expected resource type `{}`, got `{}`", T::TYPE, self.kind),
                self.attributes.to_string(),
            ));
        }

        let attributes = match serde_json::from_value::<T::Attributes>(self.attributes.clone()) {
            Ok(attributes) => attributes,
            Err(err) => {
                return Err(Error::malformed(
                    format!("invalid `{}` attributes: {err}", T::TYPE),
                    self.attributes.to_string(),
                ));
            }
        };

        Ok(T::from_resource(self.id, attributes, self.relationships))
    }
}

/// One named relationship on a resource.
///
/// Relationships are reference-only: the crate never auto-fetches them.
/// Look references up in a document's `included` set with
/// [`Document::find_included`](crate::Document::find_included), or issue a
/// fresh request for the referenced resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    /// Referenced resource(s); absent when the server sent no linkage.
    #[serde(default)]
    pub data: Option<RelationshipData>,

    /// Relationship-level metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Relationship {
    /// The single reference of a to-one relationship.
    pub fn reference(&self) -> Option<&ResourceRef> {
        match self.data.as_ref()? {
            RelationshipData::One(reference) => Some(reference),
            RelationshipData::Many(_) => None,
        }
    }

    /// All references; a to-one linkage yields a single element.
    pub fn references(&self) -> Vec<&ResourceRef> {
        match self.data.as_ref() {
            None => Vec::new(),
            Some(RelationshipData::One(reference)) => vec![reference],
            Some(RelationshipData::Many(references)) => references.iter().collect(),
        }
    }
}

/// Linkage of a relationship: a single reference or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-one linkage.
    One(ResourceRef),
    /// To-many linkage.
    Many(Vec<ResourceRef>),
}

/// A `{type, id}` reference to another resource.
///
/// When the referenced resource is not side-loaded in `included`, the
/// reference stays usable as an id + type stub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Identifier of the referenced resource.
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,

    /// Type discriminator of the referenced resource.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A typed model decodable from a JSON:API resource object.
///
/// `TYPE` is the wire discriminator; decoding a resource whose `type`
/// does not match is a parse error, never a silent coercion.
pub trait TypedResource: Sized {
    /// Expected `type` discriminator on the wire.
    const TYPE: &'static str;

    /// Schema of the `attributes` object for this type.
    type Attributes: DeserializeOwned;

    /// Assemble the model from the decoded parts of a resource object.
    fn from_resource(
        id: String,
        attributes: Self::Attributes,
        relationships: HashMap<String, Relationship>,
    ) -> Self;
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Text(String),
        Number(i64),
    }

    Ok(match Helper::deserialize(deserializer)? {
        Helper::Text(id) => id,
        Helper::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Widget {
        id: String,
        attributes: Value,
    }

    impl TypedResource for Widget {
        const TYPE: &'static str = "widget";
        type Attributes = Value;

        fn from_resource(
            id: String,
            attributes: Self::Attributes,
            _relationships: HashMap<String, Relationship>,
        ) -> Self {
            Self { id, attributes }
        }
    }

    #[test]
    fn test_decode_checks_discriminator() {
        let resource: Resource =
            serde_json::from_value(json!({"type": "gadget", "id": "1", "attributes": {}})).unwrap();

        let err = resource.decode::<Widget>().unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn test_decode_matching_type() {
        let resource: Resource = serde_json::from_value(
            json!({"type": "widget", "id": "7", "attributes": {"name": "x"}}),
        )
        .unwrap();

        let widget = resource.decode::<Widget>().unwrap();
        assert_eq!(widget.id, "7");
        assert_eq!(widget.attributes["name"], "x");
    }

    #[test]
    fn test_numeric_ids_are_normalized() {
        let resource: Resource =
            serde_json::from_value(json!({"type": "widget", "id": 42, "attributes": {}})).unwrap();
        assert_eq!(resource.id, "42");

        let reference: ResourceRef =
            serde_json::from_value(json!({"type": "ban", "id": 9000})).unwrap();
        assert_eq!(reference.id, "9000");
    }

    #[test]
    fn test_relationship_references() {
        let relationship: Relationship =
            serde_json::from_value(json!({"data": {"type": "game", "id": "rust"}})).unwrap();
        assert_eq!(relationship.reference().unwrap().id, "rust");
        assert_eq!(relationship.references().len(), 1);

        let many: Relationship = serde_json::from_value(
            json!({"data": [{"type": "server", "id": "1"}, {"type": "server", "id": "2"}]}),
        )
        .unwrap();
        assert!(many.reference().is_none());
        assert_eq!(many.references().len(), 2);

        let empty = Relationship::default();
        assert!(empty.reference().is_none());
        assert!(empty.references().is_empty());
    }
}
