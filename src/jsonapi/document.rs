use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

use super::resource::{Resource, ResourceRef, TypedResource};

/// Top-level JSON:API document envelope.
///
/// Constructed per response via [`Document::parse`] and discarded once the
/// caller (or the paginator) has consumed its resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    data: Option<DocumentData>,

    /// Side-loaded resources referenced by the primary data.
    #[serde(default)]
    pub included: Vec<Resource>,

    /// Document-level metadata.
    #[serde(default)]
    pub meta: Value,

    /// Pagination and self links.
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DocumentData {
    One(Resource),
    Many(Vec<Resource>),
}

impl Document {
    /// Parse and validate a raw response payload.
    ///
    /// Fails with [`Error::MalformedResponse`] when the payload is not
    /// valid JSON, the envelope has no `data` member, or any resource
    /// lacks its `type` discriminator. The offending payload is carried in
    /// the error for diagnosis.
    pub fn parse(payload: &str) -> Result<Self, Error> {
        let document: Self = serde_json::from_str(payload).map_err(|err| {
            Error::malformed(format!("invalid JSON:API document: {err}"), payload)
        })?;

        if document.data.is_none() {
            return Err(Error::malformed("document has no `data` member", payload));
        }

        Ok(document)
    }

    /// The primary resource of a single-resource document.
    pub fn into_single(self) -> Result<Resource, Error> {
        match self.data {
            Some(DocumentData::One(resource)) => Ok(resource),
            Some(DocumentData::Many(resources)) => Err(Error::malformed(
                "expected a single primary resource, got a collection",
                serde_json::to_string(&resources).unwrap_or_default(),
            )),
            None => Err(Error::malformed("document has no `data` member", String::new())),
        }
    }

    /// The primary resources of a collection document; a single resource
    /// becomes a one-element list.
    pub fn into_many(self) -> Vec<Resource> {
        match self.data {
            Some(DocumentData::One(resource)) => vec![resource],
            Some(DocumentData::Many(resources)) => resources,
            None => Vec::new(),
        }
    }

    /// Decode the single primary resource into the typed model `T`.
    pub fn decode_single<T: TypedResource>(self) -> Result<T, Error> {
        self.into_single()?.decode()
    }

    /// Decode every primary resource into the typed model `T`, in
    /// document order.
    pub fn decode_many<T: TypedResource>(self) -> Result<Vec<T>, Error> {
        self.into_many().into_iter().map(Resource::decode).collect()
    }

    /// Look a relationship reference up in the side-loaded `included` set.
    ///
    /// Returns `None` when the referenced resource was not included; the
    /// reference itself stays usable as an id + type stub.
    pub fn find_included(&self, reference: &ResourceRef) -> Option<&Resource> {
        self.included
            .iter()
            .find(|resource| resource.kind == reference.kind && resource.id == reference.id)
    }

    /// Cursor to the next page, when the server provided one.
    pub fn next_link(&self) -> Option<&str> {
        self.links.next.as_deref()
    }
}

/// Document-level links (pagination cursors).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    /// Opaque URL of the next page.
    #[serde(default)]
    pub next: Option<String>,

    /// Opaque URL of the previous page.
    #[serde(default)]
    pub prev: Option<String>,

    /// URL of this document.
    #[serde(default, rename = "self")]
    pub this: Option<String>,
}
