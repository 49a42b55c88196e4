//! JSON:API envelope parsing and typed resource decoding.
//!
//! Every BattleMetrics response wraps its payload in a JSON:API document:
//! primary `data` (one resource object or a list), side-loaded `included`
//! resources, document `meta`, and pagination `links`. [`Document::parse`]
//! validates that shape; [`Resource::decode`] maps a resource object into
//! a typed model keyed on its `type` discriminator.

mod document;
mod resource;

pub use document::{Document, Links};
pub use resource::{Relationship, RelationshipData, Resource, ResourceRef, TypedResource};
