//! # Domain Models
//!
//! Pure types shared by the workflow administration crates: identifiers, well-known
//! surface and preference names, workflow definitions, definition links and the
//! configuration knobs of the definition-link slice.
//!
//! Keep it lean: no I/O, no collaborator calls, only data and simple helpers.

pub mod config;
pub mod constants;
pub mod ids;
pub mod workflow;

pub use ids::{CompanyId, GroupId, UserId};
pub use workflow::{DefinitionLink, HandlerDescriptor, LinkEntry, WorkflowDefinition};
