//! Signed request assembly and response processing for the Backend.AI
//! manager API.
//!
//! This crate is the transport half of the client core. Domain resource
//! wrappers (keypairs, sessions, virtual folders, ...) hand a method, path,
//! and [`BodyKind`] to the [`Client`] facade and receive back a
//! [`DecodedResponse`] or a phase-classified [`CallError`]; everything
//! between those two points lives here:
//!
//! - [`assemble`] turns the call into a transport-ready request, signing it
//!   in API mode or routing it through the web front-end proxy in SESSION
//!   mode;
//! - the response processor runs it as an explicit send / decode /
//!   status-check pipeline, each step a potential failure boundary with its
//!   own error phase.
//!
//! The core performs no retries, pooling beyond transport defaults, or
//! envelope unwrapping; a failed call surfaces its classified error
//! immediately to the caller.

pub mod assemble;
mod client;
mod error;
mod execute;

pub use assemble::{AssembledRequest, RequestBody, assemble_public, assemble_signed};
pub use client::Client;
pub use error::ClientError;

pub use backendai_core::{
    BodyKind, CallError, ClientConfig, ConfigError, ConnectionMode, DecodedResponse,
    MultipartField, Phase,
};
