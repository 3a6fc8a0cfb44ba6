//! Raw buffer provisioning for the vwpcm host boundary.
//!
//! The host (a sandboxed script runtime) cannot manage memory inside this
//! module's address space, so it asks for byte regions by size and hands
//! them back by address alone. This crate may contain `unsafe` code, as
//! may `vwpcm-ffi`; `vwpcm-core` allows it in one audited helper only.
//!
//! # Block layout
//!
//! ```text
//! base                     base + header            base + header + n
//! │ recorded size (usize)… │ caller bytes ........... │
//! └──── header (= align) ──┴──────── n bytes ─────────┘
//!                          ^ pointer handed to the host
//! ```
//!
//! The header records `n` so that release needs nothing but the address.
//! There is no pooling, reuse, or reference counting: every allocate is one
//! call into the global allocator, every release is one call back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod provisioner;
mod raw;

pub use config::ProvisionerConfig;
pub use error::ProvisionError;
pub use provisioner::Provisioner;
