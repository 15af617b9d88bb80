//! Services module - pure business logic for the upload widget.
//!
//! The services are **framework-agnostic** and have no dependencies on the
//! surface layer, making them testable and reusable.
//!
//! # Components
//!
//! - [`validation`]: the Validator. A pure accept/reject decision over a
//!   candidate file and the widget configuration, with an explicit
//!   [`ValidationError`](validation::ValidationError) rejection reason.
//!   Applied before any network activity.
//!
//! - [`upload`]: the network exchange. [`UploadTransport`](upload::UploadTransport)
//!   is the seam the controller depends on;
//!   [`HttpUploadClient`](upload::HttpUploadClient) is the `reqwest` multipart
//!   implementation of the `POST /upload` contract (2xx + binary body on
//!   success, status code surfaced on anything else).
//!
//! # Design Philosophy
//!
//! - **Pure where possible**: validation has no side effects at all
//! - **Async only at the edge**: the transport is the sole suspension point
//! - **No surface code**: notifications and display are the controller's job

pub mod upload;
pub mod validation;

pub use upload::{HttpUploadClient, UploadError, UploadTransport};
pub use validation::{ValidationError, validate};
