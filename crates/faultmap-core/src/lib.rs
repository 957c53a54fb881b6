//! Core types shared by the faultmap crates
//!
//! Holds the resolved [`ErrorInfo`], language normalization, and the
//! [`ErrorSource`] capability that lets raised errors identify themselves.

#![allow(clippy::must_use_candidate)]

mod headers;
mod info;
mod language;
mod source;

pub use headers::raw_language;
pub use info::{ErrorInfo, GENERIC_CATEGORY, GENERIC_CODE, GENERIC_MESSAGE, GENERIC_STATUS};
pub use language::{DEFAULT_LANGUAGE, Language};
pub use source::{ErrorSource, ServiceError, extract_code};
