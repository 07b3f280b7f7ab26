//! Core library for devid
//!
//! This crate implements the **Functional Core** of the devid application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The devid project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`devid_core`** (this crate): Pure transformation functions with zero I/O
//! - **`devid`**: Argument parsing, rendering and logging (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no logging, no shared mutable state
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by pipeline stage:
//!
//! - [`patterns`]: The immutable table of identifier patterns
//! - [`classify`]: Detects the identifier type and its encoding
//! - [`transform`](mod@transform): Re-encodes two-field serials between base 10 and base 16
//! - [`check_digit`](mod@check_digit): Luhn-family check digits in decimal or hexadecimal digit space
//! - [`pseudo_esn`](mod@pseudo_esn): SHA-1 based pseudo-ESN derivation from a hex MEID
//! - [`convert`]: Runs the stages above per identifier type and assembles the result
//!
//! # Example Usage
//!
//! ```rust
//! use devid_core::{convert, format_summary, IdentifierType};
//!
//! let result = convert("490154203237518").unwrap();
//! assert_eq!(result.classification.kind, IdentifierType::Imei);
//! assert_eq!(result.imei_check_digit.as_deref(), Some("8"));
//!
//! let summary = format_summary("12345678").unwrap();
//! assert_eq!(summary, "12345678 / 01803430008");
//! ```
//!
//! Check digits supplied in the input are never trusted: they are dropped and
//! recomputed from the canonical identifier.

pub mod check_digit;
pub mod classify;
pub mod convert;
pub mod error;
pub mod patterns;
pub mod pseudo_esn;
pub mod transform;

pub use check_digit::check_digit;
pub use classify::{
    classify, classify_with, is_valid, is_valid_with, Classification, Encoding, IdentifierType,
};
pub use convert::{convert, convert_with, format_summary, format_summary_with, ConversionResult};
pub use error::{DeviceIdError, Result};
pub use patterns::Patterns;
pub use pseudo_esn::pseudo_esn;
pub use transform::{transform, FieldLayout, Radix};
