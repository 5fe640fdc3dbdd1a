//! TypeScript interface generation from OpenAPI/Swagger documents.
//!
//! The whole public surface is text in, text out: [`generate_interfaces`]
//! takes a document as a JSON or YAML string and returns either the
//! concatenated `export interface` blocks or a single `// Error: ...`
//! comment line. The optional [`fetch`] module retrieves document text by
//! URL for callers that want it.
//!
//! ```
//! use oas_ts_gen::generate_interfaces;
//!
//! let spec = r#"{
//!   "openapi": "3.0.0",
//!   "components": {
//!     "schemas": {
//!       "Pet": {
//!         "type": "object",
//!         "required": ["name"],
//!         "properties": { "name": { "type": "string" } }
//!       }
//!     }
//!   }
//! }"#;
//!
//! let output = generate_interfaces(spec);
//! assert_eq!(output, "export interface Pet {\n  name: string;\n}\n");
//! ```

pub mod error;
#[cfg(feature = "reqwest")]
pub mod fetch;
mod generator;
mod parser;
pub mod spec;

pub use generator::orchestrator::generate_interfaces;
