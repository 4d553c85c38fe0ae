//! Structural transformation of OWL 2 axioms.
//!
//! The engine rewrites a batch of axioms into an equivalent set in which every
//! top-level axiom is flat: nested compound expressions are replaced by fresh
//! placeholder classes (`http://www.semanticweb.org/ontology#X0`, `X1`, ...)
//! defined through their own inclusions.
//!
//! ```
//! use owl_structural::{
//!     ontology::{Axiom, AxiomKind, Class, ObjectProperty},
//!     StructuralTransformation,
//! };
//!
//! let op = ObjectProperty::parse("urn:test:test#op").unwrap();
//! let c = Class::parse("urn:test:test#c").unwrap();
//! let axiom = Axiom::new(AxiomKind::ObjectPropertyRange {
//!     property: op.into(),
//!     range: c.into(),
//! });
//!
//! let result = StructuralTransformation::new().transform(&[axiom]);
//! assert_eq!(result.len(), 2);
//! ```

pub mod config;
pub mod errors;
pub mod logger;
pub mod ontology;
pub mod transform;

pub use errors::{Error, Result};
pub use transform::{StructuralTransformation, TransformedAxioms};
