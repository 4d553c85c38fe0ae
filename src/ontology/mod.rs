//! OWL 2 structural model.
//!
//! The module defines value objects for entities, class and data range
//! expressions, rule atoms and annotated axioms. Every type is an immutable
//! value with structural equality and a total order, so axioms can be held in
//! ordered sets and rendered canonically in functional syntax.

pub mod axioms;
pub mod entities;
pub mod expressions;
mod render;
pub mod rules;
pub mod signature;
pub mod value_objects;
pub mod vocab;

pub use axioms::{Annotation, AnnotationSubject, AnnotationValue, Axiom, AxiomKind};
pub use entities::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
    Literal, LiteralKind, NamedIndividual, ObjectProperty, Variable,
};
pub use expressions::{
    ClassExpression, DataRange, Facet, FacetRestriction, ObjectPropertyExpression,
};
pub use rules::{Atom, DArgument, IArgument, Rule};
pub use signature::Signature;
pub use value_objects::{Iri, IriError};
