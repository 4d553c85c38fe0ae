//! Flattening of general concept inclusions.
//!
//! The splitter takes inclusions `lhs ⊑ E` with an atomic left-hand side and
//! replaces every nested compound operand of `E` by a placeholder class
//! defined through its own inclusion. The descent is post-order: a compound
//! gets its placeholder only after all of its operands have been named.

use std::collections::BTreeSet;

use tracing::trace;

use super::{naming::FreshNames, nnf::nnf};
use crate::ontology::{
    axioms::{Annotation, Axiom},
    entities::{Class, Individual},
    expressions::ClassExpression,
};

/// Recursive descent over class expressions, minting placeholders on demand.
pub struct Splitter<'a> {
    names: &'a mut FreshNames,
}

impl<'a> Splitter<'a> {
    #[must_use]
    pub fn new(names: &'a mut FreshNames) -> Self {
        Self { names }
    }

    /// Emits the flattened form of `lhs ⊑ rhs` into `out`.
    ///
    /// `rhs` is brought into negation normal form first. `annotations` land
    /// on the axiom(s) rooted at `lhs`; the inclusions defining placeholders
    /// are never annotated.
    pub fn flatten_gci(
        &mut self,
        lhs: &Class,
        rhs: &ClassExpression,
        annotations: &BTreeSet<Annotation>,
        out: &mut Vec<Axiom>,
    ) {
        for part in self.simplify(nnf(rhs), out) {
            out.push(emit(lhs, part, annotations));
        }
    }

    /// Rewrites `ClassAssertion(class, individual)` so the asserted class is
    /// atomic.
    pub fn split_assertion(
        &mut self,
        class: &ClassExpression,
        individual: Individual,
        annotations: &BTreeSet<Annotation>,
        out: &mut Vec<Axiom>,
    ) {
        let class = match nnf(class) {
            ClassExpression::Class(class) => class,
            complex => self.define(complex, out),
        };
        out.push(
            Axiom::class_assertion(class, individual).with_annotations(annotations.iter().cloned()),
        );
    }

    /// Replaces nested operands of an NNF expression by placeholders and
    /// returns the conjuncts left for the enclosing inclusion.
    ///
    /// Operands are handled before their parent, in canonical operand order,
    /// so inner placeholders receive the lower numbers.
    fn simplify(&mut self, expression: ClassExpression, out: &mut Vec<Axiom>) -> Vec<ClassExpression> {
        match expression {
            ClassExpression::ObjectUnionOf(operands) => {
                let placeholders: BTreeSet<ClassExpression> = operands
                    .into_iter()
                    .map(|operand| ClassExpression::from(self.define(operand, out)))
                    .collect();
                vec![ClassExpression::ObjectUnionOf(placeholders)]
            }
            ClassExpression::ObjectIntersectionOf(operands) => operands
                .into_iter()
                .flat_map(|operand| self.simplify(operand, out))
                .collect(),
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                vec![ClassExpression::some(property, self.name_filler(*filler, out))]
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                vec![ClassExpression::only(property, self.name_filler(*filler, out))]
            }
            ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => vec![ClassExpression::min(
                cardinality,
                property,
                self.name_filler(*filler, out),
            )],
            ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => vec![ClassExpression::exactly(
                cardinality,
                property,
                self.name_filler(*filler, out),
            )],
            ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => vec![ClassExpression::max(
                cardinality,
                property,
                self.name_filler(*filler, out),
            )],
            simple => vec![simple],
        }
    }

    /// Keeps `owl:Thing` and `owl:Nothing` fillers, replaces anything else
    /// by a defined placeholder.
    fn name_filler(&mut self, filler: ClassExpression, out: &mut Vec<Axiom>) -> ClassExpression {
        if filler.is_thing() || filler.is_nothing() {
            return filler;
        }
        self.define(filler, out).into()
    }

    fn define(&mut self, expression: ClassExpression, out: &mut Vec<Axiom>) -> Class {
        let parts = self.simplify(expression, out);
        let placeholder = self.names.next_class();
        for part in parts {
            trace!(placeholder = %placeholder.iri(), definition = %part, "placeholder_defined");
            out.push(emit(&placeholder, part, &BTreeSet::new()));
        }
        placeholder
    }
}

fn emit(lhs: &Class, rhs: ClassExpression, annotations: &BTreeSet<Annotation>) -> Axiom {
    Axiom::subclass_of(lhs.clone(), rhs).with_annotations(annotations.iter().cloned())
}
