//! Per-kind rewrite rules.
//!
//! Each axiom kind maps to a list of [`Rewrite`]s: axioms already in normal
//! form pass through, class axioms become inclusions rooted at `owl:Thing`,
//! and class assertions are handed to the splitter.

use std::collections::BTreeSet;

use tracing::debug;

use super::nnf::{complement_nnf, nnf};
use crate::ontology::{
    axioms::{Annotation, Axiom, AxiomKind},
    entities::{Class, DataProperty, Datatype, Individual},
    expressions::{ClassExpression, DataRange, ObjectPropertyExpression},
};

/// Outcome of the first phase for a single axiom.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rewrite {
    /// Axiom already in normal form.
    Keep(Axiom),
    /// `owl:Thing ⊑ super_class`, with `super_class` in negation normal form.
    Gci {
        super_class: ClassExpression,
        annotations: BTreeSet<Annotation>,
    },
    /// Class assertion whose class is in negation normal form.
    Assertion {
        class: ClassExpression,
        individual: Individual,
        annotations: BTreeSet<Annotation>,
    },
}

/// Applies the rule for the axiom's kind.
#[must_use]
pub fn rewrite(axiom: &Axiom) -> Vec<Rewrite> {
    let annotations = &axiom.annotations;
    let rewrites = match &axiom.kind {
        AxiomKind::SubClassOf {
            sub_class,
            super_class,
        } => sub_class_of(sub_class, super_class, annotations),
        AxiomKind::EquivalentClasses(operands) => equivalent_classes(operands, annotations),
        AxiomKind::DisjointClasses(operands) => disjoint_classes(operands, annotations),
        AxiomKind::DisjointUnion { class, operands } => {
            disjoint_union(class, operands, annotations)
        }
        AxiomKind::ClassAssertion { class, individual } => vec![Rewrite::Assertion {
            class: nnf(class),
            individual: individual.clone(),
            annotations: annotations.clone(),
        }],
        AxiomKind::SameIndividual(individuals) if individuals.len() < 2 => Vec::new(),
        AxiomKind::InverseObjectProperties(first, second) => {
            inverse_object_properties(first, second, annotations)
        }
        AxiomKind::FunctionalObjectProperty(property) => {
            functional(property.clone(), annotations)
        }
        AxiomKind::InverseFunctionalObjectProperty(property) => {
            functional(property.inverse(), annotations)
        }
        AxiomKind::ObjectPropertyDomain { property, domain } => sub_class_of(
            &ClassExpression::some(property.clone(), ClassExpression::thing()),
            domain,
            annotations,
        ),
        AxiomKind::ObjectPropertyRange { property, range } => vec![gci(
            ClassExpression::only(property.clone(), nnf(range)),
            annotations,
        )],
        AxiomKind::FunctionalDataProperty(property) => {
            functional_data(property.clone(), annotations)
        }
        AxiomKind::DataPropertyDomain { property, domain } => sub_class_of(
            &ClassExpression::data_some(property.clone(), Datatype::literal()),
            domain,
            annotations,
        ),
        AxiomKind::DataPropertyRange { property, range } => vec![gci(
            ClassExpression::data_only(property.clone(), range.clone()),
            annotations,
        )],
        AxiomKind::Declaration(_)
        | AxiomKind::SameIndividual(_)
        | AxiomKind::DifferentIndividuals(_)
        | AxiomKind::ObjectPropertyAssertion { .. }
        | AxiomKind::NegativeObjectPropertyAssertion { .. }
        | AxiomKind::DataPropertyAssertion { .. }
        | AxiomKind::NegativeDataPropertyAssertion { .. }
        | AxiomKind::EquivalentObjectProperties(_)
        | AxiomKind::SubObjectPropertyOf { .. }
        | AxiomKind::SymmetricObjectProperty(_)
        | AxiomKind::AsymmetricObjectProperty(_)
        | AxiomKind::TransitiveObjectProperty(_)
        | AxiomKind::ReflexiveObjectProperty(_)
        | AxiomKind::IrreflexiveObjectProperty(_)
        | AxiomKind::DisjointObjectProperties(_)
        | AxiomKind::SubPropertyChainOf { .. }
        | AxiomKind::EquivalentDataProperties(_)
        | AxiomKind::SubDataPropertyOf { .. }
        | AxiomKind::DisjointDataProperties(_)
        | AxiomKind::DatatypeDefinition { .. }
        | AxiomKind::HasKey { .. }
        | AxiomKind::Rule(_)
        | AxiomKind::AnnotationAssertion { .. }
        | AxiomKind::SubAnnotationPropertyOf { .. }
        | AxiomKind::AnnotationPropertyRange { .. }
        | AxiomKind::AnnotationPropertyDomain { .. } => vec![Rewrite::Keep(axiom.clone())],
    };
    debug!(
        kind = axiom.kind.name(),
        rewrites = rewrites.len(),
        "axiom_rewritten"
    );
    rewrites
}

fn gci(super_class: ClassExpression, annotations: &BTreeSet<Annotation>) -> Rewrite {
    Rewrite::Gci {
        super_class,
        annotations: annotations.clone(),
    }
}

fn sub_class_of(
    sub_class: &ClassExpression,
    super_class: &ClassExpression,
    annotations: &BTreeSet<Annotation>,
) -> Vec<Rewrite> {
    if sub_class.is_thing() {
        return vec![gci(nnf(super_class), annotations)];
    }
    let union = ClassExpression::ObjectUnionOf(
        [complement_nnf(sub_class), nnf(super_class)]
            .into_iter()
            .collect(),
    );
    vec![gci(union, annotations)]
}

fn equivalent_classes(
    operands: &BTreeSet<ClassExpression>,
    annotations: &BTreeSet<Annotation>,
) -> Vec<Rewrite> {
    operands
        .iter()
        .map(|operand| gci(nnf(operand), annotations))
        .collect()
}

fn disjoint_classes(
    operands: &BTreeSet<ClassExpression>,
    annotations: &BTreeSet<Annotation>,
) -> Vec<Rewrite> {
    operands
        .iter()
        .map(|operand| gci(complement_nnf(operand), annotations))
        .collect()
}

fn disjoint_union(
    class: &Class,
    operands: &BTreeSet<ClassExpression>,
    annotations: &BTreeSet<Annotation>,
) -> Vec<Rewrite> {
    let equivalent: BTreeSet<ClassExpression> = [
        ClassExpression::from(class.clone()),
        ClassExpression::union(operands.iter().cloned()),
    ]
    .into_iter()
    .collect();
    let mut rewrites = equivalent_classes(&equivalent, annotations);
    rewrites.extend(disjoint_classes(operands, annotations));
    rewrites
}

fn inverse_object_properties(
    first: &ObjectPropertyExpression,
    second: &ObjectPropertyExpression,
    annotations: &BTreeSet<Annotation>,
) -> Vec<Rewrite> {
    [(first, second), (second, first)]
        .into_iter()
        .map(|(sub_property, super_property)| {
            Rewrite::Keep(
                Axiom::new(AxiomKind::SubObjectPropertyOf {
                    sub_property: sub_property.clone(),
                    super_property: super_property.inverse(),
                })
                .with_annotations(annotations.iter().cloned()),
            )
        })
        .collect()
}

fn functional(
    property: ObjectPropertyExpression,
    annotations: &BTreeSet<Annotation>,
) -> Vec<Rewrite> {
    vec![gci(
        ClassExpression::max(1, property, ClassExpression::thing()),
        annotations,
    )]
}

fn functional_data(property: DataProperty, annotations: &BTreeSet<Annotation>) -> Vec<Rewrite> {
    vec![gci(
        ClassExpression::data_max(1, property, DataRange::from(Datatype::literal())),
        annotations,
    )]
}

#[cfg(test)]
mod tests {
    use super::{rewrite, Rewrite};
    use crate::ontology::{
        axioms::{Axiom, AxiomKind},
        entities::{Class, DataProperty, Datatype, NamedIndividual, ObjectProperty},
        expressions::ClassExpression as CE,
    };

    fn c(name: &str) -> Class {
        Class::parse(&format!("urn:test:test#{name}")).expect("valid iri")
    }

    fn op() -> ObjectProperty {
        ObjectProperty::parse("urn:test:test#op").expect("valid iri")
    }

    fn gci(super_class: CE) -> Rewrite {
        Rewrite::Gci {
            super_class,
            annotations: Default::default(),
        }
    }

    #[test]
    fn top_rooted_subclass_axioms_become_a_single_inclusion() {
        let axiom = Axiom::subclass_of(Class::thing(), CE::complement(CE::complement(c("a"))));
        assert_eq!(rewrite(&axiom), vec![gci(c("a").into())]);
    }

    #[test]
    fn subclass_axioms_become_unions_with_the_negated_subclass() {
        let axiom = Axiom::subclass_of(c("a"), c("b"));
        assert_eq!(
            rewrite(&axiom),
            vec![gci(CE::union([CE::complement(c("a")), c("b").into()]))]
        );
    }

    #[test]
    fn domains_go_through_the_subclass_rule() {
        let axiom = Axiom::new(AxiomKind::ObjectPropertyDomain {
            property: op().into(),
            domain: c("a").into(),
        });
        assert_eq!(
            rewrite(&axiom),
            vec![gci(CE::union([c("a").into(), CE::only(op(), CE::nothing())]))]
        );
    }

    #[test]
    fn data_domains_negate_the_literal_range() {
        let dp = DataProperty::parse("urn:test:test#dp").expect("valid iri");
        let axiom = Axiom::new(AxiomKind::DataPropertyDomain {
            property: dp.clone(),
            domain: c("a").into(),
        });
        assert_eq!(
            rewrite(&axiom),
            vec![gci(CE::union([
                c("a").into(),
                CE::data_only(
                    dp,
                    crate::ontology::expressions::DataRange::complement(Datatype::literal())
                ),
            ]))]
        );
    }

    #[test]
    fn single_individual_sameness_is_swallowed() {
        let individual = NamedIndividual::parse("urn:test:test#i").expect("valid iri");
        let axiom = Axiom::new(AxiomKind::SameIndividual(
            [individual.into()].into_iter().collect(),
        ));
        assert!(rewrite(&axiom).is_empty());
    }

    #[test]
    fn inverse_functional_properties_use_the_inverse() {
        let axiom = Axiom::new(AxiomKind::InverseFunctionalObjectProperty(op().into()));
        let expected = CE::max(
            1,
            crate::ontology::expressions::ObjectPropertyExpression::from(op()).inverse(),
            CE::thing(),
        );
        assert_eq!(rewrite(&axiom), vec![gci(expected)]);
    }

    #[test]
    fn property_characteristics_pass_through() {
        let axiom = Axiom::new(AxiomKind::TransitiveObjectProperty(op().into()));
        assert_eq!(rewrite(&axiom), vec![Rewrite::Keep(axiom)]);
    }
}
