//! Collection of every IRI mentioned by a model value.

use std::collections::BTreeSet;

use super::axioms::{Annotation, AnnotationSubject, AnnotationValue, Axiom, AxiomKind};
use super::entities::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, Individual, Literal, LiteralKind,
    NamedIndividual, ObjectProperty, Variable,
};
use super::expressions::{ClassExpression, DataRange, ObjectPropertyExpression};
use super::rules::{Atom, DArgument, IArgument, Rule};
use super::value_objects::Iri;

/// Values that can enumerate the IRIs they mention.
pub trait Signature {
    /// Adds every mentioned IRI to `out`.
    fn collect_iris(&self, out: &mut BTreeSet<Iri>);

    /// Returns the mentioned IRIs as a fresh set.
    fn signature(&self) -> BTreeSet<Iri> {
        let mut out = BTreeSet::new();
        self.collect_iris(&mut out);
        out
    }
}

impl<T: Signature> Signature for [T] {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        for item in self {
            item.collect_iris(out);
        }
    }
}

impl<T: Signature> Signature for BTreeSet<T> {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        for item in self {
            item.collect_iris(out);
        }
    }
}

impl<T: Signature> Signature for Vec<T> {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        self.as_slice().collect_iris(out);
    }
}

impl Signature for Iri {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        out.insert(self.clone());
    }
}

macro_rules! signature_by_iri {
    ($($name:ident),*) => {
        $(
            impl Signature for $name {
                fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
                    out.insert(self.iri().clone());
                }
            }
        )*
    };
}

signature_by_iri!(
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Datatype,
    NamedIndividual,
    Variable,
    Entity
);

impl Signature for Individual {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        if let Self::Named(individual) = self {
            individual.collect_iris(out);
        }
    }
}

impl Signature for Literal {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        if let LiteralKind::Typed(datatype) = self.kind() {
            datatype.collect_iris(out);
        }
    }
}

impl Signature for ObjectPropertyExpression {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        self.named().collect_iris(out);
    }
}

impl Signature for DataRange {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::Datatype(datatype) => datatype.collect_iris(out),
            Self::DataOneOf(literals) => literals.collect_iris(out),
            Self::DataComplementOf(range) => range.collect_iris(out),
            Self::DataIntersectionOf(ranges) | Self::DataUnionOf(ranges) => {
                ranges.collect_iris(out);
            }
            Self::DatatypeRestriction { datatype, facets } => {
                datatype.collect_iris(out);
                for facet in facets {
                    facet.value.collect_iris(out);
                }
            }
        }
    }
}

impl Signature for ClassExpression {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::Class(class) => class.collect_iris(out),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                operands.collect_iris(out);
            }
            Self::ObjectComplementOf(operand) => operand.collect_iris(out),
            Self::ObjectOneOf(individuals) => individuals.collect_iris(out),
            Self::ObjectSomeValuesFrom { property, filler }
            | Self::ObjectAllValuesFrom { property, filler }
            | Self::ObjectMinCardinality {
                property, filler, ..
            }
            | Self::ObjectExactCardinality {
                property, filler, ..
            }
            | Self::ObjectMaxCardinality {
                property, filler, ..
            } => {
                property.collect_iris(out);
                filler.collect_iris(out);
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => {
                property.collect_iris(out);
                individual.collect_iris(out);
            }
            Self::ObjectHasSelf(property) => property.collect_iris(out),
            Self::DataSomeValuesFrom { property, filler }
            | Self::DataAllValuesFrom { property, filler }
            | Self::DataMinCardinality {
                property, filler, ..
            }
            | Self::DataExactCardinality {
                property, filler, ..
            }
            | Self::DataMaxCardinality {
                property, filler, ..
            } => {
                property.collect_iris(out);
                filler.collect_iris(out);
            }
            Self::DataHasValue { property, value } => {
                property.collect_iris(out);
                value.collect_iris(out);
            }
        }
    }
}

impl Signature for IArgument {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::Variable(variable) => variable.collect_iris(out),
            Self::Individual(individual) => individual.collect_iris(out),
        }
    }
}

impl Signature for DArgument {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::Variable(variable) => variable.collect_iris(out),
            Self::Literal(literal) => literal.collect_iris(out),
        }
    }
}

impl Signature for Atom {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::ClassAtom { class, argument } => {
                class.collect_iris(out);
                argument.collect_iris(out);
            }
            Self::DataRangeAtom { range, argument } => {
                range.collect_iris(out);
                argument.collect_iris(out);
            }
            Self::ObjectPropertyAtom {
                property,
                subject,
                object,
            } => {
                property.collect_iris(out);
                subject.collect_iris(out);
                object.collect_iris(out);
            }
            Self::DataPropertyAtom {
                property,
                subject,
                object,
            } => {
                property.collect_iris(out);
                subject.collect_iris(out);
                object.collect_iris(out);
            }
            Self::BuiltInAtom {
                predicate,
                arguments,
            } => {
                predicate.collect_iris(out);
                arguments.collect_iris(out);
            }
            Self::SameAsAtom(first, second) | Self::DifferentFromAtom(first, second) => {
                first.collect_iris(out);
                second.collect_iris(out);
            }
        }
    }
}

impl Signature for Rule {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        self.body.collect_iris(out);
        self.head.collect_iris(out);
    }
}

impl Signature for AnnotationValue {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::Iri(iri) => iri.collect_iris(out),
            Self::Literal(literal) => literal.collect_iris(out),
            Self::Anonymous(_) => {}
        }
    }
}

impl Signature for AnnotationSubject {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        if let Self::Iri(iri) = self {
            iri.collect_iris(out);
        }
    }
}

impl Signature for Annotation {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        self.property.collect_iris(out);
        self.value.collect_iris(out);
    }
}

impl Signature for AxiomKind {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        match self {
            Self::Declaration(entity) => entity.collect_iris(out),
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                operands.collect_iris(out);
            }
            Self::SubClassOf {
                sub_class,
                super_class,
            } => {
                sub_class.collect_iris(out);
                super_class.collect_iris(out);
            }
            Self::DisjointUnion { class, operands } => {
                class.collect_iris(out);
                operands.collect_iris(out);
            }
            Self::ClassAssertion { class, individual } => {
                class.collect_iris(out);
                individual.collect_iris(out);
            }
            Self::SameIndividual(individuals) | Self::DifferentIndividuals(individuals) => {
                individuals.collect_iris(out);
            }
            Self::ObjectPropertyAssertion {
                property,
                subject,
                object,
            }
            | Self::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                property.collect_iris(out);
                subject.collect_iris(out);
                object.collect_iris(out);
            }
            Self::DataPropertyAssertion {
                property,
                subject,
                value,
            }
            | Self::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => {
                property.collect_iris(out);
                subject.collect_iris(out);
                value.collect_iris(out);
            }
            Self::EquivalentObjectProperties(properties)
            | Self::DisjointObjectProperties(properties) => properties.collect_iris(out),
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            }
            | Self::InverseObjectProperties(sub_property, super_property) => {
                sub_property.collect_iris(out);
                super_property.collect_iris(out);
            }
            Self::FunctionalObjectProperty(property)
            | Self::InverseFunctionalObjectProperty(property)
            | Self::SymmetricObjectProperty(property)
            | Self::AsymmetricObjectProperty(property)
            | Self::TransitiveObjectProperty(property)
            | Self::ReflexiveObjectProperty(property)
            | Self::IrreflexiveObjectProperty(property) => property.collect_iris(out),
            Self::ObjectPropertyDomain { property, domain } => {
                property.collect_iris(out);
                domain.collect_iris(out);
            }
            Self::ObjectPropertyRange { property, range } => {
                property.collect_iris(out);
                range.collect_iris(out);
            }
            Self::SubPropertyChainOf {
                chain,
                super_property,
            } => {
                chain.collect_iris(out);
                super_property.collect_iris(out);
            }
            Self::EquivalentDataProperties(properties)
            | Self::DisjointDataProperties(properties) => properties.collect_iris(out),
            Self::SubDataPropertyOf {
                sub_property,
                super_property,
            } => {
                sub_property.collect_iris(out);
                super_property.collect_iris(out);
            }
            Self::FunctionalDataProperty(property) => property.collect_iris(out),
            Self::DataPropertyDomain { property, domain } => {
                property.collect_iris(out);
                domain.collect_iris(out);
            }
            Self::DataPropertyRange { property, range } => {
                property.collect_iris(out);
                range.collect_iris(out);
            }
            Self::DatatypeDefinition { datatype, range } => {
                datatype.collect_iris(out);
                range.collect_iris(out);
            }
            Self::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                class.collect_iris(out);
                object_properties.collect_iris(out);
                data_properties.collect_iris(out);
            }
            Self::Rule(rule) => rule.collect_iris(out),
            Self::AnnotationAssertion {
                property,
                subject,
                value,
            } => {
                property.collect_iris(out);
                subject.collect_iris(out);
                value.collect_iris(out);
            }
            Self::SubAnnotationPropertyOf {
                sub_property,
                super_property,
            } => {
                sub_property.collect_iris(out);
                super_property.collect_iris(out);
            }
            Self::AnnotationPropertyRange { property, range: iri }
            | Self::AnnotationPropertyDomain {
                property,
                domain: iri,
            } => {
                property.collect_iris(out);
                iri.collect_iris(out);
            }
        }
    }
}

impl Signature for Axiom {
    fn collect_iris(&self, out: &mut BTreeSet<Iri>) {
        self.kind.collect_iris(out);
        self.annotations.collect_iris(out);
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::ontology::axioms::Axiom;
    use crate::ontology::entities::{Class, ObjectProperty};
    use crate::ontology::expressions::ClassExpression;

    #[test]
    fn collects_nested_iris() {
        let op = ObjectProperty::parse("urn:test:test#op").expect("valid iri");
        let c = Class::parse("urn:test:test#c").expect("valid iri");
        let axiom = Axiom::subclass_of(
            ClassExpression::thing(),
            ClassExpression::some(op.clone(), c.clone()),
        );
        let signature = axiom.signature();
        assert!(signature.contains(op.iri()));
        assert!(signature.contains(c.iri()));
        assert!(signature.contains(Class::thing().iri()));
        assert_eq!(signature.len(), 3);
    }
}
