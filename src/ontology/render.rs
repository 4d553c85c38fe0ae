//! Canonical functional-syntax-like rendering.
//!
//! Only the `owl:`, `rdf:`, `rdfs:` and `xsd:` namespaces are abbreviated;
//! every other IRI is written in full between angle brackets. The layout,
//! including its irregular spacing inside n-ary property axioms, data
//! enumerations and rule bodies, is the one downstream tooling compares
//! against, so it must stay byte-stable.

use std::fmt::{self, Display, Formatter};

use super::axioms::{Annotation, AnnotationSubject, AnnotationValue, Axiom, AxiomKind};
use super::entities::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
    Literal, LiteralKind, NamedIndividual, ObjectProperty, Variable,
};
use super::expressions::{ClassExpression, DataRange, FacetRestriction, ObjectPropertyExpression};
use super::rules::{Atom, DArgument, IArgument, Rule};
use super::value_objects::Iri;
use super::vocab;

fn write_iri(f: &mut Formatter<'_>, iri: &Iri) -> fmt::Result {
    let text = iri.as_str();
    for (prefix, namespace) in vocab::PREFIXES {
        if let Some(local) = text.strip_prefix(namespace) {
            if !local.is_empty()
                && local
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return write!(f, "{prefix}:{local}");
            }
        }
    }
    write!(f, "<{text}>")
}

/// Writes items separated by single spaces.
fn write_joined<T: Display>(f: &mut Formatter<'_>, items: impl IntoIterator<Item = T>) -> fmt::Result {
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Writes every item followed by a space.
fn write_each_spaced<T: Display>(
    f: &mut Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for item in items {
        write!(f, "{item} ")?;
    }
    Ok(())
}

macro_rules! display_by_iri {
    ($($name:ident),*) => {
        $(
            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write_iri(f, self.iri())
                }
            }
        )*
    };
}

display_by_iri!(
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Datatype,
    NamedIndividual
);

impl Display for AnonymousIndividual {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.label())
    }
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(individual) => individual.fmt(f),
            Self::Anonymous(individual) => individual.fmt(f),
        }
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Class(_) => "Class",
            Self::ObjectProperty(_) => "ObjectProperty",
            Self::DataProperty(_) => "DataProperty",
            Self::AnnotationProperty(_) => "AnnotationProperty",
            Self::Datatype(_) => "Datatype",
            Self::NamedIndividual(_) => "NamedIndividual",
        };
        write!(f, "{keyword}(")?;
        write_iri(f, self.iri())?;
        f.write_str(")")
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical().chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str("\"")?;
        match self.kind() {
            LiteralKind::Typed(datatype) => write!(f, "^^{datatype}"),
            LiteralKind::Language(language) => write!(f, "@{language}"),
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Variable(")?;
        write_iri(f, self.iri())?;
        f.write_str(")")
    }
}

impl Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectProperty(property) => property.fmt(f),
            Self::InverseOf(property) => write!(f, "ObjectInverseOf({property})"),
        }
    }
}

impl Display for FacetRestriction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "facetRestriction({} {})",
            self.facet.short_name(),
            self.value
        )
    }
}

impl Display for DataRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datatype(datatype) => datatype.fmt(f),
            Self::DataOneOf(literals) => {
                f.write_str("DataOneOf(")?;
                write_each_spaced(f, literals)?;
                f.write_str(")")
            }
            Self::DataComplementOf(range) => write!(f, "DataComplementOf({range})"),
            Self::DataIntersectionOf(ranges) => {
                f.write_str("DataIntersectionOf(")?;
                write_each_spaced(f, ranges)?;
                f.write_str(")")
            }
            Self::DataUnionOf(ranges) => {
                f.write_str("DataUnionOf(")?;
                write_each_spaced(f, ranges)?;
                f.write_str(")")
            }
            Self::DatatypeRestriction { datatype, facets } => {
                write!(f, "DataRangeRestriction({datatype}")?;
                for facet in facets {
                    write!(f, " {facet}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Display for ClassExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => class.fmt(f),
            Self::ObjectIntersectionOf(operands) => {
                f.write_str("ObjectIntersectionOf(")?;
                write_joined(f, operands)?;
                f.write_str(")")
            }
            Self::ObjectUnionOf(operands) => {
                f.write_str("ObjectUnionOf(")?;
                write_joined(f, operands)?;
                f.write_str(")")
            }
            Self::ObjectComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            Self::ObjectOneOf(individuals) => {
                f.write_str("ObjectOneOf(")?;
                write_joined(f, individuals)?;
                f.write_str(")")
            }
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectMinCardinality({cardinality} {property} {filler})"),
            Self::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectExactCardinality({cardinality} {property} {filler})"),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectMaxCardinality({cardinality} {property} {filler})"),
            Self::ObjectHasSelf(property) => write!(f, "ObjectHasSelf({property})"),
            Self::DataSomeValuesFrom { property, filler } => {
                write!(f, "DataSomeValuesFrom({property} {filler})")
            }
            Self::DataAllValuesFrom { property, filler } => {
                write!(f, "DataAllValuesFrom({property} {filler})")
            }
            Self::DataHasValue { property, value } => {
                write!(f, "DataHasValue({property} {value})")
            }
            Self::DataMinCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "DataMinCardinality({cardinality} {property} {filler})"),
            Self::DataExactCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "DataExactCardinality({cardinality} {property} {filler})"),
            Self::DataMaxCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "DataMaxCardinality({cardinality} {property} {filler})"),
        }
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write_iri(f, iri),
            Self::Literal(literal) => literal.fmt(f),
            Self::Anonymous(individual) => individual.fmt(f),
        }
    }
}

impl Display for AnnotationSubject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write_iri(f, iri),
            Self::Anonymous(individual) => individual.fmt(f),
        }
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value)
    }
}

impl Display for IArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(variable) => variable.fmt(f),
            Self::Individual(individual) => individual.fmt(f),
        }
    }
}

impl Display for DArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(variable) => variable.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassAtom { class, argument } => write!(f, "ClassAtom({class} {argument})"),
            Self::DataRangeAtom { range, argument } => {
                write!(f, "DataRangeAtom({range} {argument})")
            }
            Self::ObjectPropertyAtom {
                property,
                subject,
                object,
            } => write!(f, "ObjectPropertyAtom({property} {subject} {object})"),
            Self::DataPropertyAtom {
                property,
                subject,
                object,
            } => write!(f, "DataPropertyAtom({property} {subject} {object})"),
            Self::BuiltInAtom {
                predicate,
                arguments,
            } => {
                f.write_str("BuiltInAtom(")?;
                write_iri(f, predicate)?;
                f.write_str(" ")?;
                write_each_spaced(f, arguments)?;
                f.write_str(")")
            }
            Self::SameAsAtom(first, second) => write!(f, "SameAsAtom({first} {second})"),
            Self::DifferentFromAtom(first, second) => {
                write!(f, "DifferentFromAtom({first} {second})")
            }
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(" Body(")?;
        write_joined(f, &self.body)?;
        f.write_str(") Head(")?;
        write_joined(f, &self.head)?;
        f.write_str(") ")
    }
}

fn write_kind_body(f: &mut Formatter<'_>, kind: &AxiomKind) -> fmt::Result {
    match kind {
        AxiomKind::Declaration(entity) => entity.fmt(f),
        AxiomKind::EquivalentClasses(operands) | AxiomKind::DisjointClasses(operands) => {
            write_joined(f, operands)
        }
        AxiomKind::SubClassOf {
            sub_class,
            super_class,
        } => write!(f, "{sub_class} {super_class}"),
        AxiomKind::DisjointUnion { class, operands } => {
            write!(f, "{class} ")?;
            write_joined(f, operands)
        }
        AxiomKind::ClassAssertion { class, individual } => write!(f, "{class} {individual}"),
        AxiomKind::SameIndividual(individuals) | AxiomKind::DifferentIndividuals(individuals) => {
            write_joined(f, individuals)
        }
        AxiomKind::ObjectPropertyAssertion {
            property,
            subject,
            object,
        }
        | AxiomKind::NegativeObjectPropertyAssertion {
            property,
            subject,
            object,
        } => write!(f, "{property} {subject} {object}"),
        AxiomKind::DataPropertyAssertion {
            property,
            subject,
            value,
        }
        | AxiomKind::NegativeDataPropertyAssertion {
            property,
            subject,
            value,
        } => write!(f, "{property} {subject} {value}"),
        AxiomKind::EquivalentObjectProperties(properties)
        | AxiomKind::DisjointObjectProperties(properties) => write_each_spaced(f, properties),
        AxiomKind::EquivalentDataProperties(properties)
        | AxiomKind::DisjointDataProperties(properties) => write_each_spaced(f, properties),
        AxiomKind::SubObjectPropertyOf {
            sub_property,
            super_property,
        } => write!(f, "{sub_property} {super_property}"),
        AxiomKind::InverseObjectProperties(first, second) => write!(f, "{first} {second}"),
        AxiomKind::FunctionalObjectProperty(property)
        | AxiomKind::InverseFunctionalObjectProperty(property)
        | AxiomKind::SymmetricObjectProperty(property)
        | AxiomKind::AsymmetricObjectProperty(property)
        | AxiomKind::TransitiveObjectProperty(property)
        | AxiomKind::ReflexiveObjectProperty(property)
        | AxiomKind::IrreflexiveObjectProperty(property) => property.fmt(f),
        AxiomKind::ObjectPropertyDomain { property, domain } => write!(f, "{property} {domain}"),
        AxiomKind::ObjectPropertyRange { property, range } => write!(f, "{property} {range}"),
        AxiomKind::SubPropertyChainOf {
            chain,
            super_property,
        } => {
            f.write_str("ObjectPropertyChain( ")?;
            write_each_spaced(f, chain)?;
            write!(f, ") {super_property}")
        }
        AxiomKind::SubDataPropertyOf {
            sub_property,
            super_property,
        } => write!(f, "{sub_property} {super_property}"),
        AxiomKind::FunctionalDataProperty(property) => property.fmt(f),
        AxiomKind::DataPropertyDomain { property, domain } => write!(f, "{property} {domain}"),
        AxiomKind::DataPropertyRange { property, range } => write!(f, "{property} {range}"),
        AxiomKind::DatatypeDefinition { datatype, range } => write!(f, "{datatype} {range}"),
        AxiomKind::HasKey {
            class,
            object_properties,
            data_properties,
        } => {
            write!(f, "{class} (")?;
            write_each_spaced(f, object_properties)?;
            f.write_str(") (")?;
            write_each_spaced(f, data_properties)?;
            f.write_str(")")
        }
        AxiomKind::Rule(rule) => rule.fmt(f),
        AxiomKind::AnnotationAssertion {
            property,
            subject,
            value,
        } => write!(f, "{property} {subject} {value}"),
        AxiomKind::SubAnnotationPropertyOf {
            sub_property,
            super_property,
        } => write!(f, "{sub_property} {super_property}"),
        AxiomKind::AnnotationPropertyRange { property, range } => {
            write!(f, "{property} ")?;
            write_iri(f, range)
        }
        AxiomKind::AnnotationPropertyDomain { property, domain } => {
            write!(f, "{property} ")?;
            write_iri(f, domain)
        }
    }
}

impl Display for Axiom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind.name())?;
        write_each_spaced(f, &self.annotations)?;
        write_kind_body(f, &self.kind)?;
        f.write_str(")")
    }
}
