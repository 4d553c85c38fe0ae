use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entities::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
    Literal,
};
use super::expressions::{ClassExpression, DataRange, ObjectPropertyExpression};
use super::rules::Rule;
use super::value_objects::Iri;

/// Value carried by an annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(AnonymousIndividual),
}

/// Subject of an annotation assertion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationSubject {
    Iri(Iri),
    Anonymous(AnonymousIndividual),
}

/// Property/value pair attached to an axiom.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
}

impl Annotation {
    #[must_use]
    pub fn new(property: AnnotationProperty, value: AnnotationValue) -> Self {
        Self { property, value }
    }
}

/// Logical and non-logical axiom kinds.
///
/// Variants are declared in the conventional OWL axiom-type order, which the
/// derived ordering uses to sort output sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxiomKind {
    Declaration(Entity),
    EquivalentClasses(BTreeSet<ClassExpression>),
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },
    DisjointClasses(BTreeSet<ClassExpression>),
    DisjointUnion {
        class: Class,
        operands: BTreeSet<ClassExpression>,
    },
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    SameIndividual(BTreeSet<Individual>),
    DifferentIndividuals(BTreeSet<Individual>),
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    EquivalentObjectProperties(BTreeSet<ObjectPropertyExpression>),
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    DisjointObjectProperties(BTreeSet<ObjectPropertyExpression>),
    SubPropertyChainOf {
        chain: Vec<ObjectPropertyExpression>,
        super_property: ObjectPropertyExpression,
    },
    EquivalentDataProperties(BTreeSet<DataProperty>),
    SubDataPropertyOf {
        sub_property: DataProperty,
        super_property: DataProperty,
    },
    FunctionalDataProperty(DataProperty),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    DisjointDataProperties(BTreeSet<DataProperty>),
    DatatypeDefinition {
        datatype: Datatype,
        range: DataRange,
    },
    HasKey {
        class: ClassExpression,
        object_properties: BTreeSet<ObjectPropertyExpression>,
        data_properties: BTreeSet<DataProperty>,
    },
    Rule(Rule),
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },
    SubAnnotationPropertyOf {
        sub_property: AnnotationProperty,
        super_property: AnnotationProperty,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: Iri,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: Iri,
    },
}

impl AxiomKind {
    /// Functional-syntax keyword of the axiom kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Declaration(_) => "Declaration",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::SubClassOf { .. } => "SubClassOf",
            Self::DisjointClasses(_) => "DisjointClasses",
            Self::DisjointUnion { .. } => "DisjointUnion",
            Self::ClassAssertion { .. } => "ClassAssertion",
            Self::SameIndividual(_) => "SameIndividual",
            Self::DifferentIndividuals(_) => "DifferentIndividuals",
            Self::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion { .. } => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion { .. } => "DataPropertyAssertion",
            Self::NegativeDataPropertyAssertion { .. } => "NegativeDataPropertyAssertion",
            Self::EquivalentObjectProperties(_) => "EquivalentObjectProperties",
            Self::SubObjectPropertyOf { .. } | Self::SubPropertyChainOf { .. } => {
                "SubObjectPropertyOf"
            }
            Self::InverseObjectProperties(..) => "InverseObjectProperties",
            Self::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty(_) => "InverseFunctionalObjectProperty",
            Self::SymmetricObjectProperty(_) => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty(_) => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            Self::ReflexiveObjectProperty(_) => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty(_) => "IrreflexiveObjectProperty",
            Self::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Self::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Self::DisjointObjectProperties(_) => "DisjointObjectProperties",
            Self::EquivalentDataProperties(_) => "EquivalentDataProperties",
            Self::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            Self::FunctionalDataProperty(_) => "FunctionalDataProperty",
            Self::DataPropertyDomain { .. } => "DataPropertyDomain",
            Self::DataPropertyRange { .. } => "DataPropertyRange",
            Self::DisjointDataProperties(_) => "DisjointDataProperties",
            Self::DatatypeDefinition { .. } => "DatatypeDefinition",
            Self::HasKey { .. } => "HasKey",
            Self::Rule(_) => "DLSafeRule",
            Self::AnnotationAssertion { .. } => "AnnotationAssertion",
            Self::SubAnnotationPropertyOf { .. } => "SubAnnotationPropertyOf",
            Self::AnnotationPropertyRange { .. } => "AnnotationPropertyRange",
            Self::AnnotationPropertyDomain { .. } => "AnnotationPropertyDomain",
        }
    }
}

/// An axiom together with its annotations.
///
/// Annotations take part in equality: the same logical content with a
/// different annotation set is a different axiom.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axiom {
    pub kind: AxiomKind,
    #[serde(default)]
    pub annotations: BTreeSet<Annotation>,
}

impl Axiom {
    /// Creates an unannotated axiom.
    #[must_use]
    pub fn new(kind: AxiomKind) -> Self {
        Self {
            kind,
            annotations: BTreeSet::new(),
        }
    }

    /// Replaces the annotation set.
    #[must_use]
    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations = annotations.into_iter().collect();
        self
    }

    /// Adds a single annotation.
    #[must_use]
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    /// Creates a `SubClassOf` axiom.
    #[must_use]
    pub fn subclass_of(
        sub_class: impl Into<ClassExpression>,
        super_class: impl Into<ClassExpression>,
    ) -> Self {
        Self::new(AxiomKind::SubClassOf {
            sub_class: sub_class.into(),
            super_class: super_class.into(),
        })
    }

    /// Creates a declaration axiom.
    #[must_use]
    pub fn declaration(entity: Entity) -> Self {
        Self::new(AxiomKind::Declaration(entity))
    }

    /// Creates a `ClassAssertion` axiom.
    #[must_use]
    pub fn class_assertion(class: impl Into<ClassExpression>, individual: Individual) -> Self {
        Self::new(AxiomKind::ClassAssertion {
            class: class.into(),
            individual,
        })
    }
}

impl From<AxiomKind> for Axiom {
    fn from(kind: AxiomKind) -> Self {
        Self::new(kind)
    }
}
