//! Class, property and data range expressions.
//!
//! Operands of commutative constructors are kept in [`BTreeSet`]s, so two
//! expressions that differ only in operand order are equal and deduplicate.
//! The derived ordering ranks variants in declaration order; the splitter
//! relies on it for the order in which it visits union operands.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entities::{Class, DataProperty, Datatype, Individual, Literal, ObjectProperty};

/// An object property or the inverse of one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),
    InverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Returns the inverse expression, cancelling a double inversion.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::ObjectProperty(property) => Self::InverseOf(property.clone()),
            Self::InverseOf(property) => Self::ObjectProperty(property.clone()),
        }
    }

    /// Returns the named property underneath any inversion.
    #[must_use]
    pub fn named(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(property) | Self::InverseOf(property) => property,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        Self::ObjectProperty(property)
    }
}

/// Constraining facets usable in a datatype restriction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
    LangRange,
}

impl Facet {
    /// Local name of the facet, as used in the XSD namespace.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::MinInclusive => "minInclusive",
            Self::MinExclusive => "minExclusive",
            Self::MaxInclusive => "maxInclusive",
            Self::MaxExclusive => "maxExclusive",
            Self::TotalDigits => "totalDigits",
            Self::FractionDigits => "fractionDigits",
            Self::LangRange => "langRange",
        }
    }
}

/// A facet paired with its constraining value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}

impl FacetRestriction {
    #[must_use]
    pub fn new(facet: Facet, value: Literal) -> Self {
        Self { facet, value }
    }
}

/// A data range.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataRange {
    Datatype(Datatype),
    DataOneOf(BTreeSet<Literal>),
    DataComplementOf(Box<DataRange>),
    DataIntersectionOf(BTreeSet<DataRange>),
    DataUnionOf(BTreeSet<DataRange>),
    DatatypeRestriction {
        datatype: Datatype,
        facets: BTreeSet<FacetRestriction>,
    },
}

impl DataRange {
    #[must_use]
    pub fn one_of(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self::DataOneOf(literals.into_iter().collect())
    }

    #[must_use]
    pub fn complement(range: impl Into<DataRange>) -> Self {
        Self::DataComplementOf(Box::new(range.into()))
    }

    #[must_use]
    pub fn intersection(ranges: impl IntoIterator<Item = DataRange>) -> Self {
        Self::DataIntersectionOf(ranges.into_iter().collect())
    }

    #[must_use]
    pub fn union(ranges: impl IntoIterator<Item = DataRange>) -> Self {
        Self::DataUnionOf(ranges.into_iter().collect())
    }

    #[must_use]
    pub fn restriction(
        datatype: Datatype,
        facets: impl IntoIterator<Item = FacetRestriction>,
    ) -> Self {
        Self::DatatypeRestriction {
            datatype,
            facets: facets.into_iter().collect(),
        }
    }
}

impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        Self::Datatype(datatype)
    }
}

/// A class expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassExpression {
    Class(Class),
    ObjectIntersectionOf(BTreeSet<ClassExpression>),
    ObjectUnionOf(BTreeSet<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(BTreeSet<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectHasSelf(ObjectPropertyExpression),
    DataSomeValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: DataRange,
    },
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: DataRange,
    },
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: DataRange,
    },
}

impl ClassExpression {
    /// `owl:Thing` as an expression.
    #[must_use]
    pub fn thing() -> Self {
        Self::Class(Class::thing())
    }

    /// `owl:Nothing` as an expression.
    #[must_use]
    pub fn nothing() -> Self {
        Self::Class(Class::nothing())
    }

    /// Builds a union, collapsing a single operand to the operand itself.
    #[must_use]
    pub fn union(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        let mut operands: BTreeSet<_> = operands.into_iter().collect();
        if operands.len() == 1 {
            if let Some(only) = operands.pop_first() {
                return only;
            }
        }
        Self::ObjectUnionOf(operands)
    }

    /// Builds an intersection, collapsing a single operand to the operand itself.
    #[must_use]
    pub fn intersection(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        let mut operands: BTreeSet<_> = operands.into_iter().collect();
        if operands.len() == 1 {
            if let Some(only) = operands.pop_first() {
                return only;
            }
        }
        Self::ObjectIntersectionOf(operands)
    }

    #[must_use]
    pub fn complement(operand: impl Into<ClassExpression>) -> Self {
        Self::ObjectComplementOf(Box::new(operand.into()))
    }

    #[must_use]
    pub fn one_of(individuals: impl IntoIterator<Item = Individual>) -> Self {
        Self::ObjectOneOf(individuals.into_iter().collect())
    }

    #[must_use]
    pub fn some(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    #[must_use]
    pub fn only(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    #[must_use]
    pub fn has_value(property: impl Into<ObjectPropertyExpression>, individual: Individual) -> Self {
        Self::ObjectHasValue {
            property: property.into(),
            individual,
        }
    }

    #[must_use]
    pub fn min(
        cardinality: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectMinCardinality {
            cardinality,
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    #[must_use]
    pub fn exactly(
        cardinality: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectExactCardinality {
            cardinality,
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    #[must_use]
    pub fn max(
        cardinality: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectMaxCardinality {
            cardinality,
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    #[must_use]
    pub fn has_self(property: impl Into<ObjectPropertyExpression>) -> Self {
        Self::ObjectHasSelf(property.into())
    }

    #[must_use]
    pub fn data_some(property: DataProperty, filler: impl Into<DataRange>) -> Self {
        Self::DataSomeValuesFrom {
            property,
            filler: filler.into(),
        }
    }

    #[must_use]
    pub fn data_only(property: DataProperty, filler: impl Into<DataRange>) -> Self {
        Self::DataAllValuesFrom {
            property,
            filler: filler.into(),
        }
    }

    #[must_use]
    pub fn data_has_value(property: DataProperty, value: Literal) -> Self {
        Self::DataHasValue { property, value }
    }

    #[must_use]
    pub fn data_min(cardinality: u32, property: DataProperty, filler: impl Into<DataRange>) -> Self {
        Self::DataMinCardinality {
            cardinality,
            property,
            filler: filler.into(),
        }
    }

    #[must_use]
    pub fn data_exactly(
        cardinality: u32,
        property: DataProperty,
        filler: impl Into<DataRange>,
    ) -> Self {
        Self::DataExactCardinality {
            cardinality,
            property,
            filler: filler.into(),
        }
    }

    #[must_use]
    pub fn data_max(cardinality: u32, property: DataProperty, filler: impl Into<DataRange>) -> Self {
        Self::DataMaxCardinality {
            cardinality,
            property,
            filler: filler.into(),
        }
    }

    /// Returns the named class when the expression is atomic.
    #[must_use]
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Whether the expression is a named class.
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Whether the expression is `owl:Thing`.
    #[must_use]
    pub fn is_thing(&self) -> bool {
        self.as_class().is_some_and(Class::is_thing)
    }

    /// Whether the expression is `owl:Nothing`.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.as_class().is_some_and(Class::is_nothing)
    }
}

impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}
