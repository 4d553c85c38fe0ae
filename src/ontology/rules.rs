//! DL-safe rule atoms.

use serde::{Deserialize, Serialize};

use super::entities::{DataProperty, Individual, Literal, Variable};
use super::expressions::{ClassExpression, DataRange, ObjectPropertyExpression};
use super::value_objects::Iri;

/// Argument of an atom ranging over individuals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IArgument {
    Variable(Variable),
    Individual(Individual),
}

/// Argument of an atom ranging over data values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DArgument {
    Variable(Variable),
    Literal(Literal),
}

impl From<Variable> for IArgument {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl From<Individual> for IArgument {
    fn from(individual: Individual) -> Self {
        Self::Individual(individual)
    }
}

impl From<Variable> for DArgument {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl From<Literal> for DArgument {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// A body or head atom.
///
/// Arguments are kept exactly as written; nothing inside an atom is ever
/// rewritten by the transformation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Atom {
    ClassAtom {
        class: ClassExpression,
        argument: IArgument,
    },
    DataRangeAtom {
        range: DataRange,
        argument: DArgument,
    },
    ObjectPropertyAtom {
        property: ObjectPropertyExpression,
        subject: IArgument,
        object: IArgument,
    },
    DataPropertyAtom {
        property: DataProperty,
        subject: IArgument,
        object: DArgument,
    },
    BuiltInAtom {
        predicate: Iri,
        arguments: Vec<DArgument>,
    },
    SameAsAtom(IArgument, IArgument),
    DifferentFromAtom(IArgument, IArgument),
}

/// A DL-safe rule. Atom order in body and head is significant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule {
    pub body: Vec<Atom>,
    pub head: Vec<Atom>,
}

impl Rule {
    #[must_use]
    pub fn new(body: Vec<Atom>, head: Vec<Atom>) -> Self {
        Self { body, head }
    }
}
