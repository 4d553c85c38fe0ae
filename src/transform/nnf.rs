//! Negation normal form for class expressions and data ranges.
//!
//! Complements are pushed inward until they only sit on named classes,
//! datatypes, enumerations, value restrictions and self restrictions.

use std::collections::BTreeSet;

use crate::ontology::expressions::{ClassExpression, DataRange};

/// Returns the negation normal form of `expression`.
#[must_use]
pub fn nnf(expression: &ClassExpression) -> ClassExpression {
    use ClassExpression as CE;

    match expression {
        CE::Class(_) | CE::ObjectOneOf(_) | CE::ObjectHasValue { .. } | CE::ObjectHasSelf(_) => {
            expression.clone()
        }
        CE::ObjectIntersectionOf(operands) => CE::ObjectIntersectionOf(map_set(operands, nnf)),
        CE::ObjectUnionOf(operands) => CE::ObjectUnionOf(map_set(operands, nnf)),
        CE::ObjectComplementOf(operand) => complement_nnf(operand),
        CE::ObjectSomeValuesFrom { property, filler } => CE::some(property.clone(), nnf(filler)),
        CE::ObjectAllValuesFrom { property, filler } => CE::only(property.clone(), nnf(filler)),
        CE::ObjectMinCardinality {
            cardinality,
            property,
            filler,
        } => CE::min(*cardinality, property.clone(), nnf(filler)),
        CE::ObjectExactCardinality {
            cardinality,
            property,
            filler,
        } => CE::exactly(*cardinality, property.clone(), nnf(filler)),
        CE::ObjectMaxCardinality {
            cardinality,
            property,
            filler,
        } => CE::max(*cardinality, property.clone(), nnf(filler)),
        CE::DataSomeValuesFrom { property, filler } => {
            CE::data_some(property.clone(), data_nnf(filler))
        }
        CE::DataAllValuesFrom { property, filler } => {
            CE::data_only(property.clone(), data_nnf(filler))
        }
        CE::DataHasValue { .. } => expression.clone(),
        CE::DataMinCardinality {
            cardinality,
            property,
            filler,
        } => CE::data_min(*cardinality, property.clone(), data_nnf(filler)),
        CE::DataExactCardinality {
            cardinality,
            property,
            filler,
        } => CE::data_exactly(*cardinality, property.clone(), data_nnf(filler)),
        CE::DataMaxCardinality {
            cardinality,
            property,
            filler,
        } => CE::data_max(*cardinality, property.clone(), data_nnf(filler)),
    }
}

/// Returns the negation normal form of the complement of `expression`.
#[must_use]
pub fn complement_nnf(expression: &ClassExpression) -> ClassExpression {
    use ClassExpression as CE;

    match expression {
        CE::Class(class) if class.is_thing() => CE::nothing(),
        CE::Class(class) if class.is_nothing() => CE::thing(),
        CE::Class(_)
        | CE::ObjectOneOf(_)
        | CE::ObjectHasValue { .. }
        | CE::ObjectHasSelf(_)
        | CE::DataHasValue { .. } => CE::complement(expression.clone()),
        CE::ObjectIntersectionOf(operands) => CE::ObjectUnionOf(map_set(operands, complement_nnf)),
        CE::ObjectUnionOf(operands) => CE::ObjectIntersectionOf(map_set(operands, complement_nnf)),
        CE::ObjectComplementOf(operand) => nnf(operand),
        CE::ObjectSomeValuesFrom { property, filler } => {
            CE::only(property.clone(), complement_nnf(filler))
        }
        CE::ObjectAllValuesFrom { property, filler } => {
            CE::some(property.clone(), complement_nnf(filler))
        }
        CE::ObjectMinCardinality {
            cardinality: 0, ..
        } => CE::nothing(),
        CE::ObjectMinCardinality {
            cardinality,
            property,
            filler,
        } => CE::max(cardinality - 1, property.clone(), nnf(filler)),
        CE::ObjectMaxCardinality {
            cardinality,
            property,
            filler,
        } => match cardinality.checked_add(1) {
            Some(above) => CE::min(above, property.clone(), nnf(filler)),
            None => CE::nothing(),
        },
        CE::ObjectExactCardinality {
            cardinality: 0,
            property,
            filler,
        } => CE::min(1, property.clone(), nnf(filler)),
        CE::ObjectExactCardinality {
            cardinality,
            property,
            filler,
        } => {
            let filler = nnf(filler);
            let below = CE::max(cardinality - 1, property.clone(), filler.clone());
            match cardinality.checked_add(1) {
                Some(above) => CE::ObjectUnionOf(
                    [below, CE::min(above, property.clone(), filler)]
                        .into_iter()
                        .collect(),
                ),
                None => below,
            }
        }
        CE::DataSomeValuesFrom { property, filler } => {
            CE::data_only(property.clone(), data_complement_nnf(filler))
        }
        CE::DataAllValuesFrom { property, filler } => {
            CE::data_some(property.clone(), data_complement_nnf(filler))
        }
        CE::DataMinCardinality {
            cardinality: 0, ..
        } => CE::nothing(),
        CE::DataMinCardinality {
            cardinality,
            property,
            filler,
        } => CE::data_max(cardinality - 1, property.clone(), data_nnf(filler)),
        CE::DataMaxCardinality {
            cardinality,
            property,
            filler,
        } => match cardinality.checked_add(1) {
            Some(above) => CE::data_min(above, property.clone(), data_nnf(filler)),
            None => CE::nothing(),
        },
        CE::DataExactCardinality {
            cardinality: 0,
            property,
            filler,
        } => CE::data_min(1, property.clone(), data_nnf(filler)),
        CE::DataExactCardinality {
            cardinality,
            property,
            filler,
        } => {
            let filler = data_nnf(filler);
            let below = CE::data_max(cardinality - 1, property.clone(), filler.clone());
            match cardinality.checked_add(1) {
                Some(above) => CE::ObjectUnionOf(
                    [below, CE::data_min(above, property.clone(), filler)]
                        .into_iter()
                        .collect(),
                ),
                None => below,
            }
        }
    }
}

/// Returns the negation normal form of a data range.
#[must_use]
pub fn data_nnf(range: &DataRange) -> DataRange {
    match range {
        DataRange::Datatype(_) | DataRange::DataOneOf(_) | DataRange::DatatypeRestriction { .. } => {
            range.clone()
        }
        DataRange::DataComplementOf(operand) => data_complement_nnf(operand),
        DataRange::DataIntersectionOf(operands) => {
            DataRange::DataIntersectionOf(map_set(operands, data_nnf))
        }
        DataRange::DataUnionOf(operands) => DataRange::DataUnionOf(map_set(operands, data_nnf)),
    }
}

/// Returns the negation normal form of the complement of a data range.
#[must_use]
pub fn data_complement_nnf(range: &DataRange) -> DataRange {
    match range {
        DataRange::Datatype(_) | DataRange::DataOneOf(_) | DataRange::DatatypeRestriction { .. } => {
            DataRange::complement(range.clone())
        }
        DataRange::DataComplementOf(operand) => data_nnf(operand),
        DataRange::DataIntersectionOf(operands) => {
            DataRange::DataUnionOf(map_set(operands, data_complement_nnf))
        }
        DataRange::DataUnionOf(operands) => {
            DataRange::DataIntersectionOf(map_set(operands, data_complement_nnf))
        }
    }
}

fn map_set<T: Ord>(operands: &BTreeSet<T>, f: impl Fn(&T) -> T) -> BTreeSet<T> {
    operands.iter().map(f).collect()
}
