//! Structural transformation of axiom batches into flat normal form.
//!
//! A batch goes through two phases. The per-kind [`rules`] turn every axiom
//! into rewrites, then the [`splitter`] flattens each rewrite, minting
//! placeholder classes from a [`FreshNames`] generator owned by the call.
//! Everything ends up in a [`TransformedAxioms`] set, deduplicated and in
//! canonical order.

pub mod naming;
pub mod nnf;
pub mod rules;
pub mod splitter;

use std::{
    collections::{BTreeSet, HashSet},
    fmt::{self, Display, Formatter},
};

use serde::Serialize;
use tracing::info;

pub use self::naming::FreshNames;
use self::{rules::Rewrite, splitter::Splitter};
use crate::{
    config::TransformSettings,
    ontology::{
        axioms::Axiom,
        entities::Class,
        signature::Signature,
    },
    Result,
};

/// Entry point of the engine.
///
/// Holds configuration only; every call to [`Self::transform`] owns its own
/// placeholder counter, so one instance can serve concurrent batches.
#[derive(Debug, Clone)]
pub struct StructuralTransformation {
    names: FreshNames,
    avoid_signature_collisions: bool,
}

impl StructuralTransformation {
    /// Creates an engine with the default placeholder namespace and prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: FreshNames::default(),
            avoid_signature_collisions: true,
        }
    }

    /// Builds an engine instance from configuration settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Iri`] when the configured namespace and prefix
    /// do not form valid IRIs.
    pub fn from_config(settings: &TransformSettings) -> Result<Self> {
        let names = FreshNames::new(
            settings.placeholder_namespace.as_str(),
            settings.placeholder_prefix.as_str(),
        )?;
        Ok(Self {
            names,
            avoid_signature_collisions: settings.avoid_signature_collisions,
        })
    }

    /// Transforms a batch of axioms.
    #[must_use]
    pub fn transform(&self, axioms: &[Axiom]) -> TransformedAxioms {
        let mut names = self.names.clone();
        if self.avoid_signature_collisions {
            names = names.with_signature(axioms.signature());
        }

        let mut seen = HashSet::new();
        let rewrites: Vec<Rewrite> = axioms
            .iter()
            .flat_map(rules::rewrite)
            .filter(|rewrite| seen.insert(rewrite.clone()))
            .collect();

        let mut collector = ResultCollector::default();
        {
            let mut splitter = Splitter::new(&mut names);
            for rewrite in rewrites {
                let mut out = Vec::new();
                match rewrite {
                    Rewrite::Keep(axiom) => out.push(axiom),
                    Rewrite::Gci {
                        super_class,
                        annotations,
                    } => splitter.flatten_gci(&Class::thing(), &super_class, &annotations, &mut out),
                    Rewrite::Assertion {
                        class,
                        individual,
                        annotations,
                    } => splitter.split_assertion(&class, individual, &annotations, &mut out),
                }
                collector.collect(out);
            }
        }

        let result = collector.finish(names.into_minted());
        info!(
            input = axioms.len(),
            output = result.len(),
            placeholders = result.placeholders().len(),
            "structural_transformation_completed"
        );
        result
    }

    /// Collects `axioms` into a batch and transforms it.
    #[must_use]
    pub fn transform_all<I>(&self, axioms: I) -> TransformedAxioms
    where
        I: IntoIterator<Item = Axiom>,
    {
        let batch: Vec<Axiom> = axioms.into_iter().collect();
        self.transform(&batch)
    }
}

impl Default for StructuralTransformation {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates the output of a run, deduplicating structurally.
#[derive(Debug, Default)]
struct ResultCollector {
    axioms: BTreeSet<Axiom>,
}

impl ResultCollector {
    fn collect(&mut self, axioms: impl IntoIterator<Item = Axiom>) {
        self.axioms.extend(axioms);
    }

    fn finish(self, placeholders: Vec<Class>) -> TransformedAxioms {
        TransformedAxioms {
            axioms: self.axioms,
            placeholders,
        }
    }
}

/// Normalised output of a run, iterated in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformedAxioms {
    axioms: BTreeSet<Axiom>,
    placeholders: Vec<Class>,
}

impl TransformedAxioms {
    #[must_use]
    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    #[must_use]
    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    /// Placeholder classes minted by the run, in minting order.
    #[must_use]
    pub fn placeholders(&self) -> &[Class] {
        &self.placeholders
    }

    #[must_use]
    pub fn as_set(&self) -> &BTreeSet<Axiom> {
        &self.axioms
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Axiom> {
        self.axioms.into_iter().collect()
    }
}

impl Display for TransformedAxioms {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, axiom) in self.axioms.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{axiom}")?;
        }
        f.write_str("]")
    }
}

impl IntoIterator for TransformedAxioms {
    type Item = Axiom;
    type IntoIter = std::collections::btree_set::IntoIter<Axiom>;

    fn into_iter(self) -> Self::IntoIter {
        self.axioms.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransformedAxioms {
    type Item = &'a Axiom;
    type IntoIter = std::collections::btree_set::Iter<'a, Axiom>;

    fn into_iter(self) -> Self::IntoIter {
        self.axioms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::StructuralTransformation;
    use crate::{
        config::TransformSettings,
        ontology::{
            axioms::Axiom,
            entities::Class,
            expressions::ClassExpression as CE,
        },
    };

    fn c(name: &str) -> Class {
        Class::parse(&format!("urn:test:test#{name}")).expect("valid iri")
    }

    #[test]
    fn every_call_restarts_the_counter() {
        let engine = StructuralTransformation::new();
        let batch = vec![Axiom::subclass_of(c("a"), c("b"))];
        let first = engine.transform(&batch);
        let second = engine.transform(&batch);
        assert_eq!(first, second);
        assert_eq!(first.placeholders().len(), 2);
    }

    #[test]
    fn duplicate_inputs_collapse() {
        let engine = StructuralTransformation::new();
        let axiom = Axiom::subclass_of(Class::thing(), CE::complement(c("a")));
        let result = engine.transform_all([axiom.clone(), axiom.clone()]);
        assert_eq!(result.into_vec(), vec![axiom]);
    }

    #[test]
    fn configured_namespace_and_prefix_are_used() {
        let settings = TransformSettings {
            placeholder_namespace: "urn:fresh#".to_string(),
            placeholder_prefix: "N".to_string(),
            ..TransformSettings::default()
        };
        let engine = StructuralTransformation::from_config(&settings).expect("valid settings");
        let result = engine.transform(&[Axiom::subclass_of(c("a"), c("b"))]);
        let names: Vec<_> = result
            .placeholders()
            .iter()
            .map(|class| class.iri().as_str().to_string())
            .collect();
        assert_eq!(names, vec!["urn:fresh#N0", "urn:fresh#N1"]);
    }

    #[test]
    fn invalid_namespaces_are_rejected() {
        let settings = TransformSettings {
            placeholder_namespace: "no namespace".to_string(),
            ..TransformSettings::default()
        };
        assert!(StructuralTransformation::from_config(&settings).is_err());
    }

    #[test]
    fn renders_as_a_bracketed_list() {
        let engine = StructuralTransformation::new();
        assert_eq!(engine.transform(&[]).to_string(), "[]");
    }
}
