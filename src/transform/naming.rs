use std::collections::BTreeSet;

use tracing::trace;

use crate::ontology::{
    entities::Class,
    value_objects::{Iri, IriError},
    vocab,
};

/// Local-name prefix of placeholder classes.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "X";

/// Generator of placeholder classes `<namespace><prefix>0`, `<prefix>1`, ...
///
/// The counter belongs to a single transformation run. Identifiers present in
/// the batch signature are never produced; the counter moves past them.
#[derive(Debug, Clone)]
pub struct FreshNames {
    namespace: String,
    prefix: String,
    next: u64,
    signature: BTreeSet<Iri>,
    minted: Vec<Class>,
}

impl FreshNames {
    /// Creates a generator for the supplied namespace and local-name prefix.
    ///
    /// # Errors
    ///
    /// Returns [`IriError`] when namespace and prefix do not form a valid IRI.
    pub fn new(namespace: impl Into<String>, prefix: impl Into<String>) -> Result<Self, IriError> {
        let namespace = namespace.into();
        let prefix = prefix.into();
        Iri::join(&namespace, &format!("{prefix}0"))?;
        Ok(Self {
            namespace,
            prefix,
            next: 0,
            signature: BTreeSet::new(),
            minted: Vec::new(),
        })
    }

    /// Identifiers already used by the batch, which must not be handed out.
    #[must_use]
    pub fn with_signature(mut self, signature: BTreeSet<Iri>) -> Self {
        self.signature = signature;
        self
    }

    /// Returns the next unused placeholder class.
    pub fn next_class(&mut self) -> Class {
        loop {
            let iri = Iri::new_unchecked(format!("{}{}{}", self.namespace, self.prefix, self.next));
            self.next += 1;
            if self.signature.contains(&iri) {
                trace!(placeholder = %iri, "placeholder_skipped");
                continue;
            }
            trace!(placeholder = %iri, "placeholder_minted");
            let class = Class::new(iri);
            self.minted.push(class.clone());
            return class;
        }
    }

    /// Number of placeholders handed out so far.
    #[must_use]
    pub fn minted(&self) -> usize {
        self.minted.len()
    }

    /// Consumes the generator, returning the placeholders in minting order.
    #[must_use]
    pub fn into_minted(self) -> Vec<Class> {
        self.minted
    }
}

impl Default for FreshNames {
    fn default() -> Self {
        Self {
            namespace: vocab::DEFAULT_PLACEHOLDER_NAMESPACE.to_owned(),
            prefix: DEFAULT_PLACEHOLDER_PREFIX.to_owned(),
            next: 0,
            signature: BTreeSet::new(),
            minted: Vec::new(),
        }
    }
}
