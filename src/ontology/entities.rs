use serde::{Deserialize, Serialize};

use super::value_objects::{Iri, IriError};
use super::vocab;

macro_rules! entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Iri);

        impl $name {
            /// Creates the entity from an already validated identifier.
            #[must_use]
            pub fn new(iri: Iri) -> Self {
                Self(iri)
            }

            /// Validates the supplied text and creates the entity.
            ///
            /// # Errors
            ///
            /// Returns [`IriError`] when the text is not a valid IRI.
            pub fn parse(iri: &str) -> Result<Self, IriError> {
                Iri::new(iri).map(Self)
            }

            /// Returns the identifier of the entity.
            #[must_use]
            pub fn iri(&self) -> &Iri {
                &self.0
            }
        }

        impl From<Iri> for $name {
            fn from(iri: Iri) -> Self {
                Self(iri)
            }
        }
    };
}

entity!(
    /// A named OWL class.
    Class
);
entity!(
    /// A named object property.
    ObjectProperty
);
entity!(
    /// A named data property.
    DataProperty
);
entity!(
    /// An annotation property.
    AnnotationProperty
);
entity!(
    /// A named datatype.
    Datatype
);
entity!(
    /// A named individual.
    NamedIndividual
);

impl Class {
    /// `owl:Thing`, the universal concept.
    #[must_use]
    pub fn thing() -> Self {
        Self(Iri::from_static(vocab::OWL_THING))
    }

    /// `owl:Nothing`, the empty concept.
    #[must_use]
    pub fn nothing() -> Self {
        Self(Iri::from_static(vocab::OWL_NOTHING))
    }

    /// Whether this is `owl:Thing`.
    #[must_use]
    pub fn is_thing(&self) -> bool {
        self.0.as_str() == vocab::OWL_THING
    }

    /// Whether this is `owl:Nothing`.
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        self.0.as_str() == vocab::OWL_NOTHING
    }
}

impl ObjectProperty {
    /// `owl:topObjectProperty`.
    #[must_use]
    pub fn top() -> Self {
        Self(Iri::from_static(vocab::OWL_TOP_OBJECT_PROPERTY))
    }
}

impl DataProperty {
    /// `owl:topDataProperty`.
    #[must_use]
    pub fn top() -> Self {
        Self(Iri::from_static(vocab::OWL_TOP_DATA_PROPERTY))
    }
}

impl AnnotationProperty {
    /// `rdfs:label`.
    #[must_use]
    pub fn label() -> Self {
        Self(Iri::from_static(vocab::RDFS_LABEL))
    }

    /// `rdfs:comment`.
    #[must_use]
    pub fn comment() -> Self {
        Self(Iri::from_static(vocab::RDFS_COMMENT))
    }
}

impl Datatype {
    /// `rdfs:Literal`, the universal datatype.
    #[must_use]
    pub fn literal() -> Self {
        Self(Iri::from_static(vocab::RDFS_LITERAL))
    }

    /// `xsd:string`.
    #[must_use]
    pub fn string() -> Self {
        Self(Iri::from_static(vocab::XSD_STRING))
    }

    /// `xsd:boolean`.
    #[must_use]
    pub fn boolean() -> Self {
        Self(Iri::from_static(vocab::XSD_BOOLEAN))
    }

    /// `xsd:integer`.
    #[must_use]
    pub fn integer() -> Self {
        Self(Iri::from_static(vocab::XSD_INTEGER))
    }

    /// `xsd:double`.
    #[must_use]
    pub fn double() -> Self {
        Self(Iri::from_static(vocab::XSD_DOUBLE))
    }
}

/// Any named entity, as carried by declaration axioms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Class(Class),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    Datatype(Datatype),
    NamedIndividual(NamedIndividual),
}

impl Entity {
    /// Returns the identifier of the wrapped entity.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        match self {
            Self::Class(entity) => entity.iri(),
            Self::ObjectProperty(entity) => entity.iri(),
            Self::DataProperty(entity) => entity.iri(),
            Self::AnnotationProperty(entity) => entity.iri(),
            Self::Datatype(entity) => entity.iri(),
            Self::NamedIndividual(entity) => entity.iri(),
        }
    }
}

/// Blank-node individual identified by a document-local label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnonymousIndividual(String);

impl AnonymousIndividual {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

/// An individual, either named or anonymous.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl From<NamedIndividual> for Individual {
    fn from(individual: NamedIndividual) -> Self {
        Self::Named(individual)
    }
}

impl From<AnonymousIndividual> for Individual {
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

/// Datatype or language tag attached to a [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Typed(Datatype),
    Language(String),
}

/// A data value: lexical form plus datatype or language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    kind: LiteralKind,
}

impl Literal {
    /// Creates a literal of the supplied datatype.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Typed(datatype),
        }
    }

    /// Creates a language tagged string.
    #[must_use]
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            kind: LiteralKind::Language(language.into()),
        }
    }

    /// Creates an `xsd:string` literal.
    #[must_use]
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, Datatype::string())
    }

    /// Creates an `xsd:boolean` literal.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), Datatype::boolean())
    }

    /// Creates an `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), Datatype::integer())
    }

    /// Returns the lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Returns the datatype or language tag.
    #[must_use]
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }
}

impl From<oxrdf::Literal> for Literal {
    fn from(literal: oxrdf::Literal) -> Self {
        match literal.language() {
            Some(language) => Self::lang(literal.value(), language),
            None => Self::typed(
                literal.value(),
                Datatype::new(Iri::from(literal.datatype().into_owned())),
            ),
        }
    }
}

/// Rule variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(Iri);

impl Variable {
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self(iri)
    }

    #[must_use]
    pub fn iri(&self) -> &Iri {
        &self.0
    }
}
