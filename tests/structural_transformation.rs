use std::collections::BTreeSet;

use owl_structural::{
    ontology::{
        AnnotationProperty, AnnotationSubject, AnnotationValue, Annotation, Atom, Axiom,
        AxiomKind, Class, ClassExpression, DArgument, DataProperty, DataRange, Datatype, Entity,
        Facet, FacetRestriction, IArgument, Individual, Iri, Literal, NamedIndividual,
        ObjectProperty, ObjectPropertyExpression, Rule, Variable,
    },
    StructuralTransformation,
};
use rstest::rstest;

const NS: &str = "urn:test:test#";
const VAR: &str = "urn:swrl:var#";

fn iri(namespace: &str, local: &str) -> Iri {
    Iri::join(namespace, local).expect("valid iri")
}

fn c() -> Class {
    Class::new(iri(NS, "c"))
}

fn c_iri() -> Class {
    Class::new(iri(NS, "iri"))
}

fn op() -> ObjectProperty {
    ObjectProperty::new(iri(NS, "op"))
}

fn op_iri() -> ObjectProperty {
    ObjectProperty::new(iri(NS, "iri"))
}

fn inverse_op() -> ObjectPropertyExpression {
    ObjectPropertyExpression::from(op()).inverse()
}

fn dp() -> DataProperty {
    DataProperty::new(iri(NS, "dp"))
}

fn dp_iri() -> DataProperty {
    DataProperty::new(iri(NS, "iri"))
}

fn ann() -> AnnotationProperty {
    AnnotationProperty::new(iri(NS, "ann"))
}

fn datatype() -> Datatype {
    Datatype::new(iri(NS, "datatype"))
}

fn i() -> Individual {
    NamedIndividual::new(iri(NS, "i")).into()
}

fn j() -> Individual {
    NamedIndividual::new(iri(NS, "j")).into()
}

fn var(local: &str) -> Variable {
    Variable::new(iri(VAR, local))
}

fn falsity() -> Literal {
    Literal::boolean(false)
}

fn annotations() -> [Annotation; 1] {
    [Annotation::new(
        ann(),
        AnnotationValue::Literal(Literal::string("test")),
    )]
}

fn annotated(kind: AxiomKind) -> Axiom {
    Axiom::new(kind).with_annotations(annotations())
}

fn plain(kind: AxiomKind) -> Axiom {
    Axiom::new(kind)
}

fn set<T: Ord>(items: impl IntoIterator<Item = T>) -> BTreeSet<T> {
    items.into_iter().collect()
}

fn false_enumeration() -> DataRange {
    DataRange::one_of([falsity()])
}

fn built_in(predicate: Iri, arguments: &[&str]) -> Atom {
    Atom::BuiltInAtom {
        predicate,
        arguments: arguments.iter().map(|name| var(name).into()).collect(),
    }
}

fn small_rule() -> Axiom {
    plain(AxiomKind::Rule(Rule::new(
        vec![built_in(iri(VAR, "v1"), &["var3", "var4"])],
        vec![built_in(iri(VAR, "v2"), &["var5", "var6"])],
    )))
}

fn big_rule() -> Axiom {
    let var2 = || IArgument::from(var("var2"));
    let body = vec![
        built_in(iri(VAR, "v1"), &["var3", "var4"]),
        Atom::ClassAtom {
            class: c().into(),
            argument: var2(),
        },
        Atom::DataRangeAtom {
            range: datatype().into(),
            argument: var("var1").into(),
        },
        built_in(iri(NS, "iri"), &["var1"]),
        Atom::DifferentFromAtom(var2(), i().into()),
        Atom::SameAsAtom(
            var2(),
            Individual::from(NamedIndividual::new(iri(NS, "iri"))).into(),
        ),
    ];
    let head = vec![
        built_in(iri(VAR, "v2"), &["var5", "var6"]),
        Atom::DataPropertyAtom {
            property: dp(),
            subject: var2(),
            object: DArgument::from(falsity()),
        },
        Atom::ObjectPropertyAtom {
            property: op().into(),
            subject: var2(),
            object: var2(),
        },
    ];
    annotated(AxiomKind::Rule(Rule::new(body, head)))
}

fn data_range(range: DataRange) -> Axiom {
    plain(AxiomKind::DataPropertyRange {
        property: dp(),
        range,
    })
}

#[rstest]
#[case::data_range(
    data_range(datatype().into()),
    "[SubClassOf(owl:Thing DataAllValuesFrom(<urn:test:test#dp> <urn:test:test#datatype>))]"
)]
#[case::datatype_definition(
    annotated(AxiomKind::DatatypeDefinition { datatype: datatype(), range: Datatype::double().into() }),
    "[DatatypeDefinition(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#datatype> xsd:double)]"
)]
#[case::declare_class(
    annotated(AxiomKind::Declaration(Entity::Class(c()))),
    "[Declaration(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) Class(<urn:test:test#c>))]"
)]
#[case::declare_object_property(
    annotated(AxiomKind::Declaration(Entity::ObjectProperty(op()))),
    "[Declaration(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) ObjectProperty(<urn:test:test#op>))]"
)]
#[case::declare_data_property(
    annotated(AxiomKind::Declaration(Entity::DataProperty(dp()))),
    "[Declaration(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) DataProperty(<urn:test:test#dp>))]"
)]
#[case::declare_datatype(
    annotated(AxiomKind::Declaration(Entity::Datatype(datatype()))),
    "[Declaration(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) Datatype(<urn:test:test#datatype>))]"
)]
#[case::declare_annotation_property(
    annotated(AxiomKind::Declaration(Entity::AnnotationProperty(ann()))),
    "[Declaration(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) AnnotationProperty(<urn:test:test#ann>))]"
)]
#[case::declare_individual(
    annotated(AxiomKind::Declaration(Entity::NamedIndividual(NamedIndividual::new(iri(NS, "i"))))),
    "[Declaration(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) NamedIndividual(<urn:test:test#i>))]"
)]
#[case::disjoint_data_properties(
    plain(AxiomKind::DisjointDataProperties(set([dp(), dp_iri()]))),
    "[DisjointDataProperties(<urn:test:test#dp> <urn:test:test#iri> )]"
)]
#[case::disjoint_object_properties(
    plain(AxiomKind::DisjointObjectProperties(set([op().into(), op_iri().into()]))),
    "[DisjointObjectProperties(<urn:test:test#iri> <urn:test:test#op> )]"
)]
#[case::equivalent_data_properties(
    plain(AxiomKind::EquivalentDataProperties(set([dp(), dp_iri()]))),
    "[EquivalentDataProperties(<urn:test:test#dp> <urn:test:test#iri> )]"
)]
#[case::equivalent_object_properties(
    plain(AxiomKind::EquivalentObjectProperties(set([op().into(), op_iri().into()]))),
    "[EquivalentObjectProperties(<urn:test:test#iri> <urn:test:test#op> )]"
)]
#[case::functional_data_property(
    plain(AxiomKind::FunctionalDataProperty(dp())),
    "[SubClassOf(owl:Thing DataMaxCardinality(1 <urn:test:test#dp> rdfs:Literal))]"
)]
#[case::functional_object_property(
    plain(AxiomKind::FunctionalObjectProperty(op().into())),
    "[SubClassOf(owl:Thing ObjectMaxCardinality(1 <urn:test:test#op> owl:Thing))]"
)]
#[case::inverse_functional_object_property(
    plain(AxiomKind::InverseFunctionalObjectProperty(op().into())),
    "[SubClassOf(owl:Thing ObjectMaxCardinality(1 ObjectInverseOf(<urn:test:test#op>) owl:Thing))]"
)]
#[case::inverse_object_properties(
    plain(AxiomKind::InverseObjectProperties(op().into(), op().into())),
    "[SubObjectPropertyOf(<urn:test:test#op> ObjectInverseOf(<urn:test:test#op>))]"
)]
#[case::irreflexive(
    annotated(AxiomKind::IrreflexiveObjectProperty(op().into())),
    "[IrreflexiveObjectProperty(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op>)]"
)]
#[case::object_property_assertion(
    annotated(AxiomKind::ObjectPropertyAssertion { property: op().into(), subject: i(), object: i() }),
    "[ObjectPropertyAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op> <urn:test:test#i> <urn:test:test#i>)]"
)]
#[case::inverse_object_property_assertion(
    annotated(AxiomKind::ObjectPropertyAssertion { property: inverse_op(), subject: i(), object: i() }),
    "[ObjectPropertyAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) ObjectInverseOf(<urn:test:test#op>) <urn:test:test#i> <urn:test:test#i>)]"
)]
#[case::inverse_object_property_assertion_distinct(
    annotated(AxiomKind::ObjectPropertyAssertion { property: inverse_op(), subject: i(), object: j() }),
    "[ObjectPropertyAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) ObjectInverseOf(<urn:test:test#op>) <urn:test:test#i> <urn:test:test#j>)]"
)]
#[case::object_property_domain(
    plain(AxiomKind::ObjectPropertyDomain { property: op().into(), domain: c().into() }),
    "[SubClassOf(<http://www.semanticweb.org/ontology#X0> <urn:test:test#c>), SubClassOf(<http://www.semanticweb.org/ontology#X1> ObjectAllValuesFrom(<urn:test:test#op> owl:Nothing)), SubClassOf(owl:Thing ObjectUnionOf(<http://www.semanticweb.org/ontology#X0> <http://www.semanticweb.org/ontology#X1>))]"
)]
#[case::object_property_range(
    plain(AxiomKind::ObjectPropertyRange { property: op().into(), range: c().into() }),
    "[SubClassOf(<http://www.semanticweb.org/ontology#X0> <urn:test:test#c>), SubClassOf(owl:Thing ObjectAllValuesFrom(<urn:test:test#op> <http://www.semanticweb.org/ontology#X0>))]"
)]
#[case::property_chain(
    annotated(AxiomKind::SubPropertyChainOf { chain: vec![op_iri().into(), op().into()], super_property: op().into() }),
    "[SubObjectPropertyOf(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) ObjectPropertyChain( <urn:test:test#iri> <urn:test:test#op> ) <urn:test:test#op>)]"
)]
#[case::reflexive(
    annotated(AxiomKind::ReflexiveObjectProperty(op().into())),
    "[ReflexiveObjectProperty(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op>)]"
)]
#[case::same_individual(
    annotated(AxiomKind::SameIndividual(set([i()]))),
    "[]"
)]
#[case::sub_annotation_property(
    annotated(AxiomKind::SubAnnotationPropertyOf { sub_property: ann(), super_property: AnnotationProperty::label() }),
    "[SubAnnotationPropertyOf(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#ann> rdfs:label)]"
)]
#[case::sub_class(
    plain(AxiomKind::SubClassOf { sub_class: c().into(), super_class: ClassExpression::thing() }),
    "[SubClassOf(<http://www.semanticweb.org/ontology#X0> owl:Thing), SubClassOf(<http://www.semanticweb.org/ontology#X1> ObjectComplementOf(<urn:test:test#c>)), SubClassOf(owl:Thing ObjectUnionOf(<http://www.semanticweb.org/ontology#X0> <http://www.semanticweb.org/ontology#X1>))]"
)]
#[case::sub_data_property(
    plain(AxiomKind::SubDataPropertyOf { sub_property: dp(), super_property: DataProperty::top() }),
    "[SubDataPropertyOf(<urn:test:test#dp> owl:topDataProperty)]"
)]
#[case::sub_object_property(
    annotated(AxiomKind::SubObjectPropertyOf { sub_property: op().into(), super_property: ObjectProperty::top().into() }),
    "[SubObjectPropertyOf(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op> owl:topObjectProperty)]"
)]
#[case::rule(
    small_rule(),
    "[DLSafeRule( Body(BuiltInAtom(<urn:swrl:var#v1> Variable(<urn:swrl:var#var3>) Variable(<urn:swrl:var#var4>) )) Head(BuiltInAtom(<urn:swrl:var#v2> Variable(<urn:swrl:var#var5>) Variable(<urn:swrl:var#var6>) )) )]"
)]
#[case::symmetric(
    annotated(AxiomKind::SymmetricObjectProperty(op().into())),
    "[SymmetricObjectProperty(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op>)]"
)]
#[case::transitive(
    annotated(AxiomKind::TransitiveObjectProperty(op().into())),
    "[TransitiveObjectProperty(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op>)]"
)]
#[case::has_key(
    annotated(AxiomKind::HasKey {
        class: c().into(),
        object_properties: set([op().into(), op_iri().into()]),
        data_properties: set([dp()]),
    }),
    "[HasKey(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#c> (<urn:test:test#iri> <urn:test:test#op> ) (<urn:test:test#dp> ))]"
)]
#[case::big_rule(
    big_rule(),
    "[DLSafeRule(Annotation(<urn:test:test#ann> \"test\"^^xsd:string)  Body(BuiltInAtom(<urn:swrl:var#v1> Variable(<urn:swrl:var#var3>) Variable(<urn:swrl:var#var4>) ) ClassAtom(<urn:test:test#c> Variable(<urn:swrl:var#var2>)) DataRangeAtom(<urn:test:test#datatype> Variable(<urn:swrl:var#var1>)) BuiltInAtom(<urn:test:test#iri> Variable(<urn:swrl:var#var1>) ) DifferentFromAtom(Variable(<urn:swrl:var#var2>) <urn:test:test#i>) SameAsAtom(Variable(<urn:swrl:var#var2>) <urn:test:test#iri>)) Head(BuiltInAtom(<urn:swrl:var#v2> Variable(<urn:swrl:var#var5>) Variable(<urn:swrl:var#var6>) ) DataPropertyAtom(<urn:test:test#dp> Variable(<urn:swrl:var#var2>) \"false\"^^xsd:boolean) ObjectPropertyAtom(<urn:test:test#op> Variable(<urn:swrl:var#var2>) Variable(<urn:swrl:var#var2>))) )]"
)]
#[case::annotation_assertion(
    annotated(AxiomKind::AnnotationAssertion {
        property: ann(),
        subject: AnnotationSubject::Iri(iri(NS, "iri")),
        value: AnnotationValue::Literal(falsity()),
    }),
    "[AnnotationAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#ann> <urn:test:test#iri> \"false\"^^xsd:boolean)]"
)]
#[case::asymmetric(
    annotated(AxiomKind::AsymmetricObjectProperty(op().into())),
    "[AsymmetricObjectProperty(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#op>)]"
)]
#[case::annotation_property_domain(
    plain(AxiomKind::AnnotationPropertyDomain { property: ann(), domain: iri(NS, "iri") }),
    "[AnnotationPropertyDomain(<urn:test:test#ann> <urn:test:test#iri>)]"
)]
#[case::annotation_property_range(
    plain(AxiomKind::AnnotationPropertyRange { property: ann(), range: iri(NS, "iri") }),
    "[AnnotationPropertyRange(<urn:test:test#ann> <urn:test:test#iri>)]"
)]
#[case::data_range_intersection(
    data_range(DataRange::intersection([datatype().into(), false_enumeration()])),
    "[SubClassOf(owl:Thing DataAllValuesFrom(<urn:test:test#dp> DataIntersectionOf(<urn:test:test#datatype> DataOneOf(\"false\"^^xsd:boolean ) )))]"
)]
#[case::data_range_union(
    data_range(DataRange::union([datatype().into(), false_enumeration()])),
    "[SubClassOf(owl:Thing DataAllValuesFrom(<urn:test:test#dp> DataUnionOf(<urn:test:test#datatype> DataOneOf(\"false\"^^xsd:boolean ) )))]"
)]
#[case::data_range_one_of(
    data_range(false_enumeration()),
    "[SubClassOf(owl:Thing DataAllValuesFrom(<urn:test:test#dp> DataOneOf(\"false\"^^xsd:boolean )))]"
)]
#[case::data_range_complement(
    data_range(DataRange::complement(false_enumeration())),
    "[SubClassOf(owl:Thing DataAllValuesFrom(<urn:test:test#dp> DataComplementOf(DataOneOf(\"false\"^^xsd:boolean ))))]"
)]
#[case::data_range_restriction(
    data_range(DataRange::restriction(
        Datatype::double(),
        [
            FacetRestriction::new(Facet::MinExclusive, Literal::typed("5.0", Datatype::double())),
            FacetRestriction::new(Facet::MaxExclusive, Literal::typed("6.0", Datatype::double())),
        ],
    )),
    "[SubClassOf(owl:Thing DataAllValuesFrom(<urn:test:test#dp> DataRangeRestriction(xsd:double facetRestriction(minExclusive \"5.0\"^^xsd:double) facetRestriction(maxExclusive \"6.0\"^^xsd:double))))]"
)]
#[case::data_property_assertion(
    annotated(AxiomKind::DataPropertyAssertion { property: dp(), subject: i(), value: falsity() }),
    "[DataPropertyAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#dp> <urn:test:test#i> \"false\"^^xsd:boolean)]"
)]
#[case::data_property_assertion_language(
    annotated(AxiomKind::DataPropertyAssertion { property: dp(), subject: i(), value: Literal::lang("string", "en") }),
    "[DataPropertyAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <urn:test:test#dp> <urn:test:test#i> \"string\"@en)]"
)]
#[case::data_property_domain(
    plain(AxiomKind::DataPropertyDomain { property: dp(), domain: c().into() }),
    "[SubClassOf(<http://www.semanticweb.org/ontology#X0> <urn:test:test#c>), SubClassOf(<http://www.semanticweb.org/ontology#X1> DataAllValuesFrom(<urn:test:test#dp> DataComplementOf(rdfs:Literal))), SubClassOf(owl:Thing ObjectUnionOf(<http://www.semanticweb.org/ontology#X0> <http://www.semanticweb.org/ontology#X1>))]"
)]
#[case::disjoint_classes(
    plain(AxiomKind::DisjointClasses(set([c().into(), c_iri().into()]))),
    "[SubClassOf(owl:Thing ObjectComplementOf(<urn:test:test#c>)), SubClassOf(owl:Thing ObjectComplementOf(<urn:test:test#iri>))]"
)]
#[case::disjoint_union(
    plain(AxiomKind::DisjointUnion { class: c(), operands: set([c().into(), c_iri().into()]) }),
    "[SubClassOf(<http://www.semanticweb.org/ontology#X0> <urn:test:test#c>), SubClassOf(<http://www.semanticweb.org/ontology#X1> <urn:test:test#iri>), SubClassOf(owl:Thing <urn:test:test#c>), SubClassOf(owl:Thing ObjectUnionOf(<http://www.semanticweb.org/ontology#X0> <http://www.semanticweb.org/ontology#X1>)), SubClassOf(owl:Thing ObjectComplementOf(<urn:test:test#c>)), SubClassOf(owl:Thing ObjectComplementOf(<urn:test:test#iri>))]"
)]
#[case::equivalent_classes(
    plain(AxiomKind::EquivalentClasses(set([c().into(), c_iri().into()]))),
    "[SubClassOf(owl:Thing <urn:test:test#c>), SubClassOf(owl:Thing <urn:test:test#iri>)]"
)]
fn transforms_single_axiom(#[case] axiom: Axiom, #[case] expected: &str) {
    let result = StructuralTransformation::new().transform(&[axiom]);
    assert_eq!(result.to_string(), expected);
}

#[test]
fn normal_form_axioms_are_fixed_points() {
    let engine = StructuralTransformation::new();
    let batch = vec![
        annotated(AxiomKind::TransitiveObjectProperty(op().into())),
        Axiom::subclass_of(Class::thing(), ClassExpression::complement(c())),
        small_rule(),
    ];
    let once = engine.transform(&batch);
    assert_eq!(once.as_set(), &set(batch.clone()));
    let twice = engine.transform(&once.clone().into_vec());
    assert_eq!(twice, once);
}

#[test]
fn placeholders_are_unique_across_a_batch() {
    let engine = StructuralTransformation::new();
    let batch = vec![
        plain(AxiomKind::ObjectPropertyDomain {
            property: op().into(),
            domain: c().into(),
        }),
        plain(AxiomKind::ObjectPropertyRange {
            property: op().into(),
            range: c_iri().into(),
        }),
    ];
    let result = engine.transform(&batch);
    let minted: BTreeSet<_> = result.placeholders().iter().cloned().collect();
    assert_eq!(minted.len(), 3);
    assert_eq!(result.placeholders().len(), 3);
    assert!(result.contains(&Axiom::subclass_of(
        result.placeholders()[2].clone(),
        c_iri()
    )));
}

#[test]
fn annotations_stay_on_the_primary_axiom() {
    let axiom = annotated(AxiomKind::ObjectPropertyRange {
        property: op().into(),
        range: c().into(),
    });
    let result = StructuralTransformation::new().transform(&[axiom]);
    let annotated_axioms: Vec<_> = result
        .iter()
        .filter(|axiom| !axiom.annotations.is_empty())
        .collect();
    assert_eq!(annotated_axioms.len(), 1);
    assert_eq!(
        annotated_axioms[0].to_string(),
        "SubClassOf(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) owl:Thing ObjectAllValuesFrom(<urn:test:test#op> <http://www.semanticweb.org/ontology#X0>))"
    );
}

#[test]
fn placeholders_skip_names_already_in_the_batch() {
    let taken = Class::new(iri("http://www.semanticweb.org/ontology#", "X0"));
    let axiom = plain(AxiomKind::ObjectPropertyRange {
        property: op().into(),
        range: taken.clone().into(),
    });
    let result = StructuralTransformation::new().transform(&[axiom]);
    insta::assert_snapshot!(result.to_string(), @"[SubClassOf(<http://www.semanticweb.org/ontology#X1> <http://www.semanticweb.org/ontology#X0>), SubClassOf(owl:Thing ObjectAllValuesFrom(<urn:test:test#op> <http://www.semanticweb.org/ontology#X1>))]");
}

#[test]
fn nested_expressions_are_named_inside_out() {
    let filler = ClassExpression::union([
        ClassExpression::from(c()),
        ClassExpression::some(op(), c_iri()),
    ]);
    let axiom = Axiom::subclass_of(Class::thing(), ClassExpression::only(op(), filler));
    let result = StructuralTransformation::new().transform(&[axiom]);
    let rendered: Vec<String> = result.iter().map(ToString::to_string).collect();
    insta::assert_debug_snapshot!(rendered, @r###"
    [
        "SubClassOf(<http://www.semanticweb.org/ontology#X0> <urn:test:test#c>)",
        "SubClassOf(<http://www.semanticweb.org/ontology#X1> <urn:test:test#iri>)",
        "SubClassOf(<http://www.semanticweb.org/ontology#X2> ObjectSomeValuesFrom(<urn:test:test#op> <http://www.semanticweb.org/ontology#X1>))",
        "SubClassOf(<http://www.semanticweb.org/ontology#X3> ObjectUnionOf(<http://www.semanticweb.org/ontology#X0> <http://www.semanticweb.org/ontology#X2>))",
        "SubClassOf(owl:Thing ObjectAllValuesFrom(<urn:test:test#op> <http://www.semanticweb.org/ontology#X3>))",
    ]
    "###);
}

#[test]
fn innermost_filler_gets_the_lowest_placeholder() {
    let axiom = Axiom::subclass_of(
        Class::thing(),
        ClassExpression::some(op(), ClassExpression::some(op(), c())),
    );
    let result = StructuralTransformation::new().transform(&[axiom]);
    let x = |n: u32| Class::new(iri("http://www.semanticweb.org/ontology#", &format!("X{n}")));
    assert_eq!(
        result.as_set(),
        &set([
            Axiom::subclass_of(x(0), c()),
            Axiom::subclass_of(x(1), ClassExpression::some(op(), x(0))),
            Axiom::subclass_of(Class::thing(), ClassExpression::some(op(), x(1))),
        ])
    );
    assert!(result.to_string().contains(
        "SubClassOf(<http://www.semanticweb.org/ontology#X0> <urn:test:test#c>)"
    ));
}

#[test]
fn rules_with_nested_atoms_pass_through_untouched() {
    let body = vec![
        Atom::ClassAtom {
            class: ClassExpression::union([
                ClassExpression::from(c()),
                ClassExpression::some(op(), ClassExpression::complement(c_iri())),
            ]),
            argument: var("var2").into(),
        },
        Atom::DataRangeAtom {
            range: DataRange::complement(DataRange::union([
                datatype().into(),
                false_enumeration(),
            ])),
            argument: var("var1").into(),
        },
    ];
    let head = vec![built_in(iri(VAR, "v2"), &["var5", "var6"])];
    let axiom = annotated(AxiomKind::Rule(Rule::new(body, head)));
    let result = StructuralTransformation::new().transform(&[axiom.clone()]);
    assert!(result.placeholders().is_empty());
    assert_eq!(result.into_vec(), vec![axiom]);
}

#[test]
fn complex_class_assertions_use_a_placeholder() {
    let axiom = annotated(AxiomKind::ClassAssertion {
        class: ClassExpression::complement(ClassExpression::union([
            ClassExpression::from(c()),
            ClassExpression::from(c_iri()),
        ])),
        individual: i(),
    });
    let result = StructuralTransformation::new().transform(&[axiom]);
    insta::assert_snapshot!(result.to_string(), @"[SubClassOf(<http://www.semanticweb.org/ontology#X0> ObjectComplementOf(<urn:test:test#c>)), SubClassOf(<http://www.semanticweb.org/ontology#X0> ObjectComplementOf(<urn:test:test#iri>)), ClassAssertion(Annotation(<urn:test:test#ann> \"test\"^^xsd:string) <http://www.semanticweb.org/ontology#X0> <urn:test:test#i>)]");
}

#[test]
fn repeated_runs_agree() {
    let engine = StructuralTransformation::new();
    let batch = vec![
        plain(AxiomKind::DisjointUnion {
            class: c(),
            operands: set([c().into(), c_iri().into()]),
        }),
        plain(AxiomKind::DataPropertyDomain {
            property: dp(),
            domain: c().into(),
        }),
    ];
    assert_eq!(engine.transform(&batch), engine.transform(&batch));
}

#[test]
fn batches_round_trip_through_json() {
    let batch = vec![big_rule(), data_range(false_enumeration())];
    let json = serde_json::to_string(&batch).expect("serialize batch");
    let restored: Vec<Axiom> = serde_json::from_str(&json).expect("deserialize batch");
    assert_eq!(restored, batch);
}
