//! Unit tests for the ontology helpers: terms, relationships and annotations.

use ontograph::ontology::{
    add_relationship, add_term, annotate, gene_products, go_terms, is_kind, Annotation, NodeKind,
    Relationship, TermInfo,
};
use ontograph::{Graph, GraphError};

fn term(graph: &mut Graph, id: &str, name: &str) {
    add_term(
        graph,
        id,
        TermInfo {
            name,
            namespace: "cellular_component",
            definition: None,
        },
    );
}

fn annotation<'a>(gene_product: &'a str, term: &'a str) -> Annotation<'a> {
    Annotation {
        gene_product,
        term,
        evidence_code: "IEA",
        name: gene_product,
        description: "",
        aliases: Vec::new(),
    }
}

// nucleolus -is a-> nuclear part -part of-> nucleus -is a-> organelle
fn create_ontology() -> Graph {
    let mut graph = Graph::directed();
    term(&mut graph, "GO:0005730", "nucleolus");
    term(&mut graph, "GO:0044428", "nuclear part");
    term(&mut graph, "GO:0005634", "nucleus");
    term(&mut graph, "GO:0043226", "organelle");
    add_relationship(&mut graph, "GO:0005730", "GO:0044428", Relationship::IsA);
    add_relationship(&mut graph, "GO:0044428", "GO:0005634", Relationship::PartOf);
    add_relationship(&mut graph, "GO:0005634", "GO:0043226", Relationship::IsA);
    graph.add_alt_id("GO:0005732", "GO:0005730");
    graph
}

#[test]
fn test_relationship_labels() {
    let graph = create_ontology();
    let edge = graph.edge("GO:0044428", "GO:0005634").unwrap();
    assert_eq!(edge.borrow().get_string("relationship"), Some("part of"));
    assert_eq!(Relationship::IsA.to_string(), "is a");
    assert_eq!(NodeKind::GoTerm.to_string(), "GOTerm");
}

#[test]
fn test_annotation_through_deprecated_id() {
    let mut graph = create_ontology();
    annotate(&mut graph, &annotation("P1", "GO:0005732")).unwrap();

    assert_eq!(go_terms(&graph, "P1", false), vec!["GO:0005730"]);
    assert!(is_kind(&graph, "P1", NodeKind::GeneProduct));
    assert!(!is_kind(&graph, "P1", NodeKind::GoTerm));
}

#[test]
fn test_recursive_terms_walk_up_the_hierarchy() {
    let mut graph = create_ontology();
    annotate(&mut graph, &annotation("P1", "GO:0005730")).unwrap();

    assert_eq!(
        go_terms(&graph, "P1", true),
        vec!["GO:0005634", "GO:0005730", "GO:0043226", "GO:0044428"]
    );
}

#[test]
fn test_recursive_gene_products_walk_down_the_hierarchy() {
    let mut graph = create_ontology();
    annotate(&mut graph, &annotation("P1", "GO:0005730")).unwrap();
    annotate(&mut graph, &annotation("P2", "GO:0005634")).unwrap();
    annotate(&mut graph, &annotation("P3", "GO:0043226")).unwrap();

    assert_eq!(gene_products(&graph, "GO:0005634", false).unwrap(), vec!["P2"]);
    assert_eq!(
        gene_products(&graph, "GO:0005634", true).unwrap(),
        vec!["P1", "P2"]
    );
    assert_eq!(
        gene_products(&graph, "GO:0043226", true).unwrap(),
        vec!["P1", "P2", "P3"]
    );
}

#[test]
fn test_ontology_depth_and_order() {
    let mut graph = create_ontology();
    assert_eq!(graph.max_depth().unwrap(), 3);

    annotate(&mut graph, &annotation("P1", "GO:0005730")).unwrap();
    assert_eq!(graph.max_depth().unwrap(), 4);

    let order = graph.topological_sort().unwrap();
    assert_eq!(order.first().map(String::as_str), Some("P1"));
    assert_eq!(order.last().map(String::as_str), Some("GO:0043226"));
}

#[test]
fn test_gene_products_on_undirected_graph() {
    let mut graph = Graph::undirected();
    graph.add_edge("P1", "GO:1");
    assert!(matches!(
        gene_products(&graph, "GO:1", false),
        Err(GraphError::Undirected { .. })
    ));
}
