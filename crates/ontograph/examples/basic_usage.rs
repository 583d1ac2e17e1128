//! Basic usage example for ontograph
//!
//! This example demonstrates:
//! - Building a small term hierarchy
//! - Annotating gene products, including through a deprecated term id
//! - Querying terms, gene products, paths and depth
//! - Exporting to DOT

use ontograph::export::{export_dot, format_path};
use ontograph::ontology::{self, Annotation, Relationship, TermInfo};
use ontograph::Graph;

fn main() -> ontograph::Result<()> {
    let mut graph = Graph::directed();

    println!("Creating a small ontology...\n");

    for (id, name) in [
        ("GO:0005575", "cellular_component"),
        ("GO:0043226", "organelle"),
        ("GO:0005634", "nucleus"),
        ("GO:0005739", "mitochondrion"),
    ] {
        ontology::add_term(
            &mut graph,
            id,
            TermInfo {
                name,
                namespace: "cellular_component",
                definition: None,
            },
        );
        println!("✓ Added term: {id} ({name})");
    }

    ontology::add_relationship(&mut graph, "GO:0043226", "GO:0005575", Relationship::IsA);
    ontology::add_relationship(&mut graph, "GO:0005634", "GO:0043226", Relationship::IsA);
    ontology::add_relationship(&mut graph, "GO:0005739", "GO:0043226", Relationship::IsA);
    graph.add_alt_id("GO:0005636", "GO:0005634");

    for (gene_product, term, code) in [
        ("P04637", "GO:0005636", "IDA"),
        ("P04637", "GO:0005739", "IEA"),
        ("P00519", "GO:0005634", "TAS"),
    ] {
        let annotation = Annotation {
            gene_product,
            term,
            evidence_code: code,
            name: gene_product,
            description: "",
            aliases: Vec::new(),
        };
        if ontology::annotate(&mut graph, &annotation)?.is_some() {
            println!("✓ Annotated {gene_product} with {term} ({code})");
        }
    }

    println!(
        "\nGraph: {} nodes, {} edges",
        graph.nb_nodes(),
        graph.nb_edges()
    );
    println!(
        "Terms of P04637 (recursive): {:?}",
        ontology::go_terms(&graph, "P04637", true)
    );
    println!(
        "Gene products under organelle (recursive): {:?}",
        ontology::gene_products(&graph, "GO:0043226", true)?
    );

    let path = graph.get_shortest_path("P00519", "GO:0005575")?;
    println!("\n{}", format_path(&"P00519".to_string(), &"GO:0005575".to_string(), &path));
    println!("Maximum depth: {}", graph.max_depth()?);

    println!("\n{}", export_dot(&graph));

    Ok(())
}
