//! Round-trip example - canonicalize a few shorthand strings

use domserialize::{deserialize, serialize, DocumentTree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let inputs = [
        "text",
        "test text",
        " whitespace ",
        "<a>",
        "<a><b><c>",
        "<a> <b> <c>",
        "<a> b <c> d <e>",
    ];

    for input in inputs {
        let tree = deserialize(input)?;
        let output = serialize(&tree);
        println!(
            "{:<20} -> {:<20} ({} nodes)",
            format!("{:?}", input),
            format!("{:?}", output),
            tree.len()
        );
    }

    // Malformed markup is reported, never silently repaired
    for input in ["<a", "<>", "<a b>"] {
        match input.parse::<DocumentTree>() {
            Ok(tree) => println!("{:?} unexpectedly parsed: {}", input, tree),
            Err(e) => println!("{:<20} -> error: {}", format!("{:?}", input), e),
        }
    }

    Ok(())
}
