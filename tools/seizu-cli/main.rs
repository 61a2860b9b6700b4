use clap::Parser;
use seizu::prelude::*;
use std::fs;

/// Inspect a blueprint graph: ordered nodes, editable fields and the data
/// sources each node can map from.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a graph payload JSON file (as returned by the graph endpoint)
    #[arg(long, conflicts_with = "base_url")]
    file: Option<String>,

    /// Base URL of a blueprint service to fetch the graph from
    #[arg(long)]
    base_url: Option<String>,

    /// Account id for the graph endpoint
    #[arg(long, default_value = "123")]
    account_id: String,

    /// Blueprint id for the graph endpoint
    #[arg(long, default_value = "bp_456")]
    blueprint_id: String,

    /// Path to a global data JSON file; mock data is used when omitted
    #[arg(long)]
    global_data: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let payload = match (&cli.file, &cli.base_url) {
        (Some(path), _) => load_payload(path),
        (None, Some(base_url)) => {
            let client = GraphClient::new(base_url.clone());
            client.fetch_graph(&cli.account_id, &cli.blueprint_id).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to fetch graph: {}", e));
            })
        }
        (None, None) => {
            exit_with_error("Either --file or --base-url is required.");
        }
    };

    let graph = payload.into_blueprint().unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to convert graph payload: {}", e));
    });

    let global = match &cli.global_data {
        Some(path) => GlobalData::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load global data from '{}': {}", path, e));
        }),
        None => {
            println!("No global data file provided. Using default mock data.");
            GlobalData::default()
        }
    };

    // Keep a copy for source resolution before the session takes ownership.
    let nodes = graph.nodes.clone();
    let forms = graph.forms.clone();

    let mut session = BlueprintSession::new(global.clone());
    session.load_graph(graph).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to build blueprint context: {}", e));
    });

    println!(
        "\nLoaded blueprint: {} nodes, {} forms indexed\n",
        session.nodes().len(),
        session.context().map(|context| context.len()).unwrap_or(0)
    );

    for node in session.nodes() {
        println!(
            "[{}] {} (x: {}, form: {})",
            node.kind, node.data.name, node.position.x, node.data.component_id
        );

        if let Some(entry) = session.context().and_then(|context| context.get(&node.data.name)) {
            println!("  prefill: {}", entry.prefill);
            for field in entry.form.field_schema.field_names() {
                let value = entry
                    .node
                    .data
                    .input_mapping
                    .get(&field)
                    .map(String::as_str)
                    .unwrap_or("");
                if value.is_empty() {
                    println!("  field: {}", field);
                } else {
                    println!("  field: {} -> {}", field, value);
                }
            }
        }

        for source in resolve_sources(node, &nodes, &forms, &global) {
            println!("  source: {} {:?}", source.title, source.options);
        }
        println!();
    }
}

fn load_payload(path: &str) -> GraphPayload {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read graph file '{}': {}", path, e));
    });
    let payload: GraphPayload = serde_json::from_str(&content).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to parse graph JSON: {}", e));
    });
    payload.warn_missing_sections();
    payload
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
