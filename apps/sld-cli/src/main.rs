mod error;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use error::{CliError, CliResult};
use sld_core::{ContainerRect, Point, SequentialIds};
use sld_graph::{
    Graph, InputKind, Port, connect, hit_connection, hover_flags, prune_dangling, remove_junction,
    render_connections, split_at,
};
use sld_project::DiagramDocument;
use tracing::info;

#[derive(Parser)]
#[command(name = "sld-cli")]
#[command(about = "Single-line diagram tool - wires, junctions and hit-testing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
struct Surface {
    /// Container width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    /// Container height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,
}

impl Surface {
    fn rect(self) -> CliResult<ContainerRect> {
        Ok(ContainerRect::try_new(self.width, self.height)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate diagram file syntax and structure
    Validate {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
    },
    /// Summarize a diagram
    Info {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
    },
    /// Print render instructions for every connection
    Render {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
        #[command(flatten)]
        surface: Surface,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Hit-test a pointer position against the connections
    Hit {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
        #[command(flatten)]
        surface: Surface,
        /// Pointer x in pixels
        #[arg(long)]
        x: f64,
        /// Pointer y in pixels
        #[arg(long)]
        y: f64,
        /// Use the touch hit threshold
        #[arg(long)]
        touch: bool,
    },
    /// Insert a junction into a connection at the point nearest the pointer
    Split {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
        /// Connection to split
        connection_id: String,
        #[command(flatten)]
        surface: Surface,
        /// Pointer x in pixels
        #[arg(long)]
        x: f64,
        /// Pointer y in pixels
        #[arg(long)]
        y: f64,
        /// Output file (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove a junction, merging its two connections back into one
    RemoveJunction {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
        /// Junction component to remove
        junction_id: String,
        /// Output file (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Draw a connection between two component ports
    Connect {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
        from: String,
        /// TOP, BOTTOM, LEFT or RIGHT
        from_port: Port,
        to: String,
        /// TOP, BOTTOM, LEFT or RIGHT
        to_port: Port,
        /// Output file (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Drop connections whose endpoints no longer exist
    Prune {
        /// Path to the diagram YAML/JSON file
        diagram_path: PathBuf,
        /// Output file (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { diagram_path } => cmd_validate(&diagram_path),
        Commands::Info { diagram_path } => cmd_info(&diagram_path),
        Commands::Render {
            diagram_path,
            surface,
            json,
        } => cmd_render(&diagram_path, surface, json),
        Commands::Hit {
            diagram_path,
            surface,
            x,
            y,
            touch,
        } => cmd_hit(&diagram_path, surface, Point::new(x, y), touch),
        Commands::Split {
            diagram_path,
            connection_id,
            surface,
            x,
            y,
            output,
        } => cmd_split(
            &diagram_path,
            &connection_id,
            surface,
            Point::new(x, y),
            output.as_deref(),
        ),
        Commands::RemoveJunction {
            diagram_path,
            junction_id,
            output,
        } => cmd_remove_junction(&diagram_path, &junction_id, output.as_deref()),
        Commands::Connect {
            diagram_path,
            from,
            from_port,
            to,
            to_port,
            output,
        } => cmd_connect(
            &diagram_path,
            (&from, from_port),
            (&to, to_port),
            output.as_deref(),
        ),
        Commands::Prune {
            diagram_path,
            output,
        } => cmd_prune(&diagram_path, output.as_deref()),
    }
}

fn cmd_validate(diagram_path: &Path) -> CliResult<()> {
    println!("Validating diagram: {}", diagram_path.display());
    sld_project::load(diagram_path)?;
    println!("✓ Diagram is valid");
    Ok(())
}

fn cmd_info(diagram_path: &Path) -> CliResult<()> {
    let doc = sld_project::load(diagram_path)?;
    let graph = doc.graph();
    println!("{} (version {})", doc.name, doc.version);
    println!("  Components:  {}", graph.components.len());
    println!("  Junctions:   {}", graph.junctions().count());
    println!("  Connections: {}", graph.connections.len());
    let cfg = doc.engine_config();
    println!(
        "  Hit threshold: {:.1}px (touch {:.1}px)",
        cfg.hit_threshold_px, cfg.touch_hit_threshold_px
    );
    Ok(())
}

fn cmd_render(diagram_path: &Path, surface: Surface, json: bool) -> CliResult<()> {
    let doc = sld_project::load(diagram_path)?;
    let rendered = render_connections(&doc.graph(), surface.rect()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    if rendered.is_empty() {
        println!("No connections to render");
    }
    for r in rendered {
        println!(
            "  {}  ({:.1}, {:.1}) -> ({:.1}, {:.1})  {:?}  width={:.1} opacity={:.2} marker={:?}",
            r.connection_id,
            r.from_anchor.x,
            r.from_anchor.y,
            r.to_anchor.x,
            r.to_anchor.y,
            r.severity,
            r.style.stroke_width,
            r.style.opacity,
            r.style.marker
        );
    }
    Ok(())
}

fn cmd_hit(diagram_path: &Path, surface: Surface, pointer: Point, touch: bool) -> CliResult<()> {
    let doc = sld_project::load(diagram_path)?;
    let graph = doc.graph();
    let rect = surface.rect()?;
    let input = if touch {
        InputKind::Touch
    } else {
        InputKind::Mouse
    };
    let threshold = doc.engine_config().threshold_for(input);

    let flags = hover_flags(pointer, &graph, rect, threshold);
    for (connection, hit) in graph.connections.iter().zip(flags) {
        if hit {
            println!("  within {:.1}px: {}", threshold, connection.id);
        }
    }
    match hit_connection(pointer, &graph, rect, threshold) {
        Some(connection) => println!("✓ Nearest: {}", connection.id),
        None => println!("No connection under pointer"),
    }
    Ok(())
}

fn cmd_split(
    diagram_path: &Path,
    connection_id: &str,
    surface: Surface,
    pointer: Point,
    output: Option<&Path>,
) -> CliResult<()> {
    let mut doc = sld_project::load(diagram_path)?;
    let graph = doc.graph();
    if graph.connection(connection_id).is_none() {
        return Err(CliError::NotFound {
            what: "Connection",
            id: connection_id.to_string(),
        });
    }

    let mut ids = ids_for(&graph);
    let split = split_at(&graph, connection_id, pointer, surface.rect()?, &mut ids);
    let Some(junction_id) = split.junction_id else {
        println!("Connection {} has a missing endpoint; nothing split", connection_id);
        return Ok(());
    };

    doc.set_graph(split.graph);
    let path = write_back(&doc, diagram_path, output)?;
    println!("✓ Inserted junction {}", junction_id);
    println!("  New connections: {}", split.new_connection_ids.join(", "));
    println!("  Saved to {}", path.display());
    Ok(())
}

fn cmd_remove_junction(
    diagram_path: &Path,
    junction_id: &str,
    output: Option<&Path>,
) -> CliResult<()> {
    let mut doc = sld_project::load(diagram_path)?;
    let graph = doc.graph();
    match graph.component(junction_id) {
        Some(c) if c.is_junction() => {}
        _ => {
            return Err(CliError::NotFound {
                what: "Junction",
                id: junction_id.to_string(),
            });
        }
    }

    let mut ids = ids_for(&graph);
    let removal = remove_junction(&graph, junction_id, &mut ids);
    doc.set_graph(removal.graph);
    let path = write_back(&doc, diagram_path, output)?;

    println!("✓ Removed junction {}", junction_id);
    if !removal.removed_connection_ids.is_empty() {
        println!(
            "  Removed connections: {}",
            removal.removed_connection_ids.join(", ")
        );
    }
    if let Some(merged) = removal.merged_connection_id {
        println!("  Merged into: {}", merged);
    }
    println!("  Saved to {}", path.display());
    Ok(())
}

fn cmd_connect(
    diagram_path: &Path,
    (from, from_port): (&str, Port),
    (to, to_port): (&str, Port),
    output: Option<&Path>,
) -> CliResult<()> {
    let mut doc = sld_project::load(diagram_path)?;
    let graph = doc.graph();
    let mut ids = ids_for(&graph);
    let (graph, id) = connect(&graph, from, from_port, to, to_port, &mut ids)?;
    doc.set_graph(graph);
    let path = write_back(&doc, diagram_path, output)?;
    println!("✓ Connected {}:{} -> {}:{} as {}", from, from_port, to, to_port, id);
    println!("  Saved to {}", path.display());
    Ok(())
}

fn cmd_prune(diagram_path: &Path, output: Option<&Path>) -> CliResult<()> {
    // Dangling connections fail validation, so read without it.
    let mut doc = sld_project::load_unvalidated(diagram_path)?;

    let (graph, removed) = prune_dangling(&doc.graph());
    doc.set_graph(graph);
    let path = write_back(&doc, diagram_path, output)?;
    if removed.is_empty() {
        println!("No dangling connections");
    } else {
        println!("✓ Removed {} connection(s): {}", removed.len(), removed.join(", "));
    }
    println!("  Saved to {}", path.display());
    Ok(())
}

fn ids_for(graph: &Graph) -> SequentialIds {
    SequentialIds::after(
        graph
            .components
            .iter()
            .map(|c| c.id.as_str())
            .chain(graph.connections.iter().map(|c| c.id.as_str())),
    )
}

fn write_back(
    doc: &DiagramDocument,
    diagram_path: &Path,
    output: Option<&Path>,
) -> CliResult<PathBuf> {
    let path = output.unwrap_or(diagram_path).to_path_buf();
    sld_project::save(&path, doc)?;
    info!(path = %path.display(), "diagram saved");
    Ok(path)
}
