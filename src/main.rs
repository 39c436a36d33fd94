//! `nodetag`: edit and check engine node tags in a scene file.
//!
//! The binary is a reference host for the add-on layer. It loads a JSON
//! scene, registers the add-on, routes every edit through the same operators
//! the inspector panel fires, and writes the scene back only when something
//! changed.

mod config;
mod import;
mod render;
mod scene;
mod session;
mod validate;

use std::path::PathBuf;

use addon::panel::is_lod_child;
use addon::{ADDON_INFO, Host, Invocation, MaxDistanceProperty, OperatorError, Registry, RegistryError};
use clap::{Parser, Subcommand};
use schema::{ColliderFlag, MeshFlag, NodeType, RigidbodyType};
use serde::Serialize;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::import::{ImportError, interpret, interpret_all};
use crate::render::render_panel;
use crate::scene::SceneError;
use crate::session::Session;
use crate::validate::{Summary, fix, validate};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("operator failed: {0}")]
    Operator(#[from] OperatorError),
    #[error("registration failed: {0}")]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no clickable row '{row}' in the panel for '{object}'")]
    NoSuchRow { object: String, row: String },
    #[error("validation found {0} error(s)")]
    ValidationFailed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "nodetag", version, about = "Tag scene objects with engine node properties")]
struct Cli {
    /// Scene file [default: $NODETAG_SCENE or scene.json]
    #[arg(long, global = true)]
    scene: Option<PathBuf>,

    /// Apply edits in memory without writing the scene file.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Output format [default: $NODETAG_OUTPUT or text]
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every object with its resolved node role.
    List {
        /// Fail on the first malformed property bag.
        #[arg(long)]
        strict: bool,
    },
    /// Show how an importer resolves one object.
    Show {
        object: String,
        #[arg(long)]
        strict: bool,
    },
    /// Draw the inspector panel for an object, or the scene's active object.
    Panel { object: Option<String> },
    /// Click a panel row by its text, e.g. "Collider" or "Cast Shadow".
    Click { object: String, row: String },
    /// Set the node type: none, rigidbody, collider or lod.
    SetNode { object: String, node: NodeType },
    /// Set the rigidbody type: static, kinematic or dynamic.
    SetType { object: String, rb_type: RigidbodyType },
    /// Toggle a collider flag: convex or trigger.
    ToggleCollider { object: String, flag: ColliderFlag },
    /// Toggle a mesh flag: castShadow or receiveShadow.
    ToggleMesh { object: String, flag: MeshFlag },
    /// Read or write an LOD child's max distance. 0 means no limit.
    MaxDistance { object: String, value: Option<u64> },
    /// Report malformed and non-canonical tags across the scene.
    Validate,
    /// Rewrite every property bag into canonical form.
    Fix,
    /// Print add-on metadata and the classes it registers.
    Info,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.scene, cli.dry_run, cli.output);

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut registry = Registry::new();
    registry.register()?;
    let result = run(config, cli.command, &registry);
    registry.unregister()?;
    result
}

fn run(config: Config, command: Command, registry: &Registry) -> Result<(), CliError> {
    match command {
        Command::Info => run_info(&config, registry),
        Command::List { strict } => run_list(&Session::open(config)?, strict),
        Command::Show { object, strict } => {
            let session = Session::open(config)?;
            let obj = session
                .scene
                .find(&object)
                .ok_or_else(|| SceneError::UnknownObject(object.clone()))?;
            print_json(&interpret(&session.scene, obj, strict)?)
        }
        Command::Panel { object } => run_panel(&mut Session::open(config)?, object.as_deref()),
        Command::Click { object, row } => run_click(&mut Session::open(config)?, &object, &row),
        Command::SetNode { object, node } => {
            run_operator(&mut Session::open(config)?, &object, Invocation::node_type(node))
        }
        Command::SetType { object, rb_type } => {
            run_operator(&mut Session::open(config)?, &object, Invocation::rigidbody_type(rb_type))
        }
        Command::ToggleCollider { object, flag } => {
            run_operator(&mut Session::open(config)?, &object, Invocation::collider_toggle(flag))
        }
        Command::ToggleMesh { object, flag } => {
            run_operator(&mut Session::open(config)?, &object, Invocation::mesh_toggle(flag))
        }
        Command::MaxDistance { object, value } => {
            run_max_distance(&mut Session::open(config)?, &object, value)
        }
        Command::Validate => run_validate(&Session::open(config)?),
        Command::Fix => run_fix(&mut Session::open(config)?),
    }
}

fn run_info(config: &Config, registry: &Registry) -> Result<(), CliError> {
    #[derive(Serialize)]
    struct Info<'a> {
        addon: addon::AddonInfo,
        classes: Vec<&'static str>,
        property: &'static str,
        scene: &'a std::path::Path,
    }

    let info = Info {
        addon: ADDON_INFO,
        classes: registry.registered_ids(),
        property: MaxDistanceProperty::IDENT,
        scene: &config.scene_path,
    };
    match config.output {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Text => {
            println!("{} {} by {}", info.addon.name, info.addon.version_string(), info.addon.author);
            println!("{}", info.addon.description);
            println!("location: {}", info.addon.location);
            println!("classes: {}", info.classes.join(", "));
            println!("property: {} ({})", info.property, MaxDistanceProperty::DESCRIPTION);
            println!("scene: {}", info.scene.display());
            Ok(())
        }
    }
}

fn run_list(session: &Session, strict: bool) -> Result<(), CliError> {
    let nodes = interpret_all(&session.scene, strict)?;
    match session.config.output {
        OutputFormat::Json => print_json(&nodes),
        OutputFormat::Text => {
            let width = nodes.iter().map(|node| node.name.len()).max().unwrap_or(0);
            for node in &nodes {
                let distance = node
                    .max_distance
                    .map(|d| format!("  maxDistance={d}"))
                    .unwrap_or_default();
                println!("{:<width$}  {:<8}  {}{distance}", node.name, node.kind.to_string(), node.role);
            }
            Ok(())
        }
    }
}

fn run_panel(session: &mut Session, object: Option<&str>) -> Result<(), CliError> {
    if let Some(object) = object {
        session.select(object)?;
    }
    let name = session
        .scene
        .active_object()
        .and_then(|id| session.scene.get(id))
        .map(|obj| obj.name.clone());
    let view = addon::draw(&session.scene);
    match session.config.output {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Text => {
            print!("{}", render_panel(&view, name.as_deref()));
            Ok(())
        }
    }
}

fn run_click(session: &mut Session, object: &str, row: &str) -> Result<(), CliError> {
    session.select(object)?;
    let invocation = addon::draw(&session.scene)
        .find(row)
        .and_then(addon::Row::invocation)
        .ok_or_else(|| CliError::NoSuchRow {
            object: object.to_owned(),
            row: row.to_owned(),
        })?;
    addon::dispatch(&mut session.scene, invocation)?;
    session.commit()?;
    print_object(session, object)
}

fn run_operator(session: &mut Session, object: &str, invocation: Invocation) -> Result<(), CliError> {
    session.select(object)?;
    addon::dispatch(&mut session.scene, invocation)?;
    session.commit()?;
    print_object(session, object)
}

fn run_max_distance(session: &mut Session, object: &str, value: Option<u64>) -> Result<(), CliError> {
    let id = session.select(object)?;
    let Some(value) = value else {
        println!("{}", MaxDistanceProperty::get(&session.scene, id)?);
        return Ok(());
    };
    if !is_lod_child(&session.scene, id) {
        tracing::warn!(object, "parent is not an LOD group; max distance will be ignored");
    }
    MaxDistanceProperty::set(&mut session.scene, id, value)?;
    session.commit()?;
    print_object(session, object)
}

fn run_validate(session: &Session) -> Result<(), CliError> {
    let issues = validate(&session.scene);
    let summary = Summary::of(&issues);
    match session.config.output {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Report<'a> {
                issues: &'a [validate::Issue],
                summary: Summary,
            }
            print_json(&Report { issues: &issues, summary })?;
        }
        OutputFormat::Text => {
            for issue in &issues {
                println!("{:<7}  {}  {}: {}", issue.severity, issue.object, issue.key, issue.message);
            }
            println!("{} error(s), {} warning(s)", summary.errors, summary.warnings);
        }
    }
    if summary.errors > 0 {
        return Err(CliError::ValidationFailed(summary.errors));
    }
    Ok(())
}

fn run_fix(session: &mut Session) -> Result<(), CliError> {
    let changed = fix(&mut session.scene);
    session.commit()?;
    match session.config.output {
        OutputFormat::Json => print_json(&changed),
        OutputFormat::Text => {
            for name in &changed {
                println!("fixed {name}");
            }
            println!("{} object(s) changed", changed.len());
            Ok(())
        }
    }
}

/// Print the state of `object` after an edit.
fn print_object(session: &Session, object: &str) -> Result<(), CliError> {
    match session.config.output {
        OutputFormat::Text => {
            let view = addon::draw(&session.scene);
            print!("{}", render_panel(&view, Some(object)));
            Ok(())
        }
        OutputFormat::Json => {
            let Some(obj) = session.scene.find(object) else {
                return Err(SceneError::UnknownObject(object.to_owned()).into());
            };
            print_json(&interpret(&session.scene, obj, false)?)
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
