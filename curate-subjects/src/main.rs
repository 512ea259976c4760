//! curate-subjects - Subject flattening curation runner
//!
//! Invokes the flattening step once per selected repository object: every
//! hierarchical `dc.subject` value contributes its leaf node to
//! `local.subject.flat`, without duplicating values already present.
//!
//! Traversal policy lives here, not in the step itself: objects are
//! processed sequentially and independently, and non-item objects are
//! skipped rather than failed, so the runner can be pointed at a whole
//! repository.

use anyhow::Result;
use curate_common::Error;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use curate_subjects::db::{self, objects, SqliteMetadataStore};
use curate_subjects::{CollectingReportSink, CurationStatus, SubjectFlattener};

/// Flatten hierarchical subject terms across a repository database
#[derive(Parser, Debug)]
#[command(name = "curate-subjects", version)]
struct Args {
    /// Path to the repository database (falls back to CURATE_DATABASE,
    /// then the config file, then the platform default)
    #[arg(long)]
    database: Option<String>,

    /// Process only the object with this handle
    #[arg(long, conflicts_with = "all")]
    handle: Option<String>,

    /// Process every object in the database
    #[arg(long)]
    all: bool,

    /// Emit reports as pretty-printed JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting curate-subjects (subject flattening)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let db_path =
        curate_common::config::resolve_database_path(args.database.as_deref(), "CURATE_DATABASE")?;
    info!("Database: {}", db_path.display());

    let pool = db::init_database_pool(&db_path).await?;

    // Select target objects
    let targets = if let Some(handle) = &args.handle {
        match objects::load_object_by_handle(&pool, handle).await? {
            Some(object) => vec![object],
            None => return Err(Error::NotFound(format!("object with handle {}", handle)).into()),
        }
    } else if args.all {
        objects::list_objects(&pool).await?
    } else {
        return Err(Error::InvalidInput(
            "nothing to do: pass --handle <handle> or --all".to_string(),
        )
        .into());
    };
    info!("Selected {} object(s)", targets.len());

    let flattener = SubjectFlattener::new(SqliteMetadataStore::new(pool.clone()));
    let mut sink = CollectingReportSink::new();

    // Sequential, one independent invocation per object; a failed object
    // does not stop the pass over the rest.
    for object in &targets {
        if let Err(err) = flattener.perform_and_report(object, &mut sink).await {
            tracing::error!(object = %object.display_handle(), error = %err, "Curation failed");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sink.reports)?);
    } else {
        for report in &sink.reports {
            println!("{} {}", report.status.as_str(), report.object);
            print!("{}", report.summary);
        }
        println!(
            "{} processed, {} skipped, {} failed",
            sink.count(CurationStatus::Success),
            sink.count(CurationStatus::Skip),
            sink.count(CurationStatus::Failure),
        );
    }

    if sink.count(CurationStatus::Failure) > 0 {
        std::process::exit(1);
    }

    Ok(())
}
