use reminder_status::config;
use reminder_status::init::{InitReport, PathProbe, inspect_or_initialize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reminder_status=info".parse().unwrap()),
        )
        .init();

    let db_path = config::db_path_from_env();
    let probe = PathProbe::of(&db_path);

    println!("Testing database at: {}", probe.path.display());
    match &probe.parent {
        Some(parent) => println!("Parent directory: {}", parent.display()),
        None => println!("Parent directory: (none)"),
    }
    println!("Parent exists: {}", probe.parent_exists);
    println!("Database exists: {}", probe.exists);

    if !probe.exists {
        println!("Initializing database...");
    }

    let report = match inspect_or_initialize(&db_path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("database check failed: {err}");
            std::process::exit(1);
        }
    };

    match &report {
        InitReport::Existing { reminder_count, .. } => {
            println!("Database size: {} bytes", report.size_bytes());
            println!("Number of reminders: {reminder_count}");
        }
        InitReport::Created { .. } => {
            println!("✓ Database initialized successfully");
            println!("Database size: {} bytes", report.size_bytes());
        }
    }
}
