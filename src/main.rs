use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use kv_fsm::FsmConfig;
use kv_fsm::KvStateMachine;
use kv_fsm::Result;
use kv_fsm::StateMachine;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Restores a snapshot file into a fresh state machine and reports what it holds
#[derive(Parser, Debug)]
#[command(name = "kv-fsm-inspect", version)]
struct Args {
    /// Snapshot file produced by `persist`
    snapshot: PathBuf,

    /// Extra TOML file layered over the default configuration
    #[arg(long)]
    config: Option<String>,

    /// Print every key=value record
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    init_observability();
    let args = Args::parse();

    let mut settings = FsmConfig::new()?;
    if let Some(path) = &args.config {
        settings = settings.with_override_config(path)?;
    }
    let settings = settings.validate()?;
    info!("Loaded settings: {:?}", settings);

    let state_machine = KvStateMachine::with_config(settings);
    let mut file = File::open(&args.snapshot)?;
    state_machine.restore(&mut file)?;

    println!("snapshot: {}", args.snapshot.display());
    println!("records: {}", state_machine.len());
    match state_machine.latest_configuration() {
        Some(configuration) => {
            println!("configuration: {} member(s)", configuration.members.len());
            for member in &configuration.members {
                println!(
                    "  - id={} address={} role={:?}",
                    member.id, member.address, member.role
                );
            }
        }
        None => println!("configuration: none"),
    }

    if args.dump {
        let mut records: Vec<_> = state_machine.store().to_hash_map().into_iter().collect();
        records.sort();
        for (key, value) in records {
            println!("{}={}", key, value);
        }
    }

    Ok(())
}

fn init_observability() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
