use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use lithos_core::models::patient::{parse_medication_list, PatientProfile};
use lithos_core::models::stone::StoneType;
use lithos_core::models::triage::{StoneSize, Symptoms};
use lithos_oxalate::table::{OxalateTable, SortDirection, SortField};
use lithos_rules::all_protocols;
use lithos_rules::interpret::interpret_record;
use lithos_rules::plan::build_plan_record;
use lithos_rules::triage::triage;

#[derive(Parser)]
#[command(name = "lithos")]
#[command(
    about = "Kidney stone decision support: urine interpretation, management plans, acute triage"
)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a 24-hour urine collection
    Interpret {
        /// Urine profile JSON file
        #[arg(long)]
        urine: PathBuf,
        /// Patient profile JSON file (used for the RTA pH reading)
        #[arg(long)]
        patient: Option<PathBuf>,
    },
    /// Generate a chronic management plan
    Plan {
        /// Stone type, e.g. "Calcium Oxalate" or calcium_oxalate
        #[arg(long)]
        stone_type: StoneType,
        /// Urine profile JSON file
        #[arg(long)]
        urine: PathBuf,
        /// Patient profile JSON file
        #[arg(long)]
        patient: PathBuf,
        /// Serum labs JSON file
        #[arg(long)]
        serum: Option<PathBuf>,
        /// Additional medications (comma-separated)
        #[arg(long)]
        medications: Option<String>,
    },
    /// Acute stone episode guidance
    Triage {
        #[arg(long)]
        uncontrolled_pain: bool,
        #[arg(long)]
        vomiting: bool,
        #[arg(long)]
        fevers: bool,
        /// Hydronephrosis on imaging
        #[arg(long)]
        hydronephrosis: bool,
        /// Acute kidney injury
        #[arg(long)]
        aki: bool,
        #[arg(long)]
        anuria: bool,
        /// Stone size: "< 5mm", "5-10mm", "> 10mm" or unknown
        #[arg(long, default_value = "Unknown")]
        size: String,
    },
    /// Search the food oxalate table
    Oxalate {
        /// Food name or category (empty lists everything)
        #[arg(default_value = "")]
        query: String,
        /// Oxalate data file
        #[arg(long, env = "LITHOS_OXALATE_DATA", default_value = "oxalate_en.json")]
        data: PathBuf,
        /// Sort column: food, type, oxalate_mg, serving_size, oxalate_level
        #[arg(long, default_value = "food")]
        sort: String,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// List stone types with a management protocol
    StoneTypes,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Interpret { urine, patient } => {
            let urine = read_json(&urine)?;
            let patient = patient.as_deref().map(read_patient).transpose()?;
            let notes = interpret_record(&urine, patient.as_ref())?.notes();

            if cli.json {
                print_json(&notes)?;
            } else {
                for note in &notes {
                    println!("{}: {}", note.key, note.message);
                }
            }
        }
        Commands::Plan {
            stone_type,
            urine,
            patient,
            serum,
            medications,
        } => {
            let urine = read_json(&urine)?;
            let mut patient = read_patient(&patient)?;
            if let Some(text) = medications {
                patient.medications.extend(parse_medication_list(&text));
            }
            let serum = serum.as_deref().map(read_json).transpose()?;

            let record = build_plan_record(stone_type, &urine, &patient, serum.as_ref())?;

            if cli.json {
                print_json(&record)?;
            } else {
                println!("Findings:");
                for note in &record.findings {
                    println!("  - {}", note.message);
                }
                println!();
                println!("Recommendations for {} stones:", record.stone_type);
                for (i, recommendation) in record.recommendations.iter().enumerate() {
                    println!("  {}. {}", i + 1, recommendation);
                }
            }
        }
        Commands::Triage {
            uncontrolled_pain,
            vomiting,
            fevers,
            hydronephrosis,
            aki,
            anuria,
            size,
        } => {
            let symptoms = Symptoms {
                uncontrolled_pain,
                vomiting,
                fevers,
                hydronephrosis,
                aki,
                anuria,
            };
            let guidance = triage(&symptoms, StoneSize::from(size.as_str()));

            if cli.json {
                print_json(&guidance)?;
            } else {
                println!(
                    "Admission needed: {}",
                    if guidance.admission_needed { "yes" } else { "no" }
                );
                println!("Urgency: {:?}", guidance.urgency_level);
                for recommendation in &guidance.recommendations {
                    println!("  - {recommendation}");
                }
            }
        }
        Commands::Oxalate {
            query,
            data,
            sort,
            desc,
        } => {
            let table = OxalateTable::from_path(&data)?;
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let results = table.search(&query, SortField::parse_or_default(&sort), direction);

            if cli.json {
                print_json(&results)?;
            } else if results.is_empty() {
                println!("No results found for '{query}'.");
            } else {
                println!("Found {} matching items:", results.len());
                for item in &results {
                    println!(
                        "  {} ({}): {} mg per {} [{}]",
                        item.food,
                        item.category,
                        item.oxalate_mg,
                        item.serving_size,
                        item.oxalate_level
                    );
                }
            }
        }
        Commands::StoneTypes => {
            for protocol in all_protocols() {
                println!("{:<18} {}", protocol.id(), protocol.name());
            }
        }
    }

    Ok(())
}

fn read_json(path: &Path) -> eyre::Result<Value> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid JSON in {}", path.display()))
}

fn read_patient(path: &Path) -> eyre::Result<PatientProfile> {
    let value = read_json(path)?;
    serde_json::from_value(value)
        .wrap_err_with(|| format!("invalid patient profile in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
