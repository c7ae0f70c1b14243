use clap::Subcommand;
use tripline_core::parse::ItineraryParser;
use tripline_core::{Config, GeminiParser, ImportReport, TripStore};

#[derive(Subcommand)]
pub enum ParseAction {
    /// Parse bookings out of free text
    Text {
        /// Path to a text file, or "-" for stdin
        file: String,
        /// Append parsed events to this trip
        #[arg(long)]
        trip: Option<String>,
    },
    /// Parse bookings out of an image
    Image {
        /// Path to the image file
        file: std::path::PathBuf,
        /// MIME type of the image
        #[arg(long, default_value = "image/png")]
        mime: String,
        /// Append parsed events to this trip
        #[arg(long)]
        trip: Option<String>,
    },
    /// Parse bookings out of a PDF
    Pdf {
        /// Path to the PDF file
        file: std::path::PathBuf,
        /// Append parsed events to this trip
        #[arg(long)]
        trip: Option<String>,
    },
}

pub fn run(action: ParseAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let parser = GeminiParser::from_config(&config.parser);
    let runtime = tokio::runtime::Runtime::new()?;

    let (report, trip_id) = match action {
        ParseAction::Text { file, trip } => {
            let text = if file == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                std::fs::read_to_string(&file)?
            };
            (runtime.block_on(parser.parse_text(&text))?, trip)
        }
        ParseAction::Image { file, mime, trip } => {
            let bytes = std::fs::read(&file)?;
            (runtime.block_on(parser.parse_image(&bytes, &mime))?, trip)
        }
        ParseAction::Pdf { file, trip } => {
            let bytes = std::fs::read(&file)?;
            (runtime.block_on(parser.parse_pdf(&bytes))?, trip)
        }
    };

    report_outcome(&report);

    match trip_id {
        Some(id) => append_to_trip(&id, report),
        None => {
            println!("{}", serde_json::to_string_pretty(&report.events)?);
            Ok(())
        }
    }
}

fn report_outcome(report: &ImportReport) {
    eprintln!("{}", report.summary());
    for (index, err) in &report.failures {
        eprintln!("  item {index}: {err}");
    }
}

/// One atomic list update: fetch the trip, extend, write back.
fn append_to_trip(id: &str, report: ImportReport) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TripStore::open_default()?;
    let mut trip = store
        .get(id)
        .ok_or_else(|| format!("trip not found: {id}"))?
        .clone();
    trip.events.extend(report.events);
    store.update_trip(trip)?;
    println!("updated trip {id}");
    Ok(())
}
