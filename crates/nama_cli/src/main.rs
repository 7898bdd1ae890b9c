mod input;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use nama_analysis::{
    ApproxSunrise, HodaCandidate, HodaSelection, NamingReport, chart_points, naming_report,
};
use nama_base::{ChartPoint, Graha, Varga, rashi_from_longitude, sign_name};
use nama_katapayadi::{InputMode, KatapayadiEntry, KatapayadiSession, SignChart, sign_chart};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::input::{Chart, load_chart};

#[derive(Parser)]
#[command(name = "nama", about = "Chart-based name analysis")]
struct Cli {
    /// Default log level; RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full naming report for a chart and a candidate name
    Analyze {
        /// Chart file (JSON)
        #[arg(long, env = "NAMA_CHART")]
        chart: PathBuf,
        /// Candidate name (defaults to "Child")
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Hoda Chakra syllables for a chosen graha
    Hoda {
        /// Chart file (JSON)
        #[arg(long, env = "NAMA_CHART")]
        chart: PathBuf,
        /// Graha name (English or Sanskrit)
        graha: String,
    },
    /// Katapayadi numerals for one or more texts
    Katapayadi {
        /// Texts to process, in order
        #[arg(required = true)]
        texts: Vec<String>,
        /// How the texts are written
        #[arg(long, value_enum, default_value_t = Mode::Auto)]
        mode: Mode,
        /// Chart file for the sign overlay (JSON)
        #[arg(long, env = "NAMA_CHART")]
        chart: Option<PathBuf>,
        /// Show only this entry id in the overlay
        #[arg(long)]
        select: Option<u64>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Bodies per sign in D1 or D9
    Placements {
        /// Chart file (JSON)
        #[arg(long, env = "NAMA_CHART")]
        chart: PathBuf,
        /// Use navamsa (D9) signs
        #[arg(long)]
        navamsa: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Devanagari,
    Roman,
    Auto,
}

impl From<Mode> for InputMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Devanagari => Self::Devanagari,
            Mode::Roman => Self::Roman,
            Mode::Auto => Self::Auto,
        }
    }
}

fn init_logging(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    if let Err(e) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        eprintln!("Failed to initialise logging: {e}");
    }
}

fn require_chart(path: &Path) -> Chart {
    load_chart(path).unwrap_or_else(|e| {
        eprintln!("{}: {e}", path.display());
        std::process::exit(1);
    })
}

fn parse_graha(s: &str) -> Graha {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid graha name: {s}");
        eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn point_signs(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{} {}", p.kind.label(), sign_name(p.sign_index)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_candidates(candidates: &[HodaCandidate]) {
    for c in candidates {
        println!(
            "  {:<5} {:<12} moon {:>2} ({:?})  lagna {:>2} ({:?})  total {:>5.1}{}",
            c.syllable,
            c.sign_name,
            c.from_moon.house,
            c.from_moon.tier,
            c.from_lagna.house,
            c.from_lagna.tier,
            c.total_score,
            if c.is_recommended { "  *" } else { "" }
        );
    }
}

fn print_hoda(hoda: &HodaSelection) {
    println!("Hoda Chakra for {}:", hoda.graha);
    if hoda.candidates.is_empty() {
        println!("  (no scored syllables)");
    }
    print_candidates(&hoda.candidates);
}

fn print_report(r: &NamingReport) {
    println!("Name: {} (born {})", r.name, r.birth_year);

    match &r.ista_devata {
        Some(ista) => {
            println!(
                "Atmakaraka: {} ({:.2} deg), Ista sign {}",
                ista.atmakaraka.graha, ista.atmakaraka.degree, ista.ista_sign
            );
            for o in &ista.occupants {
                println!("  {}: {}", o.graha, o.note);
            }
            if let Some(lord) = &ista.lord {
                println!("  {}: {}", lord.graha, lord.note);
            }
        }
        None => println!("Atmakaraka: none"),
    }

    println!("Shadbala:");
    for s in &r.shadbala.scores {
        println!("  {:<8} {:>3}  {}", s.graha.to_string(), s.score, s.sound_group.label);
    }

    if let Some(hoda) = &r.hoda {
        print_hoda(hoda);
    }

    let svara = &r.svara;
    if let Some(ch) = &svara.chakra {
        println!(
            "Svara: '{}' in {}, {} from Moon ({}), {} from Lagna",
            ch.vowel,
            ch.sign_name,
            ch.from_moon.house,
            ch.from_moon.status.label(),
            ch.from_lagna.house
        );
    }
    let activated: Vec<String> = svara.baladi.activated.iter().map(|g| g.to_string()).collect();
    println!(
        "Baladi: vowel '{}' activates [{}]",
        svara.baladi.current_vowel,
        activated.join(", ")
    );
    if let Some(rec) = &svara.baladi.recommendation {
        println!(
            "  Atmakaraka {} is {}: try {}",
            rec.graha,
            rec.state.name(),
            rec.suggested_vowels
        );
    }
    println!("Panca Svara Dasa:");
    for d in &svara.dasa {
        println!(
            "  {:<2} age {:>2}-{:<2}  {}-{}",
            d.vowel, d.start_age, d.end_age, d.year_start, d.year_end
        );
    }
    if let Some(l) = &svara.lagana {
        println!(
            "Lagana: {} syllables, {} signs, houses {:?}, score {}/4: {}",
            l.syllable_count,
            l.nature.label(),
            l.activated_houses,
            l.score,
            l.prognosis
        );
    }

    if !r.chart_points.is_empty() {
        println!("Chart points: {}", point_signs(&r.chart_points));
    }
}

fn print_entry(e: &KatapayadiEntry) {
    let logs: Vec<String> = e
        .calculation
        .logs
        .iter()
        .map(|l| match l.value {
            Some(v) => format!("{}={v}", l.token),
            None => format!("{}(drop)", l.token),
        })
        .collect();
    println!(
        "#{} {} → {} ({}, risk {})",
        e.id,
        e.original,
        e.devanagari(),
        e.method.as_str(),
        e.risk.as_str()
    );
    println!("   {}", logs.join(" "));
    println!(
        "   rev {:?} → {}  rashi {} ({})",
        e.calculation.reversed,
        e.numeral(),
        e.rashi(),
        e.calculation.rashi_name()
    );
}

fn print_sign_chart(chart: &SignChart) {
    for (idx, markers) in chart.boxes().iter().enumerate() {
        let labels: Vec<String> = markers
            .iter()
            .map(|m| {
                if m.highlighted {
                    format!("[{}]", m.label)
                } else {
                    m.label.clone()
                }
            })
            .collect();
        println!("  {:<12} {}", sign_name(idx as u8), labels.join(" "));
    }
}

#[derive(Serialize)]
struct KatapayadiOutput<'a> {
    entries: &'a [KatapayadiEntry],
    overlay: Option<SignChart>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Analyze { chart, name } => {
            let chart = require_chart(&chart);
            let report = naming_report(&chart.dataset, &chart.birth, &name, &ApproxSunrise);
            if cli.json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }

        Commands::Hoda { chart, graha } => {
            let chart = require_chart(&chart);
            let hoda = HodaSelection::for_graha(parse_graha(&graha), &chart.dataset);
            if cli.json {
                print_json(&hoda);
            } else {
                print_hoda(&hoda);
            }
        }

        Commands::Katapayadi {
            texts,
            mode,
            chart,
            select,
        } => {
            let mut session = KatapayadiSession::new();
            for text in &texts {
                if let Err(e) = session.process(text, mode.into()) {
                    eprintln!("Skipping {text:?}: {e}");
                }
            }
            if let Some(Err(e)) = select.map(|id| session.select(id)) {
                eprintln!("{e}");
                std::process::exit(1);
            }

            let overlay = chart.map(|path| {
                let chart = require_chart(&path);
                let points = chart_points(&chart.dataset, &chart.birth, &ApproxSunrise);
                sign_chart(&chart.dataset, &points, &session, select)
            });

            if cli.json {
                print_json(&KatapayadiOutput {
                    entries: session.entries(),
                    overlay,
                });
            } else {
                for e in session.entries() {
                    print_entry(e);
                }
                if let Some(overlay) = &overlay {
                    println!("Sign chart:");
                    print_sign_chart(overlay);
                }
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                let dms = info.dms;
                println!(
                    "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    dms.degrees,
                    dms.minutes,
                    dms.seconds,
                    info.degrees_in_rashi
                );
            }
        }

        Commands::Placements { chart, navamsa } => {
            let chart = require_chart(&chart);
            let varga = if navamsa { Varga::Navamsa } else { Varga::Rasi };
            let boxes = chart.dataset.placements(varga);
            if cli.json {
                print_json(&boxes);
            } else {
                for (idx, bodies) in boxes.iter().enumerate() {
                    let names: Vec<&str> = bodies.iter().map(|b| b.name()).collect();
                    println!("  {:<12} {}", sign_name(idx as u8), names.join(" "));
                }
            }
        }
    }
}
