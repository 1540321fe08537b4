//! # Stratify CLI Application
//!
//! Command-line boundary for the concrete section evaluator. Reads a JSON
//! request, runs the calc_core pipeline and prints a human-readable or JSON
//! report.
//!
//! ## Exit Codes
//!
//! - 0: evaluation completed (and, with `--fail-on-check`, every check passed)
//! - 1: a design check failed and `--fail-on-check` was given
//! - 2: malformed request or settings
//! - 3: unknown bar size or steel grade
//! - 4: property table could not be loaded

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};

use calc_core::calculations::{evaluate_request, Evaluation, EvaluationRequest};
use calc_core::{CalcError, CalcResult, DesignSettings, RebarCatalog};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Reinforced concrete section evaluation (AASHTO LRFD)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Bar-size table (CSV: bar_size,bar_diameter,bar_area,bar_weight,bar_perimeter)
    #[arg(long, global = true, requires = "grades")]
    bars: Option<PathBuf>,

    /// Steel-grade table (CSV: grade,yield,gamma_3)
    #[arg(long, global = true, requires = "bars")]
    grades: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn wants_json(&self) -> bool {
        matches!(
            self.command,
            Commands::Evaluate { format: OutputFormat::Json | OutputFormat::Full, .. }
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a section from a JSON request
    Evaluate {
        /// Path to the request JSON, or "-" for stdin
        #[arg(value_name = "REQUEST")]
        request: PathBuf,

        /// Design settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with code 1 if any design check fails
        #[arg(long)]
        fail_on_check: bool,
    },

    /// List bar sizes in the active catalog
    Bars,

    /// List steel grades in the active catalog
    Grades,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// Rounded result record as JSON
    Json,
    /// Every unrounded stage result as JSON
    Full,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, cli.wants_json());
            exit_code_for(&e)
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> CalcResult<i32> {
    let loaded;
    let catalog: &RebarCatalog = match (&cli.bars, &cli.grades) {
        (Some(bars), Some(grades)) => {
            loaded = RebarCatalog::load_from_csv(bars, grades)?;
            &loaded
        }
        _ => RebarCatalog::standard(),
    };

    match &cli.command {
        Commands::Evaluate {
            request,
            settings,
            format,
            fail_on_check,
        } => {
            let settings = match settings {
                Some(path) => DesignSettings::load(path)?,
                None => DesignSettings::default(),
            };
            let request = read_request(request)?;
            let evaluation = evaluate_request(&request, catalog, &settings)?;
            print_evaluation(&evaluation, *format)?;

            if *fail_on_check && !evaluation.design.passes() {
                debug!(failed = ?evaluation.design.failed_checks(), "design checks failed");
                return Ok(1);
            }
            Ok(0)
        }
        Commands::Bars => {
            println!("{:<6} {:>10} {:>10} {:>10} {:>10}", "Size", "Dia (in)", "Area (in²)", "Wt (plf)", "Perim (in)");
            for bar in catalog.bar_sizes() {
                println!(
                    "{:<6} {:>10.3} {:>10.2} {:>10.3} {:>10.3}",
                    bar.size_label, bar.diameter_in, bar.area_in2, bar.weight_plf, bar.perimeter_in
                );
            }
            Ok(0)
        }
        Commands::Grades => {
            println!("{:<8} {:>10} {:>8}", "Grade", "f_y (ksi)", "γ3");
            for grade in catalog.grades() {
                println!("{:<8} {:>10.1} {:>8.2}", grade.grade_label, grade.yield_strength_ksi, grade.gamma_3);
            }
            Ok(0)
        }
    }
}

fn read_request(path: &Path) -> CalcResult<EvaluationRequest> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::serialization(format!("Failed to read stdin: {}", e)))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            CalcError::serialization(format!("Failed to read request '{}': {}", path.display(), e))
        })?
    };
    Ok(serde_json::from_str(&json)?)
}

fn print_evaluation(evaluation: &Evaluation, format: OutputFormat) -> CalcResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&evaluation.report())?),
        OutputFormat::Full => println!("{}", serde_json::to_string_pretty(evaluation)?),
        OutputFormat::Human => print_human(evaluation),
    }
    Ok(())
}

fn print_human(evaluation: &Evaluation) {
    let props = &evaluation.section;
    let report = evaluation.report();
    let design = &evaluation.design;

    println!("═══════════════════════════════════════");
    println!("  CONCRETE SECTION EVALUATION");
    println!("═══════════════════════════════════════");
    println!();
    println!("Section:");
    println!("  b x h:    {:.2}\" x {:.2}\"", props.width_in, props.height_in);
    println!("  Steel:    {} @ {:.2}\" (A_s = {:.3} in², {:.3} in²/ft)",
        props.bar_size, props.spacing_in, report.steel_area, report.steel_area_per_ft);
    println!("  Grade:    {} (f_y = {:.0} ksi)", evaluation.grade.grade_label, evaluation.capacity.f_y_ksi);
    println!("  f'c:      {:.1} ksi, w_c = {:.0} pcf", props.concrete.f_c_ksi, props.concrete.density_pcf);
    println!("  d_s:      {:.2}\"   d_c = {:.2}\"", props.d_s_in, props.d_c_in);
    println!("  w_DL:     {:.2} k/ft   M_cr = {:.1} k-ft", report.weight, report.m_cr);
    println!();
    println!("Service ({}):", if report.cracked { "cracked" } else { "uncracked" });
    println!("  f_conc:   {:.3} ksi", report.f_conc);
    println!("  f_steel:  {:.3} ksi", report.f_steel);
    println!();
    println!("Checks:");
    println!("  Moment:       φM_n = {:.1} k-ft (ratio {:.2}) {}",
        report.phi_mn, design.moment_ratio, status_icon(report.moment_capacity));
    println!("  Shear:        φV_n = {:.1} kips (ratio {:.2}) {}",
        report.phi_vn, design.shear_ratio, status_icon(report.shear_capacity));
    println!("  Min reinf:    M_min = {:.1} k-ft, γ_er = {:.2} {}",
        design.min_reinf_moment_kft, report.gamma_er, status_icon(report.min_reinf));
    match report.s_max {
        Some(s_max) => println!("  Crack ctrl:   s_max = {:.2}\" ({}) {}",
            s_max, evaluation.exposure, status_icon(report.crack_control)),
        None => println!("  Crack ctrl:   f_ct ≤ 0.8 f_r, no spacing limit {}",
            status_icon(report.crack_control)),
    }
    println!("  Ductility:    ε_t = {:.4} vs ε_tl = {:.4} {}",
        report.epsilon_st, design.epsilon_tl, status_icon(report.ductility));
    println!("  Dist reinf:   A_ts = {:.2} in²/ft {}", report.a_ts, status_icon(report.dist_reinf));
    println!();
    println!("═══════════════════════════════════════");
    if design.passes() {
        println!("  RESULT: PASS");
    } else {
        println!("  RESULT: FAIL ({})", design.failed_checks().join(", "));
    }
    println!("═══════════════════════════════════════");
}

fn report_error(e: &CalcError, json: bool) {
    eprintln!("Error: {}", e);
    if !json {
        return;
    }
    if let Ok(body) = serde_json::to_string_pretty(e) {
        eprintln!("{}", body);
    }
}

fn exit_code_for(e: &CalcError) -> i32 {
    if e.is_bad_request() {
        2
    } else if e.is_not_found() {
        3
    } else {
        4
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
