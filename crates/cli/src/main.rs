//! RISC-V single-cycle datapath simulator CLI.
//!
//! This binary provides a single entry point for running the datapath model. It performs:
//! 1. **Image run:** Loads a flat program image (and optional data image) and ticks it.
//! 2. **Demo:** Runs the built-in counter loop with no files at all.
//! 3. **Reporting:** Prints the final PC, the diagnostic register, non-zero registers,
//!    and statistics as text or JSON.
//!
//! Logging goes through `tracing`; set `RUST_LOG` to override the default filter.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use riscy_core::config::Config;
use riscy_core::sim::{loader, programs};
use riscy_core::stats::STATS_SECTIONS;
use riscy_core::Simulator;

/// Ticks run when `--ticks` is not given.
const DEFAULT_TICKS: u64 = 20;

/// Register incremented by the demo loop.
const DEMO_REG: u32 = 2;

/// Register receiving the demo loop's link value.
const DEMO_LINK_REG: u32 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RISC-V single-cycle datapath simulator",
    long_about = "Run a flat RV32I program image on the single-cycle datapath model.\n\nExamples:\n  sim demo --ticks 20\n  sim run -f prog.bin --data data.bin --ticks 100 --trace\n  sim run -f prog.bin --config machine.json --stats-json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a flat little-endian program image.
    Run {
        /// Program image loaded at instruction word 0.
        #[arg(short, long)]
        file: String,

        /// Data image loaded at data word 0.
        #[arg(short, long)]
        data: Option<String>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of ticks to run.
        #[arg(short, long, default_value_t = DEFAULT_TICKS)]
        ticks: u64,

        /// Register exposed on the diagnostic port (overrides the config).
        #[arg(long)]
        debug_reg: Option<usize>,

        /// Log every tick's disassembled instruction.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of text.
        #[arg(long)]
        stats_json: bool,

        /// Comma-separated statistics sections (summary, instruction_mix).
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,
    },

    /// Run the built-in counter loop (`addi x2, x2, 1; jal x5, -4`).
    Demo {
        /// Number of ticks to run.
        #[arg(short, long, default_value_t = DEFAULT_TICKS)]
        ticks: u64,

        /// Log every tick's disassembled instruction.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            data,
            config,
            ticks,
            debug_reg,
            trace,
            stats_json,
            stats,
        }) => {
            init_tracing(trace);
            let opts = RunOptions {
                file,
                data,
                config,
                ticks,
                debug_reg,
                trace,
                stats_json,
                stats,
            };
            cmd_run(&opts);
        }
        Some(Commands::Demo { ticks, trace }) => {
            init_tracing(trace);
            cmd_demo(ticks, trace);
        }
        None => {
            eprintln!("RISC-V datapath simulator: pass a subcommand");
            eprintln!();
            eprintln!("  sim run -f <prog.bin>   Run a program image");
            eprintln!("  sim demo                Run the built-in counter loop");
            eprintln!();
            eprintln!("  sim --help  for full options");
            process::exit(1);
        }
    }
}

/// Options gathered from `sim run`.
#[derive(Debug)]
struct RunOptions {
    file: String,
    data: Option<String>,
    config: Option<String>,
    ticks: u64,
    debug_reg: Option<usize>,
    trace: bool,
    stats_json: bool,
    stats: Vec<String>,
}

/// Installs the `tracing` subscriber. `--trace` raises the default filter to
/// `debug` for the core crate; `RUST_LOG` always wins.
fn init_tracing(trace: bool) {
    let default = if trace { "riscy_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Prints `msg` and exits with status 1.
fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("\n[!] FATAL: {msg}");
    process::exit(1);
}

/// Loads images and configuration, runs for the requested ticks, and reports.
fn cmd_run(opts: &RunOptions) {
    let mut config = match &opts.config {
        Some(path) => {
            let bytes = loader::load_binary(path).unwrap_or_else(|e| fatal(e));
            let text = String::from_utf8_lossy(&bytes);
            Config::from_json(&text).unwrap_or_else(|e| fatal(e))
        }
        None => Config::default(),
    };
    if let Some(reg) = opts.debug_reg {
        config.general.debug_reg = reg;
    }
    config.general.trace_instructions |= opts.trace;

    let program = loader::load_program(&opts.file).unwrap_or_else(|e| fatal(e));
    let data = match &opts.data {
        Some(path) => loader::load_program(path).unwrap_or_else(|e| fatal(e)),
        None => Vec::new(),
    };

    let mut sim = Simulator::new(&config, &program, &data).unwrap_or_else(|e| fatal(e));

    println!("[*] Program: {} ({} words)", opts.file, program.len());
    println!(
        "    Trace: {}  Reset PC: {:#010x}  IMEM: {} words  DMEM: {} words",
        config.general.trace_instructions,
        config.general.reset_pc,
        config.memory.imem_words,
        config.memory.dmem_words
    );

    sim.run(opts.ticks);
    report(&sim, opts.stats_json, &opts.stats);
}

/// Runs the counter loop and reports.
fn cmd_demo(ticks: u64, trace: bool) {
    let mut config = Config::default();
    config.general.trace_instructions = trace;
    config.general.debug_reg = DEMO_REG as usize;

    let program = programs::counter_loop(DEMO_REG, DEMO_LINK_REG);
    let mut sim = Simulator::new(&config, &program, &[]).unwrap_or_else(|e| fatal(e));

    println!("[*] Demo: counter loop on x{DEMO_REG}");
    sim.run(ticks);
    report(&sim, false, &[]);
}

/// Prints final state and statistics.
fn report(sim: &Simulator, stats_json: bool, sections: &[String]) {
    let regs = sim.cpu.regs.snapshot();

    println!();
    println!("[*] Final PC: {:#010x}", sim.pc());
    println!(
        "[*] Debug x{}: {:#010x} ({})",
        sim.cpu.regs.debug_reg(),
        sim.debug_out(),
        sim.debug_out()
    );
    println!("[*] Non-zero registers:");
    for (idx, val) in regs.iter().enumerate() {
        if *val != 0 {
            println!("    x{idx:<2} = {val:#010x}");
        }
    }
    println!();

    if stats_json {
        match serde_json::to_string_pretty(sim.stats()) {
            Ok(json) => println!("{json}"),
            Err(e) => fatal(e),
        }
        return;
    }
    for name in sections {
        if !STATS_SECTIONS.contains(&name.as_str()) {
            eprintln!("[!] Unknown stats section '{name}' (known: {STATS_SECTIONS:?})");
        }
    }
    print!("{}", sim.stats().render_sections(sections));
}
