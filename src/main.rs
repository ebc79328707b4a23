//! llm-guard - Pre-execution gatekeeper for agent shell commands
//!
//! # Usage
//!
//! ```bash
//! # As a PreToolUse hook (reads JSON from stdin, exit code 2 blocks)
//! echo '{"tool_input":{"command":"rm -rf /"}}' | llm-guard
//!
//! # Install into ~/.claude/hooks
//! llm-guard --install
//!
//! # Offline self-test
//! llm-guard --self-test
//! ```

use std::env;
use std::io::{self, Read};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::process;

use llm_guard::{
    audit::AuditLogger,
    config::{CatalogVersion, Config, FaultPolicy},
    engine::Gatekeeper,
    error::{ConfigError, GuardError, InputError},
    input::HookInput,
    install,
    output::{HookResponse, Verdict},
    selftest,
};

/// Print version information
fn print_version() {
    println!("llm-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"llm-guard - Pre-execution gatekeeper for agent shell commands

USAGE:
    llm-guard [OPTIONS] < hook-input.json

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file
        --catalog NAME      Rule catalog: standard, strict (default: from config)
        --install           Copy this binary into ~/.claude/hooks
        --self-test         Run offline checks of the rules and judge fallback

ENVIRONMENT:
    ANTHROPIC_API_KEY       Judge credential (name set by judge.api_key_env).
                            Without it every command that needs the judge is blocked.

EXIT CODES:
    0   allowed
    2   blocked (reason on stderr)
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    install: bool,
    self_test: bool,
    /// Raw `--catalog` value, validated when the config is loaded
    catalog: Option<String>,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            install: false,
            self_test: false,
            catalog: None,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "--install" => result.install = true,
                "--self-test" | "--test" => result.self_test = true,
                "--catalog" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.catalog = Some(args[i].clone());
                    }
                }
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--catalog=") => {
                    result.catalog = Some(arg.trim_start_matches("--catalog=").to_string());
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }

    fn load_config(&self) -> Result<Config, GuardError> {
        let mut config = match self.config_path {
            Some(ref path) => Config::load_from(Path::new(path))?,
            None => Config::load()?,
        };
        if let Some(ref name) = self.catalog {
            config.general.catalog = CatalogVersion::from_str(name)
                .ok_or_else(|| ConfigError::UnknownCatalog(name.clone()))?;
        }
        Ok(config)
    }
}

fn run_install() -> i32 {
    let Some(hooks_dir) = install::default_hooks_dir() else {
        eprintln!("Error: could not determine home directory");
        return 1;
    };

    let installed = env::current_exe().and_then(|exe| install::install_to(&exe, &hooks_dir));
    match installed {
        Ok(path) => {
            println!("Installed llm-guard to {}", path.display());
            println!("Add to ~/.claude/settings.json:");
            println!("{}", install::settings_snippet(&path));
            0
        }
        Err(e) => {
            eprintln!("Error: install failed: {}", e);
            1
        }
    }
}

fn run_self_test(catalog: CatalogVersion) -> i32 {
    println!("Running self-test ({:?} catalog)...", catalog);
    let results = selftest::run(catalog);
    for result in &results {
        println!("  [{}] {}", if result.passed { "ok" } else { "FAILED" }, result.name);
    }

    if results.iter().all(|r| r.passed) {
        println!("All {} checks passed", results.len());
        0
    } else {
        1
    }
}

/// Build the gatekeeper, read stdin, and evaluate
fn evaluate(config: &Config) -> Result<(HookInput, Verdict), GuardError> {
    let api_key = config.judge.api_key_from_env();
    let gatekeeper = Gatekeeper::from_config(config, api_key)?;

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .map_err(InputError::from)?;

    Ok(gatekeeper.check_json(&raw)?)
}

fn run_hook(args: &Args) -> i32 {
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            // No config means no policy to consult: use the default
            let response = HookResponse::fault(e.to_string(), FaultPolicy::default());
            return finish(&mut AuditLogger::default(), None, &response);
        }
    };

    let policy = config.general.on_internal_error;
    let mut logger = AuditLogger::new(config.audit_path().as_deref());

    // Panics become faults; the default hook would add extra stderr output
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluate(&config)));

    match outcome {
        Ok(Ok((input, verdict))) => finish(&mut logger, Some(&input), &HookResponse::Verdict(verdict)),
        Ok(Err(e)) => finish(&mut logger, None, &HookResponse::fault(e.to_string(), policy)),
        Err(_) => finish(
            &mut logger,
            None,
            &HookResponse::fault("internal error during evaluation", policy),
        ),
    }
}

/// Log, report on stderr, and return the exit code
fn finish(logger: &mut AuditLogger, input: Option<&HookInput>, response: &HookResponse) -> i32 {
    // Audit failures never change the outcome
    let _ = logger.log_response(input, response);

    if let Some(line) = response.stderr_line() {
        eprintln!("{}", line);
    }
    response.exit_code()
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    if args.install {
        process::exit(run_install());
    }

    if args.self_test {
        let catalog = match args.load_config() {
            Ok(config) => config.general.catalog,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        process::exit(run_self_test(catalog));
    }

    process::exit(run_hook(&args));
}
