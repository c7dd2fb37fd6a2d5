// jinmei-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use jinmei_dict::{DictError, MemoryDictionary};

/// Dictionary file name looked for in the standard locations.
const DICT_FILE: &str = "names.jsonl";

/// Search for the dictionary file and load it into memory.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `JINMEI_DICT_PATH` environment variable
/// 3. `~/.jinmei/names.jsonl`
/// 4. `/usr/share/jinmei/names.jsonl`
/// 5. Current working directory (looks for `names.jsonl` directly)
pub fn load_dictionary(dict_path: Option<&str>) -> Result<MemoryDictionary, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            return MemoryDictionary::from_path(path)
                .map_err(|e: DictError| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of paths to check for the dictionary file.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. JINMEI_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("JINMEI_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".jinmei").join(DICT_FILE));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/jinmei").join(DICT_FILE));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
