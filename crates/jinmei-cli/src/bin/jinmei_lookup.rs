// jinmei-lookup: Look up Japanese names in running text.
//
// Reads text from stdin (one line per lookup) and prints the dictionary
// entries matching the longest prefix of each input. Matching entries
// with the same readings and translations are shown as one line listing
// all written forms.
//
// Usage:
//   jinmei-lookup [-d DICT_PATH] [OPTIONS] [TEXT...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (names.jsonl)
//   -n, --max-results N    Maximum number of result groups (default: 20)
//   --min-length N         Require at least N input characters to match
//   --json                 Print one JSON object (or null) per input
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use jinmei_core::NameMatch;
use jinmei_dict::MemoryDictionary;
use jinmei_search::NameSearcher;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = jinmei_cli::parse_dict_path(&args);

    if jinmei_cli::wants_help(&args) {
        println!("jinmei-lookup: Look up Japanese names in text.");
        println!();
        println!("Usage: jinmei-lookup [-d DICT_PATH] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, looks up each one.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (names.jsonl)");
        println!("  -n, --max-results N    Maximum number of result groups (default: 20)");
        println!("  --min-length N         Require at least N input characters to match");
        println!("  --json                 Print one JSON object (or null) per input");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut max_results: usize = jinmei_search::DEFAULT_MAX_RESULTS;
    let mut min_length: Option<usize> = None;
    let mut json = false;
    let mut texts: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-results" {
            if i + 1 < args.len() {
                max_results = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| jinmei_cli::fatal("invalid number for --max-results"));
                skip_next = true;
            } else {
                jinmei_cli::fatal("--max-results requires a value");
            }
        } else if arg == "--min-length" {
            if i + 1 < args.len() {
                let n = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| jinmei_cli::fatal("invalid number for --min-length"));
                min_length = Some(n);
                skip_next = true;
            } else {
                jinmei_cli::fatal("--min-length requires a value");
            }
        } else if arg == "--json" {
            json = true;
        } else if !arg.starts_with('-') {
            texts.push(arg.clone());
        }
    }

    let dict = jinmei_cli::load_dictionary(dict_path.as_deref())
        .unwrap_or_else(|e| jinmei_cli::fatal(&e));
    let mut searcher = NameSearcher::new(dict);
    searcher.set_max_results(max_results);
    searcher.set_min_input_length(min_length);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let lookup = |text: &str,
                  searcher: &NameSearcher<MemoryDictionary>,
                  out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = searcher
            .search(text)
            .unwrap_or_else(|e| jinmei_cli::fatal(&format!("search failed: {e}")));

        if json {
            let rendered = match &result {
                Some(r) => serde_json::to_string(r)
                    .unwrap_or_else(|e| jinmei_cli::fatal(&format!("serialization failed: {e}"))),
                None => "null".to_string(),
            };
            let _ = writeln!(out, "{rendered}");
            return;
        }

        match result {
            None => {
                let _ = writeln!(out, "{text}: (no matches)");
            }
            Some(r) => {
                let _ = writeln!(out, "{text} (matched {} chars):", r.match_len);
                for m in &r.names {
                    let _ = writeln!(out, "  {}", render_match(m));
                }
                if r.more {
                    let _ = writeln!(out, "  ...");
                }
            }
        }
    };

    if texts.is_empty() {
        // Read from stdin
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            lookup(text, &searcher, &mut out);
        }
    } else {
        for text in &texts {
            lookup(text, &searcher, &mut out);
        }
    }
}

/// One result line: written forms, readings, then the translations.
fn render_match(m: &NameMatch) -> String {
    let head = if m.entry.kanji.is_empty() {
        m.entry.readings.join(", ")
    } else {
        format!("{} [{}]", m.entry.kanji.join(", "), m.entry.readings.join(", "))
    };

    let translations: Vec<String> = m
        .entry
        .translations
        .iter()
        .map(|tr| {
            let details = tr.details.join(", ");
            if tr.tags.is_empty() {
                details
            } else {
                let tags: Vec<&str> = tr.tags.iter().map(|t| t.label()).collect();
                format!("{details} ({})", tags.join(", "))
            }
        })
        .collect();

    format!("{head}: {}", translations.join("; "))
}
