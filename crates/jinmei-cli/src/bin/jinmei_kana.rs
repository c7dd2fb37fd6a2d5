// jinmei-kana: Normalize Japanese text to hiragana.
//
// Reads text from stdin (one per line) and prints the hiragana
// normalization: half-width katakana is widened, regular katakana is
// folded to hiragana, everything else passes through unchanged.
//
// Usage:
//   jinmei-kana [OPTIONS] [TEXT...]
//
// Options:
//   --expand      Also list long-vowel-mark expansions
//   --shinjitai   Also print the text with old kanji forms modernized
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use jinmei_jp::{expand_choon, kyuujitai_to_shinjitai, normalize_input};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if jinmei_cli::wants_help(&args) {
        println!("jinmei-kana: Normalize Japanese text to hiragana.");
        println!();
        println!("Usage: jinmei-kana [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, converts each one.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  --expand      Also list long-vowel-mark expansions");
        println!("  --shinjitai   Also print the text with old kanji forms modernized");
        println!("  -h, --help    Print this help");
        return;
    }

    let expand = args.iter().any(|a| a == "--expand");
    let shinjitai = args.iter().any(|a| a == "--shinjitai");
    let texts: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let convert = |text: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let (normalized, _) = normalize_input(text);
        let _ = writeln!(out, "{normalized}");
        if expand {
            for variant in expand_choon(&normalized) {
                let _ = writeln!(out, "  {variant}");
            }
        }
        if shinjitai {
            let modern = kyuujitai_to_shinjitai(&normalized);
            if modern != normalized {
                let _ = writeln!(out, "  {modern}");
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
            convert(text, &mut out);
        }
    } else {
        for text in &texts {
            convert(text, &mut out);
        }
    }
}
