//! huffpack CLI - Huffman file compression tool
//!
//! A command-line interface for the huffpack library. Reads the whole
//! input file, compresses or decompresses it, and writes the result.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use huffpack::compress::huffman::symbol_label;
use huffpack::CompressStats;

/// Extension appended to compressed files.
const COMPRESSED_EXTENSION: &str = "huff";

/// Lossless static-Huffman file compressor.
#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (default: INPUT.huff, or INPUT without .huff when decompressing)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Decompress INPUT instead of compressing it
    #[arg(short, long)]
    decompress: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let input = fs::read(&args.input)
        .map_err(|e| format!("cannot read {}: {e}", args.input.display()))?;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, args.decompress));

    if args.verbose {
        eprintln!("Loaded: {:?}", args.input);
        eprintln!("  Size: {}", format_size(input.len() as u64));
        eprintln!(
            "  Mode: {}",
            if args.decompress {
                "decompress"
            } else {
                "compress"
            }
        );
    }

    let start = Instant::now();
    let (output, ratio) = if args.decompress {
        let restored = huffpack::decompress(&input)?;
        let ratio = if restored.is_empty() {
            0.0
        } else {
            input.len() as f64 / restored.len() as f64
        };
        (restored, ratio)
    } else {
        let (container, stats) = huffpack::compress_with_stats(&input)?;
        if args.verbose {
            report_stats(&stats);
        }
        (container, stats.ratio())
    };
    let elapsed = start.elapsed();

    fs::write(&output_path, &output)
        .map_err(|e| format!("cannot write {}: {e}", output_path.display()))?;

    let input_size = input.len() as u64;
    let output_size = output.len() as u64;
    // Compressed size as a share of the uncompressed size, either direction
    let ratio = ratio * 100.0;

    if args.verbose {
        eprintln!("Output: {:?}", output_path);
        eprintln!("  Time: {:.2?}", elapsed);
        eprintln!(
            "  Size: {} -> {} ({:.1}%)",
            format_size(input_size),
            format_size(output_size),
            ratio
        );
    } else {
        println!(
            "{} -> {} ({:.1}%)",
            format_size(input_size),
            format_size(output_size),
            ratio
        );
    }

    Ok(())
}

/// Print the frequency table, code table, tree, and timings of a compression.
fn report_stats(stats: &CompressStats) {
    eprintln!("Frequency table ({} symbols):", stats.frequencies.distinct());
    for (symbol, count) in stats.frequencies.iter() {
        eprintln!("  {:>6}  {}", symbol_label(symbol), count);
    }

    eprintln!("Code table (max length {}):", stats.codes.max_length());
    for (symbol, code) in stats.codes.iter() {
        eprintln!("  {:>6}  {}", symbol_label(symbol), code);
    }

    eprintln!("Huffman tree (depth {}):", stats.tree_depth);
    for line in stats.tree.lines() {
        eprintln!("  {line}");
    }

    eprintln!("Payload bits: {}", stats.payload_bits);
    eprintln!("Bits per byte: {:.3}", stats.bits_per_symbol());
    eprintln!("Analyze time: {:.2?}", stats.analyze_time);
    eprintln!("Build time: {:.2?}", stats.build_time);
    eprintln!("Pack time: {:.2?}", stats.pack_time);
}

/// `file.txt` -> `file.txt.huff` when compressing; `file.txt.huff` ->
/// `file.txt` when decompressing, or `file.txt.out` if there is no `.huff`.
fn default_output(input: &Path, decompress: bool) -> PathBuf {
    let is_compressed = input
        .extension()
        .is_some_and(|ext| ext == COMPRESSED_EXTENSION);

    match (decompress, is_compressed) {
        (false, _) => append_extension(input, COMPRESSED_EXTENSION),
        (true, true) => input.with_extension(""),
        (true, false) => append_extension(input, "out"),
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_compress() {
        assert_eq!(
            default_output(Path::new("notes.txt"), false),
            PathBuf::from("notes.txt.huff")
        );
        assert_eq!(
            default_output(Path::new("dir/archive"), false),
            PathBuf::from("dir/archive.huff")
        );
    }

    #[test]
    fn test_default_output_decompress() {
        assert_eq!(
            default_output(Path::new("notes.txt.huff"), true),
            PathBuf::from("notes.txt")
        );
        assert_eq!(
            default_output(Path::new("blob.bin"), true),
            PathBuf::from("blob.bin.out")
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["huffpack", "-d", "-v", "in.huff", "-o", "out"]).unwrap();
        assert!(args.decompress);
        assert!(args.verbose);
        assert_eq!(args.input, PathBuf::from("in.huff"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }
}
