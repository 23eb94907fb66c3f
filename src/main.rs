//!
//! sqlc-gen-bulk plugin binary
//! ---------------------------
//! Reads a generate request (JSON) from stdin or `--input`, writes the response
//! (JSON) to stdout. Logs go to stderr so they never mix with the response.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sqlc_gen_bulk::codegen::{generate, GenerateRequest, GenerateResponse};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--input <request.json>] [--out-dir <dir>]\n\nFlags:\n  --input <path>     Read the generate request from a file instead of stdin\n  --out-dir <dir>    Also write generated files into <dir> (env: SQLC_GEN_BULK_OUTPUT_DIR)\n  -h, --help         Show this help\n\nEnvironment:\n  RUST_LOG           Log filter (default: warn)"
    );
}

fn write_files(dir: &Path, resp: &GenerateResponse) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;
    for f in &resp.files {
        let path = dir.join(&f.name);
        fs::write(&path, &f.contents).with_context(|| format!("write {}", path.display()))?;
        info!(target: "sqlc_gen_bulk", "wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let mut args: Vec<String> = env::args().collect();
    let program = if args.is_empty() { "sqlc-gen-bulk".to_string() } else { args.remove(0) };

    let mut input: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = env::var_os("SQLC_GEN_BULK_OUTPUT_DIR").map(PathBuf::from);

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                if i + 1 >= args.len() { eprintln!("--input requires a path"); print_usage(&program); std::process::exit(2); }
                input = Some(PathBuf::from(&args[i + 1]));
                i += 2; continue;
            }
            "--out-dir" => {
                if i + 1 >= args.len() { eprintln!("--out-dir requires a path"); print_usage(&program); std::process::exit(2); }
                out_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2; continue;
            }
            "-h" | "--help" => { print_usage(&program); return Ok(()); }
            other => { eprintln!("unknown argument: {}", other); print_usage(&program); std::process::exit(2); }
        }
    }

    let raw = match &input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).context("read request from stdin")?;
            s
        }
    };
    let req: GenerateRequest = serde_json::from_str(&raw).context("decode generate request")?;
    info!(target: "sqlc_gen_bulk", "sqlc {}: {} queries", req.sqlc_version, req.queries.len());

    let resp = generate(&req)?;
    if let Some(dir) = &out_dir {
        write_files(dir, &resp)?;
    }

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer(&mut lock, &resp).context("encode generate response")?;
    lock.flush()?;
    Ok(())
}
