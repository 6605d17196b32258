//! Extract a hatch pattern from a drawing into a `.pat` file.
//!
//! Usage: `pat_from_dxf <in.dxf> <out.pat> <dxf-name> <pat-name>`

use anyhow::{bail, Context};
use dxf_records::PatFetcher;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [dxf_path, pat_path, dxf_name, pat_name] = args.as_slice() else {
        eprintln!("usage: pat_from_dxf <in.dxf> <out.pat> <dxf-name> <pat-name>");
        bail!("expected 4 arguments, got {}", args.len());
    };

    PatFetcher::new()
        .fetch_pat_file(dxf_path, pat_path, dxf_name, pat_name)
        .with_context(|| format!("extracting {dxf_name} from {dxf_path}"))?;

    println!("wrote {pat_name} to {pat_path}");
    Ok(())
}
