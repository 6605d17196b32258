//! Diagnostic: print the contents of a layer state file.

use anyhow::Context;
use dxf_records::io::las::LasReader;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: las_info <file.las>");
        std::process::exit(2);
    };

    let reader = LasReader::from_file(&path).with_context(|| format!("opening {}", path.display()))?;
    let state = match reader.read() {
        Ok(state) => state,
        Err(e) => {
            println!("  FAIL {} is not a valid layer state file: {e} ({:?})", path.display(), e.kind());
            std::process::exit(1);
        }
    };

    println!("name:          {}", state.name());
    println!("description:   {}", state.description.replace('\n', " / "));
    println!("current layer: {}", state.current_layer());
    println!("paper space:   {}", state.paper_space);
    println!("properties:    {}", state.properties().len());
    println!();
    println!(
        "  {:<24} {:>5} {:<20} {:>6} {:<16} {:>5}",
        "layer", "flags", "color", "weight", "linetype", "transp"
    );
    for property in state.properties() {
        println!(
            "  {:<24} {:>5} {:<20} {:>6} {:<16} {:>5}",
            property.name(),
            property.flags.bits(),
            property.color.to_string(),
            property.line_weight.value(),
            property.linetype_name,
            property.transparency.amount()
        );
    }
    Ok(())
}
