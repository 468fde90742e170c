use crate::conf::MonitorConfig;
use crate::session::node_label;
use crate::transport::discover;
use anyhow::Result;

/// Print every transport discovery would bind, one per line.
pub fn run_list(cfg: &MonitorConfig) -> Result<()> {
    let entries = discover(&cfg.transport.dir, &cfg.transport.pattern)?;

    if entries.is_empty() {
        eprintln!(
            "no transports matching '{}' in {}",
            cfg.transport.pattern,
            cfg.transport.dir.display()
        );
        return Ok(());
    }

    for entry in entries {
        println!("{:<10} {}", node_label(entry.device_id), entry.path.display());
    }

    Ok(())
}
