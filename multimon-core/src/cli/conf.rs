use crate::conf::MonitorConfig;
use serde::Serialize;

/// Print the resolved configuration, JSON unless `yaml` is set.
pub fn dump(cfg: &MonitorConfig, yaml: bool) -> anyhow::Result<()> {
    if yaml {
        dump_yaml(cfg)
    } else {
        dump_json(cfg)
    }
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
