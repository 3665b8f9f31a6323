use colored::*;
use oplus_init::devices::{PROJECTS, SKUS};
use oplus_init::vendor_init::Report;
use std::collections::BTreeMap;

pub fn msg_err(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn msg_main(msg: &str) {
    println!("[{}] {}", "OPLUS".blue().bold(), msg.bold());
}

pub fn msg_sub(msg: &str) {
    println!(" {}", msg);
}

pub fn msg_regular(msg: &str) {
    println!("{}", msg.bold());
}

pub fn print_devices() {
    msg_regular(&format!("Projects: {}", PROJECTS.len().to_string().blue()));
    for p in PROJECTS {
        msg_sub(&format!(
            "{:>7} | {} {} ({})",
            p.code,
            p.family.marketing_name,
            p.model.blue(),
            p.region
        ));
    }
    msg_regular(&format!("SKUs: {}", SKUS.len().to_string().blue()));
    for s in SKUS {
        msg_sub(&format!(
            "{:>7} | {} {} ({})",
            s.code,
            s.marketing_name,
            s.model.blue(),
            s.region
        ));
    }
}

pub fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let project = match report.project {
        Some(p) => format!("{} {} ({})", p.family.marketing_name, p.model, p.region).blue(),
        None => "unrecognized".red(),
    };
    let sku = match report.sku_variant {
        Some(s) => format!("{} {} ({})", s.marketing_name, s.model, s.region).blue(),
        None => "unrecognized".red(),
    };
    msg_main(&format!("Project {}: {}", report.prjname, project));
    msg_main(&format!("SKU {}: {}", report.sku, sku));

    for o in &report.overrides {
        msg_sub(&format!("{}={}", o.name, o.value));
    }
    for d in &report.diagnostics {
        msg_err(d);
    }
    msg_regular(&format!(
        "Overrides: {}",
        report.overrides.len().to_string().blue()
    ));
    Ok(())
}

pub fn print_changes(before: &BTreeMap<String, String>, after: &BTreeMap<String, String>) {
    let mut changed = 0;
    for (name, value) in after {
        match before.get(name) {
            Some(old) if old == value => continue,
            Some(old) => msg_sub(&format!("{name}: {} -> {}", old.red(), value.blue())),
            None => msg_sub(&format!("{name}: {} {}", "(new)".yellow(), value.blue())),
        }
        changed += 1;
    }
    msg_regular(&format!("Changed: {}", changed.to_string().blue()));
}
