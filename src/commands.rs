use crate::print::{msg_main, msg_regular, print_changes, print_report};
use crate::utils::live_store;
use anyhow::anyhow;
use oplus_init::vendor_init::{self, vendor_load_properties};
use oplus_init::{MemoryStore, PropertyStore, override_property};
use std::path::Path;

pub fn plan(prjname: i64, sku: i64, json: bool) -> anyhow::Result<()> {
    let report = vendor_init::plan(prjname, sku);
    print_report(&report, json)
}

pub fn simulate(props: &Path, json: bool) -> anyhow::Result<()> {
    let mut store = MemoryStore::load_build_prop(props)?;
    let before = store.snapshot();
    let report = vendor_load_properties(&mut store);

    print_report(&report, json)?;
    if !json {
        msg_main(&format!("Changes in {}", props.display()));
        print_changes(&before, &store.snapshot());
    }
    Ok(())
}

pub fn apply(json: bool) -> anyhow::Result<()> {
    let mut store = live_store(true)?;
    let report = vendor_load_properties(&mut store);
    print_report(&report, json)
}

pub fn get(name: &str) -> anyhow::Result<()> {
    let store = live_store(false)?;
    match store.get(name) {
        Some(value) => msg_regular(&value),
        None => return Err(anyhow!("\"{}\" is not set", name)),
    }
    Ok(())
}

pub fn override_live(name: &str, value: &str, allow_create: bool) -> anyhow::Result<()> {
    let mut store = live_store(true)?;
    override_property(&mut store, name, value, allow_create);

    // the primitive is fire-and-forget, so read back to report the outcome
    match store.get(name) {
        Some(current) if current == value => {
            msg_regular(&format!("{name}={current}"));
            Ok(())
        }
        Some(current) => Err(anyhow!("\"{}\" is still \"{}\"", name, current)),
        None if allow_create => Err(anyhow!("Failed to create \"{}\"", name)),
        None => Err(anyhow!("\"{}\" doesn't exist", name)),
    }
}
