use anyhow::anyhow;
use oplus_init::BionicStore;

pub fn root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Writing through the live store needs root, and only sticks when the
/// process owns a writable property area.
pub fn live_store(write: bool) -> anyhow::Result<BionicStore> {
    let store = BionicStore::new()?;
    if write && !root() {
        return Err(anyhow!("Needs to be ran as root!"));
    }
    Ok(store)
}
