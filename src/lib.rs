pub mod bionic;
pub mod constants;
pub mod devices;
pub mod logging;
pub mod memory;
pub mod property;
pub mod vendor_init;

pub use bionic::BionicStore;
pub use memory::MemoryStore;
pub use property::{PropertyError, PropertyStore, override_property};

use vendor_init::Report;

/// Runs detection and the overrides against the live property area.
pub fn load_live_properties() -> Result<Report, PropertyError> {
    let mut store = BionicStore::new()?;
    Ok(vendor_init::vendor_load_properties(&mut store))
}

/// Vendor init hook, called by init once the boot properties are loaded.
///
/// init declares it as C++ `void vendor_load_properties()`, so the symbol
/// carries the Itanium mangling of that declaration.
#[unsafe(export_name = "_Z22vendor_load_propertiesv")]
pub extern "C" fn vendor_load_properties() {
    logging::init();
    if let Err(e) = load_live_properties() {
        log::error!("{e}");
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn live_properties_need_android() {
        assert!(matches!(
            load_live_properties(),
            Err(PropertyError::Unavailable)
        ));
    }
}
