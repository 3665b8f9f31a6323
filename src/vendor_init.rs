use crate::constants::*;
use crate::devices::{self, DeviceFamily, ProjectVariant, SkuVariant};
use crate::property::{PropertyStore, override_property};
use log::{error, info};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOverride {
    pub name: String,
    pub value: String,
    pub allow_create: bool,
}

impl PropertyOverride {
    fn new(name: impl Into<String>, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
            allow_create: true,
        }
    }
}

/// What dispatch decided for one pair of identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub prjname: i64,
    pub sku: i64,
    pub project: Option<&'static ProjectVariant>,
    pub sku_variant: Option<&'static SkuVariant>,
    pub overrides: Vec<PropertyOverride>,
    pub diagnostics: Vec<String>,
}

impl Report {
    /// Value the named property ends up with once the overrides are applied.
    pub fn final_value(&self, name: &str) -> Option<&str> {
        self.overrides
            .iter()
            .rev()
            .find(|o| o.name == name)
            .map(|o| o.value.as_str())
    }
}

pub fn parse_identifier(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Reads an identifier property, falling back to 0 when it is unset or
/// not a base-10 integer.
pub fn read_identifier<S: PropertyStore>(
    store: &S,
    key: &str,
    diagnostics: &mut Vec<String>,
) -> i64 {
    let raw = store.get_or(key, IDENTIFIER_DEFAULT);
    match parse_identifier(&raw) {
        Some(code) => code,
        None => {
            let msg = format!("Malformed {key}: \"{raw}\", using 0");
            error!("{msg}");
            diagnostics.push(msg);
            0
        }
    }
}

fn family_overrides(family: &DeviceFamily, model: &str) -> Vec<PropertyOverride> {
    let mut overrides = Vec::new();
    for source in RO_PROPS_DEFAULT_SOURCE_ORDER {
        overrides.push(PropertyOverride::new(product_prop(source, "brand"), family.brand));
        overrides.push(PropertyOverride::new(product_prop(source, "device"), family.device));
        overrides.push(PropertyOverride::new(
            product_prop(source, "manufacturer"),
            family.manufacturer,
        ));
        overrides.push(PropertyOverride::new(product_prop(source, "name"), family.name));
        overrides.push(PropertyOverride::new(fingerprint_prop(source), family.fingerprint));
        overrides.push(PropertyOverride::new(product_prop(source, "model"), model));
    }

    overrides.push(PropertyOverride::new(BUILD_DESCRIPTION_PROP, family.description));
    overrides.push(PropertyOverride::new(BUILD_PRODUCT_PROP, family.build_product));
    overrides.push(PropertyOverride::new(CLIENTIDBASE_PROP, family.clientidbase));
    overrides.push(PropertyOverride::new(BT_DEFAULT_NAME_PROP, family.marketing_name));
    overrides.push(PropertyOverride::new(USB_PRODUCT_STRING_PROP, family.marketing_name));
    overrides
}

/// Builds the override list for a detected project and SKU. The SKU entry
/// comes last, so it wins over the project's product model.
pub fn plan(prjname: i64, sku: i64) -> Report {
    plan_with(prjname, sku, Vec::new())
}

fn plan_with(prjname: i64, sku: i64, mut diagnostics: Vec<String>) -> Report {
    let mut overrides = Vec::new();

    let project = devices::project(prjname);
    match project {
        Some(variant) => overrides.extend(family_overrides(variant.family, variant.model)),
        None => {
            let msg = format!("Unexpected project name: {prjname}");
            error!("{msg}");
            diagnostics.push(msg);
        }
    }

    let sku_variant = devices::sku(sku);
    match sku_variant {
        Some(variant) => overrides.push(PropertyOverride::new(PRODUCT_MODEL_PROP, variant.model)),
        None => {
            let msg = format!("Unexpected SKU: {sku}");
            error!("{msg}");
            diagnostics.push(msg);
        }
    }

    Report {
        prjname,
        sku,
        project,
        sku_variant,
        overrides,
        diagnostics,
    }
}

pub fn apply<S: PropertyStore>(store: &mut S, report: &Report) {
    for o in &report.overrides {
        override_property(store, &o.name, &o.value, o.allow_create);
    }
}

/// Detects the running variant and rewrites its identity properties.
pub fn vendor_load_properties<S: PropertyStore>(store: &mut S) -> Report {
    let mut diagnostics = Vec::new();
    let prjname = read_identifier(store, PRJNAME_PROP, &mut diagnostics);
    let sku = read_identifier(store, HARDWARE_SKU_PROP, &mut diagnostics);

    let report = plan_with(prjname, sku, diagnostics);
    apply(store, &report);
    info!(
        "prjname {prjname}, sku {sku}: {} properties overridden",
        report.overrides.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn boot(prjname: &str, sku: &str) -> (MemoryStore, Report) {
        let mut store = MemoryStore::from_pairs([
            (PRJNAME_PROP, prjname),
            (HARDWARE_SKU_PROP, sku),
            ("ro.product.product.model", "ossi"),
            ("ro.product.system.brand", "oplus"),
            ("ro.build.description", "ossi-user 13"),
        ]);
        let report = vendor_load_properties(&mut store);
        (store, report)
    }

    #[test]
    fn brand_in_every_namespace() {
        let (store, report) = boot("21707", "0");
        for source in RO_PROPS_DEFAULT_SOURCE_ORDER {
            let name = format!("ro.product.{source}brand");
            assert_eq!(store.get(&name).as_deref(), Some("realme"), "{name}");
            assert_eq!(
                store.get(&format!("ro.{source}build.fingerprint")).as_deref(),
                Some(REALME_9_PRO_FINGERPRINT)
            );
        }
        assert_eq!(store.get("ro.product.brand").as_deref(), Some("realme"));
        assert_eq!(report.project.map(|p| p.region), Some("IN"));
    }

    const REALME_9_PRO_FINGERPRINT: &str =
        "realme/RMX3471/RE54CBL1:13/TP1A.220905.001/S.13f10a3-10d8e-82f8b:user/release-keys";

    #[test]
    fn model_per_project() {
        for (prjname, model) in [("21707", "RMX3471"), ("21708", "RMX3472"), ("136747", "RMX3478")] {
            let (store, _) = boot(prjname, "0");
            assert_eq!(store.get("ro.product.product.model").as_deref(), Some(model));
            assert_eq!(store.get("ro.product.vendor_dlkm.model").as_deref(), Some(model));
            assert_eq!(store.get("ro.product.model").as_deref(), Some(model));
        }
    }

    #[test]
    fn family_extras_written_once() {
        let (store, report) = boot("21708", "0");
        assert_eq!(
            store.get("ro.build.description").as_deref(),
            Some("RE54CBL1-user 13 TP1A.220905.001 S.13f10a3-10d8e-82f8b release-keys")
        );
        assert_eq!(store.get("ro.build.product").as_deref(), Some("RE54CBL1"));
        assert_eq!(store.get("ro.com.google.clientidbase").as_deref(), Some("android-oppo"));
        assert_eq!(store.get("bluetooth.device.default_name").as_deref(), Some("Realme 9 Pro"));
        assert_eq!(store.get("vendor.usb.product_string").as_deref(), Some("Realme 9 Pro"));
        let count = report
            .overrides
            .iter()
            .filter(|o| o.name == "ro.build.description")
            .count();
        assert_eq!(count, 1);
        assert_eq!(report.diagnostics, vec!["Unexpected SKU: 0".to_string()]);
    }

    #[test]
    fn sku_overrides_project_model() {
        let (store, report) = boot("21707", "2");
        assert_eq!(store.get("ro.product.product.model").as_deref(), Some("CPH2381"));
        assert_eq!(store.get("ro.product.vendor.model").as_deref(), Some("RMX3471"));
        assert_eq!(report.final_value("ro.product.product.model"), Some("CPH2381"));
        assert!(report.diagnostics.is_empty());

        let (store, _) = boot("0", "6");
        assert_eq!(store.get("ro.product.product.model").as_deref(), Some("CPH2409"));
        assert_eq!(store.get("ro.product.system.brand").as_deref(), Some("oplus"));
    }

    #[test]
    fn unknown_identifiers_write_nothing() {
        let mut store = MemoryStore::from_pairs([
            (PRJNAME_PROP, "99999"),
            (HARDWARE_SKU_PROP, "99"),
            ("ro.product.product.model", "ossi"),
        ]);
        let before = store.snapshot();
        let report = vendor_load_properties(&mut store);

        assert_eq!(store.snapshot(), before);
        assert!(report.overrides.is_empty());
        assert_eq!(
            report.diagnostics,
            vec![
                "Unexpected project name: 99999".to_string(),
                "Unexpected SKU: 99".to_string()
            ]
        );
    }

    #[test]
    fn missing_identifiers_default_to_zero() {
        let mut store = MemoryStore::new();
        let report = vendor_load_properties(&mut store);
        assert_eq!((report.prjname, report.sku), (0, 0));
        assert!(store.is_empty());
        assert_eq!(report.diagnostics.len(), 2);
    }

    #[test]
    fn empty_identifiers_read_as_zero() {
        let mut store = MemoryStore::from_pairs([(PRJNAME_PROP, ""), (HARDWARE_SKU_PROP, "")]);
        let before = store.snapshot();
        let report = vendor_load_properties(&mut store);

        assert_eq!((report.prjname, report.sku), (0, 0));
        assert_eq!(store.snapshot(), before);
        assert_eq!(
            report.diagnostics,
            vec![
                "Unexpected project name: 0".to_string(),
                "Unexpected SKU: 0".to_string()
            ]
        );
    }

    #[test]
    fn malformed_identifier_is_unrecognized() {
        let (store, report) = boot("21707abc", " 2 ");
        assert_eq!(report.prjname, 0);
        assert_eq!(report.sku, 2);
        assert_eq!(store.get("ro.product.system.brand").as_deref(), Some("oplus"));
        assert_eq!(store.get("ro.product.product.model").as_deref(), Some("CPH2381"));
        assert_eq!(
            report.diagnostics,
            vec![
                "Malformed ro.boot.prjname: \"21707abc\", using 0".to_string(),
                "Unexpected project name: 0".to_string()
            ]
        );
    }

    #[test]
    fn plan_matches_applied_state() {
        let report = plan(136747, 6);
        let mut store = MemoryStore::new();
        apply(&mut store, &report);
        for o in &report.overrides {
            assert_eq!(store.get(&o.name).as_deref(), report.final_value(&o.name));
        }
        // 8 namespaces x 6 fields, 5 family extras, 1 SKU model
        assert_eq!(report.overrides.len(), 8 * 6 + 5 + 1);
    }

    #[test]
    fn report_serializes() {
        let json = serde_json::to_value(plan(21707, 2)).unwrap();
        assert_eq!(json["prjname"], 21707);
        assert_eq!(json["project"]["model"], "RMX3471");
        assert_eq!(json["project"]["family"]["brand"], "realme");
        assert_eq!(json["sku_variant"]["model"], "CPH2381");
        assert_eq!(json["overrides"][0]["name"], "ro.product.bootimage.brand");
    }
}
