use serde::Serialize;

/// Identity shared by every regional variant of one device line.
#[derive(Debug, Serialize)]
pub struct DeviceFamily {
    pub marketing_name: &'static str,
    pub brand: &'static str,
    pub device: &'static str,
    pub manufacturer: &'static str,
    pub name: &'static str,
    pub fingerprint: &'static str,
    pub description: &'static str,
    pub build_product: &'static str,
    pub clientidbase: &'static str,
}

/// A device variant selected by `ro.boot.prjname`.
#[derive(Debug, Serialize)]
pub struct ProjectVariant {
    pub code: i64,
    pub region: &'static str,
    pub model: &'static str,
    pub family: &'static DeviceFamily,
}

/// A device variant selected by `ro.boot.product.hardware.sku`. Only the
/// product model is rewritten for these.
#[derive(Debug, Serialize)]
pub struct SkuVariant {
    pub code: i64,
    pub region: &'static str,
    pub model: &'static str,
    pub marketing_name: &'static str,
}

pub static REALME_9_PRO: DeviceFamily = DeviceFamily {
    marketing_name: "Realme 9 Pro",
    brand: "realme",
    device: "RE54CBL1",
    manufacturer: "realme",
    name: "RE54CBL1",
    fingerprint: "realme/RMX3471/RE54CBL1:13/TP1A.220905.001/S.13f10a3-10d8e-82f8b:user/release-keys",
    description: "RE54CBL1-user 13 TP1A.220905.001 S.13f10a3-10d8e-82f8b release-keys",
    build_product: "RE54CBL1",
    clientidbase: "android-oppo",
};

pub static PROJECTS: &[ProjectVariant] = &[
    ProjectVariant {
        code: 21707,
        region: "IN",
        model: "RMX3471",
        family: &REALME_9_PRO,
    },
    ProjectVariant {
        code: 21708,
        region: "EU",
        model: "RMX3472",
        family: &REALME_9_PRO,
    },
    ProjectVariant {
        code: 136747,
        region: "CN",
        model: "RMX3478",
        family: &REALME_9_PRO,
    },
];

pub static SKUS: &[SkuVariant] = &[
    SkuVariant {
        code: 2,
        region: "IN",
        model: "CPH2381",
        marketing_name: "OnePlus Nord CE 2 Lite",
    },
    SkuVariant {
        code: 6,
        region: "GL",
        model: "CPH2409",
        marketing_name: "OnePlus Nord CE 2 Lite",
    },
];

pub fn project(code: i64) -> Option<&'static ProjectVariant> {
    PROJECTS.iter().find(|p| p.code == code)
}

pub fn sku(code: i64) -> Option<&'static SkuVariant> {
    SKUS.iter().find(|s| s.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PROP_VALUE_MAX;
    use std::collections::HashSet;

    #[test]
    fn lookups() {
        assert_eq!(project(21708).map(|p| p.model), Some("RMX3472"));
        assert_eq!(project(136747).map(|p| p.region), Some("CN"));
        assert!(project(0).is_none());
        assert_eq!(sku(6).map(|s| s.model), Some("CPH2409"));
        assert!(sku(21707).is_none());
    }

    #[test]
    fn codes_are_unique() {
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.code).collect();
        let skus: HashSet<_> = SKUS.iter().map(|s| s.code).collect();
        assert_eq!(projects.len(), PROJECTS.len());
        assert_eq!(skus.len(), SKUS.len());
    }

    #[test]
    fn values_fit_the_property_area() {
        for p in PROJECTS {
            let family = p.family;
            for value in [
                family.fingerprint,
                family.description,
                family.marketing_name,
                p.model,
            ] {
                assert!(value.len() < PROP_VALUE_MAX, "{value}");
            }
        }
    }
}
