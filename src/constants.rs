pub const LOG_TAG: &str = "oplus-init";

pub const PRJNAME_PROP: &str = "ro.boot.prjname";
pub const HARDWARE_SKU_PROP: &str = "ro.boot.product.hardware.sku";
pub const IDENTIFIER_DEFAULT: &str = "0";

/// Partition namespaces that carry their own copy of the product identity,
/// in the order init resolves them. The empty entry is the core namespace.
pub const RO_PROPS_DEFAULT_SOURCE_ORDER: [&str; 8] = [
    "bootimage.",
    "odm.",
    "product.",
    "system.",
    "system_ext.",
    "vendor.",
    "vendor_dlkm.",
    "",
];

pub const BUILD_DESCRIPTION_PROP: &str = "ro.build.description";
pub const BUILD_PRODUCT_PROP: &str = "ro.build.product";
pub const CLIENTIDBASE_PROP: &str = "ro.com.google.clientidbase";
pub const BT_DEFAULT_NAME_PROP: &str = "bluetooth.device.default_name";
pub const USB_PRODUCT_STRING_PROP: &str = "vendor.usb.product_string";
pub const PRODUCT_MODEL_PROP: &str = "ro.product.product.model";

pub fn product_prop(source: &str, field: &str) -> String {
    format!("ro.product.{source}{field}")
}

pub fn fingerprint_prop(source: &str) -> String {
    format!("ro.{source}build.fingerprint")
}
