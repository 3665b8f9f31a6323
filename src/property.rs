use log::debug;
use thiserror::Error;

/// Value limit of the legacy property area, terminator included.
/// Only `ro.*` records may be created with longer values.
pub const PROP_VALUE_MAX: usize = 92;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("invalid property name \"{0}\"")]
    InvalidName(String),
    #[error("invalid value for \"{0}\"")]
    InvalidValue(String),
    #[error("value for \"{name}\" is {len} bytes, limit is {max}")]
    ValueTooLong { name: String, len: usize, max: usize },
    #[error("property area is full")]
    StoreFull,
    #[error("\"{0}\" is read-only")]
    ReadOnly(String),
    #[error("property area rejected \"{name}\" ({code})")]
    Rejected { name: String, code: i32 },
    #[error("system property area is only available on Android")]
    Unavailable,
}

/// Low-level access to a property area.
///
/// `update` and `add` do not enforce read-only protection. That is left to
/// the conventional setter of whatever sits on top of the area.
pub trait PropertyStore {
    type Handle: Copy;

    fn find(&self, name: &str) -> Option<Self::Handle>;
    fn update(&mut self, handle: Self::Handle, value: &str) -> Result<(), PropertyError>;
    fn add(&mut self, name: &str, value: &str) -> Result<(), PropertyError>;
    fn get(&self, name: &str) -> Option<String>;

    /// Like libbase's `GetProperty`: an empty value reads as `default`.
    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

pub fn is_read_only(name: &str) -> bool {
    name.starts_with("ro.")
}

pub fn validate_name(name: &str) -> Result<(), PropertyError> {
    if name.is_empty() || name.contains('\0') {
        return Err(PropertyError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Length rule shared by both stores. Updates are always bounded, creation
/// of a read-only record is not.
pub fn validate_value(name: &str, value: &str, creating: bool) -> Result<(), PropertyError> {
    if value.contains('\0') {
        return Err(PropertyError::InvalidValue(name.to_string()));
    }
    let unbounded = creating && is_read_only(name);
    if !unbounded && value.len() >= PROP_VALUE_MAX {
        return Err(PropertyError::ValueTooLong {
            name: name.to_string(),
            len: value.len(),
            max: PROP_VALUE_MAX - 1,
        });
    }
    Ok(())
}

/// Writes `value` to `name` whether or not the record is read-only.
///
/// An existing record is updated in place. A missing one is created only
/// when `allow_create` is set. Store failures are dropped.
pub fn override_property<S: PropertyStore>(
    store: &mut S,
    name: &str,
    value: &str,
    allow_create: bool,
) {
    let result = match store.find(name) {
        Some(handle) => store.update(handle, value),
        None if allow_create => store.add(name, value),
        None => Ok(()),
    };
    match result {
        Ok(()) => debug!("{name}={value}"),
        Err(e) => debug!("override of {name} dropped: {e}"),
    }
}
