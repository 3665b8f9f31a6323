//! The live property area, reached through bionic's low-level property API.
//!
//! `__system_property_update` and `__system_property_add` only work in the
//! process that mapped the area read-write, which in practice is init.

use crate::property::{PropertyError, PropertyStore, validate_name, validate_value};
use std::ptr::NonNull;

/// Opaque `prop_info` record owned by the property area.
#[repr(C)]
pub struct PropInfo {
    _private: [u8; 0],
}

#[cfg(target_os = "android")]
mod sys {
    use super::PropInfo;
    use libc::{c_char, c_int, c_uint, c_void};

    pub type ReadCallback =
        unsafe extern "C" fn(cookie: *mut c_void, name: *const c_char, value: *const c_char, serial: u32);

    unsafe extern "C" {
        pub fn __system_property_find(name: *const c_char) -> *const PropInfo;
        pub fn __system_property_update(pi: *mut PropInfo, value: *const c_char, len: c_uint) -> c_int;
        pub fn __system_property_add(
            name: *const c_char,
            namelen: c_uint,
            value: *const c_char,
            valuelen: c_uint,
        ) -> c_int;
        pub fn __system_property_read_callback(
            pi: *const PropInfo,
            callback: ReadCallback,
            cookie: *mut c_void,
        );
    }
}

pub struct BionicStore {
    _private: (),
}

impl BionicStore {
    #[cfg(target_os = "android")]
    pub fn new() -> Result<Self, PropertyError> {
        Ok(Self { _private: () })
    }

    #[cfg(not(target_os = "android"))]
    pub fn new() -> Result<Self, PropertyError> {
        Err(PropertyError::Unavailable)
    }
}

#[cfg(target_os = "android")]
unsafe extern "C" fn read_record(
    cookie: *mut libc::c_void,
    name: *const libc::c_char,
    value: *const libc::c_char,
    _serial: u32,
) {
    // cookie is the &mut (String, String) handed to __system_property_read_callback
    let out = unsafe { &mut *(cookie as *mut (String, String)) };
    out.0 = unsafe { std::ffi::CStr::from_ptr(name) }
        .to_string_lossy()
        .into_owned();
    out.1 = unsafe { std::ffi::CStr::from_ptr(value) }
        .to_string_lossy()
        .into_owned();
}

#[cfg(target_os = "android")]
impl BionicStore {
    fn read(&self, handle: NonNull<PropInfo>) -> (String, String) {
        let mut record = (String::new(), String::new());
        unsafe {
            sys::__system_property_read_callback(
                handle.as_ptr(),
                read_record,
                &mut record as *mut (String, String) as *mut libc::c_void,
            );
        }
        record
    }
}

#[cfg(target_os = "android")]
impl PropertyStore for BionicStore {
    type Handle = NonNull<PropInfo>;

    fn find(&self, name: &str) -> Option<Self::Handle> {
        let name = std::ffi::CString::new(name).ok()?;
        let pi = unsafe { sys::__system_property_find(name.as_ptr()) };
        NonNull::new(pi as *mut PropInfo)
    }

    fn update(&mut self, handle: Self::Handle, value: &str) -> Result<(), PropertyError> {
        let (name, _) = self.read(handle);
        validate_value(&name, value, false)?;
        let cvalue = std::ffi::CString::new(value)
            .map_err(|_| PropertyError::InvalidValue(name.clone()))?;
        let ret = unsafe {
            sys::__system_property_update(
                handle.as_ptr(),
                cvalue.as_ptr(),
                value.len() as libc::c_uint,
            )
        };
        if ret == 0 {
            Ok(())
        } else {
            Err(PropertyError::Rejected { name, code: ret })
        }
    }

    fn add(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        validate_name(name)?;
        validate_value(name, value, true)?;
        let cname = std::ffi::CString::new(name)
            .map_err(|_| PropertyError::InvalidName(name.to_string()))?;
        let cvalue = std::ffi::CString::new(value)
            .map_err(|_| PropertyError::InvalidValue(name.to_string()))?;
        let ret = unsafe {
            sys::__system_property_add(
                cname.as_ptr(),
                name.len() as libc::c_uint,
                cvalue.as_ptr(),
                value.len() as libc::c_uint,
            )
        };
        if ret == 0 {
            Ok(())
        } else {
            Err(PropertyError::Rejected {
                name: name.to_string(),
                code: ret,
            })
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        let pi = self.find(name)?;
        Some(self.read(pi).1)
    }
}

#[cfg(not(target_os = "android"))]
impl PropertyStore for BionicStore {
    type Handle = NonNull<PropInfo>;

    fn find(&self, _name: &str) -> Option<Self::Handle> {
        None
    }

    fn update(&mut self, _handle: Self::Handle, value: &str) -> Result<(), PropertyError> {
        validate_value("", value, false)?;
        Err(PropertyError::Unavailable)
    }

    fn add(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        validate_name(name)?;
        validate_value(name, value, true)?;
        Err(PropertyError::Unavailable)
    }

    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn unavailable_off_android() {
        assert!(matches!(BionicStore::new(), Err(PropertyError::Unavailable)));
    }

    #[test]
    fn values_checked_before_the_area() {
        let mut store = BionicStore { _private: () };
        let handle = NonNull::dangling();

        assert!(matches!(
            store.update(handle, &"x".repeat(crate::property::PROP_VALUE_MAX)),
            Err(PropertyError::ValueTooLong { .. })
        ));
        assert_eq!(
            store.add("ro.build.product", "RE54\0CBL1"),
            Err(PropertyError::InvalidValue("ro.build.product".into()))
        );
        assert_eq!(store.update(handle, "RE54CBL1"), Err(PropertyError::Unavailable));
    }
}
