// crates/infra/src/win32.rs
//! Owner SIDs and account names through the Win32 security API.

use std::{ffi::OsStr, io, os::windows::ffi::OsStrExt, path::Path, ptr};

use windows_sys::Win32::{
    Foundation::{ERROR_SUCCESS, HLOCAL, LocalFree},
    Security::{
        Authorization::{ConvertSidToStringSidW, ConvertStringSidToSidW, GetNamedSecurityInfoW, SE_FILE_OBJECT},
        LookupAccountSidW, OWNER_SECURITY_INFORMATION, PSECURITY_DESCRIPTOR, PSID, SID_NAME_USE,
    },
};

/// Longest account or domain name accepted from `LookupAccountSidW`.
const NAME_CAPACITY: usize = 256;

fn to_wide(value: &OsStr) -> Vec<u16> {
    value.encode_wide().chain(std::iter::once(0)).collect()
}

/// Reads a NUL-terminated UTF-16 string allocated by the system.
///
/// # Safety
///
/// `text` must point at a NUL-terminated buffer.
unsafe fn from_wide_ptr(text: *const u16) -> String {
    let mut len = 0;
    // SAFETY: the caller guarantees a terminator within the buffer.
    unsafe {
        while *text.add(len) != 0 {
            len += 1;
        }
        String::from_utf16_lossy(std::slice::from_raw_parts(text, len))
    }
}

fn from_wide_buffer(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&unit| unit == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// String form (`S-1-5-...`) of the SID owning `path`.
pub fn owner_sid(path: &Path) -> io::Result<String> {
    let wide = to_wide(path.as_os_str());
    let mut owner: PSID = ptr::null_mut();
    let mut descriptor: PSECURITY_DESCRIPTOR = ptr::null_mut();

    // SAFETY: every out-pointer is valid for writes; the descriptor is freed below.
    let status = unsafe {
        GetNamedSecurityInfoW(
            wide.as_ptr(),
            SE_FILE_OBJECT,
            OWNER_SECURITY_INFORMATION,
            &mut owner,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            &mut descriptor,
        )
    };
    if status != ERROR_SUCCESS {
        return Err(io::Error::from_raw_os_error(status as i32));
    }

    let mut text: *mut u16 = ptr::null_mut();
    // SAFETY: `owner` points into `descriptor`, which is still alive.
    let converted = unsafe { ConvertSidToStringSidW(owner, &mut text) } != 0;
    let result = if converted {
        // SAFETY: the system returned a NUL-terminated string.
        let sid = unsafe { from_wide_ptr(text) };
        // SAFETY: allocated with LocalAlloc by ConvertSidToStringSidW.
        unsafe { LocalFree(text as HLOCAL) };
        Ok(sid)
    } else {
        Err(io::Error::last_os_error())
    };

    // SAFETY: allocated with LocalAlloc by GetNamedSecurityInfoW.
    unsafe { LocalFree(descriptor as HLOCAL) };
    result
}

/// Account name and domain of a string SID.
pub fn lookup_account(sid: &str) -> Option<(String, String)> {
    let wide = to_wide(OsStr::new(sid));
    let mut binary: PSID = ptr::null_mut();
    // SAFETY: `wide` is NUL-terminated; `binary` is freed below.
    if unsafe { ConvertStringSidToSidW(wide.as_ptr(), &mut binary) } == 0 {
        return None;
    }

    let mut name = [0u16; NAME_CAPACITY];
    let mut domain = [0u16; NAME_CAPACITY];
    let mut name_len = NAME_CAPACITY as u32;
    let mut domain_len = NAME_CAPACITY as u32;
    let mut usage: SID_NAME_USE = 0;
    // SAFETY: buffers and their lengths match; `binary` is a valid SID.
    let found = unsafe {
        LookupAccountSidW(
            ptr::null(),
            binary,
            name.as_mut_ptr(),
            &mut name_len,
            domain.as_mut_ptr(),
            &mut domain_len,
            &mut usage,
        )
    } != 0;
    // SAFETY: allocated with LocalAlloc by ConvertStringSidToSidW.
    unsafe { LocalFree(binary as HLOCAL) };

    found.then(|| (from_wide_buffer(&name), from_wide_buffer(&domain)))
}
