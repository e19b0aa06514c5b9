//! Lookup of the human-readable description of an OS error number.
//!
//! On Unix targets this is a thin wrapper around the XSI `strerror_r`, which
//! writes into a caller-provided buffer instead of a shared static one. The
//! lookup itself can fail, and when it does the reason is reported as a
//! [`DescribeError`] so callers can pick a fixed fallback text.

use alloc::{borrow::Cow, string::String};
use core::{
    ffi::CStr,
    fmt::{self, Write as _},
};

/// Size of the stack buffer callers are expected to pass to [`describe`].
///
/// Every description shipped by glibc, musl and the BSDs fits comfortably.
pub const DESCRIPTION_CAPACITY: usize = 256;

/// Why the description of an error number could not be looked up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescribeError {
    /// The platform does not know the error number and no generic
    /// description fit the buffer.
    InvalidCode,
    /// The description did not fit in the buffer.
    BufferExhausted,
    /// The lookup failed for some other reason. Carries the raw error number
    /// reported by the lookup.
    Unknown(i32),
}

impl DescribeError {
    /// Classifies the raw error number returned by a failed lookup.
    pub fn from_raw_os_error(raw: i32) -> Self {
        match raw {
            libc::EINVAL => Self::InvalidCode,
            libc::ERANGE => Self::BufferExhausted,
            other => Self::Unknown(other),
        }
    }

    /// The raw error number the lookup reported.
    pub fn raw_os_error(self) -> i32 {
        match self {
            Self::InvalidCode => libc::EINVAL,
            Self::BufferExhausted => libc::ERANGE,
            Self::Unknown(raw) => raw,
        }
    }

    /// The fixed, `'static` text used in place of the missing description.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidCode => "bad errno",
            Self::BufferExhausted => "out of memory",
            Self::Unknown(_) => "unknown error",
        }
    }
}

impl fmt::Display for DescribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode => write!(f, "error number is not known to the platform"),
            Self::BufferExhausted => write!(f, "error description does not fit the buffer"),
            Self::Unknown(raw) => write!(f, "error description lookup failed (errno = {raw})"),
        }
    }
}

impl core::error::Error for DescribeError {}

/// Writes the description of `code` into `buffer` and returns it, borrowing
/// from `buffer` unless the bytes had to be repaired.
///
/// Error numbers the platform has no entry for still get a generic
/// `Unknown error <code>` description, the same text `strerror` would
/// give them. Bytes that are not valid UTF-8 are replaced with
/// `U+FFFD`.
///
/// The buffer is reused by the caller, so the returned text must be copied
/// if it has to outlive the next lookup.
///
/// # Examples
///
/// ```
/// use errslot_internals::errno::{DESCRIPTION_CAPACITY, describe};
///
/// let mut buffer = [0u8; DESCRIPTION_CAPACITY];
/// # #[cfg(unix)]
/// assert_eq!(
///     describe(libc::ENOENT, &mut buffer).as_deref(),
///     Ok("No such file or directory")
/// );
/// ```
#[cfg(unix)]
pub fn describe(code: i32, buffer: &mut [u8]) -> Result<Cow<'_, str>, DescribeError> {
    if buffer.is_empty() {
        return Err(DescribeError::BufferExhausted);
    }
    buffer.fill(0);

    // SAFETY: `buffer` is a live, exclusively borrowed byte slice, and we pass
    // its exact length. `strerror_r` writes at most `buffer.len()` bytes into
    // it and does not retain the pointer after returning.
    let result = unsafe {
        libc::strerror_r(
            code,
            buffer.as_mut_ptr().cast::<libc::c_char>(),
            buffer.len(),
        )
    };
    match result {
        0 => {}
        // Some libcs fill in "Unknown error <code>" before returning EINVAL,
        // others leave the buffer untouched.
        libc::EINVAL if buffer[0] == 0 => write_unknown(code, buffer)?,
        libc::EINVAL => {}
        other => return Err(DescribeError::from_raw_os_error(other)),
    }

    decode(buffer)
}

/// Writes the description of `code` into `buffer`.
///
/// Targets without `strerror_r` have no description table, so every lookup
/// fails.
#[cfg(not(unix))]
pub fn describe(code: i32, buffer: &mut [u8]) -> Result<Cow<'_, str>, DescribeError> {
    let _ = buffer;
    Err(DescribeError::Unknown(code))
}

/// Reads the NUL-terminated description at the start of `buffer`.
#[cfg_attr(not(unix), allow(dead_code))]
fn decode(buffer: &[u8]) -> Result<Cow<'_, str>, DescribeError> {
    let description =
        CStr::from_bytes_until_nul(buffer).map_err(|_| DescribeError::BufferExhausted)?;
    Ok(String::from_utf8_lossy(description.to_bytes()))
}

/// Writes `Unknown error <code>` into `buffer`, NUL-terminated.
#[cfg_attr(not(unix), allow(dead_code))]
fn write_unknown(code: i32, buffer: &mut [u8]) -> Result<(), DescribeError> {
    let mut writer = BufferWriter { buffer, len: 0 };
    write!(writer, "Unknown error {code}").map_err(|_| DescribeError::InvalidCode)?;
    let len = writer.len;
    writer.buffer[len] = 0;
    Ok(())
}

/// [`fmt::Write`] sink over a byte buffer that always leaves room for a
/// trailing NUL.
#[cfg_attr(not(unix), allow(dead_code))]
struct BufferWriter<'a> {
    /// Destination bytes.
    buffer: &'a mut [u8],
    /// Number of bytes written so far.
    len: usize,
}

impl fmt::Write for BufferWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        if end >= self.buffer.len() {
            return Err(fmt::Error);
        }
        self.buffer[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
