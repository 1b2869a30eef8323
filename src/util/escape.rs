/*!
Convenience routines for printing raw bytes in error messages.
*/

/// Provides a `Display` implementation for a single byte.
///
/// The byte is treated as ASCII. Anything that isn't printable ASCII is
/// emitted as an escape sequence, with hex digits capitalized.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        for (i, b) in core::ascii::escape_default(self.0).enumerate() {
            let b = if i >= 2 { b.to_ascii_uppercase() } else { b };
            core::fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

/// Provides a `Display` implementation for a byte string that is presumed
/// to be mostly UTF-8. Invalid UTF-8 is replaced with the replacement
/// codepoint, and everything else is escaped like `str::escape_debug`.
#[cfg(feature = "alloc")]
#[derive(Debug)]
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

#[cfg(feature = "alloc")]
impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let lossy = alloc::string::String::from_utf8_lossy(self.0);
        write!(f, "{}", lossy.escape_debug())
    }
}
