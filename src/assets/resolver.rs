//! Reference classification and path resolution

use crate::host::UrlConverter;

/// Outcome of resolving one raw reference. Never an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Remote, embedded, or already sandbox-native: passed through as-is
    Unchanged(String),
    /// Local reference converted to a loadable address
    Converted(String),
    /// Could not be resolved (e.g. a relative reference with no base path)
    Unresolved,
}

impl Resolved {
    /// The loadable address, if any
    pub fn as_address(&self) -> Option<&str> {
        match self {
            Resolved::Unchanged(addr) | Resolved::Converted(addr) => Some(addr),
            Resolved::Unresolved => None,
        }
    }
}

const REMOTE_PREFIXES: &[&str] = &["http://", "https://"];
const EMBEDDED_PREFIX: &str = "data:";
const FILE_SCHEME: &str = "file://";

/// Resolve a raw reference from the document into a loadable address.
///
/// Classification order, first match wins:
/// 1. host-served local-content address: decode the embedded filesystem
///    path and re-resolve (double indirection through the viewer's own
///    URL space)
/// 2. remote / embedded / sandbox-native address: unchanged
/// 3. `file://` reference: strip scheme, percent-decode, absolute path
/// 4. plain path: absolute passes through decoding; relative joins onto
///    the base document's directory, or fails without a base
///
/// The final filesystem path goes through the host converter; this
/// function performs no I/O itself.
pub fn resolve(
    raw: &str,
    base_document_path: Option<&str>,
    converter: &dyn UrlConverter,
) -> Resolved {
    // Double indirection: an address in the viewer's own local-content
    // URL space decodes back to a filesystem path
    if let Some(prefix) = converter.local_content_prefix() {
        if let Some(tail) = raw.strip_prefix(prefix) {
            let path = decode_local_content_path(tail);
            return convert_path(&path, converter);
        }
    }

    if REMOTE_PREFIXES.iter().any(|p| raw.starts_with(p))
        || raw.starts_with(EMBEDDED_PREFIX)
        || converter
            .native_prefixes()
            .iter()
            .any(|p| raw.starts_with(p))
    {
        return Resolved::Unchanged(raw.to_string());
    }

    if let Some(rest) = raw.strip_prefix(FILE_SCHEME) {
        let path = decode_local_content_path(rest);
        return convert_path(&path, converter);
    }

    let decoded = percent_decode(raw);
    if is_drive_absolute(&decoded) || decoded.starts_with('/') {
        return convert_path(&decoded, converter);
    }

    // Relative reference: meaningless without a base document path
    let Some(base) = base_document_path else {
        return Resolved::Unresolved;
    };
    let joined = join_relative(base, &decoded);
    convert_path(&joined, converter)
}

fn convert_path(path: &str, converter: &dyn UrlConverter) -> Resolved {
    match converter.convert(path) {
        Some(address) => Resolved::Converted(address),
        None => Resolved::Unresolved,
    }
}

/// Decode a URL path component back into a filesystem path, dropping the
/// spurious leading separator URL encoding puts before a drive letter
/// ("/C:/..." -> "C:/...").
fn decode_local_content_path(tail: &str) -> String {
    let decoded = percent_decode(tail);
    if let Some(stripped) = decoded.strip_prefix('/') {
        if is_drive_absolute(stripped) {
            return stripped.to_string();
        }
    }
    decoded
}

/// Platform drive-letter absolute path: `C:`, `C:\...` or `C:/...`
fn is_drive_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Join a relative reference onto the base document's directory.
///
/// The joining separator follows the base path's own style: backslash
/// for drive-letter bases, forward slash otherwise. Redundant separators
/// at the join are trimmed, and the reference's separators are folded
/// into the chosen style.
fn join_relative(base: &str, reference: &str) -> String {
    let sep = if is_drive_absolute(base) { '\\' } else { '/' };

    // Base directory = base minus its last path segment
    let dir = match base.rfind(['/', '\\']) {
        Some(cut) => &base[..cut],
        None => "",
    };
    let dir = dir.trim_end_matches(['/', '\\']);

    let rel = reference
        .trim_start_matches(['/', '\\'])
        .replace(['/', '\\'], &sep.to_string());

    if dir.is_empty() {
        rel
    } else {
        format!("{dir}{sep}{rel}")
    }
}

/// Minimal percent-decoder. Malformed escapes are kept literally; the
/// decoded bytes are interpreted as UTF-8 (lossily).
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
