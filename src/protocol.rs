//! Proxy protocols and scheme matching.

use std::fmt;

/// Protocol of a proxy endpoint.
///
/// `None` is the unset/invalid sentinel; a proxy carrying it is considered
/// empty and is rejected by the pool. `Direct` means no proxying at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    None,
    Http,
    Https,
    Socks4,
    Socks4a,
    Socks5,
    Socks5h,
    Direct,
}

impl Protocol {
    /// Lowercase name as used in the canonical proxy string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::None => "none",
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Socks4 => "socks4",
            Protocol::Socks4a => "socks4a",
            Protocol::Socks5 => "socks5",
            Protocol::Socks5h => "socks5h",
            Protocol::Direct => "direct",
        }
    }

    /// Resolve a scheme token to a protocol, case-insensitively.
    ///
    /// Unknown schemes resolve to [`Protocol::None`]; callers treat that as
    /// an invalid protocol. Matching is exact so that a token like
    /// `socks52` does not silently pass as socks5.
    pub fn from_scheme(scheme: &str) -> Protocol {
        match scheme.to_ascii_lowercase().as_str() {
            "http" => Protocol::Http,
            "https" => Protocol::Https,
            "socks4" => Protocol::Socks4,
            "socks4a" => Protocol::Socks4a,
            "socks5" => Protocol::Socks5,
            "socks5h" => Protocol::Socks5h,
            "direct" => Protocol::Direct,
            _ => Protocol::None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_schemes() {
        assert_eq!(Protocol::from_scheme("http"), Protocol::Http);
        assert_eq!(Protocol::from_scheme("https"), Protocol::Https);
        assert_eq!(Protocol::from_scheme("socks4"), Protocol::Socks4);
        assert_eq!(Protocol::from_scheme("socks4a"), Protocol::Socks4a);
        assert_eq!(Protocol::from_scheme("socks5"), Protocol::Socks5);
        assert_eq!(Protocol::from_scheme("socks5h"), Protocol::Socks5h);
        assert_eq!(Protocol::from_scheme("direct"), Protocol::Direct);
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(Protocol::from_scheme("HTTPS"), Protocol::Https);
        assert_eq!(Protocol::from_scheme("Socks5H"), Protocol::Socks5h);
    }

    #[test]
    fn rejects_unknown_schemes() {
        assert_eq!(Protocol::from_scheme("socks52"), Protocol::None);
        assert_eq!(Protocol::from_scheme("ftp"), Protocol::None);
        assert_eq!(Protocol::from_scheme(""), Protocol::None);
        assert_eq!(Protocol::from_scheme("none"), Protocol::None);
    }

    #[test]
    fn displays_lowercase_name() {
        assert_eq!(Protocol::Socks4a.to_string(), "socks4a");
        assert_eq!(Protocol::Direct.to_string(), "direct");
    }
}
