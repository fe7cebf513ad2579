/// Byte-mode capacity of a version 40 symbol at error correction level M.
/// Serialized payloads above this bound fail fast instead of truncating.
pub const MAX_VCARD_BYTES: usize = 2331;

/// A social profile link carried on the card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLink {
    /// Platform name as it appears in the vCard type tag ("LinkedIn", "GitHub", ...)
    pub platform: String,
    /// Profile URL
    pub url: String,
}

impl SocialLink {
    /// Create a new social link
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// The contact record encoded into the QR symbol.
///
/// All fields are optional; empty core fields are still emitted in the
/// vCard with empty values, so two cards with the same populated fields
/// serialize identically regardless of construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCard {
    /// Display name (serialized as `FN`, "Unknown" when empty)
    pub name: String,
    /// Job title
    pub title: String,
    /// Organization / company
    pub organization: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Free-form location, emitted in the street slot of `ADR`
    pub address: String,
    /// Primary website URL
    pub website: String,
    /// Social profile links, one `URL;type=` line each
    pub socials: Vec<SocialLink>,
}

impl ContactCard {
    /// Card with the given display name and everything else empty
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Serialize to a vCard 3.0 text block, LF-joined.
    ///
    /// Core fields are always present (empty-valued when unset); social
    /// links are emitted only when their URL is non-empty.
    pub fn to_vcard(&self) -> String {
        let name = if self.name.is_empty() {
            "Unknown"
        } else {
            &self.name
        };

        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", name),
            format!("TITLE:{}", self.title),
            format!("ORG:{}", self.organization),
            format!("TEL:{}", self.phone),
            format!("EMAIL:{}", self.email),
            format!("ADR:;;{};;;", self.address),
            format!("URL:{}", self.website),
        ];
        for social in &self.socials {
            if !social.url.is_empty() {
                lines.push(format!("URL;type={}:{}", social.platform, social.url));
            }
        }
        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }
}
