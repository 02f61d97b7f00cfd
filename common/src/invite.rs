//! Links handed out to guests.

/// Query parameter carrying a guest's name on a personal invitation link.
pub const GUEST_QUERY_PARAM: &str = "guest";

/// Query string naming one guest: `guest={name}`, percent-encoded.
pub fn guest_query(guest_name: &str) -> String {
    format!("{GUEST_QUERY_PARAM}={}", urlencoding::encode(guest_name))
}

/// Personal invitation link: `{origin}?guest={name}`.
pub fn personal_link(origin: &str, guest_name: &str) -> String {
    format!("{origin}?{}", guest_query(guest_name))
}

/// Pull the guest name out of a raw (still encoded) query string.
///
/// Pairs are split on `&` before decoding so names containing `&` survive.
/// `+` is read as a space. Blank or undecodable values yield `None`.
pub fn guest_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let raw = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == GUEST_QUERY_PARAM).then_some(value)
    })?;
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded).ok()?;
    let name = decoded.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Google Maps search link for a venue address.
pub fn maps_link(address: &str) -> String {
    format!("https://maps.google.com?q={}", urlencoding::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_link_encodes_name() {
        assert_eq!(
            personal_link("https://raditjani.example", "Sarah & Mike Johnson"),
            "https://raditjani.example?guest=Sarah%20%26%20Mike%20Johnson"
        );
    }

    #[test]
    fn ampersand_in_name_survives_query_parsing() {
        let link = personal_link("https://raditjani.example", "Sarah & Mike Johnson");
        let (_, query) = link.split_once('?').unwrap();
        assert_eq!(
            guest_from_query(query).as_deref(),
            Some("Sarah & Mike Johnson")
        );
    }

    #[test]
    fn plus_reads_as_space() {
        assert_eq!(
            guest_from_query("guest=Emma+Rodriguez").as_deref(),
            Some("Emma Rodriguez")
        );
        assert_eq!(
            guest_from_query("guest=C%2B%2B+Fan").as_deref(),
            Some("C++ Fan")
        );
    }

    #[test]
    fn other_params_are_ignored() {
        assert_eq!(
            guest_from_query("?utm=mail&guest=David%20%26%20Lisa%20Chen&x").as_deref(),
            Some("David & Lisa Chen")
        );
        assert_eq!(guest_from_query("utm=mail"), None);
        assert_eq!(guest_from_query("guest="), None);
        assert_eq!(guest_from_query(""), None);
    }

    #[test]
    fn maps_link_encodes_address() {
        assert_eq!(
            maps_link("123 Wedding Avenue, Love City"),
            "https://maps.google.com?q=123%20Wedding%20Avenue%2C%20Love%20City"
        );
    }
}
