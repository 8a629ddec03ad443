/// Reduces a URL to its last two host labels, e.g. `https://www.example.com/a` -> `example.com`.
///
/// Only a leading `http://` or `https://` is stripped. Multi-label public
/// suffixes are not recognised, so `example.co.uk` yields `co.uk`. Ports,
/// percent-encoding and IDNs pass through untouched. A host with a single
/// label is returned as-is.
pub fn extract_domain(url: &str) -> String {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();

    let mut labels = authority.rsplit('.');
    let tld = labels.next().unwrap_or_default();
    match labels.next() {
        Some(sld) => format!("{sld}.{tld}"),
        None => tld.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::extract_domain;

    #[test]
    fn strips_scheme_path_and_subdomain() {
        assert_eq!(extract_domain("https://www.example.com/a/b?x=1"), "example.com");
        assert_eq!(extract_domain("http://news.bbc.com#top"), "bbc.com");
        assert_eq!(extract_domain("https://a.b.c.org?q=1/2"), "c.org");
    }

    #[test]
    fn keeps_only_two_labels_of_multi_label_suffix() {
        assert_eq!(extract_domain("example.co.uk/page"), "co.uk");
        assert_eq!(extract_domain("https://shop.example.com.au/"), "com.au");
    }

    #[test]
    fn scheme_match_is_literal() {
        // Anything other than the two literal prefixes is cut at its first slash.
        assert_eq!(extract_domain("HTTPS://www.example.com"), "HTTPS:");
        assert_eq!(extract_domain("ftp://files.example.org/x"), "ftp:");
        assert_eq!(extract_domain("http://https://a.example.com"), "https:");
    }

    #[test]
    fn port_is_not_stripped() {
        assert_eq!(extract_domain("http://api.example.com:8080/v1"), "example.com:8080");
    }

    #[test]
    fn degraded_inputs_do_not_panic() {
        assert_eq!(extract_domain(""), "");
        assert_eq!(extract_domain("http://localhost:3000/"), "localhost:3000");
        assert_eq!(extract_domain("https://"), "");
    }
}
