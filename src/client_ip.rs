use std::net::IpAddr;

use axum::http::HeaderMap;
use ipnet::IpNet;

/// Resolve the client address. `X-Forwarded-For` is only trusted when the
/// direct peer is one of the trusted proxies.
pub fn resolve(headers: &HeaderMap, peer: IpAddr, trusted_proxies: &[IpNet]) -> IpAddr {
    if !trusted_proxies.iter().any(|net| net.contains(&peer)) {
        return peer;
    }

    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        // Take the first (leftmost) IP that isn't a trusted proxy
        for ip_str in xff.split(',').map(|s| s.trim()) {
            if let Ok(ip) = ip_str.parse::<IpAddr>() {
                if !trusted_proxies.iter().any(|net| net.contains(&ip)) {
                    return ip;
                }
            }
        }
    }

    peer
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(xff: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_str(xff).unwrap());
        headers
    }

    #[test]
    fn ignores_forwarded_header_from_untrusted_peer() {
        let peer: IpAddr = "203.0.113.9".parse().unwrap();
        let resolved = resolve(&headers("198.51.100.1"), peer, &[]);
        assert_eq!(resolved, peer);
    }

    #[test]
    fn uses_first_untrusted_forwarded_address() {
        let proxies: Vec<IpNet> = vec!["10.0.0.0/8".parse().unwrap()];
        let peer: IpAddr = "10.0.0.2".parse().unwrap();
        let resolved = resolve(&headers("198.51.100.1, 10.0.0.3"), peer, &proxies);
        assert_eq!(resolved, "198.51.100.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn falls_back_to_peer_without_header() {
        let proxies: Vec<IpNet> = vec!["10.0.0.0/8".parse().unwrap()];
        let peer: IpAddr = "10.0.0.2".parse().unwrap();
        assert_eq!(resolve(&HeaderMap::new(), peer, &proxies), peer);
    }
}
