use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{request::Parts, HeaderMap};
use dashmap::DashMap;
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use nonzero_ext::nonzero;

use crate::error::{AppError, AppResult};
use crate::AppState;

pub type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

pub const CONTACT_BUCKET: &str = "contact";

pub fn contact_quota() -> Quota {
    Quota::per_minute(nonzero!(5u32))
}

/// Keyed limiters grouped by bucket name; each bucket is created on first use
/// with the quota passed at that time.
#[derive(Default)]
pub struct RateLimits {
    buckets: DashMap<&'static str, KeyedLimiter>,
}

impl RateLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&self, bucket: &'static str, quota: Quota, key: &str) -> AppResult<()> {
        let entry = self
            .buckets
            .entry(bucket)
            .or_insert_with(|| RateLimiter::keyed(quota));
        let limiter = entry.value();

        if limiter.check_key(&key.to_string()).is_err() {
            tracing::warn!("Rate limit exceeded for {} bucket", bucket);
            return Err(AppError::RateLimited);
        }
        Ok(())
    }
}

/// The caller's address. The socket peer is used unless the server sits
/// behind a trusted proxy, in which case the first `X-Forwarded-For` hop, then
/// `X-Real-IP`, take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl ClientIp {
    pub fn key(&self) -> &str {
        self.0.as_deref().unwrap_or("unknown")
    }

    pub fn resolve(headers: &HeaderMap, peer: Option<SocketAddr>, trust_proxy: bool) -> Self {
        let forwarded = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let from_proxy = if trust_proxy {
            forwarded("x-forwarded-for").or_else(|| forwarded("x-real-ip"))
        } else {
            None
        };
        ClientIp(from_proxy.or_else(|| peer.map(|addr| addr.ip().to_string())))
    }
}

impl FromRequestParts<Arc<AppState>> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(Self::resolve(&parts.headers, peer, state.trust_proxy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixth_request_in_a_minute_is_rejected() {
        let limits = RateLimits::new();
        for _ in 0..5 {
            assert!(limits.check(CONTACT_BUCKET, contact_quota(), "10.0.0.1").is_ok());
        }
        assert!(matches!(
            limits.check(CONTACT_BUCKET, contact_quota(), "10.0.0.1"),
            Err(AppError::RateLimited)
        ));
        assert!(limits.check(CONTACT_BUCKET, contact_quota(), "10.0.0.2").is_ok());
    }

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, value.parse().unwrap());
        }
        map
    }

    #[test]
    fn forwarded_headers_are_ignored_without_a_trusted_proxy() {
        let peer: SocketAddr = "203.0.113.9:50000".parse().unwrap();
        let spoofed = headers(&[("x-forwarded-for", "1.1.1.1"), ("x-real-ip", "2.2.2.2")]);
        assert_eq!(
            ClientIp::resolve(&spoofed, Some(peer), false),
            ClientIp(Some("203.0.113.9".to_string()))
        );
        assert_eq!(ClientIp::resolve(&spoofed, None, false).key(), "unknown");
    }

    #[test]
    fn trusted_proxy_uses_first_forwarded_hop() {
        let peer: SocketAddr = "10.0.0.1:443".parse().unwrap();
        let forwarded = headers(&[("x-forwarded-for", " 198.51.100.7 , 10.0.0.1")]);
        assert_eq!(
            ClientIp::resolve(&forwarded, Some(peer), true).key(),
            "198.51.100.7"
        );
        let real_ip = headers(&[("x-real-ip", "198.51.100.8")]);
        assert_eq!(ClientIp::resolve(&real_ip, Some(peer), true).key(), "198.51.100.8");
        assert_eq!(ClientIp::resolve(&HeaderMap::new(), Some(peer), true).key(), "10.0.0.1");
    }
}
