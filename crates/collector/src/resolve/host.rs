//! Memoized host-identity resolution.
//!
//! Raw host identifiers arrive either as hostnames or as dotted-quad IPv4
//! literals. Literals get one reverse-DNS attempt; everything else (and every
//! failed lookup) keeps the raw value. Results are memoized for the lifetime
//! of the resolver and never evicted.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

/// Reverse lookup backend. `None` means the address has no usable reverse
/// entry; the caller decides the fallback, which keeps the degraded path
/// visible in the signature.
pub trait ReverseDns: Send + Sync {
    fn reverse(&self, addr: Ipv4Addr) -> Option<String>;
}

/// System resolver backend. Potentially slow: this performs a blocking
/// network call subject to the platform resolver's own timeouts.
pub struct SystemDns;

impl ReverseDns for SystemDns {
    fn reverse(&self, addr: Ipv4Addr) -> Option<String> {
        dns_lookup::lookup_addr(&IpAddr::V4(addr)).ok()
    }
}

/// Memoized raw-host → display-name resolver.
///
/// Cheap to clone; all clones share one cache. The cache supports concurrent
/// read and fill-if-absent from any number of producing sources without
/// locking out unrelated keys. Concurrent misses on the same key may both
/// perform the lookup, but the first insert wins and every caller returns
/// the cached value. The first completed resolution is durable; there are no
/// retries.
#[derive(Clone)]
pub struct HostResolver {
    inner: Arc<Inner>,
}

struct Inner {
    cache: DashMap<String, String>,
    dns: Box<dyn ReverseDns>,
}

impl HostResolver {
    pub fn new(dns: Box<dyn ReverseDns>) -> Self {
        Self {
            inner: Arc::new(Inner {
                cache: DashMap::new(),
                dns,
            }),
        }
    }

    /// Resolver backed by the system's reverse DNS.
    pub fn system() -> Self {
        Self::new(Box::new(SystemDns))
    }

    /// Resolve a raw host identifier to its display name.
    ///
    /// Idempotent and safe under concurrent invocation. Non-literal hosts are
    /// assumed to already be names and never touch the network.
    pub fn resolve(&self, raw: &str) -> String {
        if let Some(cached) = self.inner.cache.get(raw) {
            return cached.clone();
        }

        let resolved = self.lookup(raw);
        self.inner
            .cache
            .entry(raw.to_string())
            .or_insert(resolved)
            .clone()
    }

    fn lookup(&self, raw: &str) -> String {
        if !is_ipv4_literal(raw) {
            return raw.to_string();
        }

        match raw.parse::<Ipv4Addr>() {
            Ok(addr) => match self.inner.dns.reverse(addr) {
                Some(name) => name,
                None => {
                    tracing::debug!(host = raw, "reverse lookup failed, keeping raw value");
                    raw.to_string()
                }
            },
            // Matches the literal pattern but is not an address ("999.0.0.1")
            Err(_) => raw.to_string(),
        }
    }

    /// Resolve with an upper bound on lookup latency.
    ///
    /// The blocking lookup runs on the blocking pool; on timeout the raw
    /// value is returned immediately while the lookup is left to finish and
    /// seed the cache in the background.
    pub async fn resolve_with_timeout(&self, raw: &str, timeout: Duration) -> String {
        let resolver = self.clone();
        let key = raw.to_string();
        let lookup = tokio::task::spawn_blocking(move || resolver.resolve(&key));

        match tokio::time::timeout(timeout, lookup).await {
            Ok(Ok(name)) => name,
            _ => {
                tracing::debug!(host = raw, "host resolution timed out, keeping raw value");
                raw.to_string()
            }
        }
    }

    /// Number of memoized hosts.
    pub fn len(&self) -> usize {
        self.inner.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.cache.is_empty()
    }
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::system()
    }
}

/// Syntactic dotted-quad check: four groups of 1–3 digits separated by
/// periods. No octet-range validation.
fn is_ipv4_literal(host: &str) -> bool {
    let mut groups = 0;
    for group in host.split('.') {
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}
