//! Static knowledge base of best-practice configuration profiles, keyed
//! by deployment size. Pure table lookup, no computation.

use std::str::FromStr;

/// Fixed response for unrecognized catalog keys.
pub const INVALID_USE_CASE: &str =
    "Invalid use case. Valid options are: small, medium, large.";

/// Deployment size a best-practice profile is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    /// Up to roughly 100 concurrent listeners.
    Small,
    /// Roughly 100 to 1000 concurrent listeners.
    Medium,
    /// More than 1000 concurrent listeners.
    Large,
}

impl FromStr for UseCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(format!("Unknown use case: {s}")),
        }
    }
}

/// Returns the advisory text for a deployment size.
#[must_use]
pub const fn lookup(use_case: UseCase) -> &'static str {
    match use_case {
        UseCase::Small => SMALL_PROFILE,
        UseCase::Medium => MEDIUM_PROFILE,
        UseCase::Large => LARGE_PROFILE,
    }
}

/// String-keyed lookup for callers that pass untrusted input. Unknown
/// keys get the fixed [`INVALID_USE_CASE`] message.
#[must_use]
pub fn lookup_key(key: &str) -> &'static str {
    key.parse::<UseCase>()
        .map_or(INVALID_USE_CASE, lookup)
}

const SMALL_PROFILE: &str = "\
# Icecast Best Practices for Small Streams (up to ~100 listeners)

## Limits
- clients: 128 is plenty; every reserved slot costs memory whether used or not.
- sources: 2-4 covers a live encoder plus a fallback relay.
- queue-size: 262144 (256 KB) absorbs typical encoder jitter.
- burst-size: 65535 gives players a fast start without starving the queue.
- threadpool: the default of 5 is fine at this scale.

## Authentication
- Always set source-password and admin-password, and never to the
  distribution defaults.
- Rename the admin user away from 'admin'.
- Leave relay-password unset only if you are certain no relay will ever
  pull from this server.

## Mounts
- Define one named mount (for example /live) rather than streaming to an
  implicit endpoint, so URLs stay stable when you reorganize.
- A fallback mount is optional at this scale; add one if you restart
  the encoder on a schedule.

## Logging
- loglevel 3 (info); 4 is only useful while debugging a specific problem.
- logsize 10000 with logarchive enabled keeps history without filling disk.
";

const MEDIUM_PROFILE: &str = "\
# Icecast Best Practices for Medium Streams (~100-1000 listeners)

## Limits
- clients: size at roughly twice your expected peak, e.g. 2000 for a
  1000-listener peak, so reconnect storms do not hit the ceiling.
- sources: 4-8 if you run multiple channels or bitrate variants.
- queue-size: 524288 (512 KB); mobile listeners on flaky links need the
  extra buffer.
- burst-size: keep at or below half of queue-size; 131072 is a good start.
- source-timeout / client-timeout: lower to 10 and 15 seconds so dead
  connections free their slots quickly.

## Authentication
- Distinct source-password, admin-password, and relay-password; rotating
  one must not force rotating the others.
- Use per-mount source passwords when different DJs publish to different
  mounts.

## Mounts
- One mount per channel plus a fallback mount playing station
  identification or silence, with fallback-override enabled.
- Set max-listeners per mount below the global clients limit so one
  popular channel cannot starve the rest.

## Reliability
- Run a relay on a second host and publish listeners across both via DNS
  or your load balancer.
- Enable use-x-forwarded-for when fronted by a reverse proxy, or your
  listener statistics will count the proxy as one client.

## Logging
- loglevel 3, logarchive enabled, and ship access logs to your analytics
  pipeline; listener-minutes are the number advertisers ask for.
";

const LARGE_PROFILE: &str = "\
# Icecast Best Practices for Large Streams (1000+ listeners)

## Topology
- A single Icecast process serves a few thousand listeners comfortably;
  beyond that, scale out with a master server feeding edge relays rather
  than scaling one machine up.
- Keep the master private: sources and relays connect to it, listeners
  only ever reach the edges.

## Limits
- clients: on edges, size to measured peak plus 50% headroom; on the
  master, a few dozen slots for relays is enough.
- threadpool: raise to 10 on edge servers handling thousands of sockets.
- queue-size: 1048576 (1 MB) on edges; international listeners see
  multi-second jitter.
- burst-size: half of queue-size at most; oversized bursts multiply
  memory use by listener count.
- header-timeout: 5 seconds on edges to shed half-open connections from
  port scanners.

## Authentication
- relay-password is mandatory in a master/edge topology and must differ
  from source-password.
- Admin interfaces belong behind a VPN or allowlist, not on the public
  listener port.

## Mounts
- Every public mount needs a fallback chain ending in a generated
  stream (station ID loop), so a dying encoder never hard-drops
  thousands of listeners at once.

## Operations
- Enable logarchive and rotate aggressively; access logs at this scale
  grow by gigabytes per day.
- Watch the server's own listener count statistics, not just OS socket
  counts; the difference is your half-open connection load.
";

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
