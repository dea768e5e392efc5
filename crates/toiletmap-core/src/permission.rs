// crates/toiletmap-core/src/permission.rs

//! # Location permission flow
//!
//! `Unrequested -> PermissionPending -> Resolved`. An existing grant skips
//! the round trip. The answer to a request is delivered exactly once; no
//! retry, no re-prompt.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationPermission {
    Fine,
    Coarse,
}

impl LocationPermission {
    /// Requested together; either one is enough.
    pub const ALL: [LocationPermission; 2] = [LocationPermission::Fine, LocationPermission::Coarse];
}

/// The answer to a permission request: requested kind -> granted?
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGrants(HashMap<LocationPermission, bool>);

impl PermissionGrants {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same answer for every kind in `kinds`.
    pub fn uniform(kinds: &[LocationPermission], granted: bool) -> Self {
        Self(kinds.iter().map(|&kind| (kind, granted)).collect())
    }

    pub fn with(mut self, kind: LocationPermission, granted: bool) -> Self {
        self.0.insert(kind, granted);
        self
    }

    pub fn is_granted(&self, kind: LocationPermission) -> bool {
        self.0.get(&kind).copied().unwrap_or(false)
    }

    /// Fine or coarse is enough to show the user's position.
    pub fn any_granted(&self) -> bool {
        LocationPermission::ALL.iter().any(|&k| self.is_granted(k))
    }
}

/// The platform permission subsystem.
pub trait PermissionProvider {
    fn check(&self, kind: LocationPermission) -> bool;

    /// Starts an asynchronous request. The answer comes back later as a
    /// [`PermissionGrants`] handed to [`LocationFlow::complete`].
    fn request(&mut self, kinds: &[LocationPermission]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationFlow {
    #[default]
    Unrequested,
    PermissionPending,
    Resolved(Resolution),
}

impl LocationFlow {
    /// Checks the current grant and either resolves immediately or issues
    /// one request for both kinds. Returns the resolution when it was
    /// reached without a round trip.
    pub fn start<P: PermissionProvider + ?Sized>(&mut self, provider: &mut P) -> Option<Resolution> {
        if *self != LocationFlow::Unrequested {
            return None;
        }
        if LocationPermission::ALL.iter().any(|&k| provider.check(k)) {
            *self = LocationFlow::Resolved(Resolution::Granted);
            return Some(Resolution::Granted);
        }
        provider.request(&LocationPermission::ALL);
        *self = LocationFlow::PermissionPending;
        None
    }

    /// Delivers the answer to a pending request. Ignored (returns `None`)
    /// unless a request is actually pending.
    pub fn complete(&mut self, grants: &PermissionGrants) -> Option<Resolution> {
        if *self != LocationFlow::PermissionPending {
            return None;
        }
        let resolution = if grants.any_granted() {
            Resolution::Granted
        } else {
            Resolution::Denied
        };
        *self = LocationFlow::Resolved(resolution);
        Some(resolution)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LocationFlow::PermissionPending)
    }
}

/// A scripted permission subsystem: fixed current grants, and a log of
/// every request made.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    granted: HashSet<LocationPermission>,
    requests: Vec<Vec<LocationPermission>>,
}

impl StaticPermissions {
    /// Nothing granted yet; any request will be recorded.
    pub fn ungranted() -> Self {
        Self::default()
    }

    pub fn granted(kinds: &[LocationPermission]) -> Self {
        Self {
            granted: kinds.iter().copied().collect(),
            requests: Vec::new(),
        }
    }

    pub fn requests(&self) -> &[Vec<LocationPermission>] {
        &self.requests
    }
}

impl PermissionProvider for StaticPermissions {
    fn check(&self, kind: LocationPermission) -> bool {
        self.granted.contains(&kind)
    }

    fn request(&mut self, kinds: &[LocationPermission]) {
        self.requests.push(kinds.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LocationPermission::{Coarse, Fine};

    #[test]
    fn existing_grant_resolves_without_request() {
        for kind in [Fine, Coarse] {
            let mut provider = StaticPermissions::granted(&[kind]);
            let mut flow = LocationFlow::default();
            assert_eq!(flow.start(&mut provider), Some(Resolution::Granted));
            assert_eq!(flow, LocationFlow::Resolved(Resolution::Granted));
            assert!(provider.requests().is_empty());
        }
    }

    #[test]
    fn missing_grant_requests_both_kinds_once() {
        let mut provider = StaticPermissions::ungranted();
        let mut flow = LocationFlow::default();
        assert_eq!(flow.start(&mut provider), None);
        assert!(flow.is_pending());
        assert_eq!(provider.requests(), [vec![Fine, Coarse]]);

        // No re-prompt while pending.
        assert_eq!(flow.start(&mut provider), None);
        assert_eq!(provider.requests().len(), 1);
    }

    #[test]
    fn either_grant_is_enough() {
        let answers = [
            PermissionGrants::new().with(Fine, true).with(Coarse, false),
            PermissionGrants::new().with(Fine, false).with(Coarse, true),
            PermissionGrants::uniform(&LocationPermission::ALL, true),
        ];
        for grants in answers {
            let mut flow = LocationFlow::PermissionPending;
            assert_eq!(flow.complete(&grants), Some(Resolution::Granted), "{grants:?}");
        }
    }

    #[test]
    fn denial_is_terminal() {
        let mut flow = LocationFlow::PermissionPending;
        let denied = PermissionGrants::uniform(&LocationPermission::ALL, false);
        assert_eq!(flow.complete(&denied), Some(Resolution::Denied));

        let granted = PermissionGrants::uniform(&LocationPermission::ALL, true);
        assert_eq!(flow.complete(&granted), None);
        assert_eq!(flow, LocationFlow::Resolved(Resolution::Denied));
    }

    #[test]
    fn result_without_request_is_ignored() {
        let mut flow = LocationFlow::default();
        let granted = PermissionGrants::uniform(&LocationPermission::ALL, true);
        assert_eq!(flow.complete(&granted), None);
        assert_eq!(flow, LocationFlow::Unrequested);
    }

    #[test]
    fn empty_answer_counts_as_denied() {
        let mut flow = LocationFlow::PermissionPending;
        assert_eq!(flow.complete(&PermissionGrants::new()), Some(Resolution::Denied));
    }
}
