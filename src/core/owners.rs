//! Owner and group name resolution for the long listing.
//!
//! Lookups go through the [OwnerLookup] trait so the detail view can be driven by a
//! fixed table in tests. A failed lookup is not an error: the numeric id is shown.

#[cfg(unix)]
use users::{Groups, Users, UsersCache};

pub trait OwnerLookup {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;

    /// Display name for the owner: the resolved name with spaces removed, or the uid.
    fn user_label(&self, uid: u32) -> String {
        self.user_name(uid)
            .map(|name| strip_spaces(&name))
            .unwrap_or_else(|| uid.to_string())
    }

    /// Display name for the group: the resolved name with spaces removed, or the gid.
    fn group_label(&self, gid: u32) -> String {
        self.group_name(gid)
            .map(|name| strip_spaces(&name))
            .unwrap_or_else(|| gid.to_string())
    }
}

fn strip_spaces(name: &str) -> String {
    name.chars().filter(|c| *c != ' ').collect()
}

/// Resolves ids against the system user and group databases.
///
/// Results are cached for the lifetime of the value.
pub struct SystemOwners {
    #[cfg(unix)]
    cache: UsersCache,
}

impl SystemOwners {
    pub fn new() -> Self {
        SystemOwners {
            #[cfg(unix)]
            cache: UsersCache::new(),
        }
    }
}

impl Default for SystemOwners {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnerLookup for SystemOwners {
    #[cfg(unix)]
    fn user_name(&self, uid: u32) -> Option<String> {
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
    }

    #[cfg(unix)]
    fn group_name(&self, gid: u32) -> Option<String> {
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    #[cfg(not(unix))]
    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Table;

    impl OwnerLookup for Table {
        fn user_name(&self, uid: u32) -> Option<String> {
            (uid == 1000).then(|| "jane doe".to_string())
        }

        fn group_name(&self, gid: u32) -> Option<String> {
            (gid == 100).then(|| "users".to_string())
        }
    }

    #[test]
    fn labels_strip_spaces_and_fall_back_to_ids() {
        let table = Table;
        assert_eq!(table.user_label(1000), "janedoe");
        assert_eq!(table.user_label(42), "42");
        assert_eq!(table.group_label(100), "users");
        assert_eq!(table.group_label(7), "7");
    }

    #[cfg(unix)]
    #[test]
    fn system_lookup_falls_back_for_unknown_ids() {
        let owners = SystemOwners::new();
        assert_eq!(owners.user_label(3_999_999_999), "3999999999");
        assert_eq!(owners.group_label(3_999_999_999), "3999999999");
    }
}
