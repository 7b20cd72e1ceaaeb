/// Static dashboard configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    // Money is always rendered with this symbol, whatever the settings say
    pub currency_symbol: &'static str,

    pub storage_keys: StorageKeys,
    pub nav: &'static [NavEntry],

    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: u32,
}

/// Local storage keys, one per persisted object
pub struct StorageKeys {
    pub profile: &'static str,
    pub profile_overview: &'static str,
    pub settings: &'static str,
}

pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

pub static CONFIG: Config = Config {
    name: "FreelanceHub",
    tagline: "Freelancer Dashboard",

    currency_symbol: "$",

    storage_keys: StorageKeys {
        profile: "freelancerProfile",
        profile_overview: "freelancerProfileOverview",
        settings: "userSettings",
    },

    nav: &[
        NavEntry {
            label: "Dashboard",
            path: "/",
        },
        NavEntry {
            label: "Projects",
            path: "/projects",
        },
        NavEntry {
            label: "Clients",
            path: "/clients",
        },
        NavEntry {
            label: "Earnings",
            path: "/earnings",
        },
        NavEntry {
            label: "Settings",
            path: "/settings",
        },
    ],

    toast_duration_ms: 3000,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys = &CONFIG.storage_keys;
        assert_ne!(keys.profile, keys.profile_overview);
        assert_ne!(keys.profile, keys.settings);
        assert_ne!(keys.profile_overview, keys.settings);
    }

    #[test]
    fn test_nav_has_five_routes() {
        let paths: Vec<_> = CONFIG.nav.iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/projects", "/clients", "/earnings", "/settings"]);
    }
}
