//! Embed-friendly mirror providers.

use serde::{Deserialize, Serialize};

/// Third-party mirror that serves richer embeds for a source site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedProvider {
    /// instagram.com -> ddinstagram.com
    DdInstagram,
    /// twitter.com -> vxtwitter.com
    VxTwitter,
    /// tiktok.com -> vxtiktok.com
    VxTikTok,
    /// reddit.com -> rxddit.com
    RxDdit,
}

impl EmbedProvider {
    /// All supported providers.
    pub const ALL: [Self; 4] = [Self::DdInstagram, Self::VxTwitter, Self::VxTikTok, Self::RxDdit];

    /// Domain whose links this provider mirrors.
    #[must_use]
    pub const fn source_domain(self) -> &'static str {
        match self {
            Self::DdInstagram => "instagram.com",
            Self::VxTwitter => "twitter.com",
            Self::VxTikTok => "tiktok.com",
            Self::RxDdit => "reddit.com",
        }
    }

    /// Domain substituted for the source domain.
    #[must_use]
    pub const fn mirror_domain(self) -> &'static str {
        match self {
            Self::DdInstagram => "ddinstagram.com",
            Self::VxTwitter => "vxtwitter.com",
            Self::VxTikTok => "vxtiktok.com",
            Self::RxDdit => "rxddit.com",
        }
    }

    /// Returns true if `host` is the source domain, bare or with `www.`.
    #[must_use]
    pub fn matches_host(self, host: &str) -> bool {
        let domain = self.source_domain();
        host == domain || host.strip_prefix("www.") == Some(domain)
    }
}

impl std::fmt::Display for EmbedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DdInstagram => write!(f, "ddinstagram"),
            Self::VxTwitter => write!(f, "vxtwitter"),
            Self::VxTikTok => write!(f, "vxtiktok"),
            Self::RxDdit => write!(f, "rxddit"),
        }
    }
}

/// Which mirror providers the user has switched on. All off by default.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledProviders {
    /// Show instagram links as ddinstagram embeds.
    #[serde(default)]
    pub ddinstagram: bool,

    /// Show twitter links as vxtwitter embeds.
    #[serde(default)]
    pub vxtwitter: bool,

    /// Show tiktok links as vxtiktok embeds.
    #[serde(default)]
    pub vxtiktok: bool,

    /// Show reddit links as rxddit embeds.
    #[serde(default)]
    pub rxddit: bool,
}

impl EnabledProviders {
    /// Returns whether `provider` is switched on.
    #[must_use]
    pub const fn is_enabled(&self, provider: EmbedProvider) -> bool {
        match provider {
            EmbedProvider::DdInstagram => self.ddinstagram,
            EmbedProvider::VxTwitter => self.vxtwitter,
            EmbedProvider::VxTikTok => self.vxtiktok,
            EmbedProvider::RxDdit => self.rxddit,
        }
    }

    /// Returns a copy with `provider` switched to `enabled`.
    #[must_use]
    pub const fn with(mut self, provider: EmbedProvider, enabled: bool) -> Self {
        match provider {
            EmbedProvider::DdInstagram => self.ddinstagram = enabled,
            EmbedProvider::VxTwitter => self.vxtwitter = enabled,
            EmbedProvider::VxTikTok => self.vxtiktok = enabled,
            EmbedProvider::RxDdit => self.rxddit = enabled,
        }
        self
    }

    /// Iterates over the providers that are switched on.
    pub fn iter_enabled(&self) -> impl Iterator<Item = EmbedProvider> + '_ {
        EmbedProvider::ALL
            .into_iter()
            .filter(|provider| self.is_enabled(*provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disabled() {
        let enabled = EnabledProviders::default();
        assert_eq!(enabled.iter_enabled().count(), 0);
    }

    #[test]
    fn test_matches_host() {
        assert!(EmbedProvider::VxTwitter.matches_host("twitter.com"));
        assert!(EmbedProvider::VxTwitter.matches_host("www.twitter.com"));
        assert!(!EmbedProvider::VxTwitter.matches_host("mobile.twitter.com"));
        assert!(!EmbedProvider::VxTwitter.matches_host("vxtwitter.com"));
    }

    #[test]
    fn test_with_toggles_single_provider() {
        let enabled = EnabledProviders::default().with(EmbedProvider::RxDdit, true);

        assert!(enabled.is_enabled(EmbedProvider::RxDdit));
        assert!(!enabled.is_enabled(EmbedProvider::VxTwitter));
        assert_eq!(enabled.iter_enabled().collect::<Vec<_>>(), vec![EmbedProvider::RxDdit]);
    }
}
