//! Resolves the popularity reading passed to a vote submission.

use std::fmt;

use tracing::debug;

use byeai_core::traits::IPopularityLookup;
use byeai_observability::tracing_setup::events;

/// Where in the client UI a flag was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagSource {
    Thumbnail,
    ContextMenu,
    InlineButton,
    Unknown(String),
}

impl FlagSource {
    pub fn parse(source: &str) -> Self {
        match source.trim() {
            "thumbnail" => FlagSource::Thumbnail,
            "context_menu" => FlagSource::ContextMenu,
            "inline_button" => FlagSource::InlineButton,
            other => FlagSource::Unknown(other.to_string()),
        }
    }

    /// Sources that cannot see the watch page and so report no view count.
    pub fn lacks_reading(&self) -> bool {
        matches!(self, FlagSource::Thumbnail | FlagSource::ContextMenu)
    }
}

impl fmt::Display for FlagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagSource::Thumbnail => f.write_str("thumbnail"),
            FlagSource::ContextMenu => f.write_str("context_menu"),
            FlagSource::InlineButton => f.write_str("inline_button"),
            FlagSource::Unknown(s) => f.write_str(s),
        }
    }
}

/// Where a resolved reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularitySource {
    Reported,
    Lookup,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPopularity {
    pub value: u64,
    pub source: PopularitySource,
}

/// Picks the popularity reading for a submission: the client's own report,
/// or a lookup when the client could not see one.
pub struct PopularityResolver<L> {
    lookup: L,
    fallback: u64,
}

impl<L: IPopularityLookup> PopularityResolver<L> {
    pub fn new(lookup: L, fallback: u64) -> Self {
        Self { lookup, fallback }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub async fn resolve(
        &self,
        item_id: &str,
        reported: u64,
        source: &FlagSource,
    ) -> ResolvedPopularity {
        if reported > 0 || !source.lacks_reading() {
            return ResolvedPopularity {
                value: reported,
                source: PopularitySource::Reported,
            };
        }

        let looked_up = self.lookup.lookup(item_id).await;
        if looked_up > 0 {
            debug!(item_id, looked_up, %source, "popularity resolved by lookup");
            ResolvedPopularity {
                value: looked_up,
                source: PopularitySource::Lookup,
            }
        } else {
            events::popularity_degraded(item_id, "lookup returned no reading", self.fallback);
            ResolvedPopularity {
                value: self.fallback,
                source: PopularitySource::Fallback,
            }
        }
    }
}
